//! # Map Encoder
//!
//! Encodes a row as a FlexBuffers map: a typed vector of sorted keys plus a
//! parallel untyped vector of values with one packed type byte per value.
//!
//! ## Write Order
//!
//! ```text
//! [string payloads][keys "a\0" "b\0" ...][keys vector][values vector][types]
//!  declaration order  sorted order        sorted       sorted         sorted
//! ```
//!
//! Value payloads come first because every reference points backward.
//!
//! ## Vector Layout
//!
//! ```text
//! keys vector (width Wk):
//!   +---------+-----------+-----------+-----+
//!   | len     | key 0 off | key 1 off | ... |
//!   +---------+-----------+-----------+-----+
//!             ^ keys slot
//!
//! values vector (width Wv):
//!   +----------+---------+-----+---------+---------+-----+--------+--------+-----+
//!   | keys off | Wk bytes| len | value 0 | value 1 | ... | type 0 | type 1 | ... |
//!   +----------+---------+-----+---------+---------+-----+--------+--------+-----+
//!                              ^ map slot                 1 byte each
//! ```
//!
//! Each vector's width is the smallest one that holds its length, every
//! inline value, and every backward offset measured from the slot's own
//! aligned position. Widths are chosen per vector, so a wide float in the
//! values vector does not widen the keys vector.
//!
//! ## Invariants
//!
//! - keys, values and types have the same length and the same order
//! - keys are strictly increasing under byte-wise comparison
//! - duplicate or NUL-containing names fail before any byte is written

use smallvec::SmallVec;
use tracing::trace;

use super::buffer::FlexBuffer;
use super::scalar::{checked_len, encode_key, encode_scalar, EncodedSlot};
use super::types::FlexType;
use crate::config::INLINE_FIELD_COUNT;
use crate::encoding::{canonical_order, width_u};
use crate::error::Result;
use crate::types::Row;

type Slots = SmallVec<[EncodedSlot; INLINE_FIELD_COUNT]>;

#[derive(Clone, Copy)]
enum VectorKind<'a> {
    Keys,
    Values { keys: &'a EncodedSlot },
}

pub fn encode_map(buf: &mut FlexBuffer, row: &Row) -> Result<EncodedSlot> {
    let names: SmallVec<[&str; INLINE_FIELD_COUNT]> = row.names().collect();
    let order = canonical_order(&names)?;

    let mut declared: Slots = SmallVec::with_capacity(row.len());
    for field in row.fields() {
        declared.push(encode_scalar(buf, field.value())?);
    }

    let mut key_slots: Slots = SmallVec::with_capacity(row.len());
    for &idx in &order {
        key_slots.push(encode_key(buf, names[idx])?);
    }
    let values: Slots = order.iter().map(|&idx| declared[idx]).collect();

    let keys = write_vector(buf, &key_slots, VectorKind::Keys)?;
    let map = write_vector(buf, &values, VectorKind::Values { keys: &keys })?;

    trace!(
        fields = row.len(),
        keys_width = keys.width.byte_width(),
        values_width = map.width.byte_width(),
        "encoded map"
    );
    Ok(map)
}

fn write_vector(
    buf: &mut FlexBuffer,
    elems: &[EncodedSlot],
    kind: VectorKind<'_>,
) -> Result<EncodedSlot> {
    let len = checked_len("vector", elems.len())?;
    let start = buf.current_offset();

    let mut width = width_u(len);
    let mut prefix = 1;
    if let VectorKind::Values { keys } = kind {
        width = width.max(keys.elem_width(start, 0));
        prefix += 2;
    }
    for (i, elem) in elems.iter().enumerate() {
        width = width.max(elem.elem_width(start, prefix + i));
    }

    let byte_width = buf.align(width);
    if let VectorKind::Values { keys } = kind {
        keys.write_to(buf, byte_width);
        buf.write_uint(keys.width.byte_width() as u64, byte_width);
    }
    buf.write_uint(len, byte_width);

    let vloc = buf.current_offset();
    for elem in elems {
        elem.write_to(buf, byte_width);
    }

    let tag = match kind {
        VectorKind::Keys => FlexType::VectorKey,
        VectorKind::Values { .. } => {
            for elem in elems {
                buf.push(elem.stored_packed_type(width));
            }
            FlexType::Map
        }
    };
    Ok(EncodedSlot::offset(tag, width, vloc))
}
