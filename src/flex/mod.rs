//! # FlexBuffers Row Encoding
//!
//! Serializes one [`Row`] into a self-describing FlexBuffers buffer whose
//! root is a map from field name to field value. Any conforming FlexBuffers
//! reader can open the result without a schema.
//!
//! ## Buffer Layout
//!
//! ```text
//! +------------------+-------------+-------------+---------------+-------+-----------+
//! | value payloads   | key strings | keys vector | values vector | types | root      |
//! | (strings)        | (sorted)    |             |               |       | slot,T,W  |
//! +------------------+-------------+-------------+---------------+-------+-----------+
//! 0                                                                              len
//! ```
//!
//! Every reference in the buffer is an unsigned distance pointing backward,
//! so a decoder starts from the last byte (root width), steps back to the
//! packed root type, then to the root slot, and walks toward offset 0.
//!
//! ## Packed Types
//!
//! Each value carries one byte: `(type << 2) | bit_width`.
//!
//! | Type | Code | Stored |
//! |------|------|--------|
//! | Null | 0 | inline |
//! | Int | 1 | inline |
//! | Float | 3 | inline, always 8 bytes |
//! | Key | 4 | offset |
//! | String | 5 | offset |
//! | Map | 9 | offset |
//! | VectorKey | 14 | offset |
//! | Bool | 26 | inline |
//!
//! ## Module Structure
//!
//! - `buffer`: append-only byte sink with alignment and backward offsets
//! - `types`: type codes and packed type bytes
//! - `scalar`: per-value slots and string/key payloads
//! - `map`: sorted keys vector plus parallel values and types
//! - `root`: trailing root slot, type byte and width byte
//!
//! ## Determinism
//!
//! Encoding reads nothing but the row. Equal rows give identical bytes.

mod buffer;
mod map;
mod root;
mod scalar;
mod types;

#[cfg(test)]
mod tests;

pub use buffer::FlexBuffer;
pub use map::encode_map;
pub use root::finish;
pub use scalar::{encode_scalar, EncodedSlot, SlotPayload};
pub use types::{packed_type, unpack_type, FlexType};

use tracing::debug;

use crate::config::{BYTES_PER_FIELD_HINT, DEFAULT_BUFFER_CAPACITY};
use crate::error::Result;
use crate::types::Row;

/// Encodes `row` as a FlexBuffers map and returns the finished buffer.
///
/// Fails without producing any bytes if two fields share a name or a name
/// contains a NUL byte.
pub fn encode_row(row: &Row) -> Result<Vec<u8>> {
    let capacity = DEFAULT_BUFFER_CAPACITY.max(row.len() * BYTES_PER_FIELD_HINT);
    let mut buf = FlexBuffer::with_capacity(capacity);
    let map = encode_map(&mut buf, row)?;
    let bytes = finish(buf, &map);
    debug!(fields = row.len(), bytes = bytes.len(), "encoded row");
    Ok(bytes)
}
