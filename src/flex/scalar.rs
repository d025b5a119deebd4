//! # Scalar Encoders
//!
//! Each encoder turns one [`Scalar`] into an `EncodedSlot`: the type tag,
//! the narrowest width the value needs, and either the value itself or the
//! position of out-of-line data written to the buffer.
//!
//! ## Slot Kinds
//!
//! | Scalar | Tag | Width | Payload | Buffer writes |
//! |--------|-----|-------|---------|---------------|
//! | Null | Null | W8 | inline 0 | none |
//! | Bool | Bool | W8 | inline 0/1 | none |
//! | Int | Int | minimal signed | inline | none |
//! | Float | Float | W64 | inline | none |
//! | Text | String | width of length | offset | length, bytes, NUL |
//!
//! ## String Layout
//!
//! ```text
//! +--------------+-------------------+------+
//! | len (width)  | UTF-8 bytes       | 0x00 |
//! +--------------+-------------------+------+
//!                ^ slot points here
//! ```
//!
//! The length prefix is aligned to its own width. Keys reuse the byte path
//! but carry no length prefix and no alignment.
//!
//! ## Stored Widths
//!
//! Inside a vector every slot has the vector's width. For inline values the
//! type byte records that width; for offsets it records the width of the
//! referenced data, which is what a decoder needs to read the target.

use tracing::trace;

use super::buffer::FlexBuffer;
use super::types::{packed_type, FlexType};
use crate::config::{KEY_TERMINATOR, MAX_PAYLOAD_LEN};
use crate::encoding::{offset_width, validate_key, width_f, width_i, width_u, BitWidth};
use crate::error::{EncodingError, Result};
use crate::types::Scalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotPayload {
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Buffer position of the referenced data.
    Offset(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedSlot {
    pub tag: FlexType,
    pub width: BitWidth,
    pub payload: SlotPayload,
}

impl EncodedSlot {
    pub fn inline(tag: FlexType, width: BitWidth, payload: SlotPayload) -> Self {
        debug_assert!(tag.is_inline());
        Self {
            tag,
            width,
            payload,
        }
    }

    pub fn offset(tag: FlexType, width: BitWidth, target: usize) -> Self {
        debug_assert!(!tag.is_inline());
        Self {
            tag,
            width,
            payload: SlotPayload::Offset(target),
        }
    }

    pub fn is_inline(&self) -> bool {
        self.tag.is_inline()
    }

    pub fn stored_width(&self, parent: BitWidth) -> BitWidth {
        if self.is_inline() {
            self.width.max(parent)
        } else {
            self.width
        }
    }

    pub fn stored_packed_type(&self, parent: BitWidth) -> u8 {
        packed_type(self.tag, self.stored_width(parent))
    }

    /// Width this slot needs as element `slot_index` of a vector starting at
    /// or after `buf_len`.
    pub fn elem_width(&self, buf_len: usize, slot_index: usize) -> BitWidth {
        match self.payload {
            SlotPayload::Offset(target) => offset_width(buf_len, target, slot_index),
            _ => self.width,
        }
    }

    pub fn write_to(&self, buf: &mut FlexBuffer, byte_width: usize) {
        match self.payload {
            SlotPayload::Int(v) => buf.write_int(v, byte_width),
            SlotPayload::UInt(v) => buf.write_uint(v, byte_width),
            SlotPayload::Float(v) => {
                debug_assert_eq!(byte_width, 8);
                buf.write_float(v)
            }
            SlotPayload::Offset(target) => buf.write_offset(target, byte_width),
        }
    }
}

pub fn encode_null() -> EncodedSlot {
    EncodedSlot::inline(FlexType::Null, BitWidth::W8, SlotPayload::Int(0))
}

pub fn encode_bool(value: bool) -> EncodedSlot {
    EncodedSlot::inline(FlexType::Bool, BitWidth::W8, SlotPayload::UInt(value as u64))
}

pub fn encode_int(value: i64) -> EncodedSlot {
    EncodedSlot::inline(FlexType::Int, width_i(value), SlotPayload::Int(value))
}

pub fn encode_float(value: f64) -> EncodedSlot {
    EncodedSlot::inline(FlexType::Float, width_f(value), SlotPayload::Float(value))
}

pub fn checked_len(what: &'static str, len: usize) -> Result<u64> {
    match u64::try_from(len) {
        Ok(v) if v <= MAX_PAYLOAD_LEN => Ok(v),
        _ => Err(EncodingError::ValueTooLarge { what, len }),
    }
}

pub fn encode_text(buf: &mut FlexBuffer, text: &str) -> Result<EncodedSlot> {
    let len = checked_len("string", text.len())?;
    let width = width_u(len);
    let byte_width = buf.align(width);
    buf.write_uint(len, byte_width);
    let start = buf.write_bytes(text.as_bytes());
    buf.push(KEY_TERMINATOR);
    trace!(start, len, width = byte_width, "wrote string");
    Ok(EncodedSlot::offset(FlexType::String, width, start))
}

pub fn encode_key(buf: &mut FlexBuffer, key: &str) -> Result<EncodedSlot> {
    validate_key(key)?;
    let start = buf.write_bytes(key.as_bytes());
    buf.push(KEY_TERMINATOR);
    Ok(EncodedSlot::offset(FlexType::Key, BitWidth::W8, start))
}

pub fn encode_scalar(buf: &mut FlexBuffer, value: &Scalar) -> Result<EncodedSlot> {
    match value {
        Scalar::Null => Ok(encode_null()),
        Scalar::Bool(b) => Ok(encode_bool(*b)),
        Scalar::Int(i) => Ok(encode_int(*i)),
        Scalar::Float(f) => Ok(encode_float(*f)),
        Scalar::Text(s) => encode_text(buf, s),
    }
}
