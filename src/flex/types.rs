//! # FlexBuffers Type Tags
//!
//! Every value a decoder can meet is described by one packed type byte:
//!
//! ```text
//! bit  7 6 5 4 3 2 | 1 0
//!      type code   | bit width (0=W8, 1=W16, 2=W32, 3=W64)
//! ```
//!
//! ## Type Codes
//!
//! | Code | Type | Storage |
//! |------|------|---------|
//! | 0 | Null | inline |
//! | 1 | Int | inline, signed |
//! | 3 | Float | inline |
//! | 4 | Key | offset to NUL-terminated bytes |
//! | 5 | String | offset to length-prefixed, NUL-terminated bytes |
//! | 9 | Map | offset to the values vector |
//! | 14 | VectorKey | offset to a typed vector of key offsets |
//! | 26 | Bool | inline |
//!
//! Other codes (unsigned and indirect scalars, untyped, typed and fixed
//! vectors, blobs) are never produced for flat rows and do not unpack.

use crate::encoding::BitWidth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FlexType {
    Null = 0,
    Int = 1,
    Float = 3,
    Key = 4,
    String = 5,
    Map = 9,
    VectorKey = 14,
    Bool = 26,
}

impl FlexType {
    /// Inline types store their value in the slot itself; the rest store a
    /// backward offset.
    #[inline]
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            FlexType::Null | FlexType::Int | FlexType::Float | FlexType::Bool
        )
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<FlexType> {
        match code {
            0 => Some(FlexType::Null),
            1 => Some(FlexType::Int),
            3 => Some(FlexType::Float),
            4 => Some(FlexType::Key),
            5 => Some(FlexType::String),
            9 => Some(FlexType::Map),
            14 => Some(FlexType::VectorKey),
            26 => Some(FlexType::Bool),
            _ => None,
        }
    }
}

#[inline]
pub fn packed_type(ty: FlexType, width: BitWidth) -> u8 {
    (ty.code() << 2) | width as u8
}

pub fn unpack_type(packed: u8) -> Option<(FlexType, BitWidth)> {
    let ty = FlexType::from_code(packed >> 2)?;
    let width = BitWidth::ALL[(packed & 0b11) as usize];
    Some((ty, width))
}
