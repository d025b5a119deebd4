//! # Width Selection
//!
//! Every slot in an encoded buffer is 1, 2, 4 or 8 bytes wide. This module
//! picks the narrowest width that can hold a value.
//!
//! ## Width Classes
//!
//! | BitWidth | Bytes | Unsigned range | Signed range |
//! |----------|-------|----------------|--------------|
//! | W8 | 1 | 0 - 255 | -128 - 127 |
//! | W16 | 2 | 0 - 65535 | -32768 - 32767 |
//! | W32 | 4 | 0 - 2^32-1 | -2^31 - 2^31-1 |
//! | W64 | 8 | 0 - 2^64-1 | -2^63 - 2^63-1 |
//!
//! The discriminant of `BitWidth` is the value stored in the low two bits of
//! a packed type byte, so `1 << width as u8` is the byte width.
//!
//! ## Offset Widths
//!
//! A backward offset depends on where it is written, and where it is written
//! depends on the width chosen for it (alignment padding plus the slot index
//! times the width). `offset_width` tries each width in turn, measures the
//! real distance at the aligned position, and keeps the first width that
//! holds that distance. Nothing is estimated ahead of time.
//!
//! ## Boundary Values
//!
//! - 255 / 256: last W8 / first W16 unsigned value
//! - 127 / 128: last W8 / first W16 signed value
//! - -128 / -129: last W8 / first W16 negative value
//! - u32::MAX / u32::MAX + 1: last W32 / first W64 unsigned value
//!
//! All functions are pure.

use crate::config::MAX_BYTE_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum BitWidth {
    W8 = 0,
    W16 = 1,
    W32 = 2,
    W64 = 3,
}

impl BitWidth {
    pub const ALL: [BitWidth; 4] = [BitWidth::W8, BitWidth::W16, BitWidth::W32, BitWidth::W64];

    #[inline]
    pub fn byte_width(self) -> usize {
        1 << self as u8
    }
}

const _: () = assert!(1 << BitWidth::W64 as u8 == MAX_BYTE_WIDTH);

#[inline]
pub fn width_u(value: u64) -> BitWidth {
    if value & !0xFF == 0 {
        BitWidth::W8
    } else if value & !0xFFFF == 0 {
        BitWidth::W16
    } else if value & !0xFFFF_FFFF == 0 {
        BitWidth::W32
    } else {
        BitWidth::W64
    }
}

/// Narrowest width holding `value` in two's complement.
#[inline]
pub fn width_i(value: i64) -> BitWidth {
    let shifted = (value as u64) << 1;
    width_u(if value >= 0 { shifted } else { !shifted })
}

/// Floats are never narrowed to 4 bytes.
#[inline]
pub fn width_f(_value: f64) -> BitWidth {
    BitWidth::W64
}

/// Zero bytes needed to bring `len` up to a multiple of `align`.
#[inline]
pub fn padding(len: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    len.wrapping_neg() & (align - 1)
}

/// Width for a backward offset to `target`, written as slot `slot_index` of
/// a vector whose first slot is aligned at or after `buf_len`.
pub fn offset_width(buf_len: usize, target: usize, slot_index: usize) -> BitWidth {
    for width in BitWidth::ALL {
        let bytes = width.byte_width();
        let slot_pos = buf_len + padding(buf_len, bytes) + slot_index * bytes;
        let distance = (slot_pos - target) as u64;
        if width_u(distance) <= width {
            return width;
        }
    }
    BitWidth::W64
}
