//! # Encoding Module
//!
//! Format-independent building blocks shared by the row encoders:
//!
//! - **Width selection**: narrowest 1/2/4/8-byte slot for a value or backward offset
//! - **Key ordering**: ordinal comparison, duplicate and NUL detection for field names

pub mod key;
pub mod width;

pub use key::{canonical_order, compare_keys, ensure_unique, validate_key, KeyOrder};
pub use width::{offset_width, padding, width_f, width_i, width_u, BitWidth};
