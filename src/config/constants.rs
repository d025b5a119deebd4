//! # flexrow Configuration Constants
//!
//! ## Dependency Graph
//!
//! ```text
//! MAX_BYTE_WIDTH (8)
//!       │
//!       ├─> MAX_PAYLOAD_LEN (must fit a signed 8-byte slot)
//!       │
//!       └─> ROOT_TRAILER_MAX_LEN (root slot + type byte + width byte)
//!
//! SYNTHETIC_NAME_PREFIX ("f") + FIRST_FIELD_POSITION (1)
//!       │
//!       └─> anonymous fields are named f1, f2, ...
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use crate::config::{MAX_PAYLOAD_LEN, SYNTHETIC_NAME_PREFIX};
//! ```

// ============================================================================
// SLOT WIDTHS
// ============================================================================

/// Widest slot any scalar or offset is ever written at.
pub const MAX_BYTE_WIDTH: usize = 8;

/// Largest string or vector length the encoder accepts.
pub const MAX_PAYLOAD_LEN: u64 = i64::MAX as u64;

const _: () = assert!(
    MAX_PAYLOAD_LEN <= u64::MAX >> (64 - MAX_BYTE_WIDTH * 8 + 1),
    "MAX_PAYLOAD_LEN must fit a signed MAX_BYTE_WIDTH slot"
);

// ============================================================================
// ROOT TRAILER
// ============================================================================

/// Byte holding the packed type of the root value.
pub const ROOT_TYPE_LEN: usize = 1;

/// Byte holding the byte width of the root slot.
pub const ROOT_WIDTH_LEN: usize = 1;

pub const ROOT_TRAILER_MIN_LEN: usize = 1 + ROOT_TYPE_LEN + ROOT_WIDTH_LEN;
pub const ROOT_TRAILER_MAX_LEN: usize = MAX_BYTE_WIDTH + ROOT_TYPE_LEN + ROOT_WIDTH_LEN;

const _: () = assert!(ROOT_TRAILER_MIN_LEN == 3);
const _: () = assert!(ROOT_TRAILER_MAX_LEN == 10);

// ============================================================================
// KEYS
// ============================================================================

/// Terminator written after every key and string payload.
pub const KEY_TERMINATOR: u8 = 0;

/// Prefix for names synthesized for anonymous fields.
pub const SYNTHETIC_NAME_PREFIX: &str = "f";

/// Position of the first field when synthesizing names.
pub const FIRST_FIELD_POSITION: usize = 1;

// ============================================================================
// BUFFER SIZING
// ============================================================================

/// Initial capacity of the output buffer for one row.
pub const DEFAULT_BUFFER_CAPACITY: usize = 256;

/// Capacity reserved per field once a row outgrows the default capacity.
pub const BYTES_PER_FIELD_HINT: usize = 24;

/// Rows up to this many fields are sorted and staged without heap allocation.
pub const INLINE_FIELD_COUNT: usize = 16;

const _: () = assert!(DEFAULT_BUFFER_CAPACITY >= ROOT_TRAILER_MAX_LEN);
