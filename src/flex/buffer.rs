//! # Backward-Referencing Buffer
//!
//! `FlexBuffer` is the append-only byte sink one encode call writes into.
//! Data is always written before anything that points at it, and pointers
//! are stored as the distance back from the pointer's own position:
//!
//! ```text
//!  0        mark                      here
//!  |--------|=========================|
//!           ^ referenced data         ^ slot written here holds (here - mark)
//! ```
//!
//! Because bytes are never rewritten, a distance computed against an earlier
//! mark stays valid for the lifetime of the buffer and nothing has to be
//! patched once the buffer is finished.
//!
//! ## Alignment
//!
//! Multi-byte slots start on a multiple of their width. `align` pads with
//! zero bytes; the padding is dead space a decoder never visits.
//!
//! ## Endianness
//!
//! All slots are little-endian, truncated to the slot width. Callers choose
//! widths through [`crate::encoding::width`] so truncation never drops
//! significant bytes.

use crate::config::DEFAULT_BUFFER_CAPACITY;
use crate::encoding::{padding, BitWidth};

#[derive(Debug, Clone)]
pub struct FlexBuffer {
    buf: Vec<u8>,
}

impl Default for FlexBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FlexBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn current_offset(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn backward_offset_from(&self, mark: usize) -> usize {
        debug_assert!(mark <= self.buf.len());
        self.buf.len() - mark
    }

    /// Pads to a multiple of `width` and returns its byte width.
    pub fn align(&mut self, width: BitWidth) -> usize {
        let bytes = width.byte_width();
        let pad = padding(self.buf.len(), bytes);
        self.buf.resize(self.buf.len() + pad, 0);
        bytes
    }

    /// Aligns to `width`, appends `bytes`, and returns where they start.
    pub fn write_aligned(&mut self, width: BitWidth, bytes: &[u8]) -> usize {
        self.align(width);
        self.write_bytes(bytes)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let start = self.buf.len();
        self.buf.extend_from_slice(bytes);
        start
    }

    pub fn push(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    pub fn write_uint(&mut self, value: u64, byte_width: usize) {
        debug_assert!(byte_width == 8 || value >> (byte_width * 8) == 0);
        self.buf
            .extend_from_slice(&value.to_le_bytes()[..byte_width]);
    }

    pub fn write_int(&mut self, value: i64, byte_width: usize) {
        self.buf
            .extend_from_slice(&value.to_le_bytes()[..byte_width]);
    }

    /// Floats are never narrowed, so they always take a full 8-byte slot.
    pub fn write_float(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes the distance from the slot being written back to `target`.
    pub fn write_offset(&mut self, target: usize, byte_width: usize) {
        let distance = self.backward_offset_from(target) as u64;
        self.write_uint(distance, byte_width);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
