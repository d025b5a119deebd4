//! # Root Finalizer
//!
//! A FlexBuffers buffer is read from the end. The last bytes say where the
//! root value is and how to interpret it:
//!
//! ```text
//! ... | root slot (W bytes) | packed type (1 byte) | W (1 byte) |
//!                                                              ^ end of buffer
//! ```
//!
//! The root slot is aligned to its own width and, for a map, holds the
//! backward offset to the values vector. `finish` consumes the buffer, so
//! nothing can be appended once the root is written.

use tracing::trace;

use super::buffer::FlexBuffer;
use super::scalar::EncodedSlot;
use crate::encoding::BitWidth;

pub fn finish(mut buf: FlexBuffer, root: &EncodedSlot) -> Vec<u8> {
    let width = root.elem_width(buf.current_offset(), 0);
    let byte_width = buf.align(width);
    root.write_to(&mut buf, byte_width);
    buf.push(root.stored_packed_type(BitWidth::W8));
    buf.push(byte_width as u8);
    trace!(root_width = byte_width, len = buf.current_offset(), "finished buffer");
    buf.into_bytes()
}
