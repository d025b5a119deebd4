//! # Encoding Errors
//!
//! Every failure an encode call can report. Errors are detected synchronously
//! while a row is being encoded; the partially written buffer is dropped and
//! never handed to the caller.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `UnsupportedType` | a column carries an array, composite or binary payload |
//! | `DuplicateKey` | two fields resolve to the same name after synthesis |
//! | `InvalidKey` | a field name contains a NUL byte |
//! | `ValueTooLarge` | a length does not fit the widest (8-byte) slot |
//! | `Serialization` | a serde-backed format's serializer reports an error |

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unsupported column type: {type_name}")]
    UnsupportedType { type_name: String },

    #[error("duplicate field name {key:?}")]
    DuplicateKey { key: String },

    #[error("field name {key:?} contains a NUL byte")]
    InvalidKey { key: String },

    #[error("{what} length {len} exceeds the maximum encodable size")]
    ValueTooLarge { what: &'static str, len: usize },

    #[error("{format} serialization failed: {message}")]
    Serialization { format: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, EncodingError>;
