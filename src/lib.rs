//! # flexrow - Schema-less Row Encoding
//!
//! flexrow turns one relational row into a self-describing binary buffer: a
//! FlexBuffers map from field name to value. Any FlexBuffers reader can open
//! the result and look up a field by name without knowing the row's schema.
//!
//! ## Quick Start
//!
//! ```
//! use flexrow::{encode_row, Row, Scalar};
//!
//! let row = Row::named([
//!     ("name", Scalar::from("Alice")),
//!     ("age", Scalar::from(30)),
//!     ("active", Scalar::from(true)),
//! ]);
//! let bytes = encode_row(&row)?;
//! assert_eq!(bytes[bytes.len() - 2], 0x24);
//! # Ok::<(), flexrow::EncodingError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Column / Datum (provider values)   │
//! ├─────────────────────────────────────┤
//! │        Row / Field / Scalar          │
//! ├─────────────────────────────────────┤
//! │   Key ordering │ Width selection     │
//! ├─────────────────────────────────────┤
//! │  Scalar → Map → Root (FlexBuffers)   │
//! ├─────────────────────────────────────┤
//! │   MessagePack │ CBOR │ JSON formats  │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - keys are stored sorted byte-wise, so readers can binary-search them
//! - every slot uses the narrowest width that holds it
//! - equal rows always encode to identical bytes
//! - errors leave no partial output behind
//!
//! ## Module Overview
//!
//! - [`types`]: scalars, fields, rows and the SQL column mapping
//! - [`encoding`]: key ordering and bit-width selection
//! - [`flex`]: the FlexBuffers writer
//! - [`formats`]: the `RowFormat` trait and alternate encodings
//! - [`config`]: encoding constants
//! - [`error`]: the error type shared by every encoder

pub mod config;
pub mod encoding;
pub mod error;
pub mod flex;
pub mod formats;
pub mod types;

pub use error::{EncodingError, Result};
pub use formats::{compare_with_json, Format, RowFormat, SizeComparison};
pub use types::{Column, Datum, Field, Row, Scalar, SqlType};

/// Encodes a row as a FlexBuffers map.
pub fn encode_row(row: &Row) -> Result<Vec<u8>> {
    flex::encode_row(row)
}

/// Encodes a row in the chosen format.
pub fn encode_row_as(format: Format, row: &Row) -> Result<Vec<u8>> {
    format.encoder().encode(row)
}
