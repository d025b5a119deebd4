//! CBOR (RFC 8949) map encoding, fields in declaration order.
//!
//! Integers and lengths take their shortest head. Floats are stored in the
//! narrowest of half, single or double precision that keeps the exact value.

use crate::encoding::ensure_unique;
use crate::error::{EncodingError, Result};
use crate::types::Row;

use super::serde_row::{FloatStyle, SerdeRow};
use super::RowFormat;

pub struct Cbor;

impl RowFormat for Cbor {
    fn name(&self) -> &'static str {
        "cbor"
    }

    fn encode(&self, row: &Row) -> Result<Vec<u8>> {
        ensure_unique(row.names())?;

        serde_cbor::to_vec(&SerdeRow::new(row, FloatStyle::Native)).map_err(|e| {
            EncodingError::Serialization {
                format: "cbor",
                message: e.to_string(),
            }
        })
    }
}
