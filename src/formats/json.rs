//! # JSON Baseline
//!
//! Compact JSON text for a row, used as the size baseline the binary formats
//! are measured against. No whitespace is emitted.
//!
//! ## Number Rendering
//!
//! - integers print in decimal
//! - integral floats print without a fraction (`95000.0` -> `95000`)
//! - other floats print the shortest decimal that round-trips
//! - NaN and infinities print as `null`

use crate::encoding::ensure_unique;
use crate::error::{EncodingError, Result};
use crate::types::Row;

use super::serde_row::{FloatStyle, SerdeRow};
use super::{Format, RowFormat};

pub struct Json;

impl RowFormat for Json {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, row: &Row) -> Result<Vec<u8>> {
        encode_json_string(row).map(String::into_bytes)
    }
}

pub fn encode_json_string(row: &Row) -> Result<String> {
    ensure_unique(row.names())?;

    serde_json::to_string(&SerdeRow::new(row, FloatStyle::JsonNumber)).map_err(|e| {
        EncodingError::Serialization {
            format: "json",
            message: e.to_string(),
        }
    })
}

/// Encoded size of a row next to its JSON size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeComparison {
    pub encoded_len: usize,
    pub json_len: usize,
}

impl SizeComparison {
    /// Percentage of the JSON size saved; negative when the encoding is larger.
    pub fn savings_percent(&self) -> f64 {
        if self.json_len == 0 {
            return 0.0;
        }
        (1.0 - self.encoded_len as f64 / self.json_len as f64) * 100.0
    }

    pub fn is_smaller(&self) -> bool {
        self.encoded_len < self.json_len
    }
}

pub fn compare_with_json(format: Format, row: &Row) -> Result<SizeComparison> {
    let encoded_len = format.encoder().encode(row)?.len();
    let json_len = encode_json_string(row)?.len();
    Ok(SizeComparison {
        encoded_len,
        json_len,
    })
}
