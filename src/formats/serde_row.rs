//! Serde view of a row for the serde-backed formats.
//!
//! A row serializes as a map in declaration order. The view borrows the row,
//! so nothing is copied before the serializer writes.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::{Row, Scalar};

/// How floats reach the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatStyle {
    /// Hand every float to `serialize_f64`.
    Native,
    /// Integral floats become integers and non-finite floats become null,
    /// matching how JSON text renders numbers.
    JsonNumber,
}

pub struct SerdeRow<'a> {
    row: &'a Row,
    floats: FloatStyle,
}

impl<'a> SerdeRow<'a> {
    pub fn new(row: &'a Row, floats: FloatStyle) -> Self {
        Self { row, floats }
    }
}

impl Serialize for SerdeRow<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.row.len()))?;
        for field in self.row.fields() {
            map.serialize_entry(field.name(), &SerdeScalar(field.value(), self.floats))?;
        }
        map.end()
    }
}

struct SerdeScalar<'a>(&'a Scalar, FloatStyle);

impl Serialize for SerdeScalar<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match (self.0, self.1) {
            (Scalar::Null, _) => serializer.serialize_unit(),
            (Scalar::Bool(b), _) => serializer.serialize_bool(*b),
            (Scalar::Int(i), _) => serializer.serialize_i64(*i),
            (Scalar::Float(f), FloatStyle::Native) => serializer.serialize_f64(*f),
            (Scalar::Float(f), FloatStyle::JsonNumber) => {
                if !f.is_finite() {
                    serializer.serialize_unit()
                } else if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                    serializer.serialize_i64(*f as i64)
                } else {
                    serializer.serialize_f64(*f)
                }
            }
            (Scalar::Text(s), _) => serializer.serialize_str(s),
        }
    }
}
