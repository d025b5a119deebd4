//! # Provider Columns and SQL Type Mapping
//!
//! A row provider hands over columns as typed SQL datums. This module maps
//! them onto the five-variant [`Scalar`] model the encoders understand.
//!
//! ## Mapping
//!
//! | SQL type | Datum | Scalar |
//! |----------|-------|--------|
//! | int2, int4, int8 | `Int2`/`Int4`/`Int8` | `Int` (widened to i64) |
//! | float4, float8 | `Float4`/`Float8` | `Float` (widened to f64) |
//! | bool | `Bool` | `Bool` |
//! | text, varchar, bpchar | `Text` | `Text` |
//! | any other scalar type | `Rendered` (its text output) | `Text` |
//! | bytea | `Bytes` | rejected |
//! | arrays | `Elements` | rejected |
//! | composites | `Record` | rejected |
//!
//! A column whose datum is absent is SQL NULL and maps to `Scalar::Null`
//! whatever its declared type.
//!
//! Binary, array and nested record payloads have no agreed encoding and are
//! rejected with `UnsupportedType` rather than guessed at.

use std::fmt;

use super::value::Scalar;
use crate::error::{EncodingError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlType {
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Bool,
    Text,
    Varchar,
    Bpchar,
    Bytea,
    Array(Box<SqlType>),
    Composite(String),
    Other(String),
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Int2 => write!(f, "int2"),
            SqlType::Int4 => write!(f, "int4"),
            SqlType::Int8 => write!(f, "int8"),
            SqlType::Float4 => write!(f, "float4"),
            SqlType::Float8 => write!(f, "float8"),
            SqlType::Bool => write!(f, "bool"),
            SqlType::Text => write!(f, "text"),
            SqlType::Varchar => write!(f, "varchar"),
            SqlType::Bpchar => write!(f, "bpchar"),
            SqlType::Bytea => write!(f, "bytea"),
            SqlType::Array(elem) => write!(f, "{}[]", elem),
            SqlType::Composite(name) => write!(f, "{}", name),
            SqlType::Other(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Float4(f32),
    Float8(f64),
    Bool(bool),
    Text(String),
    /// Text output of a type without a native scalar mapping.
    Rendered(String),
    Bytes(Vec<u8>),
    Elements(Vec<Datum>),
    Record(Vec<Column>),
}

impl Datum {
    pub fn to_scalar(&self, sql_type: &SqlType) -> Result<Scalar> {
        match self {
            Datum::Int2(v) => Ok(Scalar::Int(*v as i64)),
            Datum::Int4(v) => Ok(Scalar::Int(*v as i64)),
            Datum::Int8(v) => Ok(Scalar::Int(*v)),
            Datum::Float4(v) => Ok(Scalar::Float(*v as f64)),
            Datum::Float8(v) => Ok(Scalar::Float(*v)),
            Datum::Bool(v) => Ok(Scalar::Bool(*v)),
            Datum::Text(s) | Datum::Rendered(s) => Ok(Scalar::Text(s.clone())),
            Datum::Bytes(_) | Datum::Elements(_) | Datum::Record(_) => {
                Err(EncodingError::UnsupportedType {
                    type_name: sql_type.to_string(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: Option<String>,
    sql_type: SqlType,
    dropped: bool,
    datum: Option<Datum>,
}

impl Column {
    pub fn new(name: Option<String>, sql_type: SqlType, datum: Option<Datum>) -> Self {
        Self {
            name,
            sql_type,
            dropped: false,
            datum,
        }
    }

    pub fn named(name: impl Into<String>, sql_type: SqlType, datum: Option<Datum>) -> Self {
        Self::new(Some(name.into()), sql_type, datum)
    }

    pub fn dropped(mut self) -> Self {
        self.dropped = true;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn sql_type(&self) -> &SqlType {
        &self.sql_type
    }

    pub fn is_dropped(&self) -> bool {
        self.dropped
    }

    pub fn is_null(&self) -> bool {
        self.datum.is_none()
    }

    pub fn to_scalar(&self) -> Result<Scalar> {
        match &self.datum {
            None => Ok(Scalar::Null),
            Some(datum) => datum.to_scalar(&self.sql_type),
        }
    }
}
