//! # Scalar Field Values
//!
//! `Scalar` is the closed set of values a row field can hold before encoding.
//! Every SQL column type the encoder accepts is widened into one of these five
//! variants (see [`super::column`]).
//!
//! | Variant | Rust Type | Encoded as |
//! |---------|-----------|------------|
//! | Null | - | inline `Null`, width 1 |
//! | Bool | bool | inline `Bool`, width 1 |
//! | Int | i64 | inline `Int`, minimal signed width |
//! | Float | f64 | inline `Float`, always 8 bytes |
//! | Text | String | out-of-line length-prefixed UTF-8 |

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Reads a command-line literal: `null`, `true`, `false`, an integer, a
    /// float, or else text. An `s:` prefix forces text.
    pub fn parse_literal(input: &str) -> Scalar {
        if let Some(text) = input.strip_prefix("s:") {
            return Scalar::Text(text.to_string());
        }
        match input {
            "null" | "NULL" => return Scalar::Null,
            "true" => return Scalar::Bool(true),
            "false" => return Scalar::Bool(false),
            _ => {}
        }
        if let Ok(i) = input.parse::<i64>() {
            return Scalar::Int(i);
        }
        match input.parse::<f64>() {
            Ok(f) if f.is_finite() => Scalar::Float(f),
            _ => Scalar::Text(input.to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "NULL"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i16> for Scalar {
    fn from(v: i16) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(v as f64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Scalar::Null, Into::into)
    }
}
