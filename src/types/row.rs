//! # Rows and Fields
//!
//! A `Row` is the value model for one encode call: an ordered list of named
//! fields. Names are either declared by the caller or synthesized from the
//! field's 1-based position (`f1`, `f2`, ...), the same naming SQL uses for
//! the columns of an anonymous record.
//!
//! ## Name Synthesis
//!
//! ```text
//! input:   (None, 'Alice')  (None, 30)  (None, true)
//! fields:  f1 = 'Alice'     f2 = 30     f3 = true
//! ```
//!
//! Synthesis never checks uniqueness. A declared `f2` next to an anonymous
//! second field yields two `f2` fields, and every encoder rejects that row
//! with `DuplicateKey` instead of letting one value shadow the other.
//!
//! ## Lifecycle
//!
//! Rows own their names and values. An encoder only borrows the row, so a
//! single row can be encoded into several formats.

use super::column::Column;
use super::value::Scalar;
use crate::config::{FIRST_FIELD_POSITION, SYNTHETIC_NAME_PREFIX};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    value: Scalar,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }
}

pub fn synthesized_name(position: usize) -> String {
    format!("{}{}", SYNTHETIC_NAME_PREFIX, position)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<Field>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Builds a row from `(optional name, value)` pairs in declaration order.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Option<N>, V)>,
        N: Into<String>,
        V: Into<Scalar>,
    {
        let mut row = Row::new();
        for (name, value) in pairs {
            row.push(name, value);
        }
        row
    }

    pub fn anonymous<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Self::from_pairs(values.into_iter().map(|v| (None::<String>, v)))
    }

    pub fn named<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Scalar>,
    {
        Self::from_pairs(pairs.into_iter().map(|(n, v)| (Some(n), v)))
    }

    /// Converts provider columns into a row.
    ///
    /// Dropped columns are skipped but keep their attribute position, so the
    /// anonymous column after a dropped one is still named by its position.
    pub fn from_columns(columns: &[Column]) -> Result<Self> {
        let mut row = Row::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if column.is_dropped() {
                continue;
            }
            let position = idx + FIRST_FIELD_POSITION;
            let name = match column.name() {
                Some(name) => name.to_string(),
                None => synthesized_name(position),
            };
            row.fields.push(Field::new(name, column.to_scalar()?));
        }
        Ok(row)
    }

    pub fn push<N, V>(&mut self, name: Option<N>, value: V)
    where
        N: Into<String>,
        V: Into<Scalar>,
    {
        let position = self.fields.len() + FIRST_FIELD_POSITION;
        let name = match name {
            Some(name) => name.into(),
            None => synthesized_name(position),
        };
        self.fields.push(Field::new(name, value));
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First field carrying `name`, in declaration order.
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

impl FromIterator<Field> for Row {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
