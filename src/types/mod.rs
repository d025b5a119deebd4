//! # Row Value Model
//!
//! This module provides the in-memory representation of one row before it is
//! encoded.
//!
//! ## Module Structure
//!
//! - `value`: `Scalar`, the closed set of encodable field values
//! - `row`: `Field` and `Row`, with positional name synthesis
//! - `column`: provider-side `Column`/`Datum`/`SqlType` and their mapping to `Scalar`
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `Scalar` | Null, Bool, Int, Float or Text payload |
//! | `Field` | Name plus scalar |
//! | `Row` | Ordered fields, the unit of encoding |
//! | `Column` | Typed SQL column as handed over by a row provider |
//!
//! ## Usage
//!
//! ```
//! use flexrow::types::{Row, Scalar};
//!
//! let row = Row::anonymous([Scalar::from("Alice"), Scalar::from(30), Scalar::from(true)]);
//! assert_eq!(row.get("f1"), Some(&Scalar::Text("Alice".into())));
//! ```

mod column;
mod row;
mod value;

pub use column::{Column, Datum, SqlType};
pub use row::{synthesized_name, Field, Row};
pub use value::Scalar;
