//! Fuzz testing for row encoding.
//!
//! Builds rows from arbitrary names and values, encodes them in every
//! format, and checks that successful FlexBuffers output opens with an
//! independent reader and finds every field.

#![no_main]

use arbitrary::Arbitrary;
use flexbuffers::Reader;
use libfuzzer_sys::fuzz_target;

use flexrow::{encode_row, encode_row_as, Format, Row, Scalar};

#[derive(Debug, Arbitrary)]
struct RowInput {
    fields: Vec<(Option<String>, FuzzScalar)>,
}

#[derive(Debug, Arbitrary)]
enum FuzzScalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<FuzzScalar> for Scalar {
    fn from(v: FuzzScalar) -> Self {
        match v {
            FuzzScalar::Null => Scalar::Null,
            FuzzScalar::Bool(b) => Scalar::Bool(b),
            FuzzScalar::Int(i) => Scalar::Int(i),
            FuzzScalar::Float(f) => Scalar::Float(f),
            FuzzScalar::Text(s) => Scalar::Text(s),
        }
    }
}

fuzz_target!(|input: RowInput| {
    let row = Row::from_pairs(input.fields);

    for format in Format::ALL {
        let _ = encode_row_as(format, &row);
    }

    let Ok(bytes) = encode_row(&row) else {
        return;
    };
    let root = Reader::get_root(bytes.as_slice()).expect("encoded row must have a valid root");
    let map = root.as_map();
    assert_eq!(map.len(), row.len());
    for field in row.fields() {
        assert!(map.index(field.name()).is_ok(), "missing field {:?}", field.name());
    }
});
