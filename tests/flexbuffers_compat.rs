//! # FlexBuffers Reader Compatibility Tests
//!
//! Every encoded row is opened with the independent `flexbuffers` crate
//! reader. Field lookups go through its binary search over the keys vector,
//! so a mis-sorted or mis-sized vector shows up as a missing field.
//!
//! ## Usage
//!
//! ```sh
//! cargo test --test flexbuffers_compat
//! ```

use std::collections::HashMap;

use flexbuffers::{FlexBufferType, Reader};
use proptest::prelude::*;

use flexrow::{encode_row, Column, Datum, EncodingError, Row, Scalar, SqlType};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn assert_field(bytes: &[u8], key: &str, expected: &Scalar) {
    let root = Reader::get_root(bytes).expect("buffer has a valid root");
    assert_eq!(root.flexbuffer_type(), FlexBufferType::Map);
    let field = root
        .as_map()
        .index(key)
        .unwrap_or_else(|e| panic!("field {:?} not found: {:?}", key, e));

    match expected {
        Scalar::Null => assert_eq!(field.flexbuffer_type(), FlexBufferType::Null, "{}", key),
        Scalar::Bool(b) => {
            assert_eq!(field.flexbuffer_type(), FlexBufferType::Bool, "{}", key);
            assert_eq!(field.as_bool(), *b, "{}", key);
        }
        Scalar::Int(i) => {
            assert_eq!(field.flexbuffer_type(), FlexBufferType::Int, "{}", key);
            assert_eq!(field.as_i64(), *i, "{}", key);
        }
        Scalar::Float(f) => {
            assert_eq!(field.flexbuffer_type(), FlexBufferType::Float, "{}", key);
            assert_eq!(field.as_f64().to_bits(), f.to_bits(), "{}", key);
        }
        Scalar::Text(s) => {
            assert_eq!(field.flexbuffer_type(), FlexBufferType::String, "{}", key);
            assert_eq!(field.as_str(), s.as_str(), "{}", key);
        }
    }
}

fn map_keys(bytes: &[u8]) -> Vec<String> {
    let root = Reader::get_root(bytes).expect("buffer has a valid root");
    root.as_map().iter_keys().map(|k| k.to_string()).collect()
}

// ============================================================================
// ROW SCENARIOS
// ============================================================================

#[test]
fn named_row_reads_back_by_name() {
    let row = Row::named([
        ("name", Scalar::from("Alice")),
        ("age", Scalar::from(30)),
        ("active", Scalar::from(true)),
    ]);
    let bytes = encode_row(&row).unwrap();

    assert_eq!(map_keys(&bytes), vec!["active", "age", "name"]);
    for field in row.fields() {
        assert_field(&bytes, field.name(), field.value());
    }
}

#[test]
fn anonymous_row_gets_positional_names() {
    let row = Row::anonymous([Scalar::from("Alice"), Scalar::from(30), Scalar::from(true)]);
    let bytes = encode_row(&row).unwrap();

    assert_eq!(map_keys(&bytes), vec!["f1", "f2", "f3"]);
    assert_field(&bytes, "f1", &Scalar::from("Alice"));
    assert_field(&bytes, "f2", &Scalar::Int(30));
    assert_field(&bytes, "f3", &Scalar::Bool(true));
}

#[test]
fn mixed_row_with_float_reads_back() {
    let row = Row::anonymous([
        Scalar::from("John Doe"),
        Scalar::from(42),
        Scalar::from(true),
        Scalar::from(95000.0),
    ]);
    let bytes = encode_row(&row).unwrap();

    assert_eq!(bytes.len(), 95);
    assert_field(&bytes, "f1", &Scalar::from("John Doe"));
    assert_field(&bytes, "f2", &Scalar::Int(42));
    assert_field(&bytes, "f3", &Scalar::Bool(true));
    assert_field(&bytes, "f4", &Scalar::Float(95000.0));
}

#[test]
fn null_field_reads_as_null() {
    let row = Row::named([("id", Scalar::Int(1)), ("note", Scalar::Null)]);
    let bytes = encode_row(&row).unwrap();

    assert_field(&bytes, "note", &Scalar::Null);
    assert_field(&bytes, "id", &Scalar::Int(1));
}

#[test]
fn empty_row_is_empty_map() {
    let bytes = encode_row(&Row::new()).unwrap();
    let root = Reader::get_root(bytes.as_slice()).unwrap();
    assert_eq!(root.flexbuffer_type(), FlexBufferType::Map);
    assert_eq!(root.as_map().len(), 0);
}

#[test]
fn many_fields_sort_bytewise() {
    let row = Row::anonymous((1..=12i64).map(|i| i * 1000));
    let bytes = encode_row(&row).unwrap();

    let keys = map_keys(&bytes);
    assert_eq!(&keys[..4], &["f1", "f10", "f11", "f12"]);
    assert_field(&bytes, "f10", &Scalar::Int(10_000));
    assert_field(&bytes, "f9", &Scalar::Int(9_000));
}

#[test]
fn long_strings_and_wide_ints_read_back() {
    let long = "x".repeat(70_000);
    let row = Row::named([
        ("big", Scalar::Int(i64::MIN)),
        ("blob", Scalar::from(long.as_str())),
        ("small", Scalar::Int(-1)),
    ]);
    let bytes = encode_row(&row).unwrap();

    for field in row.fields() {
        assert_field(&bytes, field.name(), field.value());
    }
}

// ============================================================================
// SQL COLUMN MAPPING
// ============================================================================

#[test]
fn typed_columns_keep_their_kind() {
    let columns = vec![
        Column::named("small", SqlType::Int2, Some(Datum::Int2(-7))),
        Column::named("ratio", SqlType::Float4, Some(Datum::Float4(0.5))),
        Column::named("code", SqlType::Bpchar, Some(Datum::Text("AB".into()))),
        Column::named(
            "price",
            SqlType::Other("numeric".into()),
            Some(Datum::Rendered("12.50".into())),
        ),
        Column::named("gone", SqlType::Int4, Some(Datum::Int4(1))).dropped(),
        Column::new(None, SqlType::Bool, Some(Datum::Bool(false))),
        Column::named("missing", SqlType::Text, None),
    ];
    let row = Row::from_columns(&columns).unwrap();
    let bytes = encode_row(&row).unwrap();

    assert_eq!(
        map_keys(&bytes),
        vec!["code", "f6", "missing", "price", "ratio", "small"]
    );
    assert_field(&bytes, "small", &Scalar::Int(-7));
    assert_field(&bytes, "ratio", &Scalar::Float(0.5));
    assert_field(&bytes, "code", &Scalar::from("AB"));
    assert_field(&bytes, "price", &Scalar::from("12.50"));
    assert_field(&bytes, "f6", &Scalar::Bool(false));
    assert_field(&bytes, "missing", &Scalar::Null);
}

#[test]
fn array_columns_are_rejected() {
    let columns = vec![Column::named(
        "tags",
        SqlType::Array(Box::new(SqlType::Text)),
        Some(Datum::Elements(vec![Datum::Text("a".into())])),
    )];
    assert!(matches!(
        Row::from_columns(&columns),
        Err(EncodingError::UnsupportedType { .. })
    ));
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        Just(Scalar::Null),
        any::<bool>().prop_map(Scalar::Bool),
        any::<i64>().prop_map(Scalar::Int),
        (-1.0e15..1.0e15f64).prop_map(Scalar::Float),
        "\\PC{0,40}".prop_map(Scalar::Text),
    ]
}

fn named_fields() -> impl Strategy<Value = HashMap<String, Scalar>> {
    prop::collection::hash_map("[A-Za-z_][A-Za-z0-9_]{0,10}", scalar_strategy(), 0..24)
}

proptest! {
    #[test]
    fn every_field_reads_back(fields in named_fields()) {
        let row = Row::named(fields.clone());
        let bytes = encode_row(&row).unwrap();
        for (name, value) in &fields {
            assert_field(&bytes, name, value);
        }
    }

    #[test]
    fn keys_are_strictly_increasing(fields in named_fields()) {
        let bytes = encode_row(&Row::named(fields)).unwrap();
        let keys = map_keys(&bytes);
        prop_assert!(keys.windows(2).all(|w| w[0].as_bytes() < w[1].as_bytes()));
    }

    #[test]
    fn encoding_is_deterministic(fields in named_fields()) {
        let row = Row::named(fields);
        prop_assert_eq!(encode_row(&row).unwrap(), encode_row(&row).unwrap());
    }

    #[test]
    fn declaration_order_does_not_change_keys(fields in named_fields()) {
        let mut pairs: Vec<(String, Scalar)> = fields.into_iter().collect();
        let forward = encode_row(&Row::named(pairs.clone())).unwrap();
        pairs.reverse();
        let backward = encode_row(&Row::named(pairs)).unwrap();
        prop_assert_eq!(map_keys(&forward), map_keys(&backward));
    }
}
