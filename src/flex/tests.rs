use super::*;
use crate::encoding::BitWidth;
use crate::error::EncodingError;
use crate::types::{Row, Scalar};

fn read_uint(bytes: &[u8], pos: usize, width: usize) -> u64 {
    let mut le = [0u8; 8];
    le[..width].copy_from_slice(&bytes[pos..pos + width]);
    u64::from_le_bytes(le)
}

fn read_int(bytes: &[u8], pos: usize, width: usize) -> i64 {
    let raw = read_uint(bytes, pos, width);
    let shift = 64 - width as u32 * 8;
    ((raw << shift) as i64) >> shift
}

fn read_cstr(bytes: &[u8], pos: usize) -> &str {
    let end = pos + bytes[pos..].iter().position(|&b| b == 0).unwrap();
    std::str::from_utf8(&bytes[pos..end]).unwrap()
}

/// Minimal walk over an encoded row, enough to check layout from the outside.
struct MapView<'a> {
    bytes: &'a [u8],
    values: usize,
    width: usize,
    len: usize,
}

impl<'a> MapView<'a> {
    fn open(bytes: &'a [u8]) -> Self {
        let root_width = *bytes.last().unwrap() as usize;
        let packed = bytes[bytes.len() - 2];
        let (ty, width) = unpack_type(packed).unwrap();
        assert_eq!(ty, FlexType::Map);

        let root_pos = bytes.len() - 2 - root_width;
        let values = root_pos - read_uint(bytes, root_pos, root_width) as usize;
        let width = width.byte_width();
        let len = read_uint(bytes, values - width, width) as usize;
        Self {
            bytes,
            values,
            width,
            len,
        }
    }

    fn keys(&self) -> Vec<&'a str> {
        let prefix = self.values - 3 * self.width;
        let keys = prefix - read_uint(self.bytes, prefix, self.width) as usize;
        let key_width = read_uint(self.bytes, prefix + self.width, self.width) as usize;
        let key_count = read_uint(self.bytes, keys - key_width, key_width) as usize;
        assert_eq!(key_count, self.len);

        (0..key_count)
            .map(|i| {
                let slot = keys + i * key_width;
                let target = slot - read_uint(self.bytes, slot, key_width) as usize;
                read_cstr(self.bytes, target)
            })
            .collect()
    }

    fn type_of(&self, i: usize) -> (FlexType, BitWidth) {
        unpack_type(self.bytes[self.values + self.len * self.width + i]).unwrap()
    }

    fn int(&self, i: usize) -> i64 {
        assert_eq!(self.type_of(i).0, FlexType::Int);
        read_int(self.bytes, self.values + i * self.width, self.width)
    }

    fn string(&self, i: usize) -> &'a str {
        assert_eq!(self.type_of(i).0, FlexType::String);
        let slot = self.values + i * self.width;
        read_cstr(self.bytes, slot - read_uint(self.bytes, slot, self.width) as usize)
    }
}

#[test]
fn anonymous_row_exact_bytes() {
    let row = Row::anonymous([Scalar::from("Alice"), Scalar::from(30), Scalar::from(true)]);
    let bytes = encode_row(&row).unwrap();

    let expected: [u8; 32] = [
        0x05, b'A', b'l', b'i', b'c', b'e', 0x00, // "Alice"
        b'f', b'1', 0x00, b'f', b'2', 0x00, b'f', b'3', 0x00, // keys
        0x03, 0x0A, 0x08, 0x06, // keys vector
        0x03, 0x01, 0x03, // keys offset, keys width, len
        0x16, 0x1E, 0x01, // values
        0x14, 0x04, 0x68, // types
        0x06, 0x24, 0x01, // root
    ];
    assert_eq!(bytes, expected);
}

#[test]
fn float_widens_every_value_slot() {
    let row = Row::anonymous([
        Scalar::from("John Doe"),
        Scalar::from(42),
        Scalar::from(true),
        Scalar::from(95000.0),
    ]);
    let bytes = encode_row(&row).unwrap();

    assert_eq!(bytes.len(), 95);
    assert_eq!(read_uint(&bytes, 32, 8), 9);
    assert_eq!(read_uint(&bytes, 40, 8), 1);
    assert_eq!(read_uint(&bytes, 48, 8), 4);
    assert_eq!(read_uint(&bytes, 56, 8), 55);
    assert_eq!(read_uint(&bytes, 64, 8), 42);
    assert_eq!(read_uint(&bytes, 72, 8), 1);
    assert_eq!(&bytes[80..88], &95000.0f64.to_le_bytes());
    assert_eq!(&bytes[88..95], &[0x14, 0x07, 0x6B, 0x0F, 0x24, 0x24, 0x01]);
}

#[test]
fn empty_row_is_empty_map() {
    let bytes = encode_row(&Row::new()).unwrap();
    assert_eq!(bytes, vec![0x00, 0x00, 0x01, 0x00, 0x00, 0x24, 0x01]);

    let view = MapView::open(&bytes);
    assert_eq!(view.len, 0);
    assert!(view.keys().is_empty());
}

#[test]
fn null_field_has_null_type_byte() {
    let row = Row::anonymous([Scalar::Null]);
    let bytes = encode_row(&row).unwrap();

    let view = MapView::open(&bytes);
    assert_eq!(view.keys(), vec!["f1"]);
    assert_eq!(view.type_of(0), (FlexType::Null, BitWidth::W8));
    assert_eq!(bytes[view.values], 0x00);
}

#[test]
fn keys_are_sorted_and_values_follow() {
    let row = Row::named([
        ("name", Scalar::from("Bob")),
        ("age", Scalar::from(25)),
        ("Zip", Scalar::from(-7)),
    ]);
    let bytes = encode_row(&row).unwrap();

    let view = MapView::open(&bytes);
    assert_eq!(view.keys(), vec!["Zip", "age", "name"]);
    assert_eq!(view.int(0), -7);
    assert_eq!(view.int(1), 25);
    assert_eq!(view.string(2), "Bob");
}

#[test]
fn wide_row_orders_positional_names_bytewise() {
    let row = Row::anonymous((0..20i64).map(Scalar::from));
    let bytes = encode_row(&row).unwrap();

    let view = MapView::open(&bytes);
    let keys = view.keys();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(&keys[..4], &["f1", "f10", "f11", "f12"]);
    assert_eq!(view.int(1), 9);
    assert_eq!(view.int(0), 0);
}

#[test]
fn long_string_keeps_its_own_width() {
    let text = "y".repeat(300);
    let row = Row::named([("s", Scalar::from(text.as_str()))]);
    let bytes = encode_row(&row).unwrap();

    let view = MapView::open(&bytes);
    assert_eq!(view.type_of(0), (FlexType::String, BitWidth::W16));
    assert_eq!(view.string(0), text);
}

#[test]
fn int_extremes_survive() {
    let row = Row::named([("lo", Scalar::Int(i64::MIN)), ("hi", Scalar::Int(i64::MAX))]);
    let bytes = encode_row(&row).unwrap();

    let view = MapView::open(&bytes);
    assert_eq!(view.keys(), vec!["hi", "lo"]);
    assert_eq!(view.int(0), i64::MAX);
    assert_eq!(view.int(1), i64::MIN);
}

#[test]
fn duplicate_names_fail() {
    let row = Row::named([("a", 1), ("a", 2)]);
    assert_eq!(
        encode_row(&row).unwrap_err(),
        EncodingError::DuplicateKey { key: "a".into() }
    );
}

#[test]
fn explicit_name_colliding_with_synthesized_fails() {
    let mut row = Row::new();
    row.push(None::<&str>, 1);
    row.push(Some("f1"), 2);
    assert!(matches!(
        encode_row(&row),
        Err(EncodingError::DuplicateKey { .. })
    ));
}

#[test]
fn nul_in_name_fails() {
    let row = Row::named([("bad\0name", 1)]);
    assert!(matches!(
        encode_row(&row),
        Err(EncodingError::InvalidKey { .. })
    ));
}

#[test]
fn encoding_is_deterministic() {
    let row = Row::named([
        ("score", Scalar::from(1.5)),
        ("label", Scalar::from("x")),
        ("flag", Scalar::from(false)),
        ("missing", Scalar::Null),
    ]);
    assert_eq!(encode_row(&row).unwrap(), encode_row(&row.clone()).unwrap());
}
