//! # Ordinal Key Ordering
//!
//! Decoders locate a field by binary-searching the keys vector of a map,
//! comparing keys byte by byte as NUL-terminated strings. The encoder must
//! store keys in exactly that order or lookups silently miss.
//!
//! ## Ordering Rules
//!
//! 1. Keys compare as raw UTF-8 bytes, never by locale or char value
//! 2. A key sorts before every longer key it is a prefix of (`"f1" < "f10"`)
//! 3. Uppercase ASCII sorts before lowercase (`"Z" < "a"`)
//!
//! Comparing `as_bytes()` slices gives the same result as `strcmp` on the
//! terminated form, because the terminator is smaller than any key byte.
//! That only holds while keys contain no NUL, so such keys are rejected.
//!
//! ## Canonical Order
//!
//! `canonical_order` returns the permutation that sorts a row's names, after
//! rejecting NUL bytes and duplicate names. Sorting is stable and the input
//! is never reordered in place, so values keep their declaration positions.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::config::{INLINE_FIELD_COUNT, KEY_TERMINATOR};
use crate::error::{EncodingError, Result};

pub type KeyOrder = SmallVec<[usize; INLINE_FIELD_COUNT]>;

#[inline]
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

pub fn validate_key(key: &str) -> Result<()> {
    if key.as_bytes().contains(&KEY_TERMINATOR) {
        return Err(EncodingError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Rejects the first name that appears twice, in declaration order.
pub fn ensure_unique<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: SmallVec<[&str; INLINE_FIELD_COUNT]> = names.into_iter().collect();
    let mut order: KeyOrder = (0..names.len()).collect();
    order.sort_by(|&a, &b| compare_keys(names[a], names[b]));
    first_duplicate(&names, &order)
}

/// Indices of `names` in ordinal key order.
pub fn canonical_order(names: &[&str]) -> Result<KeyOrder> {
    for name in names {
        validate_key(name)?;
    }
    let mut order: KeyOrder = (0..names.len()).collect();
    order.sort_by(|&a, &b| compare_keys(names[a], names[b]));
    first_duplicate(names, &order)?;
    Ok(order)
}

fn first_duplicate(names: &[&str], order: &[usize]) -> Result<()> {
    let mut dup: Option<usize> = None;
    for pair in order.windows(2) {
        if names[pair[0]] == names[pair[1]] {
            let later = pair[0].max(pair[1]);
            dup = Some(dup.map_or(later, |d| d.min(later)));
        }
    }
    match dup {
        Some(idx) => Err(EncodingError::DuplicateKey {
            key: names[idx].to_string(),
        }),
        None => Ok(()),
    }
}
