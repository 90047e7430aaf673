//! Shared helpers for criteria module tests.

use speclib_store::{UnitReader, UnitWriter};

use crate::edition::Edition;
use crate::module::CriteriaModule;

/// Save `value` into a fresh unit tree and read it back.
pub fn round_trip<T: CriteriaModule>(value: &T) -> T {
    let mut w = UnitWriter::new();
    value.save(&mut w).unwrap();
    let root = w.finish().unwrap();
    let mut r = UnitReader::new(&root);
    let loaded = T::read(&mut r).unwrap();
    r.finish().unwrap();
    loaded
}

/// Labels of every difference `a` reports against `b`.
pub fn labels<T: CriteriaModule>(a: &T, b: &T, edition: Edition) -> Vec<String> {
    let mut diffs = Vec::new();
    let same = a.compare(b, edition, &mut diffs, false);
    assert_eq!(same, diffs.is_empty(), "compare result disagrees with its diff list");
    diffs.into_iter().map(|d| d.item).collect()
}

/// Assert `a` and `b` compare equal under every edition.
pub fn assert_same<T: CriteriaModule>(a: &T, b: &T) {
    for edition in Edition::ALL {
        let found = labels(a, b, edition);
        assert!(found.is_empty(), "unexpected differences for {edition:?}: {found:?}");
    }
}
