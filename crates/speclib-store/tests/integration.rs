//! Integration tests for the unit codec and library file container.

use proptest::prelude::*;
use speclib_store::{Archive, LibraryFile, StoreError, Unit, UnitReader, UnitWriter, Value};

/// A tiny record exchanged through the archive in both directions.
#[derive(Debug, Clone, PartialEq, Default)]
struct Record {
    check: bool,
    count: i64,
    limit: f64,
    label: String,
}

impl Record {
    fn exchange(&mut self, ar: &mut dyn Archive) -> Result<(), StoreError> {
        ar.begin_unit("Record", 1.0)?;
        ar.bool("Check", &mut self.check)?;
        ar.integer("Count", &mut self.count)?;
        ar.begin_unit("Limits", 2.0)?;
        ar.float("Limit", &mut self.limit)?;
        ar.end_unit()?;
        ar.string("Label", &mut self.label)?;
        ar.end_unit()
    }
}

fn save(record: &Record) -> Unit {
    let mut w = UnitWriter::new();
    record.clone().exchange(&mut w).expect("save");
    w.finish().expect("finish")
}

fn load(root: &Unit) -> Result<Record, StoreError> {
    let mut r = UnitReader::new(root);
    let mut record = Record::default();
    record.exchange(&mut r)?;
    r.finish()?;
    Ok(record)
}

#[test]
fn archive_round_trip_through_file() {
    let record = Record {
        check: true,
        count: 4,
        limit: 889_644.3,
        label: "Hold down".into(),
    };
    let bytes = LibraryFile::new(save(&record)).to_bytes().expect("serialize");
    let file = LibraryFile::from_bytes(&bytes).expect("deserialize");
    assert_eq!(load(&file.root).expect("load"), record);
}

#[test]
fn file_on_disk_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lib.slf");
    let root = save(&Record::default());
    std::fs::write(&path, LibraryFile::new(root.clone()).to_bytes().expect("serialize"))
        .expect("write");
    let data = std::fs::read(&path).expect("read");
    assert_eq!(LibraryFile::from_bytes(&data).expect("parse").root, root);
}

#[test]
fn nested_unit_version_is_checked() {
    let root = Unit::new("Record", 1.0)
        .with_property("Check", Value::Bool(true))
        .with_property("Count", Value::Integer(1))
        .with_unit(Unit::new("Limits", 3.0).with_property("Limit", Value::Float(1.0)))
        .with_property("Label", Value::String(String::new()));
    let err = load(&root).expect_err("version 3 is newer than 2");
    assert!(
        matches!(err, StoreError::UnsupportedVersion { ref unit, .. } if unit == "Limits"),
        "unexpected error: {err}"
    );
}

#[test]
fn missing_nested_property_reported() {
    let root = Unit::new("Record", 1.0)
        .with_property("Check", Value::Bool(true))
        .with_property("Count", Value::Integer(1))
        .with_unit(Unit::new("Limits", 1.0))
        .with_property("Label", Value::String(String::new()));
    let err = load(&root).expect_err("Limit is missing");
    assert!(matches!(
        err,
        StoreError::MissingField { ref unit, ref name } if unit == "Limits" && name == "Limit"
    ));
}

proptest! {
    #[test]
    fn arbitrary_records_round_trip(
        check in any::<bool>(),
        count in any::<i64>(),
        limit in -1.0e9f64..1.0e9,
        label in "[a-zA-Z0-9 ]{0,24}",
    ) {
        let record = Record { check, count, limit, label };
        let bytes = LibraryFile::new(save(&record)).to_bytes().unwrap();
        let loaded = load(&LibraryFile::from_bytes(&bytes).unwrap().root).unwrap();
        prop_assert_eq!(loaded.check, record.check);
        prop_assert_eq!(loaded.count, record.count);
        prop_assert!((loaded.limit - record.limit).abs() <= 1e-9 * record.limit.abs().max(1.0));
        prop_assert_eq!(loaded.label, record.label);
    }
}
