//! Tests for the descriptor model
//!
//! These tests verify:
//! - Defaults of tables, locality groups and column families
//! - Name uniqueness and locality group references
//! - Table name immutability
//! - Scan descriptor bookkeeping

use tabledesc::config::{DEFAULT_BLOCK_SIZE, DEFAULT_SPLIT_SIZE, DEFAULT_SST_SIZE};
use tabledesc::descriptor::{
    ColumnSelection, Compression, RawKey, ScanDescriptor, StoreMedium, TableDescriptor,
};
use tabledesc::{EntityKind, SchemaError};

// =============================================================================
// Default Tests
// =============================================================================

#[test]
fn test_new_table_defaults() {
    let desc = TableDescriptor::new("t1");

    assert_eq!(desc.name(), "t1");
    assert_eq!(desc.raw_key(), RawKey::Readable);
    assert_eq!(desc.split_size(), DEFAULT_SPLIT_SIZE);
    assert_eq!(desc.merge_size(), 0);
    assert!(!desc.is_kv());
    assert_eq!(desc.locality_group_count(), 0);
    assert_eq!(desc.column_family_count(), 0);
}

#[test]
fn test_locality_group_defaults() {
    let mut desc = TableDescriptor::new("t1");
    let lg = desc.add_locality_group("lg0").unwrap();

    assert_eq!(lg.name(), "lg0");
    assert_eq!(lg.store, StoreMedium::Disk);
    assert_eq!(lg.compress, Compression::Snappy);
    assert_eq!(lg.block_size, DEFAULT_BLOCK_SIZE);
    assert_eq!(lg.sst_size, DEFAULT_SST_SIZE);
    assert!(!lg.use_bloom_filter);
    assert!(!lg.use_memtable_on_leveldb);
}

#[test]
fn test_column_family_defaults() {
    let mut desc = TableDescriptor::new("t1");
    desc.add_locality_group("lg0").unwrap();
    let cf = desc.add_column_family("cf1", "lg0").unwrap();

    assert_eq!(cf.name(), "cf1");
    assert_eq!(cf.locality_group(), "lg0");
    assert_eq!(cf.max_versions, 1);
    assert_eq!(cf.min_versions, 1);
    assert_eq!(cf.time_to_live, 0);
    assert_eq!(cf.disk_quota, 0);
    assert!(cf.value_type.is_empty());
}

// =============================================================================
// Locality Group Tests
// =============================================================================

#[test]
fn test_locality_group_ids_follow_position() {
    let mut desc = TableDescriptor::new("t1");
    desc.add_locality_group("lg0").unwrap();
    desc.add_locality_group("lg1").unwrap();

    assert_eq!(desc.locality_group("lg0").unwrap().id(), 0);
    assert_eq!(desc.locality_group("lg1").unwrap().id(), 1);
}

#[test]
fn test_duplicate_locality_group_fails() {
    let mut desc = TableDescriptor::new("t1");
    desc.add_locality_group("lg0").unwrap();

    let err = desc.add_locality_group("lg0").unwrap_err();
    assert!(matches!(
        err,
        SchemaError::DuplicateEntity { kind: EntityKind::LocalityGroup, .. }
    ));
    assert_eq!(desc.locality_group_count(), 1);
}

#[test]
fn test_locality_group_lookup_and_mutation() {
    let mut desc = TableDescriptor::new("t1");
    desc.add_locality_group("lg0").unwrap();

    desc.locality_group_mut("lg0").unwrap().store = StoreMedium::Flash;

    assert_eq!(desc.locality_group("lg0").unwrap().store, StoreMedium::Flash);
    assert!(desc.locality_group("missing").is_none());
}

// =============================================================================
// Column Family Tests
// =============================================================================

#[test]
fn test_column_family_requires_existing_group() {
    let mut desc = TableDescriptor::new("t1");

    let err = desc.add_column_family("cf1", "lg0").unwrap_err();
    assert!(matches!(
        err,
        SchemaError::UnknownEntity { kind: EntityKind::LocalityGroup, .. }
    ));
}

#[test]
fn test_duplicate_column_family_fails_across_groups() {
    let mut desc = TableDescriptor::new("t1");
    desc.add_locality_group("lg0").unwrap();
    desc.add_locality_group("lg1").unwrap();
    desc.add_column_family("cf1", "lg0").unwrap();

    let err = desc.add_column_family("cf1", "lg1").unwrap_err();
    assert!(matches!(
        err,
        SchemaError::DuplicateEntity { kind: EntityKind::ColumnFamily, .. }
    ));
}

#[test]
fn test_column_families_in_group_keep_order() {
    let mut desc = TableDescriptor::new("t1");
    desc.add_locality_group("lg0").unwrap();
    desc.add_locality_group("lg1").unwrap();
    desc.add_column_family("a", "lg0").unwrap();
    desc.add_column_family("b", "lg1").unwrap();
    desc.add_column_family("c", "lg0").unwrap();

    let names: Vec<&str> = desc.column_families_in("lg0").map(|cf| cf.name()).collect();
    assert_eq!(names, vec!["a", "c"]);
}

// =============================================================================
// Table Name Tests
// =============================================================================

#[test]
fn test_set_name_on_unnamed_table() {
    let mut desc = TableDescriptor::default();
    desc.set_name("t1").unwrap();

    assert_eq!(desc.name(), "t1");
}

#[test]
fn test_set_same_name_is_accepted() {
    let mut desc = TableDescriptor::new("t1");

    assert!(desc.set_name("t1").is_ok());
}

#[test]
fn test_rename_fails() {
    let mut desc = TableDescriptor::new("t1");

    let err = desc.set_name("t2").unwrap_err();
    assert!(matches!(err, SchemaError::TableNameMismatch { .. }));
    assert_eq!(desc.name(), "t1");
}

// =============================================================================
// Enum Spelling Tests
// =============================================================================

#[test]
fn test_enum_spellings() {
    assert_eq!(RawKey::parse("ttlkv"), Some(RawKey::TtlKv));
    assert_eq!(RawKey::Binary.as_str(), "binary");
    assert_eq!(RawKey::parse("Binary"), None);

    assert_eq!(StoreMedium::parse("memory"), Some(StoreMedium::Memory));
    assert_eq!(StoreMedium::Flash.as_str(), "flash");

    assert_eq!(Compression::parse("none"), Some(Compression::None));
    assert_eq!(Compression::parse("zstd"), None);
}

// =============================================================================
// Scan Descriptor Tests
// =============================================================================

#[test]
fn test_scan_descriptor_bookkeeping() {
    let mut scan = ScanDescriptor::new();
    assert!(scan.selects_all());
    assert_eq!(scan.filter_string(), None);

    scan.add_column_family("cf1");
    scan.add_column("cf2", "col");
    scan.set_filter_string("age>10");

    assert!(!scan.selects_all());
    assert_eq!(
        scan.selections(),
        &[
            ColumnSelection::Family("cf1".to_string()),
            ColumnSelection::Column {
                family: "cf2".to_string(),
                qualifier: "col".to_string(),
            },
        ]
    );
    assert_eq!(scan.filter_string(), Some("age>10"));
}
