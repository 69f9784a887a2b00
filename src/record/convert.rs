//! Descriptor ⇄ record transcoder
//!
//! The two directions are deliberately not symmetric: a column family's
//! disk quota is written to the descriptor when reading a record, but is
//! not copied into the record when writing one.

use crate::descriptor::{Compression, RawKey, StoreMedium, TableDescriptor};

use super::schema::{
    ColumnFamilySchema, LocalityGroupSchema, TableSchema, RAW_KEY_BINARY, RAW_KEY_READABLE,
    RAW_KEY_TTL_KV, STORE_DISK, STORE_FLASH, STORE_MEMORY,
};

// =============================================================================
// Descriptor → Record
// =============================================================================

/// Build the wire record of a descriptor
///
/// Column family disk quotas are not carried.
pub fn table_desc_to_schema(desc: &TableDescriptor) -> TableSchema {
    let locality_groups = desc
        .locality_groups()
        .iter()
        .map(|lg| {
            let mut record = LocalityGroupSchema {
                name: lg.name().to_string(),
                store_type: store_code(lg.store),
                compress_type: lg.compress != Compression::None,
                block_size: lg.block_size,
                sst_size: lg.sst_size,
                use_bloom_filter: lg.use_bloom_filter,
                use_memtable_on_leveldb: lg.use_memtable_on_leveldb,
                id: lg.id(),
                ..Default::default()
            };
            if lg.memtable_ldb_block_size > 0 {
                record.memtable_ldb_write_buffer_size = lg.memtable_ldb_write_buffer_size;
                record.memtable_ldb_block_size = lg.memtable_ldb_block_size;
            }
            record
        })
        .collect();

    let column_families = desc
        .column_families()
        .iter()
        .map(|cf| ColumnFamilySchema {
            name: cf.name().to_string(),
            locality_group: cf.locality_group().to_string(),
            max_versions: cf.max_versions,
            min_versions: cf.min_versions,
            time_to_live: cf.time_to_live,
            value_type: cf.value_type.clone(),
            ..Default::default()
        })
        .collect();

    TableSchema {
        name: desc.name().to_string(),
        raw_key: raw_key_code(desc.raw_key()),
        split_size: desc.split_size(),
        merge_size: desc.merge_size(),
        kv_only: desc.is_kv(),
        locality_groups,
        column_families,
        snapshot_list: Vec::new(),
    }
}

// =============================================================================
// Record → Descriptor
// =============================================================================

/// Rebuild a descriptor from its wire record
///
/// Unknown raw-key codes become `Readable`, unknown storage codes `Disk`.
/// Duplicate entries, and column families of a missing locality group, are
/// skipped.
pub fn table_schema_to_desc(schema: &TableSchema) -> TableDescriptor {
    let mut desc = TableDescriptor::new(schema.name.as_str());
    if schema.kv_only {
        desc.set_kv_only();
    }
    desc.set_raw_key(raw_key_from_code(schema.raw_key));
    desc.set_split_size(schema.split_size);
    desc.set_merge_size(schema.merge_size);

    for record in &schema.locality_groups {
        let lg = match desc.add_locality_group(&record.name) {
            Ok(lg) => lg,
            Err(e) => {
                tracing::warn!("skipping locality group record: {}", e);
                continue;
            }
        };
        lg.set_id(record.id);
        lg.block_size = record.block_size;
        lg.store = store_from_code(record.store_type);
        lg.compress = if record.compress_type {
            Compression::Snappy
        } else {
            Compression::None
        };
        lg.use_bloom_filter = record.use_bloom_filter;
        lg.use_memtable_on_leveldb = record.use_memtable_on_leveldb;
        lg.memtable_ldb_write_buffer_size = record.memtable_ldb_write_buffer_size;
        lg.memtable_ldb_block_size = record.memtable_ldb_block_size;
        lg.sst_size = record.sst_size;
    }

    for record in &schema.column_families {
        let cf = match desc.add_column_family(&record.name, &record.locality_group) {
            Ok(cf) => cf,
            Err(e) => {
                tracing::warn!("skipping column family record: {}", e);
                continue;
            }
        };
        cf.disk_quota = record.disk_quota;
        cf.max_versions = record.max_versions;
        cf.min_versions = record.min_versions;
        cf.time_to_live = record.time_to_live;
        cf.value_type = record.value_type.clone();
    }

    desc
}

// =============================================================================
// Code Mapping
// =============================================================================

pub fn raw_key_code(raw_key: RawKey) -> i32 {
    match raw_key {
        RawKey::Readable => RAW_KEY_READABLE,
        RawKey::Binary => RAW_KEY_BINARY,
        RawKey::TtlKv => RAW_KEY_TTL_KV,
    }
}

pub fn raw_key_from_code(code: i32) -> RawKey {
    match code {
        RAW_KEY_BINARY => RawKey::Binary,
        RAW_KEY_TTL_KV => RawKey::TtlKv,
        _ => RawKey::Readable,
    }
}

pub fn store_code(store: StoreMedium) -> i32 {
    match store {
        StoreMedium::Disk => STORE_DISK,
        StoreMedium::Flash => STORE_FLASH,
        StoreMedium::Memory => STORE_MEMORY,
    }
}

pub fn store_from_code(code: i32) -> StoreMedium {
    match code {
        STORE_FLASH => StoreMedium::Flash,
        STORE_MEMORY => StoreMedium::Memory,
        _ => StoreMedium::Disk,
    }
}
