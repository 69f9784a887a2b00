//! Schema record definitions
//!
//! Flat, order-preserving mirror of a table descriptor. Enumerations are
//! carried as integer codes so records written by newer peers still decode;
//! unknown codes fall back to defaults when converted to a descriptor.

use serde::{Deserialize, Serialize};

// =============================================================================
// Wire Codes
// =============================================================================

pub const RAW_KEY_READABLE: i32 = 0;
pub const RAW_KEY_BINARY: i32 = 1;
pub const RAW_KEY_TTL_KV: i32 = 2;

pub const STORE_DISK: i32 = 0;
pub const STORE_FLASH: i32 = 1;
pub const STORE_MEMORY: i32 = 2;

// =============================================================================
// Records
// =============================================================================

/// Persisted/transmitted form of a table descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,

    /// One of the `RAW_KEY_*` codes
    pub raw_key: i32,

    /// MB
    pub split_size: i64,

    /// MB
    pub merge_size: i64,

    pub kv_only: bool,

    pub locality_groups: Vec<LocalityGroupSchema>,

    pub column_families: Vec<ColumnFamilySchema>,

    /// Snapshot identifiers, opaque to this crate
    pub snapshot_list: Vec<u64>,
}

/// Locality group record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalityGroupSchema {
    pub name: String,

    /// One of the `STORE_*` codes
    pub store_type: i32,

    /// true = snappy, false = none
    pub compress_type: bool,

    /// KB
    pub block_size: i32,

    /// Bytes
    pub sst_size: i64,

    pub use_bloom_filter: bool,

    pub use_memtable_on_leveldb: bool,

    /// MB
    pub memtable_ldb_write_buffer_size: i32,

    /// KB
    pub memtable_ldb_block_size: i32,

    pub id: u32,
}

/// Column family record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFamilySchema {
    pub name: String,

    /// Owning locality group name
    pub locality_group: String,

    pub max_versions: i32,

    pub min_versions: i32,

    /// Seconds
    pub time_to_live: i32,

    /// Bytes
    pub disk_quota: i64,

    pub value_type: String,
}
