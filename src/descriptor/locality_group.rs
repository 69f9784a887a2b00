//! Locality group descriptor
//!
//! A locality group is a set of column families stored together, sharing
//! one storage medium and one set of block/SST tuning parameters.

use crate::config::{DEFAULT_BLOCK_SIZE, DEFAULT_SST_SIZE};

/// Where a locality group's data lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMedium {
    #[default]
    Disk,
    Flash,
    Memory,
}

impl StoreMedium {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreMedium::Disk => "disk",
            StoreMedium::Flash => "flash",
            StoreMedium::Memory => "memory",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "disk" => Some(StoreMedium::Disk),
            "flash" => Some(StoreMedium::Flash),
            "memory" => Some(StoreMedium::Memory),
            _ => None,
        }
    }
}

/// Block compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    None,
    #[default]
    Snappy,
}

impl Compression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Snappy => "snappy",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Compression::None),
            "snappy" => Some(Compression::Snappy),
            _ => None,
        }
    }
}

/// Storage parameters of one locality group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityGroupDescriptor {
    name: String,

    /// Numeric identifier, unique within the table
    id: u32,

    pub store: StoreMedium,

    pub compress: Compression,

    /// Data block size (KB)
    pub block_size: i32,

    /// SST file size bound (bytes)
    pub sst_size: i64,

    pub use_bloom_filter: bool,

    /// Keep an in-memory table on top of the on-disk store
    pub use_memtable_on_leveldb: bool,

    /// Write buffer of the in-memory table (MB), only meaningful with
    /// `use_memtable_on_leveldb`
    pub memtable_ldb_write_buffer_size: i32,

    /// Block size of the in-memory table (KB), only meaningful with
    /// `use_memtable_on_leveldb`
    pub memtable_ldb_block_size: i32,
}

impl LocalityGroupDescriptor {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            store: StoreMedium::default(),
            compress: Compression::default(),
            block_size: DEFAULT_BLOCK_SIZE,
            sst_size: DEFAULT_SST_SIZE,
            use_bloom_filter: false,
            use_memtable_on_leveldb: false,
            memtable_ldb_write_buffer_size: 0,
            memtable_ldb_block_size: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
