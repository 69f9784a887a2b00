//! Configuration for tabledesc
//!
//! Holds the cluster-wide defaults that the display layer compares against.
//! A property equal to its default is omitted from the verbose rendering
//! unless the extended flag is set.

// =============================================================================
// Built-in Defaults
// =============================================================================

/// Default split threshold (MB)
pub const DEFAULT_SPLIT_SIZE: i64 = 512;

/// Default merge threshold (MB), 0 = merge disabled
pub const DEFAULT_MERGE_SIZE: i64 = 0;

/// Default data block size (KB)
pub const DEFAULT_BLOCK_SIZE: i32 = 4;

/// Default SST file size bound (bytes)
pub const DEFAULT_SST_SIZE: i64 = 8 << 20;

/// Display defaults for a tabledesc instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Table Defaults
    // -------------------------------------------------------------------------
    /// Merge threshold considered default by the display (MB)
    pub merge_size: i64,

    // -------------------------------------------------------------------------
    // Locality Group Defaults
    // -------------------------------------------------------------------------
    /// Block size considered default by the display (KB)
    pub block_size: i32,

    /// SST size considered default by the display (bytes)
    pub sst_size: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            merge_size: DEFAULT_MERGE_SIZE,
            block_size: DEFAULT_BLOCK_SIZE,
            sst_size: DEFAULT_SST_SIZE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the default merge threshold (MB)
    pub fn merge_size(mut self, size: i64) -> Self {
        self.config.merge_size = size;
        self
    }

    /// Set the default block size (KB)
    pub fn block_size(mut self, size: i32) -> Self {
        self.config.block_size = size;
        self
    }

    /// Set the default SST size (bytes)
    pub fn sst_size(mut self, size: i64) -> Self {
        self.config.sst_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
