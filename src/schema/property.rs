//! Validation rules
//!
//! Every recognized property name maps to one variant of a per-entity enum
//! carrying the already-validated, typed value. Parsing a `(name, value)`
//! pair either yields such a variant or fails with `UnknownProperty`
//! (name not in the entity's whitelist) or `InvalidValue` (recognized name,
//! unacceptable value).
//!
//! | Entity | Property                         | Accepted                       |
//! |--------|----------------------------------|--------------------------------|
//! | table  | rawkey                           | readable, binary, ttlkv        |
//! | table  | splitsize, mergesize             | integer >= 0 (0 = disabled)    |
//! | lg     | storage                          | disk, flash, memory            |
//! | lg     | compress                         | none, snappy                   |
//! | lg     | blocksize, sst_size              | integer > 0 (KB, MB)           |
//! | lg     | use_memtable_on_leveldb          | true, false                    |
//! | lg     | memtable_ldb_write_buffer_size   | integer > 0 (MB)               |
//! | lg     | memtable_ldb_block_size          | integer > 0 (KB)               |
//! | cf     | ttl                              | integer >= 0 (seconds)         |
//! | cf     | maxversions, minversions         | integer > 0                    |
//! | cf     | diskquota                        | integer > 0 (bytes)            |
//! | cf     | type                             | any string                     |

use std::str::FromStr;

use crate::descriptor::{
    ColumnFamilyDescriptor, Compression, LocalityGroupDescriptor, RawKey, StoreMedium,
    TableDescriptor,
};
use crate::error::{EntityKind, Result, SchemaError};

// =============================================================================
// Property Name Sets
// =============================================================================

pub const TABLE_PROPERTIES: &[&str] = &["rawkey", "splitsize", "mergesize"];

pub const LG_PROPERTIES: &[&str] = &[
    "storage",
    "compress",
    "blocksize",
    "sst_size",
    "use_memtable_on_leveldb",
    "memtable_ldb_write_buffer_size",
    "memtable_ldb_block_size",
];

pub const CF_PROPERTIES: &[&str] = &["ttl", "maxversions", "minversions", "diskquota", "type"];

/// Which entity owns a property name, `None` if no entity recognizes it
pub fn classify(name: &str) -> Option<EntityKind> {
    if TABLE_PROPERTIES.contains(&name) {
        Some(EntityKind::Table)
    } else if LG_PROPERTIES.contains(&name) {
        Some(EntityKind::LocalityGroup)
    } else if CF_PROPERTIES.contains(&name) {
        Some(EntityKind::ColumnFamily)
    } else {
        None
    }
}

// =============================================================================
// Property Trait
// =============================================================================

/// A validated property of one entity kind
pub trait Property: Sized {
    /// The entity kind whose whitelist this type implements
    const KIND: EntityKind;

    /// The descriptor the property is applied to
    type Target;

    /// Validate one `(name, value)` pair
    fn parse(name: &str, value: &str) -> Result<Self>;

    /// Write the validated value into a descriptor
    fn apply(&self, target: &mut Self::Target);
}

/// Validate a sequence of `(name, value)` pairs, stopping at the first failure
pub fn validate_properties<'a, P, I>(props: I) -> Result<Vec<P>>
where
    P: Property,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    props
        .into_iter()
        .map(|(name, value)| P::parse(name, value))
        .collect()
}

/// Validate every pair first, then apply them all
///
/// `target` is untouched when any pair is rejected.
pub fn set_properties<'a, P, I>(props: I, target: &mut P::Target) -> Result<()>
where
    P: Property,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let validated: Vec<P> = validate_properties(props)?;
    for prop in &validated {
        prop.apply(target);
    }
    Ok(())
}

// =============================================================================
// Table Properties
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableProperty {
    RawKey(RawKey),
    SplitSize(i64),
    MergeSize(i64),
}

impl Property for TableProperty {
    const KIND: EntityKind = EntityKind::Table;
    type Target = TableDescriptor;

    fn parse(name: &str, value: &str) -> Result<Self> {
        match name {
            "rawkey" => RawKey::parse(value)
                .map(TableProperty::RawKey)
                .ok_or_else(|| SchemaError::invalid_value(name, value)),
            // 0 = split disabled
            "splitsize" => parse_number(name, value, |v: &i64| *v >= 0).map(TableProperty::SplitSize),
            // 0 = merge disabled
            "mergesize" => parse_number(name, value, |v: &i64| *v >= 0).map(TableProperty::MergeSize),
            _ => Err(unknown_property::<Self>(name)),
        }
    }

    fn apply(&self, desc: &mut TableDescriptor) {
        match self {
            TableProperty::RawKey(raw_key) => desc.set_raw_key(*raw_key),
            TableProperty::SplitSize(size) => desc.set_split_size(*size),
            TableProperty::MergeSize(size) => desc.set_merge_size(*size),
        }
    }
}

// =============================================================================
// Locality Group Properties
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LgProperty {
    Storage(StoreMedium),
    Compress(Compression),
    /// KB
    BlockSize(i32),
    /// MB
    SstSize(i32),
    UseMemtableOnLeveldb(bool),
    /// MB
    MemtableLdbWriteBufferSize(i32),
    /// KB
    MemtableLdbBlockSize(i32),
}

impl Property for LgProperty {
    const KIND: EntityKind = EntityKind::LocalityGroup;
    type Target = LocalityGroupDescriptor;

    fn parse(name: &str, value: &str) -> Result<Self> {
        let positive = |v: &i32| *v > 0;
        match name {
            "storage" => StoreMedium::parse(value)
                .map(LgProperty::Storage)
                .ok_or_else(|| SchemaError::invalid_value(name, value)),
            "compress" => Compression::parse(value)
                .map(LgProperty::Compress)
                .ok_or_else(|| SchemaError::invalid_value(name, value)),
            "blocksize" => parse_number(name, value, positive).map(LgProperty::BlockSize),
            "sst_size" => parse_number(name, value, positive).map(LgProperty::SstSize),
            "use_memtable_on_leveldb" => match value {
                "true" => Ok(LgProperty::UseMemtableOnLeveldb(true)),
                "false" => Ok(LgProperty::UseMemtableOnLeveldb(false)),
                _ => Err(SchemaError::invalid_value(name, value)),
            },
            "memtable_ldb_write_buffer_size" => {
                parse_number(name, value, positive).map(LgProperty::MemtableLdbWriteBufferSize)
            }
            "memtable_ldb_block_size" => {
                parse_number(name, value, positive).map(LgProperty::MemtableLdbBlockSize)
            }
            _ => Err(unknown_property::<Self>(name)),
        }
    }

    fn apply(&self, lg: &mut LocalityGroupDescriptor) {
        match self {
            LgProperty::Storage(store) => lg.store = *store,
            LgProperty::Compress(compress) => lg.compress = *compress,
            LgProperty::BlockSize(size) => lg.block_size = *size,
            LgProperty::SstSize(mb) => lg.sst_size = i64::from(*mb) << 20,
            LgProperty::UseMemtableOnLeveldb(flag) => lg.use_memtable_on_leveldb = *flag,
            LgProperty::MemtableLdbWriteBufferSize(size) => {
                lg.memtable_ldb_write_buffer_size = *size
            }
            LgProperty::MemtableLdbBlockSize(size) => lg.memtable_ldb_block_size = *size,
        }
    }
}

// =============================================================================
// Column Family Properties
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CfProperty {
    /// Seconds, 0 = unbounded
    Ttl(i32),
    MaxVersions(i32),
    MinVersions(i32),
    /// Bytes
    DiskQuota(i64),
    Type(String),
}

impl Property for CfProperty {
    const KIND: EntityKind = EntityKind::ColumnFamily;
    type Target = ColumnFamilyDescriptor;

    fn parse(name: &str, value: &str) -> Result<Self> {
        match name {
            "ttl" => parse_number(name, value, |v: &i32| *v >= 0).map(CfProperty::Ttl),
            "maxversions" => parse_number(name, value, |v: &i32| *v > 0).map(CfProperty::MaxVersions),
            "minversions" => parse_number(name, value, |v: &i32| *v > 0).map(CfProperty::MinVersions),
            "diskquota" => parse_number(name, value, |v: &i64| *v > 0).map(CfProperty::DiskQuota),
            "type" => Ok(CfProperty::Type(value.to_string())),
            _ => Err(unknown_property::<Self>(name)),
        }
    }

    fn apply(&self, cf: &mut ColumnFamilyDescriptor) {
        match self {
            CfProperty::Ttl(ttl) => cf.time_to_live = *ttl,
            CfProperty::MaxVersions(versions) => cf.max_versions = *versions,
            CfProperty::MinVersions(versions) => cf.min_versions = *versions,
            CfProperty::DiskQuota(quota) => cf.disk_quota = *quota,
            CfProperty::Type(value_type) => cf.value_type = value_type.clone(),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Parse a decimal integer and check it against `accept`
fn parse_number<T>(name: &str, value: &str, accept: impl Fn(&T) -> bool) -> Result<T>
where
    T: FromStr,
{
    match value.parse::<T>() {
        Ok(number) if accept(&number) => Ok(number),
        _ => Err(SchemaError::invalid_value(name, value)),
    }
}

fn unknown_property<P: Property>(name: &str) -> SchemaError {
    SchemaError::UnknownProperty {
        kind: P::KIND,
        property: name.to_string(),
    }
}
