//! Table descriptor
//!
//! Root of the descriptor tree. Owns the locality groups and column families.

use crate::config::{DEFAULT_MERGE_SIZE, DEFAULT_SPLIT_SIZE};
use crate::error::{EntityKind, Result, SchemaError};

use super::{ColumnFamilyDescriptor, LocalityGroupDescriptor};

/// Row key encoding, fixed when the table is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawKey {
    #[default]
    Readable,
    Binary,
    /// Key-value table whose rows expire by timestamp
    TtlKv,
}

impl RawKey {
    /// Schema-language spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            RawKey::Readable => "readable",
            RawKey::Binary => "binary",
            RawKey::TtlKv => "ttlkv",
        }
    }

    /// Parse the schema-language spelling
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "readable" => Some(RawKey::Readable),
            "binary" => Some(RawKey::Binary),
            "ttlkv" => Some(RawKey::TtlKv),
            _ => None,
        }
    }
}

/// Description of how a table is organized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    /// Table name, immutable once non-empty
    name: String,

    raw_key: RawKey,

    /// Tablet split threshold (MB), 0 = split disabled
    split_size: i64,

    /// Tablet merge threshold (MB), 0 = merge disabled
    merge_size: i64,

    kv_only: bool,

    locality_groups: Vec<LocalityGroupDescriptor>,

    column_families: Vec<ColumnFamilyDescriptor>,
}

impl Default for TableDescriptor {
    fn default() -> Self {
        Self::new("")
    }
}

impl TableDescriptor {
    /// Create an empty descriptor with default table properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_key: RawKey::default(),
            split_size: DEFAULT_SPLIT_SIZE,
            merge_size: DEFAULT_MERGE_SIZE,
            kv_only: false,
            locality_groups: Vec::new(),
            column_families: Vec::new(),
        }
    }

    // =========================================================================
    // Table Properties
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the table name
    ///
    /// Fails if the descriptor already carries a different name.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        if !self.name.is_empty() && self.name != name {
            return Err(SchemaError::TableNameMismatch {
                expected: self.name.clone(),
                found: name.to_string(),
            });
        }
        self.name = name.to_string();
        Ok(())
    }

    pub fn raw_key(&self) -> RawKey {
        self.raw_key
    }

    pub fn set_raw_key(&mut self, raw_key: RawKey) {
        self.raw_key = raw_key;
    }

    pub fn split_size(&self) -> i64 {
        self.split_size
    }

    pub fn set_split_size(&mut self, size: i64) {
        self.split_size = size;
    }

    pub fn merge_size(&self) -> i64 {
        self.merge_size
    }

    pub fn set_merge_size(&mut self, size: i64) {
        self.merge_size = size;
    }

    pub fn is_kv(&self) -> bool {
        self.kv_only
    }

    pub fn set_kv_only(&mut self) {
        self.kv_only = true;
    }

    // =========================================================================
    // Locality Groups
    // =========================================================================

    pub fn locality_groups(&self) -> &[LocalityGroupDescriptor] {
        &self.locality_groups
    }

    pub fn locality_group_count(&self) -> usize {
        self.locality_groups.len()
    }

    pub fn locality_group(&self, name: &str) -> Option<&LocalityGroupDescriptor> {
        self.locality_groups.iter().find(|lg| lg.name() == name)
    }

    pub fn locality_group_mut(&mut self, name: &str) -> Option<&mut LocalityGroupDescriptor> {
        self.locality_groups.iter_mut().find(|lg| lg.name() == name)
    }

    /// Add a locality group with default properties
    ///
    /// The new group's id is its position in the table.
    pub fn add_locality_group(&mut self, name: &str) -> Result<&mut LocalityGroupDescriptor> {
        if self.locality_group(name).is_some() {
            return Err(SchemaError::DuplicateEntity {
                kind: EntityKind::LocalityGroup,
                name: name.to_string(),
            });
        }
        let id = self.locality_groups.len() as u32;
        self.locality_groups.push(LocalityGroupDescriptor::new(name, id));
        let index = self.locality_groups.len() - 1;
        Ok(&mut self.locality_groups[index])
    }

    // =========================================================================
    // Column Families
    // =========================================================================

    pub fn column_families(&self) -> &[ColumnFamilyDescriptor] {
        &self.column_families
    }

    pub fn column_family_count(&self) -> usize {
        self.column_families.len()
    }

    pub fn column_family(&self, name: &str) -> Option<&ColumnFamilyDescriptor> {
        self.column_families.iter().find(|cf| cf.name() == name)
    }

    pub fn column_family_mut(&mut self, name: &str) -> Option<&mut ColumnFamilyDescriptor> {
        self.column_families.iter_mut().find(|cf| cf.name() == name)
    }

    /// Column families belonging to `lg_name`, in table order
    pub fn column_families_in<'a>(
        &'a self,
        lg_name: &'a str,
    ) -> impl Iterator<Item = &'a ColumnFamilyDescriptor> + 'a {
        self.column_families
            .iter()
            .filter(move |cf| cf.locality_group() == lg_name)
    }

    /// Add a column family to an existing locality group
    pub fn add_column_family(
        &mut self,
        name: &str,
        lg_name: &str,
    ) -> Result<&mut ColumnFamilyDescriptor> {
        if self.locality_group(lg_name).is_none() {
            return Err(SchemaError::UnknownEntity {
                kind: EntityKind::LocalityGroup,
                name: lg_name.to_string(),
            });
        }
        if self.column_family(name).is_some() {
            return Err(SchemaError::DuplicateEntity {
                kind: EntityKind::ColumnFamily,
                name: name.to_string(),
            });
        }
        self.column_families
            .push(ColumnFamilyDescriptor::new(name, lg_name));
        let index = self.column_families.len() - 1;
        Ok(&mut self.column_families[index])
    }
}
