//! Column family descriptor

/// Versioning and retention parameters of one column family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFamilyDescriptor {
    name: String,

    /// Name of the owning locality group
    locality_group: String,

    pub max_versions: i32,

    pub min_versions: i32,

    /// Time to live (seconds), 0 = unbounded
    pub time_to_live: i32,

    /// Disk quota (bytes), 0 = unlimited
    pub disk_quota: i64,

    /// Free-form value type tag
    pub value_type: String,
}

impl ColumnFamilyDescriptor {
    pub fn new(name: impl Into<String>, locality_group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locality_group: locality_group.into(),
            max_versions: 1,
            min_versions: 1,
            time_to_live: 0,
            disk_quota: 0,
            value_type: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locality_group(&self) -> &str {
        &self.locality_group
    }
}
