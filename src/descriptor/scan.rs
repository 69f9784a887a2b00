//! Scan descriptor
//!
//! Column projection and filter produced by the scan expression parser.

/// One projected column or column family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection {
    /// Every column of the family
    Family(String),

    /// A single qualified column
    Column { family: String, qualifier: String },
}

/// Columns and filter of a scan
///
/// An empty selection list means all columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanDescriptor {
    selections: Vec<ColumnSelection>,
    filter: Option<String>,
}

impl ScanDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column_family(&mut self, family: impl Into<String>) {
        self.selections.push(ColumnSelection::Family(family.into()));
    }

    pub fn add_column(&mut self, family: impl Into<String>, qualifier: impl Into<String>) {
        self.selections.push(ColumnSelection::Column {
            family: family.into(),
            qualifier: qualifier.into(),
        });
    }

    pub fn set_filter_string(&mut self, filter: impl Into<String>) {
        self.filter = Some(filter.into());
    }

    pub fn selections(&self) -> &[ColumnSelection] {
        &self.selections
    }

    pub fn filter_string(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// True when no column was projected (all columns are scanned)
    pub fn selects_all(&self) -> bool {
        self.selections.is_empty()
    }
}
