//! Error types for tabledesc
//!
//! Provides a unified error type for schema parsing, validation and
//! record transcoding.

use std::fmt;

use thiserror::Error;

/// Result type alias using SchemaError
pub type Result<T> = std::result::Result<T, SchemaError>;

/// The entity that owns a property or is referenced by a schema prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Table,
    LocalityGroup,
    ColumnFamily,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Table => "table",
            EntityKind::LocalityGroup => "locality group",
            EntityKind::ColumnFamily => "column family",
        };
        f.write_str(name)
    }
}

/// Unified error type for tabledesc operations
#[derive(Debug, Error)]
pub enum SchemaError {
    // -------------------------------------------------------------------------
    // Grammar Errors
    // -------------------------------------------------------------------------
    #[error("Illegal schema `{fragment}`: {reason}")]
    Grammar { fragment: String, reason: String },

    #[error("Table name mismatch: descriptor is `{expected}`, schema declares `{found}`")]
    TableNameMismatch { expected: String, found: String },

    // -------------------------------------------------------------------------
    // Entity Errors
    // -------------------------------------------------------------------------
    #[error("Unknown {kind}: `{name}`")]
    UnknownEntity { kind: EntityKind, name: String },

    #[error("Duplicate {kind}: `{name}`")]
    DuplicateEntity { kind: EntityKind, name: String },

    // -------------------------------------------------------------------------
    // Property Errors
    // -------------------------------------------------------------------------
    #[error("Illegal {kind} property: `{property}`")]
    UnknownProperty { kind: EntityKind, property: String },

    #[error("Illegal value `{value}` for property `{property}`")]
    InvalidValue { property: String, value: String },

    #[error("Property `{0}` cannot be changed after table creation")]
    ImmutableProperty(String),

    // -------------------------------------------------------------------------
    // Consistency Errors
    // -------------------------------------------------------------------------
    #[error("Inconsistent table descriptor: {0}")]
    Consistency(String),

    #[error("Internal error: {0}")]
    Internal(String),

    // -------------------------------------------------------------------------
    // Record Codec Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Record corruption detected: {0}")]
    Corruption(String),
}

impl SchemaError {
    /// Shorthand for a grammar error on `fragment`
    pub fn grammar(fragment: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Grammar {
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a value-validation error
    pub fn invalid_value(property: impl Into<String>, value: impl Into<String>) -> Self {
        SchemaError::InvalidValue {
            property: property.into(),
            value: value.into(),
        }
    }
}
