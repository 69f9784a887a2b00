//! # tabledesc
//!
//! A schema description compiler for tables organized into locality groups
//! and column families:
//! - Creation grammar with three nesting depths (kv / simple / full)
//! - Flat alteration grammar applied all-or-nothing to an existing table
//! - Per-entity property validation and cross-field consistency checks
//! - Checksummed wire record for persistence and transport
//! - Human-readable display and canonical short form
//! - `SELECT ... WHERE ...` scan projections
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │   creation schema    │      │  alteration schema   │
//! │ t<..>{lg<..>{cf..}}  │      │ lg0:storage=flash,.. │
//! └──────────┬───────────┘      └──────────┬───────────┘
//!            ▼                             │
//!     ┌─────────────┐                      │
//!     │  PropTree   │                      │
//!     └──────┬──────┘                      │
//!            ▼                             ▼
//!     ┌────────────────────────────────────────────┐
//!     │      Validation Rules + Consistency        │
//!     └──────────────────────┬─────────────────────┘
//!                            ▼
//!                   ┌─────────────────┐
//!                   │ TableDescriptor │
//!                   └───┬─────────┬───┘
//!                       │         │
//!                       ▼         ▼
//!             ┌─────────────┐ ┌─────────────────────┐
//!             │ TableSchema │ │ display / short form │
//!             │  (record)   │ └─────────────────────┘
//!             └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod proptree;
pub mod descriptor;
pub mod schema;
pub mod record;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EntityKind, Result, SchemaError};
pub use config::Config;
pub use descriptor::{ScanDescriptor, TableDescriptor};
pub use record::TableSchema;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tabledesc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
