//! Descriptor Module
//!
//! In-memory model of a table's storage layout.
//!
//! ## Ownership
//! ```text
//! TableDescriptor
//!   ├── LocalityGroupDescriptor  (ordered, unique names)
//!   └── ColumnFamilyDescriptor   (ordered, unique names,
//!                                 each references one locality group by name)
//! ```
//!
//! Descriptors are only mutated through the schema parsers (`schema::alter`,
//! `schema::create`) and the record transcoder. The parsers validate every
//! value before it reaches a descriptor.

mod table;
mod locality_group;
mod column_family;
mod scan;

pub use table::{RawKey, TableDescriptor};
pub use locality_group::{Compression, LocalityGroupDescriptor, StoreMedium};
pub use column_family::ColumnFamilyDescriptor;
pub use scan::{ColumnSelection, ScanDescriptor};
