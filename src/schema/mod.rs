//! Schema Module
//!
//! Compiles the schema languages into descriptors and back into text.
//!
//! ## Pipeline
//! ```text
//!  creation schema ──► PropTree ──┐
//!                                 ├──► validation rules ──► staged descriptor ──► consistency check ──► descriptor
//!  alteration schema ──► tokens ──┘
//!
//!  descriptor ──► display / canonical short form
//!  scan expression ──► scan descriptor
//! ```

mod property;
mod check;
mod alter;
mod create;
mod scan;
mod display;

pub use property::{
    classify, set_properties, validate_properties, CfProperty, LgProperty, Property,
    TableProperty, CF_PROPERTIES, LG_PROPERTIES, TABLE_PROPERTIES,
};
pub use check::{check_table_descriptor, SPLIT_MERGE_RATIO};
pub use alter::{parse_alter_schema, split_prefix_property_value, AlterReport, TABLE_PREFIX};
pub use create::{
    fill_table_descriptor, parse_create_schema, DEFAULT_LOCALITY_GROUP, KV_LOCALITY_GROUP,
};
pub use scan::parse_scan_expression;
pub use display::{
    build_schema, show_table_descriptor, show_table_meta, show_table_schema, SchemaDisplay,
};

/// Drop whitespace and control characters
pub(crate) fn remove_invisible_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect()
}
