//! Consistency checker
//!
//! Cross-field invariants that single-property validation cannot see.

use crate::descriptor::TableDescriptor;
use crate::error::{Result, SchemaError};

/// Split threshold must be at least this many times the merge threshold
pub const SPLIT_MERGE_RATIO: i64 = 5;

/// Check a fully-built descriptor
///
/// - `split_size >= 5 * merge_size` whenever merge is enabled
/// - every column family references an existing locality group
pub fn check_table_descriptor(desc: &TableDescriptor) -> Result<()> {
    let split = desc.split_size();
    let merge = desc.merge_size();
    // 5 * merge beyond i64 can never be reached by split
    let too_small = match merge.checked_mul(SPLIT_MERGE_RATIO) {
        Some(min_split) => split < min_split,
        None => true,
    };
    if merge > 0 && too_small {
        tracing::error!(
            "splitsize should be {} times larger than mergesize, splitsize: {}, mergesize: {}",
            SPLIT_MERGE_RATIO,
            split,
            merge
        );
        return Err(SchemaError::Consistency(format!(
            "splitsize ({}) must be at least {} times mergesize ({})",
            split, SPLIT_MERGE_RATIO, merge
        )));
    }

    for cf in desc.column_families() {
        if desc.locality_group(cf.locality_group()).is_none() {
            return Err(SchemaError::Consistency(format!(
                "column family `{}` references missing locality group `{}`",
                cf.name(),
                cf.locality_group()
            )));
        }
    }

    Ok(())
}
