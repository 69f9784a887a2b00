//! Scan expression parser
//!
//! `SELECT <columns> [WHERE <filter>]` where `<columns>` is `*` or a
//! comma-separated list of `family` / `family:qualifier` entries. The filter
//! is passed through verbatim.

use crate::descriptor::ScanDescriptor;
use crate::error::{Result, SchemaError};

use super::remove_invisible_chars;

const SELECT: &str = "SELECT ";
const WHERE: &str = " WHERE ";

/// Parse a scan expression into a scan descriptor
pub fn parse_scan_expression(expr: &str) -> Result<ScanDescriptor> {
    let mut desc = ScanDescriptor::new();

    let Some(rest) = expr.strip_prefix(SELECT) else {
        tracing::error!("illegal scan expression: should begin with \"SELECT\"");
        return Err(SchemaError::grammar(expr, "scan expression must begin with `SELECT `"));
    };

    let columns = match rest.find(WHERE) {
        Some(pos) => {
            let filter = &rest[pos + WHERE.len()..];
            if filter.is_empty() {
                return Err(SchemaError::grammar(expr, "empty filter after `WHERE`"));
            }
            desc.set_filter_string(filter);
            &rest[..pos]
        }
        None => rest,
    };

    let columns = remove_invisible_chars(columns);
    if columns == "*" {
        return Ok(desc);
    }

    for item in columns.split(',').filter(|item| !item.is_empty()) {
        match item.split_once(':') {
            None => {
                desc.add_column_family(item);
                tracing::debug!("add cf: {} to scan descriptor", item);
            }
            Some((family, qualifier)) if !family.is_empty() && !qualifier.is_empty() => {
                desc.add_column(family, qualifier);
                tracing::debug!("add column: {}:{} to scan descriptor", family, qualifier);
            }
            Some(_) => {
                return Err(SchemaError::grammar(item, "expected `family` or `family:column`"));
            }
        }
    }
    Ok(desc)
}
