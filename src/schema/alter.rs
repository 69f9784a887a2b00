//! Flat schema parser (alteration grammar)
//!
//! Alters an existing table from a comma-separated list of
//! `prefix:property=value` tokens, e.g.
//!
//! ```text
//! table:splitsize=100,lg0:storage=disk,lg1:blocksize=5,cf6:ttl=0
//! ```
//!
//! `prefix` is the literal `table`, the name of an existing locality group,
//! or the name of an existing column family.
//!
//! ## Atomicity
//! Every token is validated into a typed update before anything is written.
//! The updates are then applied to a staged copy, the staged copy is checked
//! for consistency, and only then does it replace the caller's descriptor.
//! A rejected alteration leaves the descriptor exactly as it was.

use crate::descriptor::TableDescriptor;
use crate::error::{EntityKind, Result, SchemaError};

use super::check::check_table_descriptor;
use super::property::{classify, CfProperty, LgProperty, Property, TableProperty};
use super::remove_invisible_chars;

/// Prefix addressing table-level properties
pub const TABLE_PREFIX: &str = "table";

/// Outcome of a successful alteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlterReport {
    /// True when any locality group or column family property changed,
    /// i.e. the alteration affects tablets and not only table metadata
    pub lg_cf_updated: bool,
}

/// A validated update waiting to be applied
#[derive(Debug, Clone, PartialEq, Eq)]
enum Update {
    Table(TableProperty),
    LocalityGroup { name: String, prop: LgProperty },
    ColumnFamily { name: String, prop: CfProperty },
}

/// Parse `schema` and apply it to `desc`, all or nothing
pub fn parse_alter_schema(schema: &str, desc: &mut TableDescriptor) -> Result<AlterReport> {
    let cleaned = remove_invisible_chars(schema);
    if let Some(ch) = cleaned.chars().find(|c| !is_schema_char(*c)) {
        tracing::error!("illegal char(s) in schema: {}", schema);
        return Err(SchemaError::grammar(
            schema,
            format!("illegal character `{}`", ch.escape_default()),
        ));
    }

    let tokens: Vec<&str> = cleaned.split(',').filter(|t| !t.is_empty()).collect();
    if tokens.is_empty() {
        tracing::error!("illegal schema: {:?}", schema);
        return Err(SchemaError::grammar(schema, "no property to alter"));
    }

    // Phase 1: validate every token against the current descriptor
    let mut updates = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let update = plan_update(token, desc).map_err(|e| {
            tracing::error!("illegal schema: {}: {}", token, e);
            e
        })?;
        updates.push(update);
    }

    // Phase 2: apply to a staged copy and check it
    let mut staged = desc.clone();
    let mut report = AlterReport::default();
    for update in &updates {
        apply_update(update, &mut staged)?;
        if !matches!(update, Update::Table(_)) {
            report.lg_cf_updated = true;
        }
    }
    check_table_descriptor(&staged)?;

    *desc = staged;
    tracing::debug!(
        "altered table {}: {} update(s), lg/cf updated: {}",
        desc.name(),
        updates.len(),
        report.lg_cf_updated
    );
    Ok(report)
}

/// Split `prefix:property=value` on the first `:` and the first `=`
///
/// The prefix, property and value must all be non-empty.
pub fn split_prefix_property_value(token: &str) -> Result<(&str, &str, &str)> {
    let malformed = || SchemaError::grammar(token, "expected `prefix:property=value`");
    let colon = token.find(':').ok_or_else(malformed)?;
    let equals = token.find('=').ok_or_else(malformed)?;
    if colon == 0 || colon + 1 >= equals || equals == token.len() - 1 {
        return Err(malformed());
    }
    Ok((&token[..colon], &token[colon + 1..equals], &token[equals + 1..]))
}

fn plan_update(token: &str, desc: &TableDescriptor) -> Result<Update> {
    let (prefix, property, value) = split_prefix_property_value(token)?;

    if prefix == TABLE_PREFIX {
        if property == "rawkey" {
            return Err(SchemaError::ImmutableProperty(property.to_string()));
        }
        return TableProperty::parse(property, value).map(Update::Table);
    }

    match classify(property) {
        Some(EntityKind::LocalityGroup) => {
            if desc.locality_group(prefix).is_none() {
                return Err(SchemaError::UnknownEntity {
                    kind: EntityKind::LocalityGroup,
                    name: prefix.to_string(),
                });
            }
            let prop = LgProperty::parse(property, value)?;
            Ok(Update::LocalityGroup {
                name: prefix.to_string(),
                prop,
            })
        }
        Some(EntityKind::ColumnFamily) => {
            if desc.column_family(prefix).is_none() {
                return Err(SchemaError::UnknownEntity {
                    kind: EntityKind::ColumnFamily,
                    name: prefix.to_string(),
                });
            }
            let prop = CfProperty::parse(property, value)?;
            Ok(Update::ColumnFamily {
                name: prefix.to_string(),
                prop,
            })
        }
        Some(EntityKind::Table) => Err(SchemaError::grammar(
            token,
            format!("table property `{}` requires the `{}` prefix", property, TABLE_PREFIX),
        )),
        None => {
            let kind = if desc.locality_group(prefix).is_some() {
                EntityKind::LocalityGroup
            } else if desc.column_family(prefix).is_some() {
                EntityKind::ColumnFamily
            } else {
                return Err(SchemaError::grammar(
                    token,
                    format!("unknown prefix `{}` and property `{}`", prefix, property),
                ));
            };
            Err(SchemaError::UnknownProperty {
                kind,
                property: property.to_string(),
            })
        }
    }
}

fn apply_update(update: &Update, desc: &mut TableDescriptor) -> Result<()> {
    match update {
        Update::Table(prop) => prop.apply(desc),
        Update::LocalityGroup { name, prop } => {
            let lg = desc.locality_group_mut(name).ok_or_else(|| {
                SchemaError::Internal(format!("locality group `{}` vanished during alter", name))
            })?;
            prop.apply(lg);
        }
        Update::ColumnFamily { name, prop } => {
            let cf = desc.column_family_mut(name).ok_or_else(|| {
                SchemaError::Internal(format!("column family `{}` vanished during alter", name))
            })?;
            prop.apply(cf);
        }
    }
    Ok(())
}

fn is_schema_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | ':' | '=' | ',')
}
