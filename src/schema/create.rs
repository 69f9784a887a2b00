//! Tree schema builder (creation grammar)
//!
//! Builds a new table from a property tree. The tree's depth selects the
//! mode:
//!
//! ```text
//! depth 1  kv mode      table1<splitsize=1024,storage=flash>
//! depth 2  simple mode  table1{cf1, cf2<ttl=100>, cf3}
//! depth 3  full mode    table1<mergesize=100>{
//!                           lg0<storage=memory>{cf1<maxversions=3>, cf2<ttl=100>},
//!                           lg1{cf3}
//!                       }
//! ```
//!
//! Kv mode creates one locality group named `kv`; simple mode puts every
//! column family into one locality group named `lg0`.

use crate::descriptor::TableDescriptor;
use crate::error::{EntityKind, Result, SchemaError};
use crate::proptree::{Node, PropTree};

use super::check::check_table_descriptor;
use super::property::{classify, set_properties, CfProperty, LgProperty, Property, TableProperty};

/// Locality group created implicitly in kv mode
pub const KV_LOCALITY_GROUP: &str = "kv";

/// Locality group created implicitly in simple mode
pub const DEFAULT_LOCALITY_GROUP: &str = "lg0";

/// Parse a nested creation schema and fill `desc`
///
/// `desc` is only replaced when the whole schema is valid.
pub fn parse_create_schema(schema: &str, desc: &mut TableDescriptor) -> Result<()> {
    let tree = PropTree::parse(schema).map_err(|e| {
        tracing::error!("{}: {}", e, schema);
        e
    })?;
    tracing::debug!("table to create: {}", tree);
    fill_table_descriptor(&tree, desc)
}

/// Build the descriptor from an already-parsed property tree
pub fn fill_table_descriptor(tree: &PropTree, desc: &mut TableDescriptor) -> Result<()> {
    let depth = tree.max_depth();
    if depth != tree.min_depth() || depth == 0 || depth > 3 {
        tracing::error!("schema error: {}", tree);
        return Err(SchemaError::grammar(
            tree.to_string(),
            format!(
                "nesting depth must be uniform and between 1 and 3 (max {}, min {})",
                tree.max_depth(),
                tree.min_depth()
            ),
        ));
    }

    let mut staged = desc.clone();
    let table_node = tree.root();
    staged.set_name(&table_node.name)?;

    match depth {
        1 => fill_kv_mode(table_node, &mut staged)?,
        2 => fill_simple_mode(table_node, &mut staged)?,
        3 => fill_full_mode(table_node, &mut staged)?,
        _ => {
            return Err(SchemaError::Internal(format!(
                "unexpected schema depth {} after validation",
                depth
            )))
        }
    }
    check_table_descriptor(&staged)?;

    *desc = staged;
    Ok(())
}

// =============================================================================
// Modes
// =============================================================================

/// Depth 1: table and locality group properties share the root node
fn fill_kv_mode(table_node: &Node, desc: &mut TableDescriptor) -> Result<()> {
    desc.set_kv_only();

    let mut table_props = Vec::new();
    let mut lg_props = Vec::new();
    for (name, value) in &table_node.properties {
        match classify(name) {
            Some(EntityKind::Table) => table_props.push(TableProperty::parse(name, value)?),
            Some(EntityKind::LocalityGroup) => lg_props.push(LgProperty::parse(name, value)?),
            _ => {
                tracing::error!("illegal value: {} for table property: {}", value, name);
                return Err(SchemaError::UnknownProperty {
                    kind: EntityKind::Table,
                    property: name.clone(),
                });
            }
        }
    }

    let lg = desc.add_locality_group(KV_LOCALITY_GROUP)?;
    for prop in &lg_props {
        prop.apply(lg);
    }
    for prop in &table_props {
        prop.apply(desc);
    }
    Ok(())
}

/// Depth 2: every child is a column family of the implicit `lg0`
fn fill_simple_mode(table_node: &Node, desc: &mut TableDescriptor) -> Result<()> {
    desc.add_locality_group(DEFAULT_LOCALITY_GROUP)?;
    for cf_node in &table_node.children {
        add_column_family(cf_node, DEFAULT_LOCALITY_GROUP, desc)?;
    }
    set_node_properties::<TableProperty>(table_node, desc)
}

/// Depth 3: children are locality groups, grandchildren column families
fn fill_full_mode(table_node: &Node, desc: &mut TableDescriptor) -> Result<()> {
    for lg_node in &table_node.children {
        desc.add_locality_group(&lg_node.name)?;
        for cf_node in &lg_node.children {
            add_column_family(cf_node, &lg_node.name, desc)?;
        }
        let lg = desc.locality_group_mut(&lg_node.name).ok_or_else(|| {
            SchemaError::Internal(format!("locality group `{}` vanished", lg_node.name))
        })?;
        set_node_properties::<LgProperty>(lg_node, lg)?;
    }
    set_node_properties::<TableProperty>(table_node, desc)
}

// =============================================================================
// Helpers
// =============================================================================

fn add_column_family(cf_node: &Node, lg_name: &str, desc: &mut TableDescriptor) -> Result<()> {
    let cf = desc.add_column_family(&cf_node.name, lg_name).map_err(|e| {
        tracing::error!("fail to add column family: {}", cf_node.name);
        e
    })?;
    set_node_properties::<CfProperty>(cf_node, cf)
}

fn set_node_properties<P: Property>(node: &Node, target: &mut P::Target) -> Result<()> {
    let props = node
        .properties
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()));
    set_properties::<P, _>(props, target).map_err(|e| {
        tracing::error!("illegal {} property on `{}`: {}", P::KIND, node.name, e);
        e
    })
}
