//! Display & serializer
//!
//! Two renderings of a finished table:
//!
//! - **Verbose display**: human-readable layout of a schema record, with
//!   default-valued properties hidden unless `extended` is set:
//!   ```text
//!   table1 <splitsize=512> {
//!       lg0 <storage=disk> {
//!           cf1,
//!           cf2 <maxversions=3,ttl=100>,
//!       },
//!   }
//!   ```
//! - **Canonical short form** (`build_schema`): `lg0:cf1,cf2|lg1:cf3`, names
//!   only, for compact identification.
//!
//! Neither output is meant to be fed back into the schema parsers.

use std::fmt;

use crate::config::Config;
use crate::descriptor::TableDescriptor;
use crate::record::{
    raw_key_from_code, store_from_code, table_desc_to_schema, ColumnFamilySchema,
    LocalityGroupSchema, TableSchema,
};

const TABLE_INDENT: &str = "  ";
const LG_INDENT: &str = "      ";
const CF_INDENT: &str = "          ";

/// Verbose rendering of a schema record
pub struct SchemaDisplay<'a> {
    schema: &'a TableSchema,
    extended: bool,
    config: &'a Config,
}

impl<'a> SchemaDisplay<'a> {
    /// `extended` shows every property, default-valued or not
    pub fn new(schema: &'a TableSchema, extended: bool, config: &'a Config) -> Self {
        Self {
            schema,
            extended,
            config,
        }
    }

    fn table_props(&self) -> Vec<String> {
        let schema = self.schema;
        let raw_key = raw_key_from_code(schema.raw_key);
        let mut props = Vec::new();
        if self.extended || raw_key != Default::default() {
            props.push(format!("rawkey={}", raw_key.as_str()));
        }
        props.push(format!("splitsize={}", schema.split_size));
        if self.extended || schema.merge_size != self.config.merge_size {
            props.push(format!("mergesize={}", schema.merge_size));
        }
        props
    }

    /// Locality group properties folded into the kv-mode header
    fn kv_props(&self, lg: &LocalityGroupSchema) -> Vec<String> {
        let store = store_from_code(lg.store_type);
        let mut props = Vec::new();
        if self.extended || store != Default::default() {
            props.push(format!("storage={}", store.as_str()));
        }
        if self.extended || lg.block_size != self.config.block_size {
            props.push(format!("blocksize={}", lg.block_size));
        }
        props
    }

    fn lg_props(&self, lg: &LocalityGroupSchema) -> Vec<String> {
        let mut props = vec![format!("storage={}", store_from_code(lg.store_type).as_str())];
        if self.extended || lg.block_size != self.config.block_size {
            props.push(format!("blocksize={}", lg.block_size));
        }
        if self.extended || lg.sst_size != self.config.sst_size {
            props.push(format!("sst_size={}", lg.sst_size >> 20));
        }
        if lg.use_memtable_on_leveldb {
            props.push("use_memtable_on_leveldb=true".to_string());
            props.push(format!(
                "memtable_ldb_write_buffer_size={}",
                lg.memtable_ldb_write_buffer_size
            ));
            props.push(format!("memtable_ldb_block_size={}", lg.memtable_ldb_block_size));
        }
        props
    }

    fn cf_props(&self, cf: &ColumnFamilySchema) -> Vec<String> {
        let mut props = Vec::new();
        if self.extended || cf.max_versions != 1 {
            props.push(format!("maxversions={}", cf.max_versions));
        }
        if self.extended || cf.min_versions != 1 {
            props.push(format!("minversions={}", cf.min_versions));
        }
        if self.extended || cf.time_to_live != 0 {
            props.push(format!("ttl={}", cf.time_to_live));
        }
        if self.extended || !cf.value_type.is_empty() {
            props.push(format!("type={}", cf.value_type));
        }
        props
    }
}

/// ` <a,b,c>`, or nothing for an empty list
fn write_props(f: &mut fmt::Formatter<'_>, props: &[String]) -> fmt::Result {
    if props.is_empty() {
        return Ok(());
    }
    write!(f, " <{}>", props.join(","))
}

impl fmt::Display for SchemaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schema = self.schema;

        if schema.kv_only {
            let mut props = self.table_props();
            if let Some(lg) = schema.locality_groups.first() {
                props.extend(self.kv_props(lg));
            }
            write!(f, "{}{}", TABLE_INDENT, schema.name)?;
            write_props(f, &props)?;
            writeln!(f)?;
            return writeln!(f, "{}(kv mode)", TABLE_INDENT);
        }

        write!(f, "{}{}", TABLE_INDENT, schema.name)?;
        write_props(f, &self.table_props())?;
        writeln!(f, " {{")?;

        for lg in &schema.locality_groups {
            write!(f, "{}{}", LG_INDENT, lg.name)?;
            write_props(f, &self.lg_props(lg))?;
            writeln!(f, " {{")?;
            for cf in schema
                .column_families
                .iter()
                .filter(|cf| cf.locality_group == lg.name)
            {
                write!(f, "{}{}", CF_INDENT, cf.name)?;
                write_props(f, &self.cf_props(cf))?;
                writeln!(f, ",")?;
            }
            writeln!(f, "{}}},", LG_INDENT)?;
        }
        writeln!(f, "{}}}", TABLE_INDENT)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Verbose rendering of a schema record
pub fn show_table_schema(schema: &TableSchema, extended: bool, config: &Config) -> String {
    SchemaDisplay::new(schema, extended, config).to_string()
}

/// Verbose rendering of a descriptor
pub fn show_table_descriptor(desc: &TableDescriptor, extended: bool, config: &Config) -> String {
    show_table_schema(&table_desc_to_schema(desc), extended, config)
}

/// Verbose rendering followed by the record's snapshot list
pub fn show_table_meta(schema: &TableSchema, config: &Config) -> String {
    let mut out = show_table_schema(schema, false, config);
    out.push_str("Snapshot:\n");
    for snapshot in &schema.snapshot_list {
        out.push_str(&format!(" {}\n", snapshot));
    }
    out
}

/// Canonical short form: `lg0:cf1,cf2|lg1:cf3`
///
/// Unnamed column families are skipped.
pub fn build_schema(desc: &TableDescriptor) -> String {
    desc.locality_groups()
        .iter()
        .map(|lg| {
            let families: Vec<&str> = desc
                .column_families_in(lg.name())
                .map(|cf| cf.name())
                .filter(|name| !name.is_empty())
                .collect();
            format!("{}:{}", lg.name(), families.join(","))
        })
        .collect::<Vec<_>>()
        .join("|")
}
