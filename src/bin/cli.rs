//! tabledesc CLI
//!
//! Command-line front end for compiling, altering and inspecting table
//! schemas.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tabledesc::record::{read_record, table_desc_to_schema, write_record};
use tabledesc::schema::{
    build_schema, parse_alter_schema, parse_create_schema, parse_scan_expression,
    show_table_descriptor, show_table_meta,
};
use tabledesc::{Config, Result, TableDescriptor};
use tracing_subscriber::{fmt, EnvFilter};

/// tabledesc CLI
#[derive(Parser, Debug)]
#[command(name = "tabledesc-cli")]
#[command(about = "Compile and inspect table layout schemas")]
#[command(version)]
struct Args {
    /// Show every property, including defaults
    #[arg(short = 'x', long)]
    extended: bool,

    /// Default block size in KB (hidden in display when equal)
    #[arg(long, default_value = "4")]
    block_size: i32,

    /// Default SST size in MB (hidden in display when equal)
    #[arg(long, default_value = "8")]
    sst_size_mb: i64,

    /// Default merge size in MB (hidden in display when equal)
    #[arg(long, default_value = "0")]
    merge_size: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a creation schema and print it
    Create {
        /// e.g. "t1<splitsize=1024>{lg0<storage=flash>{cf1,cf2<ttl=100>}}"
        schema: String,
    },

    /// Compile a creation schema, apply an alteration and print the result
    Alter {
        /// Creation schema of the existing table
        schema: String,

        /// e.g. "table:splitsize=2048,lg0:blocksize=8,cf1:maxversions=3"
        alteration: String,
    },

    /// Parse a scan expression
    Scan {
        /// e.g. "SELECT cf1,cf2:col WHERE age>10"
        expr: String,
    },

    /// Compile a creation schema and write its record to a file
    Encode {
        schema: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Read a record file and print it
    Show {
        /// Record file
        path: PathBuf,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tabledesc=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder()
        .block_size(args.block_size)
        .sst_size(args.sst_size_mb << 20)
        .merge_size(args.merge_size)
        .build();

    if let Err(e) = run(&args, &config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, config: &Config) -> Result<()> {
    match &args.command {
        Commands::Create { schema } => {
            let mut desc = TableDescriptor::default();
            parse_create_schema(schema, &mut desc)?;
            print!("{}", show_table_descriptor(&desc, args.extended, config));
            println!("{}", build_schema(&desc));
        }
        Commands::Alter { schema, alteration } => {
            let mut desc = TableDescriptor::default();
            parse_create_schema(schema, &mut desc)?;
            let report = parse_alter_schema(alteration, &mut desc)?;
            print!("{}", show_table_descriptor(&desc, args.extended, config));
            println!("lg/cf updated: {}", report.lg_cf_updated);
        }
        Commands::Scan { expr } => {
            let scan = parse_scan_expression(expr)?;
            if scan.selects_all() {
                println!("columns: *");
            }
            for selection in scan.selections() {
                println!("column: {:?}", selection);
            }
            if let Some(filter) = scan.filter_string() {
                println!("filter: {}", filter);
            }
        }
        Commands::Encode { schema, output } => {
            let mut desc = TableDescriptor::default();
            parse_create_schema(schema, &mut desc)?;
            let mut writer = BufWriter::new(File::create(output)?);
            write_record(&mut writer, &table_desc_to_schema(&desc))?;
            tracing::info!("wrote record for table {} to {}", desc.name(), output.display());
        }
        Commands::Show { path } => {
            let mut reader = BufReader::new(File::open(path)?);
            let schema = read_record(&mut reader)?;
            print!("{}", show_table_meta(&schema, config));
        }
    }
    Ok(())
}
