//! Record Module
//!
//! Wire form of a table descriptor.
//!
//! ## Responsibilities
//! - Define the flat schema record (`TableSchema`)
//! - Transcode descriptor ⇄ record
//! - Encode/decode records with a checksummed envelope
//!
//! ## Transcoding Asymmetry
//! | Field                 | descriptor → record | record → descriptor |
//! |-----------------------|---------------------|---------------------|
//! | cf disk quota         | dropped             | applied             |
//! | lg memtable sizes     | only if block > 0   | always              |
//! | unknown raw-key code  | n/a                 | `Readable`          |
//! | unknown storage code  | n/a                 | `Disk`              |

mod schema;
mod convert;
mod codec;

pub use schema::{
    ColumnFamilySchema, LocalityGroupSchema, TableSchema, RAW_KEY_BINARY, RAW_KEY_READABLE,
    RAW_KEY_TTL_KV, STORE_DISK, STORE_FLASH, STORE_MEMORY,
};
pub use convert::{
    raw_key_code, raw_key_from_code, store_code, store_from_code, table_desc_to_schema,
    table_schema_to_desc,
};
pub use codec::{
    decode_record, encode_record, read_record, write_record, HEADER_SIZE, MAGIC,
    MAX_PAYLOAD_SIZE, VERSION,
};
