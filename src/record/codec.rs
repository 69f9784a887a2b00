//! Record codec
//!
//! Encoding and decoding of schema records for persistence and transport.
//!
//! ## Wire Format
//! ```text
//! ┌──────────┬─────────────┬──────────┬──────────┬─────────────────┐
//! │Magic (4) │ Version (2) │ Len (4)  │ CRC (4)  │ bincode payload │
//! └──────────┴─────────────┴──────────┴──────────┴─────────────────┘
//! ```
//!
//! All header integers are big-endian. CRC is CRC32 of the payload.

use std::io::{Read, Write};

use crate::error::{Result, SchemaError};

use super::TableSchema;

/// Magic bytes identifying a schema record
pub const MAGIC: &[u8; 4] = b"TDSC";

/// Current record format version
pub const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + Len (4) + CRC (4)
pub const HEADER_SIZE: usize = 14;

/// Maximum payload size (16 MB)
pub const MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

// =============================================================================
// Encoding/Decoding
// =============================================================================

/// Encode a schema record to bytes
pub fn encode_record(schema: &TableSchema) -> Result<Vec<u8>> {
    let payload =
        bincode::serialize(schema).map_err(|e| SchemaError::Serialization(e.to_string()))?;

    if payload.len() > MAX_PAYLOAD_SIZE as usize {
        return Err(SchemaError::Serialization(format!(
            "Record too large: {} bytes (max {})",
            payload.len(),
            MAX_PAYLOAD_SIZE
        )));
    }

    let crc = crc32fast::hash(&payload);

    let mut message = Vec::with_capacity(HEADER_SIZE + payload.len());
    message.extend_from_slice(MAGIC);
    message.extend_from_slice(&VERSION.to_be_bytes());
    message.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    message.extend_from_slice(&crc.to_be_bytes());
    message.extend_from_slice(&payload);

    Ok(message)
}

/// Decode a schema record from bytes
///
/// `bytes` must hold exactly one record.
pub fn decode_record(bytes: &[u8]) -> Result<TableSchema> {
    if bytes.len() < HEADER_SIZE {
        return Err(SchemaError::Corruption(format!(
            "Incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let payload_len = parse_header(&bytes[..HEADER_SIZE])?;
    let total_len = HEADER_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(SchemaError::Corruption(format!(
            "Incomplete payload: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }
    if bytes.len() > total_len {
        return Err(SchemaError::Corruption(format!(
            "Trailing data: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }

    let expected_crc = u32::from_be_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]);
    let payload = &bytes[HEADER_SIZE..total_len];
    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(SchemaError::Corruption(format!(
            "CRC mismatch: expected 0x{:08x}, got 0x{:08x}",
            expected_crc, actual_crc
        )));
    }

    bincode::deserialize(payload).map_err(|e| SchemaError::Serialization(e.to_string()))
}

/// Validate magic and version, returning the payload length
fn parse_header(header: &[u8]) -> Result<usize> {
    if &header[0..4] != MAGIC {
        return Err(SchemaError::Corruption(format!(
            "Bad magic: {:02x?}",
            &header[0..4]
        )));
    }

    let version = u16::from_be_bytes([header[4], header[5]]);
    if version != VERSION {
        return Err(SchemaError::Corruption(format!(
            "Unsupported record version: {} (expected {})",
            version, VERSION
        )));
    }

    let payload_len = u32::from_be_bytes([header[6], header[7], header[8], header[9]]);
    if payload_len > MAX_PAYLOAD_SIZE {
        return Err(SchemaError::Corruption(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_PAYLOAD_SIZE
        )));
    }

    Ok(payload_len as usize)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete record from a stream
pub fn read_record<R: Read>(reader: &mut R) -> Result<TableSchema> {
    // Read header first
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    // Validate payload length
    let payload_len = parse_header(&header)?;

    // Read payload
    let mut message = Vec::with_capacity(HEADER_SIZE + payload_len);
    message.extend_from_slice(&header);
    message.resize(HEADER_SIZE + payload_len, 0);
    if payload_len > 0 {
        reader.read_exact(&mut message[HEADER_SIZE..])?;
    }

    // Combine and decode
    decode_record(&message)
}

/// Write a record to a stream
pub fn write_record<W: Write>(writer: &mut W, schema: &TableSchema) -> Result<()> {
    let bytes = encode_record(schema)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
