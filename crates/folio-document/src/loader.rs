//! Folio Document Loader
//!
//! Reads the document source once at startup. Any failure is surfaced to
//! the caller; a partially parsed document is never returned.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::types::Value;
use folio_common::{FolioError, Result};
use serde_json::Value as JsonValue;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read and parse the document at `path`.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let origin = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|source| FolioError::Read {
        path: origin.clone(),
        source,
    })?;

    tracing::debug!("Read {} bytes from {}", bytes.len(), origin);
    parse_source(&bytes, &origin)
}

/// Parse a document from raw bytes.
pub fn parse_document(bytes: &[u8]) -> Result<Value> {
    parse_source(bytes, "<memory>")
}

fn parse_source(bytes: &[u8], origin: &str) -> Result<Value> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let json: JsonValue = serde_json::from_slice(bytes).map_err(|e| FolioError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })?;
    Ok(Value::from_json(json))
}

// =============================================================================
// Tests
// =============================================================================
