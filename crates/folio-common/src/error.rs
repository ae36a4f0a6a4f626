//! Folio Error - Unified Error Types
//!
//! Errors raised while bringing a Folio process up: reading the document
//! source, parsing it, and loading configuration. Query-time failures live
//! in `folio_document::QueryError`; nothing here is ever raised after the
//! document has been loaded.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Unified error type for Folio startup operations.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Type Aliases
// =============================================================================

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

// =============================================================================
// Error Classification
// =============================================================================

impl FolioError {
    /// Returns true if the operator can fix this by changing their input
    /// (document contents or configuration) rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, FolioError::Parse { .. } | FolioError::Configuration(_))
    }
}

// =============================================================================
// Tests
// =============================================================================
