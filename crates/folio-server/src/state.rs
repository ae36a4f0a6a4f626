//! Folio Server State
//!
//! Application state shared across request handlers: the configuration and
//! the immutable document engine. Cloning is cheap; both live behind `Arc`.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::config::ServerConfig;
use folio_document::DocumentEngine;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub engine: Arc<DocumentEngine>,
}

impl AppState {
    /// Create state around an engine that has already been built.
    pub fn new(config: ServerConfig, engine: DocumentEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }

    /// Load the document named by `config.data_path` and build the state.
    ///
    /// Fails if the document cannot be read or parsed; the server must not
    /// start without it.
    pub fn from_config(config: ServerConfig) -> folio_common::Result<Self> {
        let engine = DocumentEngine::load(&config.data_path)?;
        tracing::info!(
            "Loaded document from {} ({} sections)",
            config.data_path,
            engine.section_count()
        );
        Ok(Self::new(config, engine))
    }
}

// =============================================================================
// Tests
// =============================================================================
