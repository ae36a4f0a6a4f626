//! Folio Server Configuration
//!
//! Binding address, document source and CORS settings. Values come from an
//! optional TOML file and are then overridden by CLI flags or environment.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use folio_common::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// Server Configuration
// =============================================================================

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path of the JSON document served by this process.
    pub data_path: String,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_path: "data.json".to_string(),
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Create a new server config with the specified host and port.
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file. Missing keys take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| FolioError::Configuration(e.to_string()))
    }

    /// Set the host to bind to.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port to listen on.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the document source path.
    pub fn with_data_path(mut self, data_path: impl Into<String>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Enable or disable the permissive CORS layer.
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.enable_cors = enabled;
        self
    }

    /// Get the bind address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_path, "data.json");
        assert!(config.enable_cors);
    }

    #[test]
    fn test_builder() {
        let config = ServerConfig::new("127.0.0.1", 8080)
            .with_data_path("/srv/catalog.json")
            .with_cors(false);
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.data_path, "/srv/catalog.json");
        assert!(!config.enable_cors);

        let config = config.with_host("localhost").with_port(9000);
        assert_eq!(config.address(), "localhost:9000");
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        writeln!(file, "port = 4100").unwrap();
        writeln!(file, "data_path = \"fixtures/shop.json\"").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.port, 4100);
        assert_eq!(config.data_path, "fixtures/shop.json");
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.enable_cors);
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        writeln!(file, "port = \"not a number\"").unwrap();

        let err = ServerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FolioError::Configuration(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().expect("failed to create temp directory");
        let err = ServerConfig::from_file(dir.path().join("folio.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
