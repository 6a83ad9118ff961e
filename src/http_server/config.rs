//! HTTP Server Configuration
//!
//! Listener address, database location, CORS and log settings. Loaded from
//! an optional JSON file, then overridden by environment and flags.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::observability::LogFormat;

/// API title reported by `/health`
pub const API_TITLE: &str = "Stores REST API";

/// API version reported by `/health`
pub const API_VERSION: &str = "v1";

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite database file (default: "stores.sqlite")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Log output format (default: pretty)
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("stores.sqlite")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_path: default_database_path(),
            cors_origins: Vec::new(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| format!("Invalid config JSON: {}", e))
    }

    /// Check values that parse but cannot work
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.database_path.as_os_str().is_empty() {
            return Err("database_path must not be empty".to_string());
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_path, PathBuf::from("stores.sqlite"));
        assert!(config.cors_origins.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = ServerConfig::from_json(r#"{"port": 9000, "log_format": "json"}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.database_path, PathBuf::from("stores.sqlite"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = ServerConfig::from_json(r#"{"prot": 9000}"#).unwrap_err();
        assert!(err.contains("Invalid config JSON"));
    }

    #[test]
    fn test_validate_rejects_port_zero_and_empty_path() {
        assert!(ServerConfig::with_port(0).validate().is_err());
        let config = ServerConfig {
            database_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
