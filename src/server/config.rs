// src/server/config.rs
//! Configuration file parsing for the Gusteau server
//!
//! Supports TOML configuration files with a single `[server]` section.
//! Every field has a default, and the file itself is optional: `serve`
//! without `--config` runs on built-in defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::server::ServerConfig;

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct GusteauConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

/// Load and parse a TOML configuration file
pub fn load_config(path: &Path) -> Result<GusteauConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

impl GusteauConfig {
    /// Convert the parsed file into a runtime `ServerConfig`
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.server.bind))?;
        Ok(ServerConfig { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GusteauConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert!(config.to_server_config().is_ok());
    }

    #[test]
    fn test_bind_override() {
        let config: GusteauConfig = toml::from_str("[server]\nbind = \"127.0.0.1:9090\"").unwrap();
        let server_config = config.to_server_config().unwrap();
        assert_eq!(server_config.bind_addr.to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_bind_address_is_an_error() {
        let config: GusteauConfig = toml::from_str("[server]\nbind = \"not-an-addr\"").unwrap();
        assert!(config.to_server_config().is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind = \"0.0.0.0:8181\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8181");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/gusteau.toml")).is_err());
    }
}
