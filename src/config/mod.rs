//! Configuration module for txgate.
//!
//! This module provides all configuration types and loading functionality.
//! Configuration is loaded from YAML files; every section has working
//! defaults so a config file is optional.

mod gateway;
mod logging;
mod server;

pub use gateway::{GatewayConfig, DEFAULT_TIMEOUT_SECS};
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TxGateError;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote gateway endpoint configuration.
    pub gateway: GatewayConfig,

    /// Server configuration (for `serve` mode).
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads configuration from an optional path.
    /// If path is None, uses default search paths.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, TxGateError> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => {
                // Try default paths
                let default_paths = [
                    "/etc/txgate/config.yaml",
                    "/etc/txgate/config.yml",
                    "config.yaml",
                    "config.yml",
                ];

                for path in &default_paths {
                    if std::path::Path::new(path).exists() {
                        return Self::load_from_path(path);
                    }
                }

                // No config file found, use defaults
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a YAML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, TxGateError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            TxGateError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::load_from_str(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn load_from_str(content: &str) -> Result<Self, TxGateError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| TxGateError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    fn validate(&self) -> Result<(), TxGateError> {
        if self.gateway.base_url.is_empty() {
            return Err(TxGateError::config("gateway.base_url must not be empty"));
        }

        if !self.gateway.base_url.starts_with("http://")
            && !self.gateway.base_url.starts_with("https://")
        {
            return Err(TxGateError::config(
                "gateway.base_url must start with http:// or https://",
            ));
        }

        if self.gateway.timeout_seconds == 0 {
            return Err(TxGateError::config("gateway.timeout_seconds must be > 0"));
        }

        if self.server.port == 0 {
            return Err(TxGateError::config("server.port must be > 0"));
        }

        Ok(())
    }
}
