use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::StoreConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse config: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl StoreConfig {
    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// - If the file doesn't exist, returns `StoreConfig::default()`.
    /// - Otherwise parses and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(StoreConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: StoreConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that the placeholder namespace is not blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder_namespace.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "placeholder_namespace must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
