//! Configuration file parsing for the server.
//!
//! Loads the bind address, the default model and the detector settings
//! from TOML files.

use fallacy_detector::DetectorConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable supplying the default model identifier
pub const MODEL_ID_ENV: &str = "FALLACY_MODEL_ID";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    pub bind_port: u16,

    /// Model used when a request does not name one
    #[serde(default)]
    pub default_model_id: Option<String>,

    /// Detector settings
    #[serde(default)]
    pub detector: DetectorConfig,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.detector.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Local configuration used when no file is given
    pub fn default_local_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8000,
            default_model_id: None,
            detector: DetectorConfig::default(),
        }
    }

    /// Let `FALLACY_MODEL_ID` supply the default model
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(model) = std::env::var(MODEL_ID_ENV)
            .ok()
            .filter(|m| !m.trim().is_empty())
        {
            self.default_model_id = Some(model);
        }
        self
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
