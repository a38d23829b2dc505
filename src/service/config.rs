//! Data service configuration
//!
//! Loaded from an optional JSON file; every field has a default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetLoader;

/// Data service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Dataset file, relative to the working directory (default: "data/dados.csv")
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Single ASCII field delimiter (default: ',')
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/dados.csv")
}

fn default_delimiter() -> char {
    ','
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dataset_path: default_dataset_path(),
            delimiter: default_delimiter(),
            cors_origins: Vec::new(),
        }
    }
}

/// Configuration problems
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ServiceConfig {
    /// Create a config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }
        if self.dataset_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("dataset_path must not be empty".to_string()));
        }
        if !self.delimiter.is_ascii() || self.delimiter == '"' || self.delimiter == '\n' {
            return Err(ConfigError::Invalid(format!(
                "delimiter {:?} must be a single ASCII character other than quote or newline",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// A loader for the configured dataset
    pub fn loader(&self) -> DatasetLoader {
        // validate() guarantees an ASCII delimiter
        DatasetLoader::new(&self.dataset_path).with_delimiter(self.delimiter as u8)
    }
}
