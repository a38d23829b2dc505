//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints `CODE: message` and exits 1.

use std::fmt;
use std::io;

use crate::dataset::DatasetError;
use crate::filter::FilterError;
use crate::service::ConfigError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or flag error
    ConfigError,
    /// I/O error (stdout, terminal)
    IoError,
    /// Dataset could not be loaded
    DatasetError,
    /// Filter expression rejected
    FilterError,
    /// HTTP service failed to start or stopped with an error
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "GRADELENS_CLI_CONFIG_ERROR",
            Self::IoError => "GRADELENS_CLI_IO_ERROR",
            Self::DatasetError => "GRADELENS_CLI_DATASET_ERROR",
            Self::FilterError => "GRADELENS_CLI_FILTER_ERROR",
            Self::ServeFailed => "GRADELENS_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<DatasetError> for CliError {
    // Keep the dataset code visible in the message
    fn from(e: DatasetError) -> Self {
        Self::new(CliErrorCode::DatasetError, e.to_string())
    }
}

impl From<FilterError> for CliError {
    fn from(e: FilterError) -> Self {
        Self::new(CliErrorCode::FilterError, format!("{}: {}", e.code(), e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("port must be > 0");
        assert_eq!(
            err.to_string(),
            "GRADELENS_CLI_CONFIG_ERROR: port must be > 0"
        );
    }

    #[test]
    fn test_dataset_error_conversion() {
        let err = CliError::from(DatasetError::not_found(Path::new("missing.csv")));
        assert_eq!(err.code(), &CliErrorCode::DatasetError);
        assert!(err.message().contains("GRADELENS_DATASET_NOT_FOUND"));
    }

    #[test]
    fn test_filter_error_conversion() {
        let err = CliError::from(FilterError::UnknownField("height".to_string()));
        assert_eq!(err.code_str(), "GRADELENS_CLI_FILTER_ERROR");
        assert!(err.message().contains("height"));
    }
}
