//! Dataset error types
//!
//! Error codes:
//! - GRADELENS_DATASET_NOT_FOUND
//! - GRADELENS_DATASET_EMPTY
//! - GRADELENS_DATASET_MALFORMED
//! - GRADELENS_DATASET_INTERNAL
//!
//! Every loader failure is classified into exactly one of these kinds.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Dataset error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetErrorCode {
    /// Source file does not exist
    NotFound,
    /// Source file has a header but no data rows
    Empty,
    /// Source file fails structural parsing or record binding
    Malformed,
    /// Any other failure
    Internal,
}

impl DatasetErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            DatasetErrorCode::NotFound => "GRADELENS_DATASET_NOT_FOUND",
            DatasetErrorCode::Empty => "GRADELENS_DATASET_EMPTY",
            DatasetErrorCode::Malformed => "GRADELENS_DATASET_MALFORMED",
            DatasetErrorCode::Internal => "GRADELENS_DATASET_INTERNAL",
        }
    }
}

impl fmt::Display for DatasetErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Dataset error with context
#[derive(Debug)]
pub struct DatasetError {
    code: DatasetErrorCode,
    message: String,
    path: Option<PathBuf>,
}

impl DatasetError {
    fn new(code: DatasetErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Source file does not exist
    pub fn not_found(path: &Path) -> Self {
        Self::new(
            DatasetErrorCode::NotFound,
            format!("Dataset file not found: {}", path.display()),
        )
        .with_path(path)
    }

    /// Header present, zero data rows
    pub fn empty(path: &Path) -> Self {
        Self::new(
            DatasetErrorCode::Empty,
            format!("Dataset file has no data rows: {}", path.display()),
        )
        .with_path(path)
    }

    /// Structural parse or binding failure
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::new(DatasetErrorCode::Malformed, reason)
    }

    /// Unclassified failure
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::new(DatasetErrorCode::Internal, reason)
    }

    /// Attach the source path
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }

    /// Returns the error kind
    pub fn code(&self) -> DatasetErrorCode {
        self.code
    }

    /// Returns the message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source path, when known
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(e: io::Error) -> Self {
        Self::internal(format!("I/O error: {}", e))
    }
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
