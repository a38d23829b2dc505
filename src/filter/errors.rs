//! Filter expression errors

use thiserror::Error;

/// Result type for filter construction
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while building predicates from user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Field name is not part of the record schema
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Range bounds do not parse, are reversed, or target a categorical field
    #[error("Invalid range for {field}: {reason}")]
    InvalidRange { field: String, reason: String },

    /// Expression is not `field=value` or `field=lo..hi`
    #[error("Invalid filter expression: {0}")]
    InvalidExpression(String),
}

impl FilterError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            FilterError::UnknownField(_) => "GRADELENS_FILTER_UNKNOWN_FIELD",
            FilterError::InvalidRange { .. } => "GRADELENS_FILTER_INVALID_RANGE",
            FilterError::InvalidExpression(_) => "GRADELENS_FILTER_INVALID_EXPRESSION",
        }
    }
}
