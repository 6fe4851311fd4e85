//! Error types for cdplot crates.

use thiserror::Error;

/// Result type alias using PlotError.
pub type PlotResult<T> = Result<T, PlotError>;

/// Primary error type for plot operations.
///
/// There is deliberately no recovery path: every variant is fatal to the
/// render call it occurs in and propagates to the caller.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("Output format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Shorthand for configuration failures.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlotError::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}
