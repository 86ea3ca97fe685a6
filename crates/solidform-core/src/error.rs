//! Error types for solidform.

use thiserror::Error;

/// The main error type for solidform operations.
///
/// Runtime parameter edits never surface these: out-of-range and malformed
/// input is clamped or rejected in place (see `store`). The variants cover
/// the API edges where a caller genuinely needs the failure.
#[derive(Error, Debug)]
pub enum SolidformError {
    /// A color string was not of the form `#rrggbb`.
    #[error("invalid hex color '{0}'")]
    InvalidColor(String),

    /// A parameter name did not match any known control.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// A numeric input was NaN or infinite.
    #[error("non-finite value for parameter '{0}'")]
    NonFiniteValue(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for solidform operations.
pub type Result<T> = std::result::Result<T, SolidformError>;
