//! Error types for the projection engine
//!
//! Formula functions never fail. Errors only come from engine operations that
//! reject malformed inputs and from loading price paths off disk.

use thiserror::Error;

/// Convenience alias for results in this crate
pub type Result<T> = std::result::Result<T, ProjectionError>;

#[derive(Debug, Error)]
pub enum ProjectionError {
    /// An input record violates a precondition (e.g. retirement age not after current age)
    #[error("invalid input: {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A price-change sequence could not be read or parsed
    #[error("price path error: {0}")]
    PricePath(String),
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for ProjectionError {
    fn from(e: csv::Error) -> Self {
        ProjectionError::PricePath(e.to_string())
    }
}

impl From<std::io::Error> for ProjectionError {
    fn from(e: std::io::Error) -> Self {
        ProjectionError::PricePath(e.to_string())
    }
}
