//! Error types for grid construction.

use thiserror::Error;

/// Result type alias using GridError.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised while building a bin grid.
///
/// Lookup operations never fail: out-of-range coordinates and bin identifiers
/// are clamped into range so that batch processing of large, occasionally
/// noisy coordinate sets does not abort partway through.
#[derive(Debug, Error)]
pub enum GridError {
    /// The grid configuration cannot produce a valid row table.
    #[error("invalid grid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GridError {
    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
