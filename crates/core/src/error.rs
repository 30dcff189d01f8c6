//! Error types for cagepack.

use thiserror::Error;

/// Result type alias for cagepack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building packing inputs.
///
/// All variants are construction-time failures. A product that does not fit
/// the container is not an error; the optimizer reports it as a zero-count
/// result.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid size component (negative or non-finite).
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Invalid product provided.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
