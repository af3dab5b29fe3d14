//! Error types for stowage.

use thiserror::Error;

/// Result type alias for stowage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or running a load plan.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid catalog item provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid cargo volume provided.
    #[error("Invalid cargo volume: {0}")]
    InvalidVolume(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
