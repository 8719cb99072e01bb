//! Error types for the donex-core library.
//!
//! The decode pipeline itself is total and never fails; errors here cover
//! the ambient surface (configuration files, serialization).

use thiserror::Error;

/// Main error type for the donex library.
#[derive(Error, Debug)]
pub enum DonexError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the donex library.
pub type Result<T> = std::result::Result<T, DonexError>;
