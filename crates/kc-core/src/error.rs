//! Error handling for the realm migration tools.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the migration error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for realm export operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist.
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Input is not valid JSON.
    #[error("Invalid JSON - {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document root is not a JSON object.
    #[error("Root element must be an object")]
    RootNotObject,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
