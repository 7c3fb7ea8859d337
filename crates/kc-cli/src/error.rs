//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Migration or validation failed.
    #[error(transparent)]
    Core(#[from] kc_core::Error),

    /// Logging could not be initialized.
    #[error("logging error: {0}")]
    Logging(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Returns the underlying I/O error, if reading or writing a file failed.
    #[must_use]
    pub fn as_io(&self) -> Option<&std::io::Error> {
        match self {
            Self::Core(kc_core::Error::Io(e)) => Some(e),
            _ => None,
        }
    }
}
