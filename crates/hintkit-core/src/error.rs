//! Error types for hintkit.
//!
//! Merging and strategy resolution never fail. These errors only surface from
//! the fallible inner APIs (reading hints files, loading configuration); the
//! loader trait converts them into "no hints".

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using hintkit's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hintkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A hints file exists but could not be interpreted
    #[error("Invalid hints file {}: {message}", path.display())]
    HintsFile { path: PathBuf, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Build a [`Error::HintsFile`] for the given path.
    pub fn hints_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::HintsFile {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
