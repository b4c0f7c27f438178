//! Error types for docvisit library.

use std::io;
use thiserror::Error;

/// Result type alias for docvisit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when loading or serializing documents.
///
/// Visiting a document never fails; these only come from I/O and JSON
/// boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be parsed as a document.
    #[error("Invalid document JSON: {0}")]
    Json(String),

    /// Error during rendering (JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Json(err.to_string())
        }
    }
}
