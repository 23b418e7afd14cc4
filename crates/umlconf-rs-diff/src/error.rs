// crates/umlconf-rs-diff/src/error.rs

use core::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors that can occur while loading, diffing or writing configuration documents.
#[derive(Debug)]
pub enum DiffError {
    /// The document is not valid JSON, or could not be serialized.
    Json(serde_json::Error),

    /// Serialized JSON bytes are not valid UTF-8.
    Utf8(FromUtf8Error),

    /// The top-level JSON value of a document is not an object.
    NotAnObject { path: PathBuf },

    /// The input file does not exist.
    MissingFile(PathBuf),

    /// Any other I/O failure while reading or writing files.
    Io(io::Error),
}

impl From<serde_json::Error> for DiffError {
    fn from(e: serde_json::Error) -> Self {
        DiffError::Json(e)
    }
}

impl From<FromUtf8Error> for DiffError {
    fn from(e: FromUtf8Error) -> Self {
        DiffError::Utf8(e)
    }
}

impl From<io::Error> for DiffError {
    fn from(e: io::Error) -> Self {
        DiffError::Io(e)
    }
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffError::Json(e) => write!(f, "JSON error: {}", e),
            DiffError::Utf8(e) => write!(f, "Serialized JSON is not valid UTF-8: {}", e),
            DiffError::NotAnObject { path } => {
                write!(f, "Top-level value of {} is not a JSON object", path.display())
            }
            DiffError::MissingFile(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            DiffError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for DiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiffError::Json(e) => Some(e),
            DiffError::Utf8(e) => Some(e),
            DiffError::Io(e) => Some(e),
            _ => None,
        }
    }
}
