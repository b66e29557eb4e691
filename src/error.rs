//! Error types for input validation and file loading
//!
//! The projection core itself cannot fail on a validated [`Employee`]; every
//! error here is raised before the engine runs.
//!
//! [`Employee`]: crate::employee::Employee

use std::path::PathBuf;

/// Rejection of a raw employee input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// A required field is missing or not a finite number
    #[error("incomplete input: {field} is missing or not a number")]
    Incomplete { field: &'static str },

    /// Dates out of order, or pay/DA outside the allowed range
    #[error("invalid input: {0}")]
    InvalidRange(String),
}

/// Failure reading an employee or assumptions file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize a JSON file
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
