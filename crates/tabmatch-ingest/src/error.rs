//! Error types for table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid UTF-8.
    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Input has no content after trimming whitespace.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
