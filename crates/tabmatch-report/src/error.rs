use std::path::PathBuf;
use thiserror::Error;

/// Errors from rendering or writing output documents.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template is missing the {placeholder} placeholder")]
    MissingPlaceholder { placeholder: &'static str },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize alignment report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
