use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("log file not found on the path: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("cannot read log file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown report format: {0} (expected csv or json)")]
    UnknownFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ReportError>;
