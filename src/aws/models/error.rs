use std::path::PathBuf;

use thiserror::Error;

/// Result of a sync step; any `Err` ends the run.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Error type covering the fatal failures of a sync run. A missing source
/// model is not an error; it is recorded in the report instead.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Filesystem or stdout failure outside a specific model copy, such as
    /// writing a diagnostic line.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the local models directory cannot be listed.
    #[error("unable to read models directory {path}: {source}")]
    ModelsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a source model cannot be copied over its local file.
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the JSON report cannot be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stderr log subscriber could not be installed.
    #[error("cannot set up log output: {0}")]
    Logging(String),
}
