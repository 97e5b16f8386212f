//! Storage error types for ontime-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from document storage and backup file I/O.
///
/// Document writes made by the `Planner` never surface these; they are
/// logged and the in-memory state stays as it is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data directory could not be created or is not a directory.
    #[error("Data directory unusable: {path}: {reason}")]
    DataDir { path: PathBuf, reason: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
