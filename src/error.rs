//! Error types for the namespace rename engine.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rename operations.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("invalid namespace: '{0}' is not a valid root identifier")]
    InvalidNamespace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("project layout incomplete: {0}")]
    MissingHostContext(String),
}

/// A specialized Result type for rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;
