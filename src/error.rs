//! Error types for the claude-go launcher.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the settings reconciler and the launch glue around it.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Failed to parse JSON: {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level value was an array or scalar. One error kind covers both;
    /// callers never need to tell them apart.
    #[error("Config must be a JSON object: {path}")]
    NotAnObject { path: PathBuf },

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Edit cancelled")]
    EditCancelled,

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LauncherError {
    /// Wrap a parse failure with the file it came from.
    pub fn parse(path: &std::path::Path, source: serde_json::Error) -> Self {
        LauncherError::JsonParse {
            path: path.to_path_buf(),
            source,
        }
    }
}
