use std::path::PathBuf;

use thiserror::Error;

/// Main error type for repodoc operations
#[derive(Error, Debug)]
pub enum RepodocError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No grammar registered for extension: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to read {path}: {detail}")]
    ReadFailure { path: PathBuf, detail: String },

    #[error("Failed to parse {path}: {detail}")]
    ParseFailure { path: PathBuf, detail: String },

    #[error("Description generation failed: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepodocError>;
