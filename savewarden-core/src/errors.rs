use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WardenError {
    #[error("no save folder found under {}", .0.display())]
    SaveNotFound(PathBuf),
    #[error("multiple save folders found under {}", .0.display())]
    SaveAmbiguous(PathBuf),
    #[error("backup not found: {0}")]
    BackupNotFound(String),
    #[error("backup already exists: {0}")]
    BackupExists(String),
    #[error("invalid backup name: {0:?}")]
    InvalidName(String),
    #[error("operation cancelled")]
    Cancelled,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("metadata error: {0}")]
    Json(#[from] serde_json::Error),
}
