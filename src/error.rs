// src/error.rs
use thiserror::Error;

/// Failure to report an outcome once the bump itself has finished.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to render outcome: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write outcome: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;
