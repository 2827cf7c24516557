//! Sauda Error Types
//!
//! Centralized error handling for the shopping assistant.

use thiserror::Error;

/// Central error type for sauda
#[derive(Error, Debug)]
pub enum SaudaError {
    #[error("transcription service error: {0}")]
    Transcribe(String),

    #[error("transcription timed out after {0} polls")]
    TranscribeTimeout(usize),

    #[error("store error: {0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for sauda operations
pub type SaudaResult<T> = Result<T, SaudaError>;
