//! Error types raised by score service implementations.

use thiserror::Error;

/// Errors surfaced by score service implementations.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score store lock was poisoned")]
    LockPoisoned,

    #[error("invalid player name: {0}")]
    InvalidName(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
