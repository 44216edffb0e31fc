//! Application error types.

use clipguard_core::ModerationError;
use thiserror::Error;

/// Errors raised while preparing a moderation run.
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error (e.g., reading the config file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config values rejected by the pipeline.
    #[error("moderation error: {0}")]
    Moderation(#[from] ModerationError),
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
