//! Moderation error types.

use thiserror::Error;

/// Errors that can occur while building a moderator.
///
/// Classification itself never fails; these only cover setup.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A lexicon term is empty, not lowercase, or declared twice.
    #[error("invalid lexicon term: {0}")]
    InvalidTerm(String),

    /// A severity tier name was not recognized.
    #[error("unknown severity tier: {0}")]
    UnknownTier(String),

    /// A lexicon term could not be compiled into a matcher.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for moderation setup.
pub type Result<T> = std::result::Result<T, ModerationError>;
