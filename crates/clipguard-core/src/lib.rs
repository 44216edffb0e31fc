//! Clipguard Core - lexicon-based text moderation.
//!
//! Classifies free-text user content (video titles, descriptions, comments)
//! into a severity tier, flags the offending terms, redacts them, and scores
//! the result. Everything here is pure and synchronous: no I/O, no shared
//! mutable state.
//!
//! # Example
//!
//! ```
//! use clipguard_core::{analyze, should_require_review, SeverityTier};
//!
//! let result = analyze("I will kill this fucking moron");
//! assert_eq!(result.severity_tier, SeverityTier::Severe);
//! assert_eq!(result.redacted_text, "I will kill this ******* *****");
//! assert!(should_require_review(&result));
//! ```

pub mod classifier;
pub mod confidence;
pub mod config;
pub mod error;
pub mod lexicon;
mod moderator;
pub mod policy;
pub mod presentation;
pub mod redactor;
pub mod screening;

pub use classifier::{ClassificationResult, SeverityTier};
pub use confidence::confidence;
pub use config::ModerationConfig;
pub use error::{ModerationError, Result};
pub use lexicon::{contains_any, Lexicon, LexiconCategory, MatchMode};
pub use moderator::{analyze, analyze_optional, Moderator};
pub use policy::{decide, should_block, should_require_review, ModerationAction};
pub use presentation::{badge_for, TierBadge};
pub use redactor::redact;
pub use screening::{screen, ContentField, ContentSubmission, ScreeningReport};
