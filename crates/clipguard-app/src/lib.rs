//! Clipguard - command-line text moderation.
//!
//! This crate holds the pieces of the `clipguard` binary that are worth
//! testing on their own:
//!
//! - Loading a [`ModerationConfig`](clipguard_core::ModerationConfig) from a JSON file
//! - Rendering results for humans and for machines
//! - Mapping moderation actions to process exit codes

pub mod error;
pub mod render;
pub mod settings;

pub use error::{AppError, Result};
pub use settings::load_config;
