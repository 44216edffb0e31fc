//! Config file loading.

use std::fs;
use std::path::Path;

use clipguard_core::ModerationConfig;

use crate::error::Result;

/// Loads and validates a JSON config, or returns the defaults when no path
/// is given.
pub fn load_config(path: Option<&Path>) -> Result<ModerationConfig> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using defaults");
        return Ok(ModerationConfig::default());
    };

    let raw = fs::read_to_string(path)?;
    let config: ModerationConfig = serde_json::from_str(&raw)?;
    config.validate()?;

    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}
