//! Environment variable overlay for keymap configuration.
//!
//! Responsibilities:
//! - Read `KEYMAP_*` environment variables.
//! - Apply their values on top of an existing `KeymapConfig`.
//!
//! Invariants:
//! - Environment variables take precedence over configured values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

use super::error::ConfigError;
use crate::types::KeymapConfig;

pub const ENV_PRESET: &str = "KEYMAP_PRESET";
pub const ENV_SCOPE: &str = "KEYMAP_SCOPE";
pub const ENV_ACTIVE: &str = "KEYMAP_ACTIVE";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration.
pub fn apply_env(config: &mut KeymapConfig) -> Result<(), ConfigError> {
    if let Some(preset) = env_var_or_none(ENV_PRESET) {
        config.preset = preset
            .parse()
            .map_err(|message| ConfigError::InvalidValue {
                var: ENV_PRESET.to_string(),
                message,
            })?;
    }
    if let Some(scope) = env_var_or_none(ENV_SCOPE) {
        config.scope = Some(scope);
    }
    if let Some(active) = env_var_or_none(ENV_ACTIVE) {
        config.active = active.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_ACTIVE.to_string(),
            message: "must be true or false".to_string(),
        })?;
    }
    Ok(())
}
