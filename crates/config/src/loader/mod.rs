//! Keymap configuration loading.
//!
//! Responsibilities:
//! - Deserialize `KeymapConfig` from JSON text.
//! - Overlay `KEYMAP_*` environment variables.
//! - Validate overrides before they reach the registry.
//!
//! Does NOT handle:
//! - Reading or writing files. Callers own persistence.

mod env;
mod error;

pub use env::{ENV_ACTIVE, ENV_PRESET, ENV_SCOPE, env_var_or_none};
pub use error::ConfigError;

use crate::combo::parse_key_combo;
use crate::types::KeymapConfig;

impl KeymapConfig {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: KeymapConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment variables on top of this configuration.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        env::apply_env(&mut self)?;
        tracing::debug!(preset = %self.preset, scope = ?self.scope, active = self.active, "Applied keymap env overlay");
        Ok(self)
    }

    /// Reject overrides whose combo text names no key at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (id, combo) in &self.overrides {
            if parse_key_combo(combo).key.is_empty() {
                return Err(ConfigError::EmptyKey {
                    id: id.clone(),
                    combo: combo.clone(),
                });
            }
        }
        Ok(())
    }
}
