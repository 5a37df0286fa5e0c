//! Error types for keymap configuration loading.
//!
//! Invariants:
//! - All error variants include the offending variable or binding id.
//! - Malformed combo text is never an error by itself; only a combo that
//!   cannot name any key is rejected.

use thiserror::Error;

/// Errors that can occur while loading or validating a `KeymapConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse keymap config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Override for '{id}' has no key: '{combo}'")]
    EmptyKey { id: String, combo: String },
}
