//! Configuration and key-string handling for the keymap engine.
//!
//! This crate provides the shortcut string codec and the types for
//! configuring a keymap from JSON and environment variables. It has no
//! terminal dependencies.

pub mod combo;
mod loader;
pub mod types;

pub use combo::{Key, KeyCombo, SpecialKey, format_key_combo, parse_key_combo};
pub use loader::{ConfigError, ENV_ACTIVE, ENV_PRESET, ENV_SCOPE, env_var_or_none};
pub use types::{KeymapConfig, KeymapPreset};
