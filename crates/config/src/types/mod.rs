//! Configuration types for the keymap.
//!
//! Responsibilities:
//! - Define serializable keymap configuration (`KeymapConfig`).
//! - Define the built-in keymap preset identifiers (`KeymapPreset`).
//!
//! Does NOT handle:
//! - Loading configuration from JSON or the environment (see `loader`).
//! - Building bindings from a preset (see the keymap crate).

mod keymap;

pub use keymap::{KeymapConfig, KeymapPreset};
