//! Keymap configuration types.
//!
//! Invariants:
//! - `KeymapPreset` uses snake_case serialization for config file consistency.
//! - `overrides` and `disabled` use ordered collections for deterministic output.
//! - Every field has a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A built-in set of default bindings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum KeymapPreset {
    /// Global, session, view and navigation bindings
    #[default]
    Default,
    /// Default bindings plus vim-style navigation in the "vim" scope
    Vim,
    /// Default bindings plus emacs-style navigation in the "emacs" scope
    Emacs,
}

impl KeymapPreset {
    /// The scope a preset's extra bindings are registered under, if any.
    pub fn scope(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Vim => Some("vim"),
            Self::Emacs => Some("emacs"),
        }
    }
}

impl fmt::Display for KeymapPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Vim => write!(f, "vim"),
            Self::Emacs => write!(f, "emacs"),
        }
    }
}

impl FromStr for KeymapPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "vim" => Ok(Self::Vim),
            "emacs" => Ok(Self::Emacs),
            other => Err(format!(
                "unknown preset '{}', expected one of: default, vim, emacs",
                other
            )),
        }
    }
}

fn default_active() -> bool {
    true
}

/// User-facing keymap configuration.
///
/// Only ids listed in `overrides` get a different combo; all other preset
/// bindings keep their built-in combos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Which built-in binding set to start from.
    #[serde(default)]
    pub preset: KeymapPreset,
    /// Initial active scope. When unset, the preset's own scope is used.
    #[serde(default)]
    pub scope: Option<String>,
    /// Whether the keymap handles input at all.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Map of binding id -> combo string.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
    /// Binding ids registered but disabled at startup.
    #[serde(default)]
    pub disabled: BTreeSet<String>,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: KeymapPreset::default(),
            scope: None,
            active: true,
            overrides: BTreeMap::new(),
            disabled: BTreeSet::new(),
        }
    }
}

impl KeymapConfig {
    /// Returns true if no binding is overridden or disabled.
    pub fn is_pristine(&self) -> bool {
        self.overrides.is_empty() && self.disabled.is_empty()
    }

    /// Get the override for a specific binding id, if any.
    pub fn override_for(&self, id: &str) -> Option<&str> {
        self.overrides.get(id).map(|s| s.as_str())
    }

    /// The scope the keymap should start in.
    pub fn initial_scope(&self) -> Option<String> {
        self.scope
            .clone()
            .or_else(|| self.preset.scope().map(str::to_string))
    }
}
