//! Key combination parsing and formatting.
//!
//! Responsibilities:
//! - Parse human-readable shortcut strings ("ctrl+shift+a") into `KeyCombo`.
//! - Format `KeyCombo` values for display ("Ctrl+Shift+A").
//!
//! Does NOT handle:
//! - Integration with crossterm (that's in the keymap crate).
//! - Runtime key event matching.
//!
//! Invariants:
//! - Parsing never fails. Unknown tokens become the literal key.
//! - `TOKEN_SYNONYMS` and `SpecialKey::display_name` are the only key tables;
//!   every display name parses back to the same token.
//! - `parse_key_combo(&format_key_combo(c)) == c` for every parsed combo.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named keys that terminals report through dedicated flags rather than text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    /// Enter/Return key
    Return,
    /// Escape key
    Escape,
    /// Space bar
    Space,
    /// Up arrow key
    UpArrow,
    /// Down arrow key
    DownArrow,
    /// Left arrow key
    LeftArrow,
    /// Right arrow key
    RightArrow,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
}

impl SpecialKey {
    /// Every special key, in display order.
    pub const ALL: [SpecialKey; 10] = [
        Self::Return,
        Self::Escape,
        Self::Space,
        Self::UpArrow,
        Self::DownArrow,
        Self::LeftArrow,
        Self::RightArrow,
        Self::Tab,
        Self::Backspace,
        Self::Delete,
    ];

    /// Canonical identifier, matching the terminal flag name.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Return => "return",
            Self::Escape => "escape",
            Self::Space => "space",
            Self::UpArrow => "upArrow",
            Self::DownArrow => "downArrow",
            Self::LeftArrow => "leftArrow",
            Self::RightArrow => "rightArrow",
            Self::Tab => "tab",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
        }
    }

    /// Name shown in help overlays and command palettes.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Return => "Enter",
            Self::Escape => "Esc",
            Self::Space => "Space",
            Self::UpArrow => "Up",
            Self::DownArrow => "Down",
            Self::LeftArrow => "Left",
            Self::RightArrow => "Right",
            Self::Tab => "Tab",
            Self::Backspace => "Backspace",
            Self::Delete => "Delete",
        }
    }
}

/// The main (non-modifier) key of a combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A named special key
    Special(SpecialKey),
    /// Any other token, lower-cased. Usually a single printable character.
    Literal(String),
}

impl Key {
    /// Build a literal key, normalizing case the same way the parser does.
    pub fn literal(text: &str) -> Self {
        Self::Literal(text.to_lowercase())
    }

    /// Returns true for a literal key with no text. Such a key never matches.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Literal(text) if text.is_empty())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Special(special) => write!(f, "{}", special.display_name()),
            Self::Literal(text) => {
                // Upper-casing is lossy for some characters (ß -> SS).
                let upper = text.to_uppercase();
                if upper.to_lowercase() == *text {
                    f.write_str(&upper)
                } else {
                    f.write_str(text)
                }
            }
        }
    }
}

/// A parsed key combination: one key plus modifier flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct KeyCombo {
    /// The main key
    pub key: Key,
    /// Control key required
    pub ctrl: bool,
    /// Meta/Cmd key required
    pub meta: bool,
    /// Shift key required
    pub shift: bool,
    /// Alt/Option key required
    pub alt: bool,
}

impl KeyCombo {
    /// A combo for `key` with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
            alt: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_key_combo(self))
    }
}

impl FromStr for KeyCombo {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_key_combo(s))
    }
}

impl From<String> for KeyCombo {
    fn from(text: String) -> Self {
        parse_key_combo(&text)
    }
}

impl From<&str> for KeyCombo {
    fn from(text: &str) -> Self {
        parse_key_combo(text)
    }
}

impl From<KeyCombo> for String {
    fn from(combo: KeyCombo) -> Self {
        format_key_combo(&combo)
    }
}

#[derive(Debug, Clone, Copy)]
enum Token {
    Ctrl,
    Meta,
    Shift,
    Alt,
    Key(SpecialKey),
}

/// Accepted spellings, lower-cased.
const TOKEN_SYNONYMS: &[(&str, Token)] = &[
    ("ctrl", Token::Ctrl),
    ("control", Token::Ctrl),
    ("meta", Token::Meta),
    ("cmd", Token::Meta),
    ("command", Token::Meta),
    ("shift", Token::Shift),
    ("alt", Token::Alt),
    ("option", Token::Alt),
    ("enter", Token::Key(SpecialKey::Return)),
    ("return", Token::Key(SpecialKey::Return)),
    ("esc", Token::Key(SpecialKey::Escape)),
    ("escape", Token::Key(SpecialKey::Escape)),
    ("space", Token::Key(SpecialKey::Space)),
    ("up", Token::Key(SpecialKey::UpArrow)),
    ("uparrow", Token::Key(SpecialKey::UpArrow)),
    ("down", Token::Key(SpecialKey::DownArrow)),
    ("downarrow", Token::Key(SpecialKey::DownArrow)),
    ("left", Token::Key(SpecialKey::LeftArrow)),
    ("leftarrow", Token::Key(SpecialKey::LeftArrow)),
    ("right", Token::Key(SpecialKey::RightArrow)),
    ("rightarrow", Token::Key(SpecialKey::RightArrow)),
    ("tab", Token::Key(SpecialKey::Tab)),
    ("backspace", Token::Key(SpecialKey::Backspace)),
    ("delete", Token::Key(SpecialKey::Delete)),
];

fn lookup_token(part: &str) -> Option<Token> {
    TOKEN_SYNONYMS
        .iter()
        .find(|(name, _)| *name == part)
        .map(|(_, token)| *token)
}

/// Parse a shortcut string like "ctrl+shift+a" or "esc" into a `KeyCombo`.
///
/// Never fails: unrecognized tokens are taken literally and the last key token
/// wins. Typos degrade to a combo that simply never fires.
///
/// # Examples
///
/// ```
/// use keymap_config::combo::{parse_key_combo, Key, SpecialKey};
///
/// let combo = parse_key_combo("Control+Shift+A");
/// assert!(combo.ctrl && combo.shift);
/// assert_eq!(combo.key, Key::literal("a"));
///
/// let combo = parse_key_combo("esc");
/// assert_eq!(combo.key, Key::Special(SpecialKey::Escape));
/// ```
pub fn parse_key_combo(text: &str) -> KeyCombo {
    let lowered = text.to_lowercase();
    let mut combo = KeyCombo::new(Key::Literal(String::new()));

    for raw in lowered.split('+') {
        // A bare " " names the space bar; other tokens tolerate padding.
        if !raw.is_empty() && raw.trim().is_empty() {
            combo.key = Key::Special(SpecialKey::Space);
            continue;
        }
        let part = raw.trim();
        match lookup_token(part) {
            Some(Token::Ctrl) => combo.ctrl = true,
            Some(Token::Meta) => combo.meta = true,
            Some(Token::Shift) => combo.shift = true,
            Some(Token::Alt) => combo.alt = true,
            Some(Token::Key(special)) => combo.key = Key::Special(special),
            None => combo.key = Key::Literal(part.to_string()),
        }
    }

    combo
}

/// Format a `KeyCombo` for display, e.g. "Ctrl+Cmd+Shift+Alt+Enter".
///
/// Display only: the output parses back to an equal combo but does not
/// reproduce the string originally parsed.
pub fn format_key_combo(combo: &KeyCombo) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(5);

    if combo.ctrl {
        parts.push("Ctrl".to_string());
    }
    if combo.meta {
        parts.push("Cmd".to_string());
    }
    if combo.shift {
        parts.push("Shift".to_string());
    }
    if combo.alt {
        parts.push("Alt".to_string());
    }
    parts.push(combo.key.to_string());

    parts.join("+")
}
