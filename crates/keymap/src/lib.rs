//! Keybinding registry and dispatch engine for terminal applications.
//!
//! Turns crossterm key events into application actions through a
//! registrable, priority-ordered, scope-aware table of shortcuts.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use keymap::{Binding, Keymap, handler};
//!
//! let keymap = Keymap::new();
//! let saved = Rc::new(Cell::new(false));
//! let flag = saved.clone();
//! keymap.register(Binding::new("file.save", "ctrl+s", handler(move || flag.set(true))));
//!
//! let outcome = keymap.dispatch_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
//! assert_eq!(outcome.handled_id(), Some("file.save"));
//! assert!(saved.get());
//! ```

pub mod binding;
pub mod conflicts;
pub mod dispatcher;
pub mod error;
pub mod facade;
pub mod input;
pub mod keymap;
pub mod matcher;
pub mod presets;
pub mod registry;
pub mod scope;

// Re-export commonly used types at the crate root
pub use binding::{Binding, BindingOptions, Handler, handler};
pub use conflicts::Conflict;
pub use dispatcher::DispatchOutcome;
pub use error::KeymapError;
pub use facade::{BindingDecl, BindingGroup, BindingGuard, Keybind, Keybinds, bind_many, bind_one};
pub use input::{InputEvent, KeyFlags};
pub use keymap::{Keymap, KeymapHandle, Registration};
pub use keymap_config::{
    Key, KeyCombo, KeymapConfig, KeymapPreset, SpecialKey, format_key_combo, parse_key_combo,
};
pub use matcher::matches;
pub use presets::{default_bindings, preset_bindings};
