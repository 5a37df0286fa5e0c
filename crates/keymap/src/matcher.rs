//! Match predicate: does one input event satisfy one key combination?
//!
//! Invariants:
//! - Modifiers are only ever asserted. A modifier set on the combo must be
//!   present on the event; extra modifiers on the event are ignored.
//! - Special keys match their terminal flag; literal keys match the input
//!   text case-insensitively.
//! - An empty literal key never matches.

use keymap_config::{Key, KeyCombo};

use crate::input::{InputEvent, KeyFlags};

fn required_modifiers(combo: &KeyCombo) -> KeyFlags {
    let mut flags = KeyFlags::empty();
    flags.set(KeyFlags::CTRL, combo.ctrl);
    flags.set(KeyFlags::META, combo.meta);
    flags.set(KeyFlags::SHIFT, combo.shift);
    flags.set(KeyFlags::ALT, combo.alt);
    flags
}

/// Returns true when `event` triggers `combo`.
pub fn matches(event: &InputEvent, combo: &KeyCombo) -> bool {
    if !event.flags.contains(required_modifiers(combo)) {
        return false;
    }

    match &combo.key {
        Key::Special(special) => match KeyFlags::for_special(*special) {
            Some(flag) => event.flags.contains(flag),
            // Space has no flag of its own.
            None => event.input == " ",
        },
        Key::Literal(text) => !text.is_empty() && event.input.to_lowercase() == *text,
    }
}
