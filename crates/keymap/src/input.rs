//! Terminal key events as seen by the dispatcher.
//!
//! Responsibilities:
//! - Define `InputEvent`: the literal input text plus named key flags.
//! - Convert crossterm `KeyEvent`s into `InputEvent`s.
//!
//! Does NOT handle:
//! - Reading events from the terminal (owned by the caller's event loop).
//! - Deciding which binding an event triggers (see `dispatcher`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keymap_config::SpecialKey;

bitflags::bitflags! {
    /// Modifier and special-key flags reported for one key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct KeyFlags: u16 {
        const CTRL = 1 << 0;
        const META = 1 << 1;
        const SHIFT = 1 << 2;
        const ALT = 1 << 3;
        const RETURN = 1 << 4;
        const ESCAPE = 1 << 5;
        const UP_ARROW = 1 << 6;
        const DOWN_ARROW = 1 << 7;
        const LEFT_ARROW = 1 << 8;
        const RIGHT_ARROW = 1 << 9;
        const TAB = 1 << 10;
        const BACKSPACE = 1 << 11;
        const DELETE = 1 << 12;
    }
}

impl KeyFlags {
    /// The flag a terminal sets for `special`. Space has none; it arrives as text.
    pub fn for_special(special: SpecialKey) -> Option<KeyFlags> {
        match special {
            SpecialKey::Return => Some(Self::RETURN),
            SpecialKey::Escape => Some(Self::ESCAPE),
            SpecialKey::Space => None,
            SpecialKey::UpArrow => Some(Self::UP_ARROW),
            SpecialKey::DownArrow => Some(Self::DOWN_ARROW),
            SpecialKey::LeftArrow => Some(Self::LEFT_ARROW),
            SpecialKey::RightArrow => Some(Self::RIGHT_ARROW),
            SpecialKey::Tab => Some(Self::TAB),
            SpecialKey::Backspace => Some(Self::BACKSPACE),
            SpecialKey::Delete => Some(Self::DELETE),
        }
    }
}

/// One key press: the printable text (possibly empty) and its flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputEvent {
    pub input: String,
    pub flags: KeyFlags,
}

impl InputEvent {
    pub fn new(input: impl Into<String>, flags: KeyFlags) -> Self {
        Self {
            input: input.into(),
            flags,
        }
    }

    /// A plain printable character with no modifiers.
    pub fn char(c: char) -> Self {
        Self::new(c.to_string(), KeyFlags::empty())
    }

    /// A special key press with no modifiers.
    pub fn special(special: SpecialKey) -> Self {
        match KeyFlags::for_special(special) {
            Some(flag) => Self::new("", flag),
            None => Self::char(' '),
        }
    }

    pub fn with(mut self, flags: KeyFlags) -> Self {
        self.flags |= flags;
        self
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(key: KeyEvent) -> Self {
        let mut flags = modifiers_to_flags(key.modifiers);
        let mut input = String::new();

        match key.code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Enter => flags |= KeyFlags::RETURN,
            KeyCode::Esc => flags |= KeyFlags::ESCAPE,
            KeyCode::Up => flags |= KeyFlags::UP_ARROW,
            KeyCode::Down => flags |= KeyFlags::DOWN_ARROW,
            KeyCode::Left => flags |= KeyFlags::LEFT_ARROW,
            KeyCode::Right => flags |= KeyFlags::RIGHT_ARROW,
            KeyCode::Tab => flags |= KeyFlags::TAB,
            KeyCode::BackTab => flags |= KeyFlags::TAB | KeyFlags::SHIFT,
            KeyCode::Backspace => flags |= KeyFlags::BACKSPACE,
            KeyCode::Delete => flags |= KeyFlags::DELETE,
            _ => {}
        }

        Self { input, flags }
    }
}

/// Converts crossterm KeyModifiers to modifier flags.
fn modifiers_to_flags(modifiers: KeyModifiers) -> KeyFlags {
    let mut flags = KeyFlags::empty();
    if modifiers.contains(KeyModifiers::CONTROL) {
        flags |= KeyFlags::CTRL;
    }
    if modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        flags |= KeyFlags::META;
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        flags |= KeyFlags::SHIFT;
    }
    if modifiers.contains(KeyModifiers::ALT) {
        flags |= KeyFlags::ALT;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_ctrl_char() {
        let event = InputEvent::from(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL));
        assert_eq!(event.input, "b");
        assert_eq!(event.flags, KeyFlags::CTRL);
    }

    #[test]
    fn converts_special_keys_to_flags() {
        let event = InputEvent::from(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(event.input.is_empty());
        assert_eq!(event.flags, KeyFlags::ESCAPE);

        let event = InputEvent::from(KeyEvent::new(KeyCode::Up, KeyModifiers::ALT));
        assert_eq!(event.flags, KeyFlags::UP_ARROW | KeyFlags::ALT);
    }

    #[test]
    fn converts_backtab_to_shift_tab() {
        let event = InputEvent::from(KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE));
        assert_eq!(event.flags, KeyFlags::TAB | KeyFlags::SHIFT);
    }

    #[test]
    fn converts_super_to_meta() {
        let event = InputEvent::from(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER));
        assert_eq!(event.flags, KeyFlags::META);
    }

    #[test]
    fn ignores_unmapped_keys() {
        let event = InputEvent::from(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!(event, InputEvent::default());
    }

    #[test]
    fn space_arrives_as_text() {
        assert_eq!(InputEvent::special(SpecialKey::Space).input, " ");
        assert_eq!(
            InputEvent::from(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)).input,
            " "
        );
    }
}
