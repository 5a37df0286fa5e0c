//! Shared helpers for keymap integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keymap::{Handler, InputEvent, handler};

/// Records the ids of handlers in the order they ran.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that appends `name` to the log.
    pub fn handler(&self, name: &str) -> Handler {
        let calls = self.calls.clone();
        let name = name.to_string();
        handler(move || calls.borrow_mut().push(name.clone()))
    }

    /// Drain and return the recorded calls.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}

pub fn char_key(c: char) -> InputEvent {
    InputEvent::from(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

pub fn ctrl_key(c: char) -> InputEvent {
    InputEvent::from(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn code_key(code: KeyCode) -> InputEvent {
    InputEvent::from(KeyEvent::new(code, KeyModifiers::NONE))
}
