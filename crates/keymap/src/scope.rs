//! Scope controller: the single active scope, or none.
//!
//! Setting a scope overwrites the previous one. There is no stack; callers
//! that need to restore a previous scope track it themselves.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScopeController {
    current: Option<String>,
}

impl ScopeController {
    pub fn new(initial: Option<String>) -> Self {
        Self { current: initial }
    }

    /// Replace the active scope. Returns the previous value.
    pub fn set(&mut self, scope: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.current, scope)
    }

    pub fn get(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
