//! Binding records.
//!
//! Invariants:
//! - A binding is immutable once registered except for `enabled`.
//! - `priority` defaults to 0 and `enabled` to true.
//! - A binding without `scope` is eligible in every scope.

use std::fmt;
use std::rc::Rc;

use keymap_config::KeyCombo;

/// Zero-argument action invoked when a binding wins a dispatch turn.
pub type Handler = Rc<dyn Fn()>;

/// Wrap a closure as a `Handler`.
pub fn handler(f: impl Fn() + 'static) -> Handler {
    Rc::new(f)
}

/// Metadata and eligibility options shared by `Binding` and the facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingOptions {
    pub description: Option<String>,
    pub category: Option<String>,
    pub enabled: bool,
    pub priority: i32,
    pub scope: Option<String>,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            description: None,
            category: None,
            enabled: true,
            priority: 0,
            scope: None,
        }
    }
}

impl BindingOptions {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

/// One registered shortcut.
#[derive(Clone)]
pub struct Binding {
    pub id: String,
    pub combo: KeyCombo,
    pub handler: Handler,
    pub description: Option<String>,
    pub category: Option<String>,
    pub enabled: bool,
    pub priority: i32,
    pub scope: Option<String>,
}

impl Binding {
    /// A binding with default options. Text combos are parsed.
    pub fn new(id: impl Into<String>, combo: impl Into<KeyCombo>, handler: Handler) -> Self {
        Self::with_options(id, combo, handler, BindingOptions::default())
    }

    pub fn with_options(
        id: impl Into<String>,
        combo: impl Into<KeyCombo>,
        handler: Handler,
        options: BindingOptions,
    ) -> Self {
        let BindingOptions {
            description,
            category,
            enabled,
            priority,
            scope,
        } = options;
        Self {
            id: id.into(),
            combo: combo.into(),
            handler,
            description,
            category,
            enabled,
            priority,
            scope,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// True when the binding's scope admits `current`.
    pub fn in_scope(&self, current: Option<&str>) -> bool {
        match self.scope.as_deref() {
            None => true,
            Some(scope) => current == Some(scope),
        }
    }

    /// Options view of this binding, used when re-registering it.
    pub fn options(&self) -> BindingOptions {
        BindingOptions {
            description: self.description.clone(),
            category: self.category.clone(),
            enabled: self.enabled,
            priority: self.priority,
            scope: self.scope.clone(),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("id", &self.id)
            .field("combo", &self.combo.to_string())
            .field("description", &self.description)
            .field("category", &self.category)
            .field("enabled", &self.enabled)
            .field("priority", &self.priority)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
