//! The keymap provider: an owned registry plus its active scope.
//!
//! Responsibilities:
//! - Own the registry store and scope controller for one keymap instance.
//! - Run dispatch turns against the current registry snapshot.
//! - Hand out weak `KeymapHandle`s to UI components.
//!
//! Does NOT handle:
//! - Reading terminal events (the caller's event loop feeds `dispatch`).
//! - Lifetime-bound registration (see `facade`).
//!
//! Invariants:
//! - There is no global keymap. Each `Keymap` is independent.
//! - No registry borrow is held while a handler runs, so handlers may
//!   register, unregister or change scope. Those changes apply from the next
//!   event on.
//! - Handles fail loudly with `KeymapError::ProviderUnavailable` once the
//!   owning `Keymap` is dropped.
//! - Handler panics are not caught.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crossterm::event::KeyEvent;
use keymap_config::{KeyCombo, KeymapConfig, parse_key_combo};

use crate::binding::{Binding, Handler};
use crate::conflicts::{Conflict, conflicts};
use crate::dispatcher::{self, DispatchOutcome};
use crate::error::KeymapError;
use crate::input::InputEvent;
use crate::presets::preset_bindings;
use crate::registry::Registry;
use crate::scope::ScopeController;

#[derive(Debug)]
struct KeymapState {
    registry: Registry,
    scope: ScopeController,
    active: bool,
}

impl KeymapState {
    fn insert(&mut self, binding: Binding) {
        let id = binding.id.clone();
        if self.registry.insert(binding).is_some() {
            tracing::debug!(id = %id, "Replaced keybinding");
        } else {
            tracing::debug!(id = %id, "Registered keybinding");
        }
    }

    fn remove(&mut self, id: &str) {
        if self.registry.remove(id).is_some() {
            tracing::debug!(id = %id, "Unregistered keybinding");
        }
    }

    fn set_enabled(&mut self, id: &str, enabled: bool) {
        if self.registry.set_enabled(id, enabled) {
            tracing::debug!(id = %id, enabled, "Toggled keybinding");
        }
    }

    fn set_scope(&mut self, scope: Option<&str>) {
        let previous = self.scope.set(scope.map(str::to_string));
        tracing::debug!(from = ?previous, to = ?scope, "Changed keymap scope");
    }
}

type SharedState = Rc<RefCell<KeymapState>>;

fn register_on(state: &SharedState, binding: Binding) -> Registration {
    let id = binding.id.clone();
    state.borrow_mut().insert(binding);
    Registration {
        id,
        state: Rc::downgrade(state),
    }
}

fn dispatch_on(state: &SharedState, event: &InputEvent) -> DispatchOutcome {
    let selected = {
        let state = state.borrow();
        if !state.active {
            return DispatchOutcome::Unhandled;
        }
        dispatcher::select(&state.registry, state.scope.get(), event)
    };

    match selected {
        Some((id, handler)) => {
            tracing::debug!(id = %id, "Dispatching keybinding");
            handler();
            DispatchOutcome::Handled { id }
        }
        None => {
            tracing::trace!(input = %event.input, flags = ?event.flags, "No keybinding matched");
            DispatchOutcome::Unhandled
        }
    }
}

/// Removes one registered id when invoked.
///
/// Dropping a `Registration` without calling `unregister` leaves the binding
/// in place. Use the facade guards for drop-based cleanup.
#[derive(Debug)]
pub struct Registration {
    id: String,
    state: Weak<RefCell<KeymapState>>,
}

impl Registration {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remove the registered id. A no-op if the keymap is gone or the id was
    /// already removed.
    pub fn unregister(self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().remove(&self.id);
        }
    }
}

/// An independent keybinding registry with its own scope.
#[derive(Debug)]
pub struct Keymap {
    state: SharedState,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl Keymap {
    /// An empty, active keymap with no scope.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(KeymapState {
                registry: Registry::new(),
                scope: ScopeController::default(),
                active: true,
            })),
        }
    }

    /// A keymap with `defaults` registered in order.
    pub fn with_defaults(defaults: impl IntoIterator<Item = Binding>) -> Self {
        let keymap = Self::new();
        for binding in defaults {
            keymap.register(binding);
        }
        keymap
    }

    /// Build a keymap from a preset, then apply overrides, disabled ids,
    /// the initial scope and the active flag.
    ///
    /// Preset bindings carry no-op handlers; attach real ones with
    /// `replace_handler` or by registering the same id again.
    pub fn from_config(config: &KeymapConfig) -> Self {
        let keymap = Self::with_defaults(preset_bindings(config.preset));

        if !config.is_pristine() {
            keymap.apply_overrides(config);
        }

        keymap.set_scope(config.initial_scope().as_deref());
        keymap.set_active(config.active);

        for conflict in keymap.conflicts() {
            tracing::debug!(
                combo = %conflict.combo,
                scope = ?conflict.scope,
                winner = %conflict.winner,
                shadowed = ?conflict.shadowed,
                "Keybinding conflict"
            );
        }

        tracing::info!(
            "Loaded keymap preset '{}' with {} binding(s) and {} override(s)",
            config.preset,
            keymap.len(),
            config.overrides.len()
        );
        keymap
    }

    fn apply_overrides(&self, config: &KeymapConfig) {
        for binding in self.bindings() {
            if let Some(text) = config.override_for(&binding.id) {
                self.register(Binding {
                    combo: parse_key_combo(text),
                    ..binding
                });
            }
        }
        for (id, text) in &config.overrides {
            if !self.has_binding(id) {
                tracing::warn!(id = %id, combo = %text, "Keybinding override names an unknown binding, ignoring");
            }
        }

        for id in &config.disabled {
            if !self.has_binding(id) {
                tracing::warn!(id = %id, "Cannot disable unknown keybinding, ignoring");
            }
            self.set_enabled(id, false);
        }
    }

    /// A weak handle for components that must not keep the keymap alive.
    pub fn handle(&self) -> KeymapHandle {
        KeymapHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Insert or replace the binding with `binding.id`.
    pub fn register(&self, binding: Binding) -> Registration {
        register_on(&self.state, binding)
    }

    pub fn unregister(&self, id: &str) {
        self.state.borrow_mut().remove(id);
    }

    pub fn set_enabled(&self, id: &str, enabled: bool) {
        self.state.borrow_mut().set_enabled(id, enabled);
    }

    /// Re-register `id` with a new handler, keeping every other field.
    /// Returns false if the id is unknown.
    pub fn replace_handler(&self, id: &str, handler: Handler) -> bool {
        match self.binding(id) {
            Some(existing) => {
                self.register(Binding {
                    handler,
                    ..existing
                });
                true
            }
            None => false,
        }
    }

    pub fn binding(&self, id: &str) -> Option<Binding> {
        self.state.borrow().registry.get(id).cloned()
    }

    pub fn bindings(&self) -> Vec<Binding> {
        self.state.borrow().registry.snapshot()
    }

    pub fn bindings_by_category(&self, category: &str) -> Vec<Binding> {
        self.state.borrow().registry.by_category(category)
    }

    pub fn categories(&self) -> Vec<String> {
        self.state.borrow().registry.categories()
    }

    pub fn has_binding(&self, id: &str) -> bool {
        self.state.borrow().registry.contains(id)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().registry.is_empty()
    }

    pub fn set_scope(&self, scope: Option<&str>) {
        self.state.borrow_mut().set_scope(scope);
    }

    pub fn scope(&self) -> Option<String> {
        self.state.borrow().scope.get().map(str::to_string)
    }

    /// An inactive keymap leaves every event unhandled.
    pub fn set_active(&self, active: bool) {
        self.state.borrow_mut().active = active;
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    /// Run one dispatch turn.
    pub fn dispatch(&self, event: &InputEvent) -> DispatchOutcome {
        dispatch_on(&self.state, event)
    }

    pub fn dispatch_key(&self, key: KeyEvent) -> DispatchOutcome {
        self.dispatch(&InputEvent::from(key))
    }

    /// Groups of enabled bindings that shadow one another.
    pub fn conflicts(&self) -> Vec<Conflict> {
        conflicts(&self.bindings())
    }

    pub fn parse_key_combo(text: &str) -> KeyCombo {
        parse_key_combo(text)
    }

    pub fn format_key_combo(combo: &KeyCombo) -> String {
        keymap_config::format_key_combo(combo)
    }
}

/// A non-owning reference to a `Keymap`.
///
/// Every operation returns `KeymapError::ProviderUnavailable` once the keymap
/// is gone.
#[derive(Debug, Clone, Default)]
pub struct KeymapHandle {
    state: Weak<RefCell<KeymapState>>,
}

impl KeymapHandle {
    /// A handle attached to no keymap. Every operation fails.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.state.strong_count() > 0
    }

    fn state(&self, operation: &'static str) -> Result<SharedState, KeymapError> {
        self.state
            .upgrade()
            .ok_or(KeymapError::ProviderUnavailable { operation })
    }

    pub fn register(&self, binding: Binding) -> Result<Registration, KeymapError> {
        let state = self.state("register")?;
        Ok(register_on(&state, binding))
    }

    pub fn unregister(&self, id: &str) -> Result<(), KeymapError> {
        self.state("unregister")?.borrow_mut().remove(id);
        Ok(())
    }

    pub fn set_enabled(&self, id: &str, enabled: bool) -> Result<(), KeymapError> {
        self.state("set_enabled")?
            .borrow_mut()
            .set_enabled(id, enabled);
        Ok(())
    }

    pub fn bindings(&self) -> Result<Vec<Binding>, KeymapError> {
        Ok(self.state("bindings")?.borrow().registry.snapshot())
    }

    pub fn bindings_by_category(&self, category: &str) -> Result<Vec<Binding>, KeymapError> {
        Ok(self
            .state("bindings_by_category")?
            .borrow()
            .registry
            .by_category(category))
    }

    pub fn has_binding(&self, id: &str) -> Result<bool, KeymapError> {
        Ok(self.state("has_binding")?.borrow().registry.contains(id))
    }

    pub fn set_scope(&self, scope: Option<&str>) -> Result<(), KeymapError> {
        self.state("set_scope")?.borrow_mut().set_scope(scope);
        Ok(())
    }

    pub fn scope(&self) -> Result<Option<String>, KeymapError> {
        Ok(self
            .state("scope")?
            .borrow()
            .scope
            .get()
            .map(str::to_string))
    }

    pub fn dispatch(&self, event: &InputEvent) -> Result<DispatchOutcome, KeymapError> {
        let state = self.state("dispatch")?;
        Ok(dispatch_on(&state, event))
    }
}
