//! Lifetime-bound binding registration for UI components.
//!
//! Responsibilities:
//! - Register one or many bindings and remove them when the owner is torn
//!   down (`BindingGuard`, `BindingGroup`).
//! - Track declared inputs and re-register when they change (`Keybind`,
//!   `Keybinds`).
//!
//! Does NOT handle:
//! - Merging declarations. A changed declaration is a full replacement:
//!   the old registration is removed before the new one is added.
//!
//! Invariants:
//! - Every guard unregisters its id exactly once, on `dispose` or drop.
//! - Handler identity is pointer identity (`Rc::ptr_eq`).
//! - Using a handle whose keymap is gone fails with
//!   `KeymapError::ProviderUnavailable` and registers nothing.

use std::rc::Rc;

use keymap_config::KeyCombo;

use crate::binding::{Binding, BindingOptions, Handler};
use crate::error::KeymapError;
use crate::keymap::{KeymapHandle, Registration};

/// A binding a component wants registered for as long as it lives.
#[derive(Clone)]
pub struct BindingDecl {
    pub id: String,
    pub combo: KeyCombo,
    pub handler: Handler,
    pub options: BindingOptions,
}

impl BindingDecl {
    /// Text combos are parsed.
    pub fn new(id: impl Into<String>, combo: impl Into<KeyCombo>, handler: Handler) -> Self {
        Self {
            id: id.into(),
            combo: combo.into(),
            handler,
            options: BindingOptions::default(),
        }
    }

    pub fn options(mut self, options: BindingOptions) -> Self {
        self.options = options;
        self
    }

    /// True when both declarations would register the same binding.
    pub fn same_as(&self, other: &BindingDecl) -> bool {
        self.id == other.id
            && self.combo == other.combo
            && Rc::ptr_eq(&self.handler, &other.handler)
            && self.options == other.options
    }

    fn to_binding(&self) -> Binding {
        Binding::with_options(
            self.id.clone(),
            self.combo.clone(),
            self.handler.clone(),
            self.options.clone(),
        )
    }
}

impl std::fmt::Debug for BindingDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingDecl")
            .field("id", &self.id)
            .field("combo", &self.combo.to_string())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Unregisters one binding when dropped.
#[must_use = "dropping a BindingGuard immediately unregisters its binding"]
#[derive(Debug)]
pub struct BindingGuard {
    registration: Option<Registration>,
}

impl BindingGuard {
    pub fn id(&self) -> &str {
        self.registration.as_ref().map_or("", Registration::id)
    }

    /// Unregister now instead of at drop.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.unregister();
        }
    }
}

impl Drop for BindingGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Unregisters a batch of bindings together when dropped.
#[must_use = "dropping a BindingGroup immediately unregisters its bindings"]
#[derive(Debug, Default)]
pub struct BindingGroup {
    guards: Vec<BindingGuard>,
}

impl BindingGroup {
    pub fn ids(&self) -> Vec<&str> {
        self.guards.iter().map(BindingGuard::id).collect()
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    pub fn dispose(self) {
        drop(self);
    }
}

/// Register one binding for the lifetime of the returned guard.
pub fn bind_one(
    keymap: &KeymapHandle,
    id: impl Into<String>,
    combo: impl Into<KeyCombo>,
    handler: Handler,
    options: BindingOptions,
) -> Result<BindingGuard, KeymapError> {
    let binding = Binding::with_options(id, combo, handler, options);
    let registration = keymap.register(binding)?;
    Ok(BindingGuard {
        registration: Some(registration),
    })
}

/// Register a batch of bindings, torn down together.
pub fn bind_many(
    keymap: &KeymapHandle,
    decls: impl IntoIterator<Item = BindingDecl>,
) -> Result<BindingGroup, KeymapError> {
    if !keymap.is_attached() {
        return Err(KeymapError::ProviderUnavailable {
            operation: "bind_many",
        });
    }
    let mut group = BindingGroup::default();
    for decl in decls {
        let registration = keymap.register(decl.to_binding())?;
        group.guards.push(BindingGuard {
            registration: Some(registration),
        });
    }
    Ok(group)
}

/// Keeps one declared binding registered, re-registering when the
/// declaration changes.
#[derive(Debug)]
pub struct Keybind {
    keymap: KeymapHandle,
    current: Option<(BindingDecl, BindingGuard)>,
}

impl Keybind {
    pub fn new(keymap: &KeymapHandle) -> Self {
        Self {
            keymap: keymap.clone(),
            current: None,
        }
    }

    /// Apply a declaration. Returns true if the binding was (re)registered.
    pub fn sync(&mut self, decl: BindingDecl) -> Result<bool, KeymapError> {
        if let Some((previous, _)) = &self.current
            && previous.same_as(&decl)
        {
            return Ok(false);
        }
        self.clear();
        let guard = bind_one(
            &self.keymap,
            decl.id.clone(),
            decl.combo.clone(),
            decl.handler.clone(),
            decl.options.clone(),
        )?;
        self.current = Some((decl, guard));
        Ok(true)
    }

    /// Unregister the current binding, if any.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }
}

/// Keeps a declared batch registered, re-registering the whole batch when
/// any declaration changes.
#[derive(Debug)]
pub struct Keybinds {
    keymap: KeymapHandle,
    current: Option<(Vec<BindingDecl>, BindingGroup)>,
}

impl Keybinds {
    pub fn new(keymap: &KeymapHandle) -> Self {
        Self {
            keymap: keymap.clone(),
            current: None,
        }
    }

    /// Apply a batch. Returns true if the batch was (re)registered.
    pub fn sync(&mut self, decls: Vec<BindingDecl>) -> Result<bool, KeymapError> {
        if let Some((previous, _)) = &self.current
            && previous.len() == decls.len()
            && previous.iter().zip(&decls).all(|(a, b)| a.same_as(b))
        {
            return Ok(false);
        }
        self.clear();
        let group = bind_many(&self.keymap, decls.iter().cloned())?;
        self.current = Some((decls, group));
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }
}
