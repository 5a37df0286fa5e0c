//! Registry store: the authoritative `id -> Binding` table.
//!
//! Responsibilities:
//! - Insert, replace, remove and enable/disable bindings by id.
//! - Provide snapshot reads for help overlays and command palettes.
//!
//! Does NOT handle:
//! - Choosing which binding fires (see `dispatcher`).
//! - Shared ownership or handles (see `keymap`).
//!
//! Invariants:
//! - Ids are unique. Inserting an existing id replaces the binding in place,
//!   keeping its position in insertion order.
//! - Removal preserves the relative order of the remaining bindings.
//! - Unknown ids are no-ops, never errors.
//! - Reads return owned snapshots; mutating them does not touch the store.

use indexmap::IndexMap;

use crate::binding::Binding;

#[derive(Debug, Default, Clone)]
pub struct Registry {
    bindings: IndexMap<String, Binding>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a binding. Returns the replaced binding, if any.
    pub fn insert(&mut self, binding: Binding) -> Option<Binding> {
        self.bindings.insert(binding.id.clone(), binding)
    }

    /// Remove a binding by id.
    pub fn remove(&mut self, id: &str) -> Option<Binding> {
        self.bindings.shift_remove(id)
    }

    /// Set the enabled flag. Returns false if the id is unknown.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.bindings.get_mut(id) {
            Some(binding) => {
                binding.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Binding> {
        self.bindings.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bindings.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    pub fn snapshot(&self) -> Vec<Binding> {
        self.iter().cloned().collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<Binding> {
        self.iter()
            .filter(|binding| binding.category.as_deref() == Some(category))
            .cloned()
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for category in self.iter().filter_map(|b| b.category.as_deref()) {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        categories
    }
}
