//! Conflict report for overlapping bindings.
//!
//! Responsibilities:
//! - Find enabled bindings that one key press can fire at the same time:
//!   the same key, where one binding's modifiers are a subset of the
//!   other's (`g` also fires on Shift+G).
//! - Name the binding the dispatcher would pick and the ones it shadows.
//!
//! Does NOT handle:
//! - Rejecting conflicts. Overlap is legal; priority decides the winner.
//!
//! Invariants:
//! - `combo` is the press every listed binding matches: the combo with the
//!   most modifiers in the group.
//! - A conflict made only of unscoped bindings is reported once, with
//!   `scope: None`.
//! - A conflict under a named scope includes at least one binding scoped to it.
//! - Winner order matches the dispatcher: priority descending, then
//!   registration order.

use std::cmp::Reverse;

use keymap_config::KeyCombo;

use crate::binding::Binding;

/// Bindings that all fire on one key press under one effective scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub combo: KeyCombo,
    /// The active scope under which the bindings overlap. None means every scope.
    pub scope: Option<String>,
    pub winner: String,
    pub shadowed: Vec<String>,
}

/// Compute conflicts over `bindings`, which must be in registration order.
pub fn conflicts(bindings: &[Binding]) -> Vec<Conflict> {
    let mut views: Vec<Option<&str>> = vec![None];
    for scope in bindings.iter().filter_map(|b| b.scope.as_deref()) {
        if !views.contains(&Some(scope)) {
            views.push(Some(scope));
        }
    }

    let mut found = Vec::new();
    for view in views {
        let visible: Vec<&Binding> = bindings
            .iter()
            .filter(|b| b.enabled && b.in_scope(view) && !b.combo.key.is_empty())
            .collect();

        let mut presses: Vec<&KeyCombo> = Vec::new();
        for binding in &visible {
            if !presses.contains(&&binding.combo) {
                presses.push(&binding.combo);
            }
        }

        for press in presses {
            let mut members: Vec<&Binding> = visible
                .iter()
                .copied()
                .filter(|b| fires_on(&b.combo, press))
                .collect();
            if members.len() < 2 {
                continue;
            }
            if view.is_some() && members.iter().all(|b| b.scope.is_none()) {
                continue;
            }
            members.sort_by_key(|b| Reverse(b.priority));
            found.push(Conflict {
                combo: press.clone(),
                scope: view.map(str::to_string),
                winner: members[0].id.clone(),
                shadowed: members[1..].iter().map(|b| b.id.clone()).collect(),
            });
        }
    }
    found
}

/// Whether `combo` matches a key press made exactly as `press`.
fn fires_on(combo: &KeyCombo, press: &KeyCombo) -> bool {
    combo.key == press.key
        && (!combo.ctrl || press.ctrl)
        && (!combo.meta || press.meta)
        && (!combo.shift || press.shift)
        && (!combo.alt || press.alt)
}
