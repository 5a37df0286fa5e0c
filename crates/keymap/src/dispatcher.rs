//! Dispatcher: resolves one input event to at most one handler.
//!
//! Responsibilities:
//! - Select eligible bindings (enabled, in scope, combo matches).
//! - Order them by priority, highest first, keeping insertion order on ties.
//! - Pick the single winner for a dispatch turn.
//!
//! Does NOT handle:
//! - Invoking the handler (done by `Keymap::dispatch` after releasing the
//!   registry borrow, so handlers may mutate the keymap).
//!
//! Invariants:
//! - Stateless across events; each turn reads the current registry and scope.
//! - At most one handler runs per event. There is no fall-through.

use std::cmp::Reverse;

use crate::binding::{Binding, Handler};
use crate::input::InputEvent;
use crate::matcher::matches;
use crate::registry::Registry;

/// Result of one dispatch turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler of the binding with this id ran.
    Handled { id: String },
    /// No binding matched; the event passes through untouched.
    Unhandled,
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    pub fn handled_id(&self) -> Option<&str> {
        match self {
            Self::Handled { id } => Some(id),
            Self::Unhandled => None,
        }
    }
}

/// All bindings eligible for `event`, best candidate first.
pub fn candidates<'a>(
    registry: &'a Registry,
    scope: Option<&str>,
    event: &InputEvent,
) -> Vec<&'a Binding> {
    let mut candidates: Vec<&Binding> = registry
        .iter()
        .filter(|binding| binding.enabled)
        .filter(|binding| binding.in_scope(scope))
        .filter(|binding| matches(event, &binding.combo))
        .collect();
    // sort_by_key is stable: equal priorities keep registration order.
    candidates.sort_by_key(|binding| Reverse(binding.priority));
    candidates
}

/// The winning binding's id and handler, detached from the registry.
pub(crate) fn select(
    registry: &Registry,
    scope: Option<&str>,
    event: &InputEvent,
) -> Option<(String, Handler)> {
    let candidates = candidates(registry, scope, event);
    let winner = candidates.first()?;
    if candidates.len() > 1 {
        tracing::trace!(
            winner = %winner.id,
            skipped = candidates.len() - 1,
            "Multiple bindings matched key event"
        );
    }
    Some((winner.id.clone(), winner.handler.clone()))
}
