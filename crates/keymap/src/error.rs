//! Error types for the keymap engine.
//!
//! Only wiring mistakes are errors. Degenerate input (malformed combo text,
//! unknown ids) resolves to harmless no-ops instead.

use thiserror::Error;

/// Errors raised by keymap handles and the binding facade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeymapError {
    /// A handle was used after its `Keymap` was dropped, or was never
    /// attached to one.
    #[error("'{operation}' requires an active Keymap, but the handle is not attached to one")]
    ProviderUnavailable {
        /// The operation that was attempted
        operation: &'static str,
    },
}
