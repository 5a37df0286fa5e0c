//! Built-in keymap presets.
//!
//! Responsibilities:
//! - Provide the default, vim and emacs binding sets.
//!
//! Invariants:
//! - Preset handlers are no-ops. Applications attach real actions by
//!   re-registering the id or via `Keymap::replace_handler`.
//! - Vim and emacs presets extend the default set; their extra bindings are
//!   scoped to "vim" and "emacs".
//! - Binding order is stable for deterministic help output.

use keymap_config::KeymapPreset;

use crate::binding::{Binding, BindingOptions, handler};

struct PresetEntry {
    id: &'static str,
    combo: &'static str,
    description: &'static str,
    category: &'static str,
    priority: i32,
}

const fn entry(
    id: &'static str,
    combo: &'static str,
    description: &'static str,
    category: &'static str,
    priority: i32,
) -> PresetEntry {
    PresetEntry {
        id,
        combo,
        description,
        category,
        priority,
    }
}

const DEFAULT_ENTRIES: &[PresetEntry] = &[
    entry("palette.toggle", "ctrl+x", "Toggle Command Palette", "Global", 100),
    entry("app.exit", "ctrl+c", "Exit Application", "Global", 100),
    entry("navigation.back", "escape", "Go Back / Close", "Global", 50),
    entry("session.new", "ctrl+n", "New Session", "Session", 0),
    entry("session.undo", "ctrl+z", "Undo", "Session", 0),
    entry("session.redo", "ctrl+y", "Redo", "Session", 0),
    entry("sidebar.toggle", "ctrl+b", "Toggle Sidebar", "View", 0),
    entry("fullscreen.toggle", "ctrl+f", "Toggle Fullscreen", "View", 0),
    entry("theme.toggle", "ctrl+t", "Toggle Theme", "View", 0),
    entry("nav.up", "up", "Navigate Up", "Navigation", 10),
    entry("nav.down", "down", "Navigate Down", "Navigation", 10),
    entry("nav.select", "enter", "Select", "Navigation", 10),
];

const VIM_ENTRIES: &[PresetEntry] = &[
    entry("vim.up", "k", "Navigate Up (Vim)", "Vim", 0),
    entry("vim.down", "j", "Navigate Down (Vim)", "Vim", 0),
    entry("vim.top", "g", "Go to Top (Vim)", "Vim", 0),
    // `g` also fires on Shift+G, so the shifted binding must outrank it.
    entry("vim.bottom", "shift+g", "Go to Bottom (Vim)", "Vim", 1),
];

const EMACS_ENTRIES: &[PresetEntry] = &[
    entry("emacs.up", "ctrl+p", "Navigate Up (Emacs)", "Emacs", 0),
    entry("emacs.down", "ctrl+n", "Navigate Down (Emacs)", "Emacs", 0),
    entry("emacs.bol", "ctrl+a", "Beginning of Line (Emacs)", "Emacs", 0),
    entry("emacs.eol", "ctrl+e", "End of Line (Emacs)", "Emacs", 0),
];

fn build(entries: &[PresetEntry], scope: Option<&str>) -> impl Iterator<Item = Binding> {
    entries.iter().map(move |e| {
        let mut options = BindingOptions::default()
            .description(e.description)
            .category(e.category)
            .priority(e.priority);
        if let Some(scope) = scope {
            options = options.scope(scope);
        }
        Binding::with_options(e.id, e.combo, handler(|| {}), options)
    })
}

/// The global, session, view and navigation bindings.
pub fn default_bindings() -> Vec<Binding> {
    build(DEFAULT_ENTRIES, None).collect()
}

/// All bindings for `preset`, in registration order.
pub fn preset_bindings(preset: KeymapPreset) -> Vec<Binding> {
    let extra: &[PresetEntry] = match preset {
        KeymapPreset::Default => &[],
        KeymapPreset::Vim => VIM_ENTRIES,
        KeymapPreset::Emacs => EMACS_ENTRIES,
    };
    let mut bindings = default_bindings();
    bindings.extend(build(extra, preset.scope()));
    bindings
}
