//! Architecture tests for crate layering.
//!
//! The config crate holds the shortcut codec and configuration types and
//! must stay free of terminal dependencies, so that tools which only read or
//! write shortcut strings do not pull in crossterm. Only the keymap crate
//! talks to the terminal.

use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("architecture-tests lives at crates/architecture-tests")
}

fn dependency_section(manifest: &str) -> String {
    let mut out = String::new();
    let mut in_deps = false;
    for line in manifest.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_deps = trimmed == "[dependencies]";
            continue;
        }
        if in_deps {
            out.push_str(trimmed);
            out.push('\n');
        }
    }
    out
}

#[test]
fn config_crate_has_no_terminal_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("crates/config/Cargo.toml"))
        .expect("Failed to read crates/config/Cargo.toml");
    let deps = dependency_section(&manifest);

    for forbidden in ["crossterm", "keymap =", "indexmap"] {
        assert!(
            !deps.contains(forbidden),
            "crates/config must not depend on '{}':\n{}",
            forbidden,
            deps
        );
    }
}

#[test]
fn config_sources_do_not_reference_crossterm() {
    let src = workspace_root().join("crates/config/src");
    for entry in WalkDir::new(&src).into_iter().filter_map(Result::ok) {
        if entry.path().extension().is_some_and(|ext| ext == "rs") {
            let content = fs::read_to_string(entry.path()).expect("Failed to read source");
            assert!(
                !content.contains("crossterm::"),
                "{} references crossterm",
                entry.path().display()
            );
        }
    }
}
