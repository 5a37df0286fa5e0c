//! Architecture tests for module size limits.
//!
//! Each module in the keymap workspace owns one concern (codec, matcher,
//! registry, dispatcher, facade). A module growing past these limits has
//! usually absorbed a second concern.
//!
//! - Files >400 LOC produce a warning.
//! - Files >600 LOC fail the test.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const WARNING_THRESHOLD: usize = 400;
const FAILURE_THRESHOLD: usize = 600;

#[test]
fn module_size_limits() {
    let workspace_root = find_workspace_root();
    let crates_dir = workspace_root.join("crates");
    assert!(
        crates_dir.exists(),
        "crates/ directory not found at {:?}",
        crates_dir
    );

    let mut failures = Vec::new();
    let mut checked = 0;

    for path in rust_files(&crates_dir) {
        checked += 1;
        let loc = count_loc(&path);
        let relative = path.strip_prefix(&workspace_root).unwrap_or(&path);
        if loc > FAILURE_THRESHOLD {
            failures.push(format!("  - {}: {} lines", relative.display(), loc));
        } else if loc > WARNING_THRESHOLD {
            eprintln!(
                "[architecture] {}: {} LOC exceeds {}",
                relative.display(),
                loc,
                WARNING_THRESHOLD
            );
        }
    }

    assert!(
        failures.is_empty(),
        "\nFiles exceeding {} LOC:\n{}\nSplit them by concern.\n",
        FAILURE_THRESHOLD,
        failures.join("\n")
    );
    eprintln!("[architecture] Checked {} Rust files for size limits.", checked);
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.path().components().any(|c| c.as_os_str() == "target"))
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.into_path())
        .collect()
}

/// Count non-blank, non-comment lines.
fn count_loc(path: &Path) -> usize {
    let content = fs::read_to_string(path).expect("Failed to read file");
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .count()
}

fn find_workspace_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    loop {
        let manifest = dir.join("Cargo.toml");
        if manifest.exists()
            && fs::read_to_string(&manifest)
                .map(|content| content.contains("[workspace]"))
                .unwrap_or(false)
        {
            return dir;
        }
        assert!(dir.pop(), "Could not find workspace root");
    }
}
