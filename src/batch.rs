//! Workspace-wide literal search and replace over function files.

use crate::error::Result;
use crate::workspace::{self, read_lossy};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Relative path to 1-based line numbers containing the needle, sorted by
/// path for stable output.
pub fn find_occurrences(root: &Path, needle: &str) -> BTreeMap<String, Vec<usize>> {
    let mut matches: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for file in workspace::function_files(root) {
        let Ok(content) = read_lossy(&file.path) else {
            continue;
        };
        for (idx, line) in content.lines().enumerate() {
            if line.contains(needle) {
                matches.entry(file.rel.clone()).or_default().push(idx + 1);
            }
        }
    }
    matches
}

/// Replace every occurrence of `needle` across all function files. Returns
/// the number of files changed. With `dry_run` nothing is written; the
/// count reports what would change.
pub fn replace_in_workspace(
    root: &Path,
    needle: &str,
    replacement: &str,
    dry_run: bool,
) -> Result<usize> {
    let mut changed = 0;
    for file in workspace::function_files(root) {
        let Ok(content) = read_lossy(&file.path) else {
            continue;
        };
        if !content.contains(needle) {
            continue;
        }
        let new_content = content.replace(needle, replacement);
        if new_content != content {
            if !dry_run {
                fs::write(&file.path, new_content)?;
            }
            changed += 1;
        }
    }
    Ok(changed)
}
