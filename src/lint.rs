//! Quick format lint for `.mcfunction` files.
//!
//! Not a syntax checker. Flags the handful of formatting slips that keep
//! showing up in shared packs: stray trailing spaces, tabs, and indentation
//! that the game ignores anyway.

use crate::workspace::{self, read_lossy};
use rayon::prelude::*;
use std::path::Path;

/// One finding, already formatted as `rel/path: message`.
pub type LintFinding = String;

/// Lint a single file body. Line numbers are 1-based.
pub fn lint_content(content: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if content.is_empty() {
        issues.push("empty file".to_string());
        return issues;
    }
    for (idx, line) in content.lines().enumerate() {
        let n = idx + 1;
        if line.ends_with(' ') {
            issues.push(format!("line {}: trailing whitespace", n));
        }
        if line.contains('\t') {
            issues.push(format!("line {}: tab character (use spaces)", n));
        }
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with("    ") {
            issues.push(format!("line {}: 4-space indent (likely unintended)", n));
        }
    }
    issues
}

/// Lint every function file in the workspace. Returns human-readable
/// findings; a clean workspace gets a single all-clear line.
pub fn lint_workspace(root: &Path) -> Vec<LintFinding> {
    let files = workspace::function_files(root);
    if files.is_empty() {
        return vec!["no mcfunction files to check".to_string()];
    }

    let mut results: Vec<LintFinding> = files
        .par_iter()
        .flat_map_iter(|file| {
            let issues = match read_lossy(&file.path) {
                Ok(content) => lint_content(&content),
                Err(e) => vec![format!("unreadable: {}", e)],
            };
            issues
                .into_iter()
                .map(|msg| format!("{}: {}", file.rel, msg))
                .collect::<Vec<_>>()
        })
        .collect();

    if results.is_empty() {
        results.push("all mcfunction files pass basic format checks".to_string());
    }
    results
}
