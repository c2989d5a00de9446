//! Lightweight shape checks for pack JSON files.
//!
//! Each known directory kind gets a required-keys check. This is a fast
//! pre-flight, not a full schema validation.

use serde_json::Value;
use std::path::Path;

use crate::workspace::read_lossy;
use ignore::WalkBuilder;
use rayon::prelude::*;

/// Directory names that identify a JSON kind, in guess order.
const KINDS: &[&str] = &[
    "recipes",
    "loot_tables",
    "advancements",
    "predicates",
    "tags",
];

fn validate_recipe(data: &Value) -> Vec<String> {
    let mut issues = Vec::new();
    let ty = data.get("type").and_then(Value::as_str);
    if !matches!(
        ty,
        Some("minecraft:crafting_shaped") | Some("minecraft:crafting_shapeless")
    ) {
        issues.push("type is not crafting_shaped/shapeless".to_string());
    }
    if data.get("result").is_none() {
        issues.push("result missing".to_string());
    }
    issues
}

fn validate_loot(data: &Value) -> Vec<String> {
    if data.get("pools").is_none() {
        vec!["pools missing".to_string()]
    } else {
        Vec::new()
    }
}

fn validate_advancement(data: &Value) -> Vec<String> {
    let mut issues = Vec::new();
    if data.get("criteria").is_none() {
        issues.push("criteria missing".to_string());
    }
    if data.get("display").is_none() {
        issues.push("display missing".to_string());
    }
    issues
}

fn validate_predicate(data: &Value) -> Vec<String> {
    if data.get("condition").is_none() {
        vec!["condition missing".to_string()]
    } else {
        Vec::new()
    }
}

fn validate_tag(data: &Value) -> Vec<String> {
    if data.get("values").is_none() {
        vec!["values missing".to_string()]
    } else {
        Vec::new()
    }
}

fn validate_kind(kind: &str, data: &Value) -> Vec<String> {
    match kind {
        "recipes" => validate_recipe(data),
        "loot_tables" => validate_loot(data),
        "advancements" => validate_advancement(data),
        "predicates" => validate_predicate(data),
        "tags" => validate_tag(data),
        _ => Vec::new(),
    }
}

/// Guess the JSON kind from a path component, `None` for unrecognized
/// locations.
pub fn guess_kind(path: &Path) -> Option<&'static str> {
    for component in path.components() {
        let name = component.as_os_str().to_string_lossy();
        if let Some(kind) = KINDS.iter().find(|k| **k == name) {
            return Some(kind);
        }
    }
    None
}

/// Validate one JSON file by its guessed kind.
pub fn validate_file(path: &Path) -> Vec<String> {
    let Some(kind) = guess_kind(path) else {
        return vec!["unknown JSON kind (path guess failed)".to_string()];
    };
    match read_lossy(path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str::<Value>(&s).map_err(|e| e.to_string()))
    {
        Ok(data) => {
            let issues = validate_kind(kind, &data);
            if issues.is_empty() {
                vec![format!("{}: OK", kind)]
            } else {
                issues
            }
        }
        Err(e) => vec![format!("parse failed: {}", e)],
    }
}

/// Walk every recognizable JSON file under the workspace and report
/// findings as `rel/path: message` lines, sorted. Clean scans get a
/// single all-clear line. File checks run in parallel.
pub fn scan_workspace_json(root: &Path) -> Vec<String> {
    let mut candidates: Vec<std::path::PathBuf> = Vec::new();
    for entry in WalkBuilder::new(root)
        .git_ignore(true)
        .hidden(true)
        .follow_links(false)
        .build()
        .flatten()
    {
        let path = entry.path();
        if path.extension().is_some_and(|e| e == "json") && guess_kind(path).is_some() {
            candidates.push(path.to_path_buf());
        }
    }

    let mut results: Vec<String> = candidates
        .par_iter()
        .flat_map_iter(|full| {
            let rel = full
                .strip_prefix(root)
                .unwrap_or(full)
                .to_string_lossy()
                .replace('\\', "/");
            let kind = guess_kind(full).unwrap_or("json");
            let findings = match read_lossy(full)
                .map_err(|e| e.to_string())
                .and_then(|s| serde_json::from_str::<Value>(&s).map_err(|e| e.to_string()))
            {
                Ok(data) => validate_kind(kind, &data),
                Err(e) => vec![format!("parse failed: {}", e)],
            };
            findings
                .into_iter()
                .map(move |msg| format!("{}: {}", rel, msg))
                .collect::<Vec<_>>()
        })
        .collect();

    results.sort();
    if results.is_empty() {
        results.push("no issues found in scanned JSON files".to_string());
    }
    results
}
