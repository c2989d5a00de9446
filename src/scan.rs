//! Structure audit for packs.
//!
//! Static checks only. This does not replicate the game's loader; it
//! catches the things people forget before shipping: a missing
//! pack.mcmeta, an empty data tree, load/tick tags that never got written.

use crate::workspace::{PackKind, Workspace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::Path;

static VALID_NS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9_.-]+$").unwrap());

fn check_pack_meta(pack_dir: &Path, issues: &mut Vec<String>) {
    let meta_path = pack_dir.join("pack.mcmeta");
    if !meta_path.exists() {
        issues.push("pack.mcmeta missing".to_string());
        return;
    }
    match fs::read_to_string(&meta_path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str::<Value>(&s).map_err(|e| e.to_string()))
    {
        Ok(meta) => {
            let pf = meta
                .get("pack")
                .and_then(|p| p.get("pack_format"))
                .and_then(Value::as_u64);
            if pf.is_none() || pf == Some(0) {
                issues.push("pack.mcmeta is missing pack_format".to_string());
            }
        }
        Err(e) => issues.push(format!("pack.mcmeta parse failed: {}", e)),
    }
}

fn sorted_namespaces(content_dir: &Path) -> Vec<String> {
    crate::workspace::sorted_dirs(content_dir)
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

fn has_any_mcfunction(dir: &Path) -> bool {
    let Ok(rd) = fs::read_dir(dir) else {
        return false;
    };
    for entry in rd.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if has_any_mcfunction(&path) {
                return true;
            }
        } else if path.extension().is_some_and(|e| e == "mcfunction") {
            return true;
        }
    }
    false
}

/// Audit a single datapack directory. Returns findings; empty means clean.
pub fn scan_datapack(path: &Path) -> Vec<String> {
    let mut issues = Vec::new();
    check_pack_meta(path, &mut issues);

    let data_dir = path.join("data");
    if !data_dir.is_dir() {
        issues.push("data directory missing".to_string());
        return issues;
    }

    let namespaces = sorted_namespaces(&data_dir);
    if namespaces.is_empty() {
        issues.push("no namespaces (data/* is empty)".to_string());
    }
    for ns in &namespaces {
        if !VALID_NS.is_match(ns) {
            issues.push(format!("invalid namespace name: {}", ns));
        }
    }

    for ns in &namespaces {
        if *ns == "minecraft" {
            continue;
        }
        let fn_dir = data_dir.join(ns).join("functions");
        if !fn_dir.is_dir() {
            issues.push(format!("{}: functions folder missing", ns));
        } else if !has_any_mcfunction(&fn_dir) {
            issues.push(format!("{}: no mcfunction files", ns));
        }
    }

    // The load/tick registration tags live in the shared minecraft
    // namespace, so they are checked once per pack.
    let tag_dir = data_dir.join("minecraft").join("tags").join("functions");
    if !tag_dir.join("load.json").exists() {
        issues.push(
            "load tag missing (data/minecraft/tags/functions/load.json)".to_string(),
        );
    }
    if !tag_dir.join("tick.json").exists() {
        issues.push(
            "tick tag missing (data/minecraft/tags/functions/tick.json)".to_string(),
        );
    }

    issues
}

/// Audit a single resource pack directory.
pub fn scan_resourcepack(path: &Path) -> Vec<String> {
    let mut issues = Vec::new();
    check_pack_meta(path, &mut issues);

    let assets_dir = path.join("assets");
    if !assets_dir.is_dir() {
        issues.push("assets directory missing".to_string());
        return issues;
    }

    let namespaces = sorted_namespaces(&assets_dir);
    if namespaces.is_empty() {
        issues.push("no namespaces (assets/* is empty)".to_string());
    }
    for ns in &namespaces {
        if !VALID_NS.is_match(ns) {
            issues.push(format!("invalid namespace name: {}", ns));
        }
        if !assets_dir.join(ns).join("lang").is_dir() {
            issues.push(format!("{}: lang folder missing", ns));
        }
        if !assets_dir.join(ns).join("textures").is_dir() {
            issues.push(format!("{}: textures folder missing", ns));
        }
    }

    issues
}

/// Audit every pack of both kinds. Each line is prefixed with
/// `[kind] pack:`; clean packs get an `OK` line.
pub fn scan_workspace(ws: &Workspace) -> Vec<String> {
    let mut issues = Vec::new();
    for kind in [PackKind::Data, PackKind::Resource] {
        let root = ws.kind_dir(kind);
        if !root.is_dir() {
            issues.push(format!("[{}] folder missing: {}", kind, root.display()));
            continue;
        }
        for pack in ws.list_packs(kind) {
            let pack_path = ws.pack_dir(kind, &pack);
            let sub = match kind {
                PackKind::Data => scan_datapack(&pack_path),
                PackKind::Resource => scan_resourcepack(&pack_path),
            };
            if sub.is_empty() {
                issues.push(format!("[{}] {}: OK", kind, pack));
            } else {
                for msg in sub {
                    issues.push(format!("[{}] {}: {}", kind, pack, msg));
                }
            }
        }
    }
    if issues.is_empty() {
        issues.push("no packs to scan".to_string());
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_meta_and_data() {
        let temp = tempdir().unwrap();
        let issues = scan_datapack(temp.path());
        assert!(issues.iter().any(|i| i == "pack.mcmeta missing"));
        assert!(issues.iter().any(|i| i == "data directory missing"));
    }

    #[test]
    fn test_clean_datapack() {
        let temp = tempdir().unwrap();
        let pack = temp.path();
        fs::create_dir_all(pack.join("data/demo/functions")).unwrap();
        fs::create_dir_all(pack.join("data/minecraft/tags/functions")).unwrap();
        fs::write(
            pack.join("pack.mcmeta"),
            r#"{"pack":{"pack_format":48,"description":"d"}}"#,
        )
        .unwrap();
        fs::write(pack.join("data/demo/functions/load.mcfunction"), "say hi").unwrap();
        fs::write(
            pack.join("data/minecraft/tags/functions/load.json"),
            r#"{"values":["demo:load"]}"#,
        )
        .unwrap();
        fs::write(
            pack.join("data/minecraft/tags/functions/tick.json"),
            r#"{"values":[]}"#,
        )
        .unwrap();

        assert!(scan_datapack(pack).is_empty(), "{:?}", scan_datapack(pack));
    }

    #[test]
    fn test_invalid_namespace_flagged() {
        let temp = tempdir().unwrap();
        let pack = temp.path();
        fs::create_dir_all(pack.join("data/Bad Name/functions")).unwrap();
        let issues = scan_datapack(pack);
        assert!(issues.iter().any(|i| i.contains("invalid namespace name")));
    }

    #[test]
    fn test_workspace_prefixes_and_ok_lines() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("datapacks/empty_pack")).unwrap();
        fs::create_dir_all(temp.path().join("resourcepacks")).unwrap();

        let ws = Workspace::new(temp.path());
        let issues = scan_workspace(&ws);
        assert!(issues
            .iter()
            .any(|i| i.starts_with("[datapacks] empty_pack:")));
    }
}
