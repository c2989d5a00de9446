//! Datapack namespace rename: folder moves plus `old:` reference rewrite.

use crate::error::{PackError, Result};
use crate::workspace::{read_lossy, Workspace};
use std::fs;
use std::path::Path;

/// Rename `datapacks/<old>` to `datapacks/<new>`, rename the inner
/// `data/<old>` namespace directory when present, then rewrite `old:`
/// prefixes in every function/JSON file of the moved pack. Returns a log
/// of the steps taken.
pub fn rename_namespace(ws: &Workspace, old: &str, new: &str) -> Result<Vec<String>> {
    let mut logs = Vec::new();
    let dp_root = ws.root().join("datapacks");
    if !dp_root.is_dir() {
        return Err(PackError::NotFound {
            path: dp_root.display().to_string(),
        });
    }
    let old_pack = dp_root.join(old);
    if !old_pack.is_dir() {
        return Err(PackError::NotFound {
            path: old_pack.display().to_string(),
        });
    }
    let new_pack = dp_root.join(new);
    if new_pack.exists() {
        return Err(PackError::invalid(format!(
            "target pack already exists: {}",
            new_pack.display()
        )));
    }

    fs::rename(&old_pack, &new_pack)?;
    logs.push(format!(
        "moved: {} -> {}",
        old_pack.display(),
        new_pack.display()
    ));

    let old_ns_dir = new_pack.join("data").join(old);
    if old_ns_dir.is_dir() {
        let new_ns_dir = new_pack.join("data").join(new);
        fs::rename(&old_ns_dir, &new_ns_dir)?;
        logs.push(format!("renamed namespace dir: data/{} -> data/{}", old, new));
    }

    let needle = format!("{}:", old);
    let replacement = format!("{}:", new);
    rewrite_tree(&new_pack, ws.root(), &needle, &replacement, &mut logs)?;

    if logs.is_empty() {
        logs.push("no changes".to_string());
    }
    Ok(logs)
}

fn rewrite_tree(
    dir: &Path,
    base: &Path,
    needle: &str,
    replacement: &str,
    logs: &mut Vec<String>,
) -> Result<()> {
    let Ok(rd) = fs::read_dir(dir) else {
        return Ok(());
    };
    let mut entries: Vec<_> = rd.flatten().collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            rewrite_tree(&path, base, needle, replacement, logs)?;
            continue;
        }
        let is_target = path
            .extension()
            .is_some_and(|e| e == "mcfunction" || e == "json");
        if !is_target {
            continue;
        }
        let Ok(content) = read_lossy(&path) else {
            continue;
        };
        let new_content = content.replace(needle, replacement);
        if new_content != content {
            fs::write(&path, new_content)?;
            let rel = path
                .strip_prefix(base)
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/");
            logs.push(format!("replaced: {}", rel));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rename_moves_and_rewrites() {
        let temp = tempdir().unwrap();
        let fn_dir = temp.path().join("datapacks/oldns/data/oldns/functions");
        fs::create_dir_all(&fn_dir).unwrap();
        fs::write(fn_dir.join("load.mcfunction"), "function oldns:tick\n").unwrap();

        let ws = Workspace::new(temp.path());
        let logs = rename_namespace(&ws, "oldns", "newns").unwrap();

        assert!(temp.path().join("datapacks/newns").is_dir());
        assert!(temp
            .path()
            .join("datapacks/newns/data/newns/functions/load.mcfunction")
            .exists());
        let body = fs::read_to_string(
            temp.path()
                .join("datapacks/newns/data/newns/functions/load.mcfunction"),
        )
        .unwrap();
        assert_eq!(body, "function newns:tick\n");
        assert!(logs.iter().any(|l| l.starts_with("moved:")));
        assert!(logs.iter().any(|l| l.starts_with("replaced:")));
    }

    #[test]
    fn test_rename_missing_pack_errors() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("datapacks")).unwrap();
        let ws = Workspace::new(temp.path());
        assert!(rename_namespace(&ws, "ghost", "new").is_err());
    }

    #[test]
    fn test_rename_refuses_existing_target() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("datapacks/a")).unwrap();
        fs::create_dir_all(temp.path().join("datapacks/b")).unwrap();
        let ws = Workspace::new(temp.path());
        assert!(rename_namespace(&ws, "a", "b").is_err());
    }
}
