//! Version migration helper: rename-rule sweep plus a manual checklist.

use crate::error::{PackError, Result};
use crate::workspace::{file_stamp, read_lossy, PackKind, Workspace};
use std::fs;
use std::path::{Path, PathBuf};

/// Id renames applied by the sweep. Old ids that survived into current
/// packs from earlier game versions.
pub const MIGRATION_RULES: &[(&str, &str)] = &[
    ("minecraft:zombie_pigman", "minecraft:zombified_piglin"),
    ("minecraft:grass_path", "minecraft:dirt_path"),
];

/// Manual follow-ups the sweep cannot do.
pub const GUIDE_LINES: &[&str] = &[
    "Update pack_format in pack.mcmeta to match the new game version.",
    "Check that resource pack lang files use the current key names.",
    "Keep the load/tick tags at data/minecraft/tags/functions/load.json and tick.json.",
    "For experimental features, check the release notes for version support.",
    "Review commands, tags and NBT for removals or renames in the new version.",
];

/// Apply the rename rules across every pack of a kind. With `dry_run`
/// nothing is written; hits are only reported. Returns per-file report
/// lines.
pub fn apply_migration(ws: &Workspace, kind: PackKind, dry_run: bool) -> Result<Vec<String>> {
    let root = ws.kind_dir(kind);
    if !root.is_dir() {
        return Ok(vec![format!("{} folder missing", kind.dir_name())]);
    }

    let mut results = Vec::new();
    for pack in ws.list_packs(kind) {
        let pack_dir = ws.pack_dir(kind, &pack);
        migrate_tree(&pack_dir, &pack_dir, &pack, dry_run, &mut results)?;
    }
    if results.is_empty() {
        results.push("nothing to migrate".to_string());
    }
    Ok(results)
}

fn migrate_tree(
    dir: &Path,
    pack_dir: &Path,
    pack: &str,
    dry_run: bool,
    results: &mut Vec<String>,
) -> Result<()> {
    let Ok(rd) = fs::read_dir(dir) else {
        return Ok(());
    };
    let mut entries: Vec<_> = rd.flatten().collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            migrate_tree(&path, pack_dir, pack, dry_run, results)?;
            continue;
        }
        let is_target = path
            .extension()
            .is_some_and(|e| e == "mcfunction" || e == "json");
        if !is_target {
            continue;
        }
        let rel = path
            .strip_prefix(pack_dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        match read_lossy(&path) {
            Ok(content) => {
                let mut new_content = content.clone();
                let mut hits = 0;
                for (old, new) in MIGRATION_RULES {
                    hits += new_content.matches(old).count();
                    new_content = new_content.replace(old, new);
                }
                if hits > 0 {
                    results.push(format!("{}/{}: {} replacement(s)", pack, rel, hits));
                    if !dry_run {
                        fs::write(&path, new_content)?;
                    }
                }
            }
            Err(e) => results.push(format!("{}/{}: failed {}", pack, rel, e)),
        }
    }
    Ok(())
}

/// Copy the whole kind directory to a timestamped sibling before a
/// destructive migration. Returns the backup path.
pub fn backup_before_migrate(ws: &Workspace, kind: PackKind) -> Result<PathBuf> {
    let root = ws.kind_dir(kind);
    if !root.is_dir() {
        return Err(PackError::NotFound {
            path: root.display().to_string(),
        });
    }
    let dst = ws
        .root()
        .join(format!("{}_backup_{}", kind.dir_name(), file_stamp()));
    copy_tree(&root, &dst)?;
    Ok(dst)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)?.flatten() {
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}
