//! Workspace inventory: pack counts, file counts, disk footprint.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::workspace::{PackKind, Workspace};

/// Aggregate numbers for one pack kind.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PackStats {
    pub packs: usize,
    pub mcfunctions: usize,
    pub textures: usize,
    pub lang: usize,
    pub size_bytes: u64,
}

/// Human-readable size with one decimal, B through TB.
pub fn human_size(num: u64) -> String {
    let mut value = num as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if value < 1024.0 {
            return format!("{:.1}{}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1}TB", value)
}

fn walk_files(dir: &Path, visit: &mut impl FnMut(&Path, u64)) {
    let Ok(rd) = fs::read_dir(dir) else {
        return;
    };
    for entry in rd.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_files(&path, visit);
        } else if let Ok(meta) = entry.metadata() {
            visit(&path, meta.len());
        }
    }
}

fn in_lang_dir(path: &Path) -> bool {
    path.parent()
        .map(|p| p.components().any(|c| c.as_os_str() == "lang"))
        .unwrap_or(false)
}

/// Collect stats for both pack kinds. Missing kind directories count as
/// zero packs.
pub fn collect_stats(ws: &Workspace) -> BTreeMap<String, PackStats> {
    let mut stats = BTreeMap::new();

    for kind in [PackKind::Data, PackKind::Resource] {
        let mut st = PackStats::default();
        for pack in ws.list_packs(kind) {
            st.packs += 1;
            walk_files(&ws.pack_dir(kind, &pack), &mut |path, len| {
                st.size_bytes += len;
                match kind {
                    PackKind::Data => {
                        if path.extension().is_some_and(|e| e == "mcfunction") {
                            st.mcfunctions += 1;
                        }
                    }
                    PackKind::Resource => {
                        if path.extension().is_some_and(|e| e == "png") {
                            st.textures += 1;
                        }
                        if path.extension().is_some_and(|e| e == "json") && in_lang_dir(path) {
                            st.lang += 1;
                        }
                    }
                }
            });
        }
        stats.insert(kind.dir_name().to_string(), st);
    }

    stats
}

/// Text summary, datapacks first.
pub fn summarize(stats: &BTreeMap<String, PackStats>) -> String {
    let mut lines = Vec::new();
    for kind in ["datapacks", "resourcepacks"] {
        let Some(st) = stats.get(kind) else { continue };
        lines.push(format!(
            "[{}] {} packs, {} on disk",
            kind,
            st.packs,
            human_size(st.size_bytes)
        ));
        if kind == "datapacks" {
            lines.push(format!(" - mcfunction files: {}", st.mcfunctions));
        } else {
            lines.push(format!(
                " - textures (png): {}, lang files: {}",
                st.textures, st.lang
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(512), "512.0B");
        assert_eq!(human_size(2048), "2.0KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0MB");
    }

    #[test]
    fn test_collect_counts_by_kind() {
        let temp = tempdir().unwrap();
        let dp = temp.path().join("datapacks/demo/data/demo/functions");
        fs::create_dir_all(&dp).unwrap();
        fs::write(dp.join("load.mcfunction"), "say hi").unwrap();

        let rp = temp.path().join("resourcepacks/art/assets/art");
        fs::create_dir_all(rp.join("lang")).unwrap();
        fs::create_dir_all(rp.join("textures")).unwrap();
        fs::write(rp.join("lang/en_us.json"), "{}").unwrap();
        fs::write(rp.join("textures/stone.png"), [0u8; 8]).unwrap();

        let ws = Workspace::new(temp.path());
        let stats = collect_stats(&ws);
        assert_eq!(stats["datapacks"].packs, 1);
        assert_eq!(stats["datapacks"].mcfunctions, 1);
        assert_eq!(stats["resourcepacks"].textures, 1);
        assert_eq!(stats["resourcepacks"].lang, 1);
        assert!(stats["resourcepacks"].size_bytes > 0);
    }
}
