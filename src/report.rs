//! Markdown workspace report: overview stats plus per-pack meta lines.

use crate::packmeta::read_pack_meta;
use crate::stats::{collect_stats, human_size};
use crate::workspace::{PackKind, Workspace};

/// Workspace summary as Markdown.
pub fn build_pack_report(ws: &Workspace) -> String {
    let mut lines: Vec<String> = vec!["# Workspace report".to_string(), String::new()];

    let stats = collect_stats(ws);
    lines.push("## Overview".to_string());
    if let Some(dp) = stats.get("datapacks") {
        lines.push(format!(
            "- data packs: {}, {} on disk",
            dp.packs,
            human_size(dp.size_bytes)
        ));
    }
    if let Some(rp) = stats.get("resourcepacks") {
        lines.push(format!(
            "- resource packs: {}, {} on disk",
            rp.packs,
            human_size(rp.size_bytes)
        ));
    }
    lines.push(String::new());

    for kind in [PackKind::Data, PackKind::Resource] {
        lines.push(format!("## {}", kind.dir_name()));
        for pack in ws.list_packs(kind) {
            let (pf, desc) = read_pack_meta(&ws.pack_dir(kind, &pack));
            let pf_text = pf.map_or_else(|| "unset".to_string(), |v| v.to_string());
            let desc_text = if desc.is_empty() {
                "N/A".to_string()
            } else {
                desc
            };
            lines.push(format!("- {}: pack_format={}, desc={}", pack, pf_text, desc_text));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_report_lists_packs_with_meta() {
        let temp = tempdir().unwrap();
        let pack = temp.path().join("datapacks/demo");
        fs::create_dir_all(&pack).unwrap();
        fs::write(
            pack.join("pack.mcmeta"),
            r#"{"pack":{"pack_format":48,"description":"demo pack"}}"#,
        )
        .unwrap();

        let ws = Workspace::new(temp.path());
        let report = build_pack_report(&ws);
        assert!(report.starts_with("# Workspace report"));
        assert!(report.contains("- demo: pack_format=48, desc=demo pack"));
        assert!(report.contains("## resourcepacks"));
    }
}
