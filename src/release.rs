//! README and changelog skeletons for pack distribution.

use crate::packmeta::read_pack_meta;
use crate::workspace::{PackKind, Workspace};

const README_TEMPLATE: &str = "# {name}\n\nVersion: {version}\nKind: {kind}\npack_format: {pack_format}\nDescription: {desc}\n\n## Install\n1. Unzip (or copy the folder) into `{folder}` inside your Minecraft directory.\n2. Enable the pack in the world or options screen.\n\n## Highlights\n- Summarize the features here.\n\n## Compatibility\n- Tested on: 1.21.x (pack_format {pack_format})\n- Other versions may need a matching pack_format.\n\n## Contact\n- Bugs and suggestions: project issues or DM\n";

const CHANGELOG_TEMPLATE: &str =
    "# Changelog - {name}\n\n## {version} - {date}\n- List the changes as bullets.\n";

/// Fill the README template for one pack, pulling format/description from
/// its `pack.mcmeta`.
pub fn generate_readme(ws: &Workspace, kind: PackKind, name: &str, version: &str) -> String {
    let (pf, desc) = read_pack_meta(&ws.pack_dir(kind, name));
    let kind_label = match kind {
        PackKind::Data => "data pack",
        PackKind::Resource => "resource pack",
    };
    let pf_text = pf.map_or_else(|| "unset".to_string(), |v| v.to_string());
    let desc_text = if desc.is_empty() {
        "no description".to_string()
    } else {
        desc
    };

    README_TEMPLATE
        .replace("{name}", name)
        .replace("{version}", version)
        .replace("{kind}", kind_label)
        .replace("{pack_format}", &pf_text)
        .replace("{desc}", &desc_text)
        .replace("{folder}", kind.dir_name())
}

/// Dated changelog entry skeleton.
pub fn generate_changelog(name: &str, version: &str, date: &str) -> String {
    CHANGELOG_TEMPLATE
        .replace("{name}", name)
        .replace("{version}", version)
        .replace("{date}", date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_readme_pulls_meta() {
        let temp = tempdir().unwrap();
        let pack = temp.path().join("datapacks/quests");
        fs::create_dir_all(&pack).unwrap();
        fs::write(
            pack.join("pack.mcmeta"),
            r#"{"pack":{"pack_format":48,"description":"quest lines"}}"#,
        )
        .unwrap();

        let ws = Workspace::new(temp.path());
        let readme = generate_readme(&ws, PackKind::Data, "quests", "1.2.0");
        assert!(readme.contains("# quests"));
        assert!(readme.contains("pack_format: 48"));
        assert!(readme.contains("quest lines"));
        assert!(readme.contains("`datapacks`"));
    }

    #[test]
    fn test_readme_defaults_for_missing_meta() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("datapacks/bare")).unwrap();

        let ws = Workspace::new(temp.path());
        let readme = generate_readme(&ws, PackKind::Data, "bare", "0.1.0");
        assert!(readme.contains("pack_format: unset"));
        assert!(readme.contains("no description"));
    }

    #[test]
    fn test_changelog_skeleton() {
        let text = generate_changelog("quests", "1.2.0", "2025-07-01");
        assert!(text.starts_with("# Changelog - quests"));
        assert!(text.contains("## 1.2.0 - 2025-07-01"));
    }
}
