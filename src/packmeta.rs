//! pack.mcmeta reading and bulk updates.
//!
//! Updates rewrite only the `pack.pack_format` / `pack.description`
//! fields; any other top-level keys (filter, overlays, ...) survive.

use crate::error::Result;
use crate::workspace::{PackKind, Workspace};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// `pack_format` and `description` of a pack, best effort. A missing or
/// unparseable file reads as `(None, "")`.
pub fn read_pack_meta(pack_dir: &Path) -> (Option<u64>, String) {
    let meta_path = pack_dir.join("pack.mcmeta");
    let Ok(content) = fs::read_to_string(&meta_path) else {
        return (None, String::new());
    };
    let Ok(data) = serde_json::from_str::<Value>(&content) else {
        return (None, String::new());
    };
    let pack = data.get("pack");
    let pf = pack
        .and_then(|p| p.get("pack_format"))
        .and_then(Value::as_u64);
    let desc = pack
        .and_then(|p| p.get("description"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    (pf, desc)
}

/// Update one pack's `pack.mcmeta`, creating it when absent. Returns
/// whether the file was written and its path.
pub fn update_pack_meta(
    pack_dir: &Path,
    pack_format: Option<u64>,
    description: Option<&str>,
) -> Result<(bool, PathBuf)> {
    let meta_path = pack_dir.join("pack.mcmeta");
    let existed = meta_path.exists();

    // Unparseable existing content starts over from an empty meta, same
    // as a missing file.
    let mut obj: Map<String, Value> = if existed {
        fs::read_to_string(&meta_path)
            .ok()
            .and_then(|s| serde_json::from_str::<Value>(&s).ok())
            .and_then(|v| match v {
                Value::Object(m) => Some(m),
                _ => None,
            })
            .unwrap_or_default()
    } else {
        Map::new()
    };

    if !obj.get("pack").is_some_and(Value::is_object) {
        obj.insert("pack".to_string(), Value::Object(Map::new()));
    }

    let mut changed = false;
    if let Some(Value::Object(pack)) = obj.get_mut("pack") {
        if let Some(pf) = pack_format {
            if pack.get("pack_format").and_then(Value::as_u64) != Some(pf) {
                pack.insert("pack_format".to_string(), json!(pf));
                changed = true;
            }
        }
        if let Some(desc) = description.filter(|d| !d.is_empty()) {
            if pack.get("description").and_then(Value::as_str) != Some(desc) {
                pack.insert("description".to_string(), json!(desc));
                changed = true;
            }
        }
    }

    if changed || !existed {
        fs::write(&meta_path, serde_json::to_string_pretty(&Value::Object(obj))?)?;
        return Ok((true, meta_path));
    }
    Ok((false, meta_path))
}

/// Apply the same update across every pack of a kind. Returns how many
/// files were written. A missing kind directory updates nothing.
pub fn bulk_update(
    ws: &Workspace,
    kind: PackKind,
    pack_format: u64,
    description: Option<&str>,
) -> Result<usize> {
    let mut updated = 0;
    for pack in ws.list_packs(kind) {
        let (changed, _) =
            update_pack_meta(&ws.pack_dir(kind, &pack), Some(pack_format), description)?;
        if changed {
            updated += 1;
        }
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_update_creates_missing_meta() {
        let temp = tempdir().unwrap();
        let (written, path) = update_pack_meta(temp.path(), Some(48), Some("fresh")).unwrap();
        assert!(written);

        let (pf, desc) = read_pack_meta(temp.path());
        assert_eq!(pf, Some(48));
        assert_eq!(desc, "fresh");
        assert!(path.ends_with("pack.mcmeta"));
    }

    #[test]
    fn test_update_preserves_unknown_keys() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("pack.mcmeta"),
            r#"{"pack":{"pack_format":41,"description":"old"},"filter":{"block":[]}}"#,
        )
        .unwrap();

        update_pack_meta(temp.path(), Some(48), None).unwrap();

        let data: Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("pack.mcmeta")).unwrap())
                .unwrap();
        assert_eq!(data["pack"]["pack_format"], 48);
        assert_eq!(data["pack"]["description"], "old");
        assert!(data.get("filter").is_some(), "unrelated keys must survive");
    }

    #[test]
    fn test_no_write_when_nothing_changes() {
        let temp = tempdir().unwrap();
        update_pack_meta(temp.path(), Some(48), Some("d")).unwrap();
        let (written, _) = update_pack_meta(temp.path(), Some(48), Some("d")).unwrap();
        assert!(!written);
    }

    #[test]
    fn test_bulk_update_counts_packs() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("datapacks/one")).unwrap();
        fs::create_dir_all(temp.path().join("datapacks/two")).unwrap();

        let ws = Workspace::new(temp.path());
        let updated = bulk_update(&ws, PackKind::Data, 48, Some("bulk")).unwrap();
        assert_eq!(updated, 2);
    }
}
