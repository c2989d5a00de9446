//! Tag JSON builder and writer.

use crate::error::{PackError, Result};
use crate::workspace::Workspace;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::PathBuf;

/// Tag categories with a directory under `data/<ns>/tags/`.
pub const SUPPORTED_CATEGORIES: &[&str] = &[
    "blocks",
    "items",
    "entity_types",
    "functions",
    "fluids",
    "game_events",
    "biomes",
];

/// `{"values": [...]}` with an optional `"replace": true`.
pub fn build_tag_json(entries: &[String], replace: bool) -> Result<Value> {
    let values: Vec<&str> = entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .collect();
    if values.is_empty() {
        return Err(PackError::invalid("enter at least one tag value"));
    }
    let mut data = Map::new();
    data.insert("values".to_string(), json!(values));
    if replace {
        data.insert("replace".to_string(), json!(true));
    }
    Ok(Value::Object(data))
}

/// Write a tag file under `datapacks/<ns>/data/<ns>/tags/<category>/`.
/// Returns the written path.
pub fn save_tag(
    ws: &Workspace,
    namespace: &str,
    category: &str,
    name: &str,
    data: &Value,
) -> Result<PathBuf> {
    if !SUPPORTED_CATEGORIES.contains(&category) {
        return Err(PackError::invalid(format!(
            "unsupported tag category: {}",
            category
        )));
    }
    let target_dir = ws
        .pack_dir(crate::workspace::PackKind::Data, namespace)
        .join("data")
        .join(namespace)
        .join("tags")
        .join(category);
    fs::create_dir_all(&target_dir)?;
    let path = target_dir.join(format!("{}.json", name));
    fs::write(&path, serde_json::to_string_pretty(data)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_trims_and_requires_values() {
        let data = build_tag_json(
            &["minecraft:stone ".to_string(), String::new()],
            false,
        )
        .unwrap();
        assert_eq!(data["values"], json!(["minecraft:stone"]));
        assert!(data.get("replace").is_none());

        assert!(build_tag_json(&[" ".to_string()], false).is_err());
    }

    #[test]
    fn test_replace_flag_emitted() {
        let data = build_tag_json(&["demo:load".to_string()], true).unwrap();
        assert_eq!(data["replace"], json!(true));
    }

    #[test]
    fn test_save_writes_under_category() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        let data = build_tag_json(&["demo:load".to_string()], false).unwrap();

        let path = save_tag(&ws, "demo", "functions", "startup", &data).unwrap();
        assert!(path.ends_with("datapacks/demo/data/demo/tags/functions/startup.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_rejects_unknown_category() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        let data = json!({"values": ["x"]});
        assert!(save_tag(&ws, "demo", "paintings", "x", &data).is_err());
    }
}
