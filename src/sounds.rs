//! `sounds.json` event builder for resource packs.

use crate::error::{PackError, Result};
use crate::workspace::{PackKind, Workspace};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::PathBuf;

/// Split `"custom/boop, custom/boop2"` into sound paths. Extensions are
/// left off; the game resolves ogg itself.
pub fn parse_sound_list(text: &str) -> Result<Vec<String>> {
    let items: Vec<String> = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        return Err(PackError::invalid(
            "enter at least one sound path".to_string(),
        ));
    }
    Ok(items)
}

/// One event object for `sounds.json`.
pub fn build_sound_event(sounds: &[String], subtitle: Option<&str>, replace: bool) -> Value {
    let mut data = json!({"sounds": sounds});
    if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
        data["subtitle"] = Value::String(subtitle.to_string());
    }
    if replace {
        data["replace"] = Value::Bool(true);
    }
    data
}

/// Merge one event into `assets/<ns>/sounds.json` of the pack named
/// after the namespace, creating the file when absent. An unparseable
/// existing file is replaced. Returns the file path.
pub fn update_sounds_file(
    ws: &Workspace,
    namespace: &str,
    event: &str,
    event_data: Value,
) -> Result<PathBuf> {
    let target_dir = ws
        .pack_dir(PackKind::Resource, namespace)
        .join("assets")
        .join(namespace);
    fs::create_dir_all(&target_dir)?;
    let path = target_dir.join("sounds.json");

    let mut sounds_json: Map<String, Value> = match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => Map::new(),
    };
    sounds_json.insert(event.to_string(), event_data);
    fs::write(&path, serde_json::to_string_pretty(&sounds_json)?)?;
    Ok(path)
}
