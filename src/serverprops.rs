//! Curated `server.properties` read/write.
//!
//! Only a small set of gameplay and performance keys is surfaced;
//! everything else in the file is preserved on save but never shown.

use crate::error::Result;
use crate::workspace::read_lossy;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Keys the tool reads and edits.
pub const TARGET_KEYS: &[&str] = &[
    "difficulty",
    "enable-command-block",
    "gamemode",
    "hardcore",
    "level-name",
    "level-seed",
    "max-players",
    "motd",
    "online-mode",
    "pvp",
    "simulation-distance",
    "view-distance",
];

/// Load the curated keys from a properties file. Comment lines and
/// unmanaged keys are ignored.
pub fn load_properties(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = read_lossy(path)?;
    let mut values = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, val)) = line.split_once('=') else {
            continue;
        };
        if TARGET_KEYS.contains(&key) {
            values.insert(key.to_string(), val.to_string());
        }
    }
    Ok(values)
}

/// Merge `updates` over the existing file and rewrite it with keys
/// sorted. Unmanaged keys survive; comments do not.
pub fn save_properties(path: &Path, updates: &BTreeMap<String, String>) -> Result<()> {
    let mut existing = BTreeMap::new();
    if path.is_file() {
        for line in read_lossy(path)?.lines() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            if let Some((k, v)) = line.split_once('=') {
                existing.insert(k.to_string(), v.to_string());
            }
        }
    }
    for (k, v) in updates {
        existing.insert(k.clone(), v.clone());
    }

    let body = existing
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, format!("{}\n", body))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_filters_to_target_keys() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("server.properties");
        fs::write(
            &path,
            "#comment\nmotd=Hello\nserver-ip=10.0.0.1\nmax-players=20\nbroken line\n",
        )
        .unwrap();

        let props = load_properties(&path).unwrap();
        assert_eq!(props.get("motd").map(String::as_str), Some("Hello"));
        assert_eq!(props.get("max-players").map(String::as_str), Some("20"));
        assert!(!props.contains_key("server-ip"));
    }

    #[test]
    fn test_save_merges_and_preserves_unmanaged_keys() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("server.properties");
        fs::write(&path, "server-ip=10.0.0.1\nmotd=Old\n").unwrap();

        let mut updates = BTreeMap::new();
        updates.insert("motd".to_string(), "New".to_string());
        updates.insert("pvp".to_string(), "false".to_string());
        save_properties(&path, &updates).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body, "motd=New\npvp=false\nserver-ip=10.0.0.1\n");
    }

    #[test]
    fn test_save_creates_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("server.properties");

        let mut updates = BTreeMap::new();
        updates.insert("difficulty".to_string(), "hard".to_string());
        save_properties(&path, &updates).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "difficulty=hard\n");
    }
}
