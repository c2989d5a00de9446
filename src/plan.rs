//! Content plan notes saved alongside the packs.

use crate::error::{PackError, Result};
use crate::workspace::{file_stamp, safe_file_name, Workspace};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const PLAN_DIR: &str = "creator_plans";

/// One saved note.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanNote {
    pub title: String,
    pub content: String,
    pub saved_at: String,
}

/// Save a note as `creator_plans/<safe-title>_<stamp>.json`.
pub fn save_plan(ws: &Workspace, title: &str, content: &str) -> Result<PathBuf> {
    let content = content.trim();
    if content.is_empty() {
        return Err(PackError::invalid("plan content must not be empty"));
    }
    let title = if title.trim().is_empty() {
        "plan"
    } else {
        title.trim()
    };

    let dir = ws.root().join(PLAN_DIR);
    fs::create_dir_all(&dir)?;
    let stamp = file_stamp();
    let path = dir.join(format!("{}_{}.json", safe_file_name(title), stamp));

    let note = PlanNote {
        title: title.to_string(),
        content: content.to_string(),
        saved_at: stamp,
    };
    fs::write(&path, serde_json::to_string_pretty(&note)?)?;
    Ok(path)
}

/// Sorted file names of saved plans. No plans directory means no plans.
pub fn list_plans(ws: &Workspace) -> Vec<String> {
    let dir = ws.root().join(PLAN_DIR);
    let Ok(rd) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = rd
        .flatten()
        .filter(|e| e.path().extension().is_some_and(|x| x == "json"))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Load one plan by its file name (with or without `.json`).
pub fn load_plan(ws: &Workspace, name: &str) -> Result<PlanNote> {
    let file = if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{}.json", name)
    };
    let path = ws.root().join(PLAN_DIR).join(file);
    if !path.is_file() {
        return Err(PackError::NotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).map_err(|e| PackError::parse(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_list_load_round_trip() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());

        let path = save_plan(&ws, "Episode 3: Boss Fight", "- intro\n- fight\n- outro").unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("Episode3BossFight_"));

        let listed = list_plans(&ws);
        assert_eq!(listed, vec![name.clone()]);

        let note = load_plan(&ws, &name).unwrap();
        assert_eq!(note.title, "Episode 3: Boss Fight");
        assert!(note.content.contains("fight"));
        assert!(!note.saved_at.is_empty());
    }

    #[test]
    fn test_empty_content_is_invalid() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        assert!(save_plan(&ws, "x", "   ").is_err());
    }

    #[test]
    fn test_list_without_dir_is_empty() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        assert!(list_plans(&ws).is_empty());
    }

    #[test]
    fn test_load_missing_plan() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        assert!(matches!(
            load_plan(&ws, "nope").unwrap_err(),
            PackError::NotFound { .. }
        ));
    }
}
