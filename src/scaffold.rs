//! Pack skeleton generators.

use crate::error::{PackError, Result};
use crate::workspace::{PackKind, Workspace};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

const SEED_LOAD: &str = "# runs once when the pack loads\nsay datapack loaded\n";
const SEED_TICK: &str = "# runs every tick\n";

fn pack_meta_json(pack_format: u64, description: &str, fallback: &str) -> String {
    let description = if description.is_empty() {
        fallback
    } else {
        description
    };
    let meta = json!({"pack": {"pack_format": pack_format, "description": description}});
    // pretty output keeps the file hand-editable
    serde_json::to_string_pretty(&meta).unwrap_or_default()
}

fn claim_pack_dir(ws: &Workspace, kind: PackKind, namespace: &str) -> Result<PathBuf> {
    if namespace.is_empty() {
        return Err(PackError::invalid("namespace must not be empty"));
    }
    let target = ws.pack_dir(kind, namespace);
    if target.exists() {
        return Err(PackError::invalid(format!(
            "pack already exists: {}",
            target.display()
        )));
    }
    Ok(target)
}

/// Create `datapacks/<ns>` with pack.mcmeta, seed `load`/`tick`
/// functions and, unless disabled, the shared minecraft load/tick tags
/// pointing at them. Fails when the pack directory already exists.
pub fn create_datapack(
    ws: &Workspace,
    namespace: &str,
    pack_format: u64,
    description: &str,
    with_tags: bool,
) -> Result<PathBuf> {
    let target = claim_pack_dir(ws, PackKind::Data, namespace)?;
    let fn_dir = target.join("data").join(namespace).join("functions");
    fs::create_dir_all(&fn_dir)?;

    fs::write(
        target.join("pack.mcmeta"),
        pack_meta_json(pack_format, description, "New data pack"),
    )?;
    fs::write(fn_dir.join("load.mcfunction"), SEED_LOAD)?;
    fs::write(fn_dir.join("tick.mcfunction"), SEED_TICK)?;

    if with_tags {
        let tag_dir = target
            .join("data")
            .join("minecraft")
            .join("tags")
            .join("functions");
        fs::create_dir_all(&tag_dir)?;
        let load_tag = json!({"values": [format!("{}:load", namespace)]});
        let tick_tag = json!({"values": [format!("{}:tick", namespace)]});
        fs::write(tag_dir.join("load.json"), serde_json::to_string_pretty(&load_tag)?)?;
        fs::write(tag_dir.join("tick.json"), serde_json::to_string_pretty(&tick_tag)?)?;
    }

    tracing::info!(namespace, path = %target.display(), "created datapack skeleton");
    Ok(target)
}

/// Create `resourcepacks/<ns>` with pack.mcmeta, a seed `en_us.json`
/// and an empty textures directory. Fails when the pack directory
/// already exists.
pub fn create_resourcepack(
    ws: &Workspace,
    namespace: &str,
    pack_format: u64,
    description: &str,
) -> Result<PathBuf> {
    let target = claim_pack_dir(ws, PackKind::Resource, namespace)?;
    let assets_ns = target.join("assets").join(namespace);
    fs::create_dir_all(assets_ns.join("lang"))?;
    fs::create_dir_all(assets_ns.join("textures"))?;

    fs::write(
        target.join("pack.mcmeta"),
        pack_meta_json(pack_format, description, "New resource pack"),
    )?;
    let seed_lang = json!({format!("item.{}.example", namespace): "Example Item"});
    fs::write(
        assets_ns.join("lang").join("en_us.json"),
        serde_json::to_string_pretty(&seed_lang)?,
    )?;

    tracing::info!(namespace, path = %target.display(), "created resourcepack skeleton");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_datapack_skeleton() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        let target = create_datapack(&ws, "demo", 48, "", true).unwrap();

        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(target.join("pack.mcmeta")).unwrap()).unwrap();
        assert_eq!(meta["pack"]["pack_format"], 48);
        assert_eq!(meta["pack"]["description"], "New data pack");

        assert!(target.join("data/demo/functions/load.mcfunction").exists());
        assert!(target.join("data/demo/functions/tick.mcfunction").exists());

        let load_tag: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(target.join("data/minecraft/tags/functions/load.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(load_tag["values"][0], "demo:load");
    }

    #[test]
    fn test_datapack_without_tags() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        let target = create_datapack(&ws, "demo", 48, "", false).unwrap();
        assert!(!target.join("data/minecraft").exists());
    }

    #[test]
    fn test_existing_pack_is_refused() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("datapacks/demo")).unwrap();
        let ws = Workspace::new(temp.path());
        let err = create_datapack(&ws, "demo", 48, "", true).unwrap_err();
        assert!(matches!(err, PackError::InvalidInput { .. }));
    }

    #[test]
    fn test_resourcepack_skeleton() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        let target = create_resourcepack(&ws, "demo", 34, "My textures").unwrap();

        assert!(target.join("assets/demo/textures").is_dir());
        let lang: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(target.join("assets/demo/lang/en_us.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(lang["item.demo.example"], "Example Item");
    }
}
