//! Lang file comparison for resource packs.
//!
//! Compares the key sets of a reference lang file (usually `en_us`) and a
//! target translation, reporting keys missing from the target and extra
//! keys the reference no longer has.

use crate::error::{PackError, Result};
use crate::workspace::{sorted_dirs, PackKind, Workspace};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Compare `<reference>.json` and `<target>.json` in the pack's first
/// namespace. Returns `(missing, extra)` key lists, both sorted. A lang
/// file that does not exist counts as having no keys.
pub fn check_lang_pack(
    ws: &Workspace,
    pack: &str,
    reference: &str,
    target: &str,
) -> Result<(Vec<String>, Vec<String>)> {
    let pack_dir = ws.pack_dir(PackKind::Resource, pack);
    let assets = pack_dir.join("assets");
    if !assets.is_dir() {
        return Err(PackError::NotFound {
            path: assets.display().to_string(),
        });
    }

    let namespaces = sorted_dirs(&assets);
    let Some((ns, ns_path)) = namespaces.into_iter().next() else {
        return Err(PackError::invalid(format!(
            "no namespaces under {}/assets",
            pack
        )));
    };

    let lang_dir = ns_path.join("lang");
    if !lang_dir.is_dir() {
        return Err(PackError::NotFound {
            path: lang_dir.display().to_string(),
        });
    }
    tracing::debug!(pack, namespace = %ns, "comparing lang files");

    let ref_keys = load_lang_keys(&lang_dir.join(format!("{}.json", reference)))?;
    let target_keys = load_lang_keys(&lang_dir.join(format!("{}.json", target)))?;

    let missing = ref_keys.difference(&target_keys).cloned().collect();
    let extra = target_keys.difference(&ref_keys).cloned().collect();
    Ok((missing, extra))
}

fn load_lang_keys(path: &Path) -> Result<BTreeSet<String>> {
    if !path.is_file() {
        return Ok(BTreeSet::new());
    }
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| PackError::parse(path, e.to_string()))?;
    let Some(map) = value.as_object() else {
        return Err(PackError::parse(path, "expected a JSON object"));
    };
    Ok(map.keys().cloned().collect())
}
