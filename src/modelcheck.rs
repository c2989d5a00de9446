//! Model texture audit for resource packs.
//!
//! Walks every model JSON in a pack and checks that each plain texture
//! reference resolves to a PNG under the same namespace. Slot references
//! (`#layer0`) and textures from other namespaces are out of scope.

use crate::workspace::{sorted_dirs, PackKind, Workspace};
use std::fs;
use std::path::Path;

/// Audit one resource pack. Returns human-readable findings; structural
/// problems (missing folders) are findings too, not errors.
pub fn check_models(ws: &Workspace, pack: &str) -> Vec<String> {
    let pack_dir = ws.pack_dir(PackKind::Resource, pack);
    let assets = pack_dir.join("assets");
    if !assets.is_dir() {
        return vec!["assets folder missing".to_string()];
    }

    let namespaces = sorted_dirs(&assets);
    if namespaces.is_empty() {
        return vec!["no namespaces".to_string()];
    }

    let mut results = Vec::new();
    for (ns, ns_path) in namespaces {
        let models_dir = ns_path.join("models");
        if !models_dir.is_dir() {
            results.push(format!("{}: models folder missing", ns));
            continue;
        }
        walk_models(&models_dir, &pack_dir, &ns, &ns_path, &mut results);
    }

    if results.is_empty() {
        results.push("no missing model textures".to_string());
    }
    results
}

fn walk_models(dir: &Path, pack_dir: &Path, ns: &str, ns_path: &Path, results: &mut Vec<String>) {
    let Ok(rd) = fs::read_dir(dir) else {
        return;
    };
    let mut entries: Vec<_> = rd.flatten().collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            walk_models(&path, pack_dir, ns, ns_path, results);
            continue;
        }
        if path.extension().is_none_or(|e| e != "json") {
            continue;
        }
        let rel = path
            .strip_prefix(pack_dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        let value: serde_json::Value = match fs::read_to_string(&path)
            .map_err(|_| ())
            .and_then(|s| serde_json::from_str(&s).map_err(|_| ()))
        {
            Ok(v) => v,
            Err(()) => {
                results.push(format!("{}: parse failed", rel));
                continue;
            }
        };
        check_texture_refs(&value, &rel, pack_dir, ns, ns_path, results);
    }
}

fn check_texture_refs(
    model: &serde_json::Value,
    rel: &str,
    pack_dir: &Path,
    ns: &str,
    ns_path: &Path,
    results: &mut Vec<String>,
) {
    let Some(textures) = model.get("textures").and_then(|t| t.as_object()) else {
        return;
    };
    for value in textures.values() {
        let Some(texture) = value.as_str() else {
            continue;
        };
        if texture.starts_with('#') {
            continue;
        }
        let mut name = texture;
        if texture.contains(':') {
            let prefix = format!("{}:", ns);
            match texture.strip_prefix(&prefix) {
                Some(rest) => name = rest,
                None => continue,
            }
        }
        let tex_path = ns_path.join("textures").join(format!("{}.png", name));
        if !tex_path.is_file() {
            let tex_rel = tex_path
                .strip_prefix(pack_dir)
                .unwrap_or(&tex_path)
                .to_string_lossy()
                .replace('\\', "/");
            results.push(format!("{}: texture missing -> {}", rel, tex_rel));
        }
    }
}
