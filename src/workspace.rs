//! Workspace layout and shared filesystem helpers.
//!
//! A workspace is a directory holding `datapacks/` and `resourcepacks/`
//! subtrees. Every command resolves its workspace root the same way:
//! `--workspace` flag, then the `PACKSMITH_WORKSPACE` environment variable
//! (handled by clap), then the config file, then the current directory.

use crate::config::PacksmithConfig;
use crate::error::{PackError, Result};
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of function files, without the leading dot.
pub const FUNCTION_EXT: &str = "mcfunction";

/// The two pack families a workspace holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackKind {
    /// `datapacks/` with `data/<ns>/...` content
    Data,
    /// `resourcepacks/` with `assets/<ns>/...` content
    Resource,
}

impl PackKind {
    /// Directory under the workspace root holding packs of this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            PackKind::Data => "datapacks",
            PackKind::Resource => "resourcepacks",
        }
    }

    /// Content root inside a single pack.
    pub fn content_dir(&self) -> &'static str {
        match self {
            PackKind::Data => "data",
            PackKind::Resource => "assets",
        }
    }
}

impl std::fmt::Display for PackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A resolved workspace root.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the workspace root from an optional flag value, falling back
    /// to the config file and then the current directory. An explicitly
    /// named root must exist; the current-directory fallback always does.
    pub fn resolve(flag: Option<&Path>) -> Result<Self> {
        if let Some(path) = flag {
            if !path.is_dir() {
                return Err(PackError::NotFound {
                    path: path.display().to_string(),
                });
            }
            return Ok(Self::new(path));
        }

        let config = PacksmithConfig::load()?;
        if let Some(root) = config.workspace.root {
            if !root.is_dir() {
                return Err(PackError::NotFound {
                    path: root.display().to_string(),
                });
            }
            return Ok(Self::new(root));
        }

        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/datapacks` or `<root>/resourcepacks`.
    pub fn kind_dir(&self, kind: PackKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// Directory of a single pack.
    pub fn pack_dir(&self, kind: PackKind, name: &str) -> PathBuf {
        self.kind_dir(kind).join(name)
    }

    /// Sorted pack names of a kind. A missing kind directory is an empty
    /// workspace, not an error.
    pub fn list_packs(&self, kind: PackKind) -> Vec<String> {
        sorted_dirs(&self.kind_dir(kind))
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Functions directory of a datapack whose pack name doubles as its
    /// namespace, the layout the generators write into.
    pub fn function_dir(&self, namespace: &str) -> PathBuf {
        self.pack_dir(PackKind::Data, namespace)
            .join("data")
            .join(namespace)
            .join("functions")
    }
}

/// One function file found in the workspace.
#[derive(Debug, Clone)]
pub struct FunctionFile {
    /// `<namespace>:<relative path>` identifier, extension stripped.
    pub id: String,
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Path relative to the workspace root, for display.
    pub rel: String,
}

/// Every `.mcfunction` under `datapacks/*/data/<ns>/functions/**`, in
/// sorted directory order at every level. Missing directories along the
/// way yield fewer entries, never an error.
pub fn function_files(root: &Path) -> Vec<FunctionFile> {
    let mut out = Vec::new();
    let dp_root = root.join("datapacks");
    for (pack, pack_path) in sorted_dirs(&dp_root) {
        let data_dir = pack_path.join("data");
        for (ns, ns_path) in sorted_dirs(&data_dir) {
            let fn_dir = ns_path.join("functions");
            if !fn_dir.is_dir() {
                continue;
            }
            let mut rel_prefix = String::new();
            collect_function_files(&fn_dir, &mut rel_prefix, &mut |rel_id, path| {
                let rel = format!(
                    "datapacks/{}/data/{}/functions/{}.{}",
                    pack, ns, rel_id, FUNCTION_EXT
                );
                out.push(FunctionFile {
                    id: format!("{}:{}", ns, rel_id),
                    path,
                    rel,
                });
            });
        }
    }
    out
}

/// Recursive walk of a functions directory in sorted entry order.
/// `rel_prefix` accumulates the `/`-joined path under the functions root.
fn collect_function_files(
    dir: &Path,
    rel_prefix: &mut String,
    visit: &mut impl FnMut(&str, PathBuf),
) {
    let mut entries: Vec<_> = match fs::read_dir(dir) {
        Ok(rd) => rd.flatten().collect(),
        Err(_) => return,
    };
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            let saved = rel_prefix.len();
            rel_prefix.push_str(&name);
            rel_prefix.push('/');
            collect_function_files(&path, rel_prefix, visit);
            rel_prefix.truncate(saved);
        } else if let Some(stem) = name.strip_suffix(".mcfunction") {
            let rel_id = format!("{}{}", rel_prefix, stem);
            visit(&rel_id, path);
        }
    }
}

/// Immediate subdirectories of `path`, sorted by name. Missing or
/// unreadable directories yield an empty list.
pub fn sorted_dirs(path: &Path) -> Vec<(String, PathBuf)> {
    let mut dirs = Vec::new();
    let Ok(rd) = fs::read_dir(path) else {
        return dirs;
    };
    for entry in rd.flatten() {
        let p = entry.path();
        if p.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().into_owned(), p));
        }
    }
    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    dirs
}

/// Reduce a user-supplied name to filesystem-safe characters. Keeps
/// alphanumerics, `-` and `_`; everything else is dropped. An empty
/// result becomes `untitled`.
pub fn safe_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned
    }
}

/// Timestamp suffix used by backups and saved plans.
pub fn file_stamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Read a text file the tolerant way the scanners do: raw bytes with
/// invalid UTF-8 replaced, so one odd byte does not sink a whole scan.
pub fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_safe_file_name() {
        assert_eq!(safe_file_name("My Pack!"), "MyPack");
        assert_eq!(safe_file_name("boss_fight-2"), "boss_fight-2");
        assert_eq!(safe_file_name("???"), "untitled");
        assert_eq!(safe_file_name(""), "untitled");
    }

    #[test]
    fn test_list_packs_missing_dir_is_empty() {
        let temp = tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        assert!(ws.list_packs(PackKind::Data).is_empty());
    }

    #[test]
    fn test_list_packs_sorted_dirs_only() {
        let temp = tempdir().unwrap();
        let dp = temp.path().join("datapacks");
        fs::create_dir_all(dp.join("zeta")).unwrap();
        fs::create_dir_all(dp.join("alpha")).unwrap();
        fs::write(dp.join("notes.txt"), "x").unwrap();

        let ws = Workspace::new(temp.path());
        assert_eq!(ws.list_packs(PackKind::Data), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_function_files_walks_nested_dirs() {
        let temp = tempdir().unwrap();
        let fn_dir = temp
            .path()
            .join("datapacks/demo/data/demo/functions");
        fs::create_dir_all(fn_dir.join("sub")).unwrap();
        fs::write(fn_dir.join("load.mcfunction"), "say hi").unwrap();
        fs::write(fn_dir.join("sub/helper.mcfunction"), "say sub").unwrap();
        fs::write(fn_dir.join("readme.txt"), "not a function").unwrap();

        let files = function_files(temp.path());
        let ids: Vec<_> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["demo:load", "demo:sub/helper"]);
        assert_eq!(
            files[1].rel,
            "datapacks/demo/data/demo/functions/sub/helper.mcfunction"
        );
    }
}
