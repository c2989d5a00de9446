//! Directory tree comparison and one-way sync.
//!
//! Compares two trees by content hash and can copy added/modified files
//! from source to destination. Deletions are reported, never applied.

use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Content hash of one file, hex encoded.
pub fn file_hash(path: &Path) -> Result<String> {
    let mut hasher = blake3::Hasher::new();
    hasher.update_reader(fs::File::open(path)?)?;
    Ok(hasher.finalize().to_hex().to_string())
}

/// Outcome of comparing `src` against `dst`, relative paths sorted.
#[derive(Debug, Default, Serialize)]
pub struct DiffResult {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Human-readable listing: a count header, then one section per
    /// non-empty bucket.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{} added, {} removed, {} modified",
            self.added.len(),
            self.removed.len(),
            self.modified.len()
        )];
        if !self.added.is_empty() {
            lines.push("added:".to_string());
            lines.extend(self.added.iter().map(|p| format!(" + {}", p)));
        }
        if !self.removed.is_empty() {
            lines.push("removed:".to_string());
            lines.extend(self.removed.iter().map(|p| format!(" - {}", p)));
        }
        if !self.modified.is_empty() {
            lines.push("modified:".to_string());
            lines.extend(self.modified.iter().map(|p| format!(" * {}", p)));
        }
        lines
    }
}

fn hash_tree(root: &Path) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();
    collect(root, root, &mut files)?;
    return Ok(files);

    fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<String, String>) -> Result<()> {
        let Ok(rd) = fs::read_dir(dir) else {
            return Ok(());
        };
        for entry in rd.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect(root, &path, files)?;
            } else {
                let rel = path
                    .strip_prefix(root)
                    .unwrap_or(&path)
                    .to_string_lossy()
                    .replace('\\', "/");
                files.insert(rel, file_hash(&path)?);
            }
        }
        Ok(())
    }
}

/// Compare two trees by content. A missing directory compares as empty.
pub fn compare_dirs(src: &Path, dst: &Path) -> Result<DiffResult> {
    let src_files = hash_tree(src)?;
    let dst_files = hash_tree(dst)?;

    let added = src_files
        .keys()
        .filter(|p| !dst_files.contains_key(*p))
        .cloned()
        .collect();
    let removed = dst_files
        .keys()
        .filter(|p| !src_files.contains_key(*p))
        .cloned()
        .collect();
    let modified = src_files
        .iter()
        .filter(|(p, h)| dst_files.get(*p).is_some_and(|dh| dh != *h))
        .map(|(p, _)| p.clone())
        .collect();

    Ok(DiffResult {
        added,
        removed,
        modified,
    })
}

/// Copy added and modified files from `src` into `dst`. Removed entries
/// are left in place. Returns the number of files copied.
pub fn sync_dirs(src: &Path, dst: &Path, diff: &DiffResult) -> Result<usize> {
    let mut copied = 0;
    for rel in diff.added.iter().chain(diff.modified.iter()) {
        let src_path = src.join(rel);
        let dst_path = dst.join(rel);
        if let Some(parent) = dst_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src_path, &dst_path)?;
        copied += 1;
    }
    Ok(copied)
}
