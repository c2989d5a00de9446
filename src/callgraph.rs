//! Function call graph over a workspace's datapacks.
//!
//! Builds an adjacency map from `function <ns>:<path>` references inside
//! `.mcfunction` files, then answers depth-bounded reachability queries.
//! The graph build never fails: unreadable files are recorded and skipped.

use crate::workspace::{self, read_lossy};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `function <namespace>:<path>` call reference. Case-insensitive so that
/// oddly cased commands still count; the captured token itself is the
/// lowercase id charset plus `/ . - _`.
static FUNC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bfunction\s+([a-z0-9_.-]+:[a-z0-9_./]+)").unwrap()
});

/// Adjacency map: caller id to the set of ids it references. Targets may
/// be dangling (referenced but not indexed); those have no key of their own.
pub type CallGraph = HashMap<String, HashSet<String>>;

/// Function id to source file path.
pub type FunctionIndex = HashMap<String, PathBuf>;

/// A function file that could not be read during the graph build. Its id
/// still appears in the graph with an empty adjacency set.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub id: String,
    pub path: PathBuf,
    pub reason: String,
}

/// Result of [`build_call_graph`].
#[derive(Debug, Default)]
pub struct CallGraphBuild {
    pub graph: CallGraph,
    pub id_to_path: FunctionIndex,
    pub skipped: Vec<SkippedFile>,
}

/// Index every function file under `datapacks/*/data/<ns>/functions/**`.
///
/// Ids are `<namespace>:<path under functions/>` with `/` separators and
/// the `.mcfunction` extension stripped. Directories are visited in sorted
/// order, so when two packs define the same id the lexicographically later
/// pack wins. Missing directories yield an empty map, never an error.
pub fn list_functions(root: &Path) -> FunctionIndex {
    let mut mapping = FunctionIndex::new();
    for file in workspace::function_files(root) {
        mapping.insert(file.id, file.path);
    }
    mapping
}

/// Extract the set of function references from one file body. Matching is
/// line-oriented; duplicates collapse.
pub fn scan_references(content: &str) -> HashSet<String> {
    let mut refs = HashSet::new();
    for line in content.lines() {
        for cap in FUNC_RE.captures_iter(line) {
            refs.insert(cap[1].to_string());
        }
    }
    refs
}

/// Build the call graph for a workspace.
///
/// Every indexed id becomes a node. Files that cannot be read keep their
/// node with an empty adjacency set and are reported in `skipped`.
pub fn build_call_graph(root: &Path) -> CallGraphBuild {
    let id_to_path = list_functions(root);
    let mut graph: CallGraph = id_to_path
        .keys()
        .map(|id| (id.clone(), HashSet::new()))
        .collect();
    let mut skipped = Vec::new();

    for (id, path) in &id_to_path {
        match read_lossy(path) {
            Ok(content) => {
                let refs = scan_references(&content);
                if !refs.is_empty() {
                    graph.insert(id.clone(), refs);
                }
            }
            Err(e) => {
                debug!(id = %id, error = %e, "skipping unreadable function file");
                skipped.push(SkippedFile {
                    id: id.clone(),
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    CallGraphBuild {
        graph,
        id_to_path,
        skipped,
    }
}

/// Every id reachable from `starts` within `max_depth` edges, inclusive.
///
/// Starts enter at depth 0 and are part of the result even when they are
/// not graph nodes. A visited set keeps cycles from looping. Pure over its
/// inputs; the caller owns ordering of the returned set.
pub fn reachable_from(graph: &CallGraph, starts: &[String], max_depth: usize) -> HashSet<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut frontier: VecDeque<(String, usize)> =
        starts.iter().map(|s| (s.clone(), 0usize)).collect();

    while let Some((node, depth)) = frontier.pop_front() {
        if depth > max_depth || seen.contains(&node) {
            continue;
        }
        seen.insert(node.clone());
        if let Some(next) = graph.get(&node) {
            for target in next {
                frontier.push_back((target.clone(), depth + 1));
            }
        }
    }

    seen
}

/// Default start set: every indexed id ending in `load` or `tick`, the
/// lifecycle functions a pack registers with the game. Sorted for stable
/// display.
pub fn default_starts(index: &FunctionIndex) -> Vec<String> {
    let mut starts: Vec<String> = index
        .keys()
        .filter(|id| id.ends_with("load") || id.ends_with("tick"))
        .cloned()
        .collect();
    starts.sort();
    starts
}
