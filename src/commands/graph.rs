//! Graph command handler - Call graph build and depth-bounded reachability
//!
//! Builds the function call graph for the whole workspace, resolves the
//! start set (explicit `--starts` list or every `*load`/`*tick` id), then
//! walks outward up to `--depth` hops and lists what is reachable.

use crate::callgraph::{build_call_graph, default_starts, reachable_from};
use crate::cli::GraphArgs;
use crate::commands::{render, CommandContext};
use crate::error::{PackError, Result};

/// Run the graph command
pub fn run_graph(args: &GraphArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let build = build_call_graph(ws.root());

    tracing::debug!(
        functions = build.id_to_path.len(),
        skipped = build.skipped.len(),
        "indexed workspace functions"
    );

    let starts: Vec<String> = match &args.starts {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        None => default_starts(&build.id_to_path),
    };

    if starts.is_empty() {
        return Err(PackError::invalid(
            "no start functions found; pass --starts or create load/tick functions",
        ));
    }

    let depth = args.depth.max(0) as usize;
    let mut reached: Vec<String> = reachable_from(&build.graph, &starts, depth)
        .into_iter()
        .collect();
    reached.sort();

    let json_value = serde_json::json!({
        "_type": "call_graph",
        "starts": starts,
        "depth": depth,
        "reached": reached,
        "skipped": build.skipped.iter().map(|s| serde_json::json!({
            "id": s.id,
            "path": s.path.to_string_lossy(),
            "reason": s.reason,
        })).collect::<Vec<_>>(),
    });

    let mut text = String::new();
    text.push_str(&format!("start: {}\n", starts.join(", ")));
    text.push_str(&format!(
        "{} function(s) reachable within depth {}\n",
        reached.len(),
        depth
    ));
    for id in &reached {
        text.push_str(&format!("- {}\n", id));
    }
    if !build.skipped.is_empty() {
        text.push_str(&format!(
            "\nskipped {} unreadable file(s):\n",
            build.skipped.len()
        ));
        for s in &build.skipped {
            text.push_str(&format!("- {} ({})\n", s.id, s.reason));
        }
    }

    render(ctx, json_value, text)
}
