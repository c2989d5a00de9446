//! Search and replace command handlers - Literal text across function files

use crate::batch;
use crate::cli::{ReplaceArgs, SearchArgs};
use crate::commands::{render, CommandContext};
use crate::error::Result;

/// Run the search command
pub fn run_search(args: &SearchArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let hits = batch::find_occurrences(ws.root(), &args.needle);
    let total: usize = hits.values().map(Vec::len).sum();

    let json_value = serde_json::json!({
        "_type": "search",
        "needle": args.needle,
        "total": total,
        "files": hits.iter().map(|(file, lines)| serde_json::json!({
            "file": file,
            "lines": lines,
        })).collect::<Vec<_>>(),
    });

    let mut text = String::new();
    if hits.is_empty() {
        text.push_str(&format!("no matches for '{}'\n", args.needle));
    } else {
        text.push_str(&format!(
            "{} match(es) in {} file(s)\n",
            total,
            hits.len()
        ));
        for (file, lines) in &hits {
            let nums = lines
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            text.push_str(&format!("- {} (line {})\n", file, nums));
        }
    }
    render(ctx, json_value, text)
}

/// Run the replace command
pub fn run_replace(args: &ReplaceArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let changed = batch::replace_in_workspace(ws.root(), &args.needle, &args.replacement, args.dry_run)?;

    let json_value = serde_json::json!({
        "_type": "replace",
        "needle": args.needle,
        "replacement": args.replacement,
        "dry_run": args.dry_run,
        "files_changed": changed,
    });

    let verb = if args.dry_run { "would change" } else { "changed" };
    let text = format!("{} {} file(s)\n", verb, changed);
    render(ctx, json_value, text)
}
