//! Diff command handler - Directory compare and one-way sync

use crate::cli::DiffArgs;
use crate::commands::{render, CommandContext};
use crate::diff;
use crate::error::Result;

/// Run the diff command
pub fn run_diff(args: &DiffArgs, ctx: &CommandContext) -> Result<String> {
    let result = diff::compare_dirs(&args.source, &args.dest)?;

    let mut text = String::new();
    for line in result.summary_lines() {
        text.push_str(&line);
        text.push('\n');
    }

    let mut synced = None;
    if args.sync && !result.is_empty() {
        let copied = diff::sync_dirs(&args.source, &args.dest, &result)?;
        text.push_str(&format!("synced {} file(s)\n", copied));
        synced = Some(copied);
    }

    let json_value = serde_json::json!({
        "_type": "diff",
        "source": args.source.to_string_lossy(),
        "dest": args.dest.to_string_lossy(),
        "added": result.added,
        "removed": result.removed,
        "modified": result.modified,
        "synced": synced,
    });
    render(ctx, json_value, text)
}
