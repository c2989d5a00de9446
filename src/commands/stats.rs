//! Stats and report command handlers - Workspace inventory

use std::fs;

use crate::cli::ReportArgs;
use crate::commands::{render, CommandContext};
use crate::error::Result;
use crate::report;
use crate::stats;

/// Run the stats command
pub fn run_stats(ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let collected = stats::collect_stats(&ws);

    let json_value = serde_json::json!({
        "_type": "stats",
        "kinds": collected,
    });

    let mut text = stats::summarize(&collected);
    if text.is_empty() {
        text.push_str("no packs found");
    }
    text.push('\n');
    render(ctx, json_value, text)
}

/// Run the report command
pub fn run_report(args: &ReportArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let markdown = report::build_pack_report(&ws);

    if let Some(path) = &args.output {
        fs::write(path, &markdown)?;
        let json_value = serde_json::json!({
            "_type": "report",
            "written": path.to_string_lossy(),
        });
        return render(ctx, json_value, format!("report written to {}\n", path.display()));
    }

    let json_value = serde_json::json!({
        "_type": "report",
        "markdown": markdown,
    });
    let mut text = markdown;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    render(ctx, json_value, text)
}
