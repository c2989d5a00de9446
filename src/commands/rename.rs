//! Rename command handler - Namespace rename across a workspace

use crate::cli::RenameArgs;
use crate::commands::{render, CommandContext};
use crate::error::Result;
use crate::namespace;

/// Run the rename command
pub fn run_rename(args: &RenameArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let actions = namespace::rename_namespace(&ws, &args.old, &args.new)?;

    let json_value = serde_json::json!({
        "_type": "rename",
        "old": args.old,
        "new": args.new,
        "actions": actions,
    });

    let mut text = format!("renamed namespace '{}' to '{}'\n", args.old, args.new);
    for action in &actions {
        text.push_str(&format!("- {}\n", action));
    }
    render(ctx, json_value, text)
}
