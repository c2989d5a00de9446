//! Migrate command handler - Version migration renames

use crate::cli::MigrateArgs;
use crate::commands::{render, CommandContext};
use crate::error::Result;
use crate::migration;

/// Run the migrate command
pub fn run_migrate(args: &MigrateArgs, ctx: &CommandContext) -> Result<String> {
    if args.guide {
        let json_value = serde_json::json!({
            "_type": "migrate_guide",
            "lines": migration::GUIDE_LINES,
        });
        let mut text = String::new();
        for line in migration::GUIDE_LINES {
            text.push_str(line);
            text.push('\n');
        }
        return render(ctx, json_value, text);
    }

    let ws = ctx.workspace()?;
    let mut text = String::new();
    let mut backup_path = None;

    if args.backup {
        if args.apply {
            let path = migration::backup_before_migrate(&ws, args.kind)?;
            text.push_str(&format!("backup written to {}\n", path.display()));
            backup_path = Some(path);
        } else {
            text.push_str("dry run, backup skipped\n");
        }
    }

    let results = migration::apply_migration(&ws, args.kind, !args.apply)?;

    let json_value = serde_json::json!({
        "_type": "migrate",
        "kind": args.kind.to_string(),
        "applied": args.apply,
        "backup": backup_path.as_ref().map(|p| p.to_string_lossy().to_string()),
        "results": results,
    });

    let mode = if args.apply { "applied" } else { "dry run" };
    text.push_str(&format!("migration scan ({}):\n", mode));
    for line in &results {
        text.push_str(&format!("- {}\n", line));
    }
    render(ctx, json_value, text)
}
