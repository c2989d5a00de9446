//! Lint command handler - mcfunction format checks

use crate::commands::{render, CommandContext};
use crate::error::Result;
use crate::lint;

/// Run the lint command
pub fn run_lint(ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let findings = lint::lint_workspace(ws.root());

    let json_value = serde_json::json!({
        "_type": "lint",
        "findings": findings,
    });

    let mut text = String::new();
    for line in &findings {
        text.push_str(line);
        text.push('\n');
    }
    render(ctx, json_value, text)
}
