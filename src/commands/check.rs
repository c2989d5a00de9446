//! Check command handler - Structure, JSON, lang and model audits

use crate::cli::{CheckArgs, CheckOperation};
use crate::commands::{render, CommandContext};
use crate::error::Result;
use crate::{langcheck, modelcheck, scan, schema};

/// Run the check command
pub fn run_check(args: &CheckArgs, ctx: &CommandContext) -> Result<String> {
    match &args.operation {
        CheckOperation::Structure => run_structure(ctx),
        CheckOperation::Json => run_json(ctx),
        CheckOperation::Lang {
            pack,
            target,
            reference,
        } => run_lang(pack, reference, target, ctx),
        CheckOperation::Models { pack } => run_models(pack, ctx),
    }
}

/// Audit pack layout of both pack kinds
fn run_structure(ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let findings = scan::scan_workspace(&ws);

    let json_value = serde_json::json!({
        "_type": "check_structure",
        "findings": findings,
    });
    render(ctx, json_value, joined(&findings))
}

/// Parse and shape-check recognizable JSON files
fn run_json(ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let findings = schema::scan_workspace_json(ws.root());

    let json_value = serde_json::json!({
        "_type": "check_json",
        "findings": findings,
    });
    render(ctx, json_value, joined(&findings))
}

/// Compare lang key sets between two languages of one resource pack
fn run_lang(pack: &str, reference: &str, target: &str, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let (missing, extra) = langcheck::check_lang_pack(&ws, pack, reference, target)?;

    let json_value = serde_json::json!({
        "_type": "check_lang",
        "pack": pack,
        "reference": reference,
        "target": target,
        "missing": missing,
        "extra": extra,
    });

    let mut text = String::new();
    text.push_str(&format!(
        "lang check for '{}': {} vs {}\n",
        pack, reference, target
    ));
    if missing.is_empty() && extra.is_empty() {
        text.push_str("key sets match\n");
    } else {
        text.push_str(&format!("missing in {}: {}\n", target, missing.len()));
        for key in &missing {
            text.push_str(&format!("- {}\n", key));
        }
        text.push_str(&format!("extra in {}: {}\n", target, extra.len()));
        for key in &extra {
            text.push_str(&format!("- {}\n", key));
        }
    }
    render(ctx, json_value, text)
}

/// Verify model texture references resolve to files on disk
fn run_models(pack: &str, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let findings = modelcheck::check_models(&ws, pack);

    let json_value = serde_json::json!({
        "_type": "check_models",
        "pack": pack,
        "findings": findings,
    });
    render(ctx, json_value, joined(&findings))
}

fn joined(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
