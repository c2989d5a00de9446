//! Meta command handler - pack.mcmeta read/update and the format table

use std::fs;

use crate::cli::{MetaArgs, MetaOperation};
use crate::commands::{render, CommandContext};
use crate::error::{PackError, Result};
use crate::packmeta;
use crate::presets;
use crate::workspace::PackKind;

/// Run the meta command
pub fn run_meta(args: &MetaArgs, ctx: &CommandContext) -> Result<String> {
    match &args.operation {
        MetaOperation::Show => run_show(ctx),
        MetaOperation::Set {
            pack,
            kind,
            all,
            pack_format,
            description,
        } => run_set(
            pack.as_deref(),
            *kind,
            *all,
            *pack_format,
            description.as_deref(),
            ctx,
        ),
        MetaOperation::Formats => run_formats(ctx),
    }
}

/// List every pack's pack_format and description, parse failures called out
fn run_show(ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let mut entries = Vec::new();
    let mut text = String::new();

    for kind in [PackKind::Data, PackKind::Resource] {
        for pack in ws.list_packs(kind) {
            let pack_dir = ws.pack_dir(kind, &pack);
            let meta_path = pack_dir.join("pack.mcmeta");

            let status = if !meta_path.is_file() {
                "missing"
            } else if fs::read_to_string(&meta_path)
                .ok()
                .and_then(|s| serde_json::from_str::<serde_json::Value>(&s).ok())
                .is_none()
            {
                "invalid"
            } else {
                "ok"
            };

            let (format, desc) = packmeta::read_pack_meta(&pack_dir);
            match status {
                "ok" => {
                    let shown = format
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "unset".to_string());
                    text.push_str(&format!(
                        "[{}] {}: pack_format={}, \"{}\"\n",
                        kind, pack, shown, desc
                    ));
                }
                _ => text.push_str(&format!("[{}] {}: {} pack.mcmeta\n", kind, pack, status)),
            }

            entries.push(serde_json::json!({
                "kind": kind.to_string(),
                "pack": pack,
                "status": status,
                "pack_format": format,
                "description": desc,
            }));
        }
    }

    if entries.is_empty() {
        text.push_str("no packs found\n");
    }

    let json_value = serde_json::json!({
        "_type": "meta_show",
        "packs": entries,
    });
    render(ctx, json_value, text)
}

/// Update pack_format/description for one pack or all packs of a kind
fn run_set(
    pack: Option<&str>,
    kind: PackKind,
    all: bool,
    pack_format: Option<u64>,
    description: Option<&str>,
    ctx: &CommandContext,
) -> Result<String> {
    let ws = ctx.workspace()?;

    if all {
        let format = pack_format
            .ok_or_else(|| PackError::invalid("--pack-format is required with --all"))?;
        let updated = packmeta::bulk_update(&ws, kind, format, description)?;

        let json_value = serde_json::json!({
            "_type": "meta_set",
            "kind": kind.to_string(),
            "all": true,
            "pack_format": format,
            "updated": updated,
        });
        return render(ctx, json_value, format!("updated {} pack(s)\n", updated));
    }

    let pack = pack.ok_or_else(|| PackError::invalid("pack name required (or pass --all)"))?;
    if pack_format.is_none() && description.is_none() {
        return Err(PackError::invalid(
            "nothing to update; pass --pack-format and/or --description",
        ));
    }

    let pack_dir = ws.pack_dir(kind, pack);
    if !pack_dir.is_dir() {
        return Err(PackError::NotFound {
            path: pack_dir.display().to_string(),
        });
    }

    let (changed, path) = packmeta::update_pack_meta(&pack_dir, pack_format, description)?;
    let json_value = serde_json::json!({
        "_type": "meta_set",
        "kind": kind.to_string(),
        "pack": pack,
        "changed": changed,
        "path": path.to_string_lossy(),
    });
    let text = if changed {
        format!("updated {}\n", path.display())
    } else {
        format!("no change to {}\n", path.display())
    };
    render(ctx, json_value, text)
}

/// Show the game version to pack_format reference table
fn run_formats(ctx: &CommandContext) -> Result<String> {
    let json_value = serde_json::json!({
        "_type": "meta_formats",
        "formats": presets::PACK_FORMATS.iter().map(|(label, n)| serde_json::json!({
            "version": label,
            "pack_format": n,
        })).collect::<Vec<_>>(),
    });

    let mut text = String::new();
    for (label, n) in presets::PACK_FORMATS {
        text.push_str(&format!("{}: {}\n", label, n));
    }
    render(ctx, json_value, text)
}
