//! Release, dist and backup command handlers - Docs, zips, world archives

use std::fs;

use crate::archive;
use crate::cli::{BackupArgs, DistArgs, ReleaseArgs, ReleaseOperation};
use crate::commands::{render, CommandContext};
use crate::error::{PackError, Result};
use crate::release;
use crate::workspace::{PackKind, Workspace};

/// Run the release command
pub fn run_release(args: &ReleaseArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;

    match &args.operation {
        ReleaseOperation::Readme {
            pack,
            kind,
            version,
            save,
        } => {
            let doc = release::generate_readme(&ws, *kind, pack, version);
            finish_doc(&ws, *kind, pack, "README.md", doc, *save, "release_readme", ctx)
        }
        ReleaseOperation::Changelog {
            pack,
            kind,
            version,
            save,
        } => {
            let date = chrono::Local::now().format("%Y-%m-%d").to_string();
            let doc = release::generate_changelog(pack, version, &date);
            finish_doc(
                &ws,
                *kind,
                pack,
                "CHANGELOG.md",
                doc,
                *save,
                "release_changelog",
                ctx,
            )
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn finish_doc(
    ws: &Workspace,
    kind: PackKind,
    pack: &str,
    file_name: &str,
    doc: String,
    save: bool,
    type_tag: &str,
    ctx: &CommandContext,
) -> Result<String> {
    if save {
        let pack_dir = ws.pack_dir(kind, pack);
        if !pack_dir.is_dir() {
            return Err(PackError::NotFound {
                path: pack_dir.display().to_string(),
            });
        }
        let path = pack_dir.join(file_name);
        fs::write(&path, &doc)?;

        let json_value = serde_json::json!({
            "_type": type_tag,
            "pack": pack,
            "written": path.to_string_lossy(),
        });
        return render(ctx, json_value, format!("{} written to {}\n", file_name, path.display()));
    }

    let json_value = serde_json::json!({
        "_type": type_tag,
        "pack": pack,
        "markdown": doc,
    });
    let mut text = doc;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    render(ctx, json_value, text)
}

/// Run the dist command
pub fn run_dist(args: &DistArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let path = archive::zip_pack(&ws, args.kind, &args.pack)?;

    let json_value = serde_json::json!({
        "_type": "dist",
        "pack": args.pack,
        "kind": args.kind.to_string(),
        "archive": path.to_string_lossy(),
    });
    render(ctx, json_value, format!("pack archived to {}\n", path.display()))
}

/// Run the backup command
pub fn run_backup(args: &BackupArgs, ctx: &CommandContext) -> Result<String> {
    let path = archive::backup_world(&args.world)?;

    let json_value = serde_json::json!({
        "_type": "backup",
        "world": args.world.to_string_lossy(),
        "archive": path.to_string_lossy(),
    });
    render(ctx, json_value, format!("world backup written to {}\n", path.display()))
}
