//! Init command handler - Scaffold new packs

use crate::cli::{InitArgs, InitKind};
use crate::commands::{render, CommandContext};
use crate::config::PacksmithConfig;
use crate::error::Result;
use crate::scaffold;

/// Run the init command
pub fn run_init(args: &InitArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let defaults = PacksmithConfig::load()?.defaults;

    match &args.kind {
        InitKind::Datapack {
            namespace,
            pack_format,
            description,
            no_tags,
        } => {
            let format = pack_format.unwrap_or(u64::from(defaults.pack_format));
            let desc = description
                .clone()
                .unwrap_or_else(|| format!("{} data pack", namespace));
            let path = scaffold::create_datapack(&ws, namespace, format, &desc, !no_tags)?;

            let json_value = serde_json::json!({
                "_type": "init",
                "kind": "data",
                "namespace": namespace,
                "pack_format": format,
                "path": path.to_string_lossy(),
            });
            let text = format!("created data pack '{}' at {}\n", namespace, path.display());
            render(ctx, json_value, text)
        }

        InitKind::Resourcepack {
            namespace,
            pack_format,
            description,
        } => {
            let format = pack_format.unwrap_or(u64::from(defaults.pack_format));
            let desc = description
                .clone()
                .unwrap_or_else(|| format!("{} resource pack", namespace));
            let path = scaffold::create_resourcepack(&ws, namespace, format, &desc)?;

            let json_value = serde_json::json!({
                "_type": "init",
                "kind": "resource",
                "namespace": namespace,
                "pack_format": format,
                "path": path.to_string_lossy(),
            });
            let text = format!(
                "created resource pack '{}' at {}\n",
                namespace,
                path.display()
            );
            render(ctx, json_value, text)
        }
    }
}
