//! Server-side command handlers - server.properties, log scan, structure NBT

use crate::cli::{LogArgs, NbtArgs, PropsArgs};
use crate::commands::{render, CommandContext};
use crate::error::{PackError, Result};
use crate::mclog;
use crate::nbt;
use crate::serverprops;

/// Run the props command
pub fn run_props(args: &PropsArgs, ctx: &CommandContext) -> Result<String> {
    let mut props = serverprops::load_properties(&args.file)?;

    if args.set.is_empty() {
        let entries: Vec<serde_json::Value> = serverprops::TARGET_KEYS
            .iter()
            .map(|key| {
                serde_json::json!({
                    "key": key,
                    "value": props.get(*key),
                })
            })
            .collect();

        let json_value = serde_json::json!({
            "_type": "props",
            "file": args.file.to_string_lossy(),
            "entries": entries,
        });

        let mut text = String::new();
        for key in serverprops::TARGET_KEYS {
            match props.get(*key) {
                Some(value) => text.push_str(&format!("{}={}\n", key, value)),
                None => text.push_str(&format!("{} (unset)\n", key)),
            }
        }
        return render(ctx, json_value, text);
    }

    let mut applied = Vec::new();
    for pair in &args.set {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(PackError::invalid(format!(
                "expected KEY=VALUE, got '{}'",
                pair
            )));
        };
        let key = key.trim();
        if !serverprops::TARGET_KEYS.contains(&key) {
            return Err(PackError::invalid(format!("unmanaged key: {}", key)));
        }
        props.insert(key.to_string(), value.trim().to_string());
        applied.push(serde_json::json!({"key": key, "value": value.trim()}));
    }
    serverprops::save_properties(&args.file, &props)?;

    let json_value = serde_json::json!({
        "_type": "props_set",
        "file": args.file.to_string_lossy(),
        "applied": applied,
    });
    let text = format!(
        "updated {} key(s) in {}\n",
        applied.len(),
        args.file.display()
    );
    render(ctx, json_value, text)
}

/// Run the log command
pub fn run_log(args: &LogArgs, ctx: &CommandContext) -> Result<String> {
    let scan = mclog::parse_log(&args.file, args.tail)?;
    let lines = mclog::format_scan(&scan);

    let json_value = serde_json::json!({
        "_type": "log_scan",
        "file": args.file.to_string_lossy(),
        "tail": args.tail,
        "counts": scan.counts.iter().map(|(keyword, n)| serde_json::json!({
            "keyword": keyword,
            "count": n,
        })).collect::<Vec<_>>(),
        "hits": scan.hits.iter().map(|h| serde_json::json!({
            "line": h.line_no,
            "text": h.line,
        })).collect::<Vec<_>>(),
    });

    let mut text = String::new();
    for line in &lines {
        text.push_str(line);
        text.push('\n');
    }
    render(ctx, json_value, text)
}

/// Run the nbt command
pub fn run_nbt(args: &NbtArgs, ctx: &CommandContext) -> Result<String> {
    let info = nbt::read_structure(&args.file)?;

    if args.dump {
        let json_value = serde_json::json!({
            "_type": "nbt_dump",
            "file": args.file.to_string_lossy(),
            "data": info.data,
        });
        let text = format!("{}\n", serde_json::to_string_pretty(&info.data)?);
        return render(ctx, json_value, text);
    }

    let json_value = serde_json::json!({
        "_type": "nbt",
        "file": args.file.to_string_lossy(),
        "root_name": info.root_name,
        "data_version": info.data_version,
        "size": info.size,
        "palette_count": info.palette_count,
        "entity_count": info.entity_count,
    });

    let mut text = String::new();
    for line in nbt::summary_lines(&info) {
        text.push_str(&line);
        text.push('\n');
    }
    render(ctx, json_value, text)
}
