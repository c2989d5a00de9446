//! Generator command handlers - Recipe, loot, tag, snippet, template,
//! schedule and sound builders
//!
//! Generators print to stdout by default; `--save` variants write into the
//! workspace under the configured (or `--namespace`) namespace.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::cli::{
    LootArgs, RecipeArgs, RecipeOperation, ScheduleArgs, SnippetArgs, SoundArgs, TagArgs,
    TemplateArgs,
};
use crate::commands::{render, resolve_namespace, CommandContext};
use crate::error::{PackError, Result};
use crate::presets::{self, TemplateKind};
use crate::workspace::{safe_file_name, PackKind, Workspace};
use crate::{loot, recipe, schedule, sounds, tags};

/// Run the recipe command
pub fn run_recipe(args: &RecipeArgs, ctx: &CommandContext) -> Result<String> {
    match &args.operation {
        RecipeOperation::Shaped {
            rows,
            result,
            count,
            save,
            namespace,
        } => {
            let grid = grid_from_rows(rows)?;
            let value = recipe::shaped_from_grid(&grid, result, *count)?.to_json();
            emit_artifact(
                ctx,
                "recipe_shaped",
                &value,
                save.as_deref(),
                namespace.as_deref(),
                "recipes",
            )
        }
        RecipeOperation::Shapeless {
            ingredients,
            result,
            count,
            save,
            namespace,
        } => {
            let items = split_list(ingredients);
            let value = recipe::build_shapeless(&items, result, *count)?;
            emit_artifact(
                ctx,
                "recipe_shapeless",
                &value,
                save.as_deref(),
                namespace.as_deref(),
                "recipes",
            )
        }
    }
}

/// Run the loot command
pub fn run_loot(args: &LootArgs, ctx: &CommandContext) -> Result<String> {
    let value = loot::build_loot_table(&args.item, args.weight, args.count_min, args.count_max)?;
    emit_artifact(
        ctx,
        "loot_table",
        &value,
        args.save.as_deref(),
        args.namespace.as_deref(),
        "loot_tables",
    )
}

/// Run the tag command
pub fn run_tag(args: &TagArgs, ctx: &CommandContext) -> Result<String> {
    if !tags::SUPPORTED_CATEGORIES.contains(&args.category.as_str()) {
        return Err(PackError::invalid(format!(
            "unsupported tag category: {}",
            args.category
        )));
    }
    let values = split_list(&args.values);
    let value = tags::build_tag_json(&values, args.replace)?;

    if args.save {
        let ws = ctx.workspace()?;
        let ns = resolve_namespace(args.namespace.as_deref())?;
        let path = tags::save_tag(&ws, &ns, &args.category, &args.name, &value)?;

        let json_value = serde_json::json!({
            "_type": "tag",
            "category": args.category,
            "name": args.name,
            "written": path.to_string_lossy(),
        });
        return render(ctx, json_value, format!("written to {}\n", path.display()));
    }

    let json_value = serde_json::json!({
        "_type": "tag",
        "category": args.category,
        "name": args.name,
        "json": value,
    });
    render(ctx, json_value, pretty(&value)?)
}

/// Run the snippet command
pub fn run_snippet(args: &SnippetArgs, ctx: &CommandContext) -> Result<String> {
    let Some(name) = &args.name else {
        let names: Vec<&str> = presets::FUNCTION_SNIPPETS.iter().map(|(n, _)| *n).collect();
        let json_value = serde_json::json!({
            "_type": "snippets",
            "available": names,
        });
        let mut text = String::from("available snippets:\n");
        for n in &names {
            text.push_str(&format!("- {}\n", n));
        }
        return render(ctx, json_value, text);
    };

    let Some(body) = presets::find_snippet(name) else {
        return Err(PackError::invalid(format!("unknown snippet: {}", name)));
    };

    if let Some(file) = &args.save {
        let ws = ctx.workspace()?;
        let ns = resolve_namespace(args.namespace.as_deref())?;
        let path = presets::save_snippet(&ws, &ns, name, &safe_file_name(file))?;

        let json_value = serde_json::json!({
            "_type": "snippet",
            "name": name,
            "written": path.to_string_lossy(),
        });
        return render(ctx, json_value, format!("written to {}\n", path.display()));
    }

    let json_value = serde_json::json!({
        "_type": "snippet",
        "name": name,
        "body": body,
    });
    let mut text = body.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    render(ctx, json_value, text)
}

/// Run the template command
pub fn run_template(args: &TemplateArgs, ctx: &CommandContext) -> Result<String> {
    let kind_name = match args.kind {
        TemplateKind::Advancement => "advancement",
        TemplateKind::Predicate => "predicate",
    };
    let sample: &Value = match args.kind {
        TemplateKind::Advancement => &presets::ADVANCEMENT_SAMPLE,
        TemplateKind::Predicate => &presets::PREDICATE_SAMPLE,
    };

    if let Some(file) = &args.save {
        let ws = ctx.workspace()?;
        let ns = resolve_namespace(args.namespace.as_deref())?;
        let path = presets::save_template(&ws, &ns, args.kind, &safe_file_name(file))?;

        let json_value = serde_json::json!({
            "_type": "template",
            "kind": kind_name,
            "written": path.to_string_lossy(),
        });
        return render(ctx, json_value, format!("written to {}\n", path.display()));
    }

    let json_value = serde_json::json!({
        "_type": "template",
        "kind": kind_name,
        "json": sample,
    });
    render(ctx, json_value, pretty(sample)?)
}

/// Run the schedule command
pub fn run_schedule(args: &ScheduleArgs, ctx: &CommandContext) -> Result<String> {
    let entries = schedule::parse_entries(&args.entries)?;
    let ns = resolve_namespace(args.namespace.as_deref())?;
    let body = schedule::build_schedule(&ns, &entries);

    if let Some(name) = &args.save {
        let ws = ctx.workspace()?;
        let path = schedule::save_schedule(&ws, &ns, &safe_file_name(name), &body)?;

        let json_value = serde_json::json!({
            "_type": "schedule",
            "namespace": ns,
            "entries": entries.len(),
            "written": path.to_string_lossy(),
        });
        return render(ctx, json_value, format!("written to {}\n", path.display()));
    }

    let json_value = serde_json::json!({
        "_type": "schedule",
        "namespace": ns,
        "entries": entries.len(),
        "body": body,
    });
    render(ctx, json_value, format!("{}\n", body))
}

/// Run the sound command
pub fn run_sound(args: &SoundArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;
    let ns = resolve_namespace(args.namespace.as_deref())?;
    let sound_paths = sounds::parse_sound_list(&args.sounds)?;
    let event_data = sounds::build_sound_event(&sound_paths, args.subtitle.as_deref(), args.replace);
    let path = sounds::update_sounds_file(&ws, &ns, &args.event, event_data.clone())?;

    let json_value = serde_json::json!({
        "_type": "sound",
        "event": args.event,
        "namespace": ns,
        "entry": event_data,
        "written": path.to_string_lossy(),
    });
    let text = format!(
        "sound event '{}' merged into {}\n",
        args.event,
        path.display()
    );
    render(ctx, json_value, text)
}

/// Turn up to three `--row a,b,c` flags into the 9-cell crafting grid
fn grid_from_rows(rows: &[String]) -> Result<Vec<String>> {
    if rows.len() > 3 {
        return Err(PackError::invalid("at most three --row values"));
    }
    let mut grid = vec![String::new(); 9];
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.split(',').enumerate() {
            if c >= 3 {
                return Err(PackError::invalid(format!(
                    "row {} has more than three cells",
                    r + 1
                )));
            }
            grid[r * 3 + c] = cell.trim().to_string();
        }
    }
    Ok(grid)
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn pretty(value: &Value) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// Print the JSON, or with a save name write it under
/// `data/<ns>/<category>/<name>.json`
fn emit_artifact(
    ctx: &CommandContext,
    type_tag: &str,
    value: &Value,
    save: Option<&str>,
    namespace: Option<&str>,
    category: &str,
) -> Result<String> {
    if let Some(name) = save {
        let ws = ctx.workspace()?;
        let ns = resolve_namespace(namespace)?;
        let path = save_data_json(&ws, &ns, category, name, value)?;

        let json_value = serde_json::json!({
            "_type": type_tag,
            "written": path.to_string_lossy(),
        });
        return render(ctx, json_value, format!("written to {}\n", path.display()));
    }

    let json_value = serde_json::json!({
        "_type": type_tag,
        "json": value,
    });
    render(ctx, json_value, pretty(value)?)
}

fn save_data_json(
    ws: &Workspace,
    namespace: &str,
    category: &str,
    name: &str,
    value: &Value,
) -> Result<PathBuf> {
    let dir = ws
        .pack_dir(PackKind::Data, namespace)
        .join("data")
        .join(namespace)
        .join(category);
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.json", safe_file_name(name)));
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    Ok(path)
}
