//! Chat and command-string handlers - cmd, give, gradient, particle

use std::fs;

use crate::cli::{CmdArgs, CmdBuilder, GiveArgs, GradientArgs, ParticleArgs, ParticleShape};
use crate::cmd;
use crate::commands::{render, resolve_namespace, CommandContext};
use crate::error::{PackError, Result};
use crate::item;
use crate::particles;
use crate::text::{gradient_tellraw, gradient_title};
use crate::workspace::safe_file_name;

/// Run the cmd command
pub fn run_cmd(args: &CmdArgs, ctx: &CommandContext) -> Result<String> {
    let commands: Vec<String> = match &args.builder {
        CmdBuilder::Summon {
            entity,
            x,
            y,
            z,
            nbt,
        } => vec![cmd::summon(entity, x, y, z, nbt.as_deref())],
        CmdBuilder::Give {
            target,
            item,
            count,
            nbt,
        } => vec![cmd::give_raw(target, item, *count, nbt.as_deref())],
        CmdBuilder::Tellraw {
            target,
            text,
            color,
        } => vec![cmd::tellraw(target, text, color.as_deref())],
        CmdBuilder::Title {
            target,
            text,
            color,
        } => vec![cmd::title(target, text, color.as_deref())],
        CmdBuilder::Actionbar { target, text } => vec![cmd::actionbar(target, text)],
        CmdBuilder::Effect {
            target,
            effect,
            seconds,
            amplifier,
            hide_particles,
        } => vec![cmd::effect_give(
            target,
            effect,
            *seconds,
            *amplifier,
            *hide_particles,
        )],
        CmdBuilder::ScoreboardAdd {
            objective,
            criteria,
        } => vec![cmd::scoreboard_add(objective, criteria)],
        CmdBuilder::ScoreboardDisplay { objective, slot } => {
            vec![cmd::scoreboard_setdisplay(slot, objective)]
        }
        CmdBuilder::ScoreboardSet {
            player,
            objective,
            value,
        } => cmd::scoreboard_value(player, objective, *value),
        CmdBuilder::Tag {
            target,
            name,
            remove,
        } => vec![cmd::tag(target, name, !remove)],
        CmdBuilder::Gamerule { rule, value } => vec![cmd::gamerule(rule, value)],
    };

    let json_value = serde_json::json!({
        "_type": "command",
        "commands": commands,
    });
    let mut out = String::new();
    for line in &commands {
        out.push_str(line);
        out.push('\n');
    }
    render(ctx, json_value, out)
}

/// Run the give command (item builder)
pub fn run_give(args: &GiveArgs, ctx: &CommandContext) -> Result<String> {
    let enchants = match &args.enchants {
        Some(list) => item::parse_enchants(list)?,
        None => Vec::new(),
    };
    let command = item::build_give_command(
        &args.target,
        &args.item,
        args.count,
        &args.name,
        &args.color,
        args.italic,
        &args.lore,
        &enchants,
    );

    let json_value = serde_json::json!({
        "_type": "give",
        "command": command,
    });
    render(ctx, json_value, format!("{}\n", command))
}

/// Run the gradient command
pub fn run_gradient(args: &GradientArgs, ctx: &CommandContext) -> Result<String> {
    let command = if args.title {
        gradient_title(
            &args.target,
            &args.text,
            &args.from,
            &args.to,
            args.bold,
            args.italic,
        )?
    } else {
        gradient_tellraw(
            &args.target,
            &args.text,
            &args.from,
            &args.to,
            args.bold,
            args.italic,
        )?
    };

    let json_value = serde_json::json!({
        "_type": "gradient",
        "command": command,
    });
    render(ctx, json_value, format!("{}\n", command))
}

/// Run the particle command
pub fn run_particle(args: &ParticleArgs, ctx: &CommandContext) -> Result<String> {
    match &args.shape {
        ParticleShape::Line {
            particle,
            from,
            to,
            steps,
            count,
            speed,
            save,
            namespace,
        } => {
            let start = coord_triple(from)?;
            let end = coord_triple(to)?;
            let commands =
                particles::generate_line_commands(particle, &start, &end, *steps, *count, *speed)?;
            finish_particle(ctx, "particle_line", commands, save.as_deref(), namespace.as_deref())
        }
        ParticleShape::Circle {
            particle,
            center,
            radius,
            points,
            count,
            speed,
            save,
            namespace,
        } => {
            let mid = coord_triple(center)?;
            let commands = particles::generate_circle_commands(
                particle, &mid, *radius, *points, *count, *speed,
            )?;
            finish_particle(
                ctx,
                "particle_circle",
                commands,
                save.as_deref(),
                namespace.as_deref(),
            )
        }
    }
}

fn coord_triple(values: &[String]) -> Result<[String; 3]> {
    values
        .to_vec()
        .try_into()
        .map_err(|_| PackError::invalid("coordinates need exactly three values"))
}

fn finish_particle(
    ctx: &CommandContext,
    type_tag: &str,
    commands: Vec<String>,
    save: Option<&str>,
    namespace: Option<&str>,
) -> Result<String> {
    if let Some(name) = save {
        let ws = ctx.workspace()?;
        let ns = resolve_namespace(namespace)?;
        let dir = ws.function_dir(&ns);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.mcfunction", safe_file_name(name)));
        fs::write(&path, format!("{}\n", commands.join("\n")))?;

        let json_value = serde_json::json!({
            "_type": type_tag,
            "commands": commands.len(),
            "written": path.to_string_lossy(),
        });
        return render(ctx, json_value, format!("written to {}\n", path.display()));
    }

    let json_value = serde_json::json!({
        "_type": type_tag,
        "commands": commands,
    });
    let mut out = String::new();
    for line in &commands {
        out.push_str(line);
        out.push('\n');
    }
    render(ctx, json_value, out)
}
