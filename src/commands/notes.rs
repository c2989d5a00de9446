//! Notes command handlers - Plans, challenges, profiles, checklists, docs

use crate::cli::{ChallengeArgs, ChecklistArgs, ChecklistKind, DocArgs, PlanArgs, PlanOperation, ProfileArgs};
use crate::commands::{render, CommandContext};
use crate::error::{PackError, Result};
use crate::plan;
use crate::presets;

/// Run the plan command
pub fn run_plan(args: &PlanArgs, ctx: &CommandContext) -> Result<String> {
    let ws = ctx.workspace()?;

    match &args.operation {
        PlanOperation::Save { title, content } => {
            let path = plan::save_plan(&ws, title, content)?;
            let json_value = serde_json::json!({
                "_type": "plan_save",
                "title": title,
                "written": path.to_string_lossy(),
            });
            render(ctx, json_value, format!("plan saved to {}\n", path.display()))
        }

        PlanOperation::List => {
            let names = plan::list_plans(&ws);
            let json_value = serde_json::json!({
                "_type": "plan_list",
                "plans": names,
            });
            let mut text = String::new();
            if names.is_empty() {
                text.push_str("no plans saved\n");
            } else {
                for name in &names {
                    text.push_str(&format!("- {}\n", name));
                }
            }
            render(ctx, json_value, text)
        }

        PlanOperation::Show { name } => {
            let note = plan::load_plan(&ws, name)?;
            let json_value = serde_json::json!({
                "_type": "plan",
                "title": note.title,
                "saved_at": note.saved_at,
                "content": note.content,
            });
            let text = format!("# {}\nsaved {}\n\n{}\n", note.title, note.saved_at, note.content);
            render(ctx, json_value, text)
        }
    }
}

/// Run the challenge command
pub fn run_challenge(args: &ChallengeArgs, ctx: &CommandContext) -> Result<String> {
    let picks = presets::roll_challenges(args.count);

    let json_value = serde_json::json!({
        "_type": "challenges",
        "challenges": picks,
    });
    let mut text = String::new();
    for (i, challenge) in picks.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, challenge));
    }
    render(ctx, json_value, text)
}

/// Run the profile command
pub fn run_profile(args: &ProfileArgs, ctx: &CommandContext) -> Result<String> {
    let Some(name) = &args.name else {
        let names: Vec<&str> = presets::PROFILES.iter().map(|(n, _)| *n).collect();
        let json_value = serde_json::json!({
            "_type": "profiles",
            "available": names,
        });
        let mut text = String::from("available profiles:\n");
        for n in &names {
            text.push_str(&format!("- {}\n", n));
        }
        return render(ctx, json_value, text);
    };

    let Some(commands) = presets::find_profile(name) else {
        return Err(PackError::invalid(format!("unknown profile: {}", name)));
    };

    let json_value = serde_json::json!({
        "_type": "profile",
        "name": name,
        "commands": commands,
    });
    let mut text = String::new();
    for command in commands {
        text.push_str(command);
        text.push('\n');
    }
    render(ctx, json_value, text)
}

/// Run the checklist command
pub fn run_checklist(args: &ChecklistArgs, ctx: &CommandContext) -> Result<String> {
    let Some(kind) = args.name else {
        let json_value = serde_json::json!({
            "_type": "checklists",
            "available": ["recording", "release"],
        });
        let text = String::from("available checklists:\n- recording\n- release\n");
        return render(ctx, json_value, text);
    };

    let (name, items) = match kind {
        ChecklistKind::Recording => ("recording", presets::RECORDING_CHECKLIST),
        ChecklistKind::Release => ("release", presets::RELEASE_CHECKLIST),
    };

    let json_value = serde_json::json!({
        "_type": "checklist",
        "name": name,
        "items": items,
    });
    let mut text = format!("{} checklist:\n", name);
    for item in items {
        text.push_str(&format!("- [ ] {}\n", item));
    }
    render(ctx, json_value, text)
}

/// Run the doc command
pub fn run_doc(args: &DocArgs, ctx: &CommandContext) -> Result<String> {
    let Some(topic) = &args.topic else {
        let topics: Vec<&str> = presets::DOCS.iter().map(|(t, _)| *t).collect();
        let json_value = serde_json::json!({
            "_type": "docs",
            "available": topics,
        });
        let mut text = String::from("available docs:\n");
        for t in &topics {
            text.push_str(&format!("- {}\n", t));
        }
        return render(ctx, json_value, text);
    };

    let Some(body) = presets::find_doc(topic) else {
        return Err(PackError::invalid(format!("unknown doc topic: {}", topic)));
    };

    let json_value = serde_json::json!({
        "_type": "doc",
        "topic": topic,
        "body": body,
    });
    let mut text = body.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    render(ctx, json_value, text)
}
