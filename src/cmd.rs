//! Plain command-string builders for the common `/summon`, `/give`,
//! `/tellraw`, `/title`, `/effect`, `/scoreboard`, `/tag` and
//! `/gamerule` shapes.

use serde_json::{json, Value};

pub fn summon(entity: &str, x: &str, y: &str, z: &str, nbt: Option<&str>) -> String {
    let mut cmd = format!("summon {} {} {} {}", entity, x, y, z);
    if let Some(nbt) = nbt.filter(|n| !n.is_empty()) {
        cmd.push(' ');
        cmd.push_str(nbt);
    }
    cmd
}

/// `give` with raw SNBT appended directly to the item id.
pub fn give_raw(target: &str, item: &str, count: i64, nbt: Option<&str>) -> String {
    let nbt = nbt.unwrap_or_default();
    format!("give {} {}{} {}", target, item, nbt, count)
}

fn text_component(text: &str, color: Option<&str>) -> Value {
    let mut payload = json!({"text": text});
    if let Some(color) = color.filter(|c| !c.is_empty()) {
        payload["color"] = Value::String(color.to_string());
    }
    payload
}

pub fn tellraw(target: &str, text: &str, color: Option<&str>) -> String {
    format!("tellraw {} {}", target, text_component(text, color))
}

pub fn title(target: &str, text: &str, color: Option<&str>) -> String {
    format!("title {} title {}", target, text_component(text, color))
}

pub fn actionbar(target: &str, text: &str) -> String {
    format!("title {} actionbar {}", target, text_component(text, None))
}

/// `effect give`; duration floored at 1s, amplifier at 0.
pub fn effect_give(target: &str, effect: &str, seconds: i64, amplifier: i64, hide: bool) -> String {
    format!(
        "effect give {} {} {} {} {}",
        target,
        effect,
        seconds.max(1),
        amplifier.max(0),
        hide
    )
}

pub fn scoreboard_add(objective: &str, criteria: &str) -> String {
    format!("scoreboard objectives add {} {}", objective, criteria)
}

pub fn scoreboard_setdisplay(slot: &str, objective: &str) -> String {
    let slot = if slot.is_empty() { "sidebar" } else { slot };
    format!("scoreboard objectives setdisplay {} {}", slot, objective)
}

/// Both the `set` and `add` line for one player and value.
pub fn scoreboard_value(player: &str, objective: &str, value: i64) -> Vec<String> {
    vec![
        format!("scoreboard players set {} {} {}", player, objective, value),
        format!("scoreboard players add {} {} {}", player, objective, value),
    ]
}

pub fn tag(target: &str, name: &str, add: bool) -> String {
    let op = if add { "add" } else { "remove" };
    format!("tag {} {} {}", target, op, name)
}

pub fn gamerule(rule: &str, value: &str) -> String {
    format!("gamerule {} {}", rule, value)
}
