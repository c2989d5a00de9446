//! `/give` builder with SNBT display data and enchantments.

use crate::error::{PackError, Result};

/// Parse `"sharpness:5, unbreaking:3"` into `(id, level)` pairs. A bare
/// name without a level gets level 1.
pub fn parse_enchants(text: &str) -> Result<Vec<(String, i32)>> {
    let mut enchants = Vec::new();
    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.split_once(':') {
            Some((id, level)) => {
                let lvl: i32 = level.trim().parse().map_err(|_| {
                    PackError::invalid(format!("enchantment level is not a number: {}", part))
                })?;
                enchants.push((id.trim().to_string(), lvl));
            }
            None => enchants.push((part.to_string(), 1)),
        }
    }
    Ok(enchants)
}

/// SNBT for the item: `display.Name`/`display.Lore` hold JSON text
/// components as quoted strings, `Enchantments` is a compound list.
/// Empty when nothing was requested.
pub fn build_item_nbt(
    name: &str,
    color: &str,
    italic: bool,
    lore: &[String],
    enchants: &[(String, i32)],
) -> String {
    let mut nbt_parts = Vec::new();

    let mut display_parts = Vec::new();
    if !name.is_empty() {
        let color = if color.is_empty() { "white" } else { color };
        let name_json = serde_json::json!({"text": name, "color": color, "italic": italic});
        display_parts.push(format!("Name:'{}'", name_json));
    }
    if !lore.is_empty() {
        let lore_array = lore
            .iter()
            .map(|line| format!("'{}'", serde_json::json!({"text": line})))
            .collect::<Vec<_>>()
            .join(",");
        display_parts.push(format!("Lore:[{}]", lore_array));
    }
    if !display_parts.is_empty() {
        nbt_parts.push(format!("display:{{{}}}", display_parts.join(",")));
    }

    if !enchants.is_empty() {
        let ench = enchants
            .iter()
            .map(|(id, lvl)| format!("{{id:\"{}\",lvl:{}s}}", id, lvl))
            .collect::<Vec<_>>()
            .join(",");
        nbt_parts.push(format!("Enchantments:[{}]", ench));
    }

    if nbt_parts.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", nbt_parts.join(","))
    }
}

/// Full `give` command line. Count is floored at 1.
#[allow(clippy::too_many_arguments)]
pub fn build_give_command(
    target: &str,
    item_id: &str,
    count: i64,
    name: &str,
    color: &str,
    italic: bool,
    lore: &[String],
    enchants: &[(String, i32)],
) -> String {
    let nbt = build_item_nbt(name, color, italic, lore, enchants);
    format!("give {} {}{} {}", target, item_id, nbt, count.max(1))
}
