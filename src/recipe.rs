//! Crafting recipe JSON builders.
//!
//! Shaped recipes come from a 3x3 grid of item ids; the grid is trimmed
//! to its used rows/columns and each distinct ingredient gets a pattern
//! symbol starting at `A`. A `#ns:name` cell is a tag ingredient.

use crate::error::{PackError, Result};
use serde_json::{json, Map, Value};

fn item_entry(value: &str) -> Value {
    let value = value.trim();
    match value.strip_prefix('#') {
        Some(tag) => json!({"tag": tag}),
        None => json!({"item": value}),
    }
}

/// A trimmed shaped recipe ready to serialize.
#[derive(Debug)]
pub struct ShapedRecipe {
    pub pattern: Vec<String>,
    pub key: Map<String, Value>,
    pub result: Value,
}

impl ShapedRecipe {
    pub fn to_json(&self) -> Value {
        json!({
            "type": "minecraft:crafting_shaped",
            "pattern": self.pattern,
            "key": self.key,
            "result": self.result,
        })
    }
}

/// Build a shaped recipe from 9 row-major grid cells; empty strings are
/// empty slots.
pub fn shaped_from_grid(grid: &[String], result_id: &str, result_count: u32) -> Result<ShapedRecipe> {
    if grid.len() != 9 {
        return Err(PackError::invalid("grid must have exactly 9 cells"));
    }
    let rows: Vec<Vec<&str>> = (0..3)
        .map(|i| grid[i * 3..(i + 1) * 3].iter().map(|c| c.trim()).collect())
        .collect();

    let used_rows: Vec<usize> = (0..3)
        .filter(|&i| rows[i].iter().any(|c| !c.is_empty()))
        .collect();
    let used_cols: Vec<usize> = (0..3)
        .filter(|&j| (0..3).any(|i| !rows[i][j].is_empty()))
        .collect();
    if used_rows.is_empty() || used_cols.is_empty() {
        return Err(PackError::invalid("enter at least one ingredient cell"));
    }

    let (row_min, row_max) = (used_rows[0], used_rows[used_rows.len() - 1]);
    let (col_min, col_max) = (used_cols[0], used_cols[used_cols.len() - 1]);

    // Symbols are assigned in row-major first-seen order.
    let mut symbols: Vec<(String, char)> = Vec::new();
    let mut next_letter = b'A';
    let mut pattern = Vec::new();
    for row in rows.iter().take(row_max + 1).skip(row_min) {
        let mut line = String::new();
        for cell in row.iter().take(col_max + 1).skip(col_min) {
            if cell.is_empty() {
                line.push(' ');
                continue;
            }
            let symbol = match symbols.iter().find(|(item, _)| item == cell) {
                Some((_, s)) => *s,
                None => {
                    let s = next_letter as char;
                    symbols.push((cell.to_string(), s));
                    next_letter += 1;
                    s
                }
            };
            line.push(symbol);
        }
        pattern.push(line);
    }

    let mut key = Map::new();
    for (item, symbol) in &symbols {
        key.insert(symbol.to_string(), item_entry(item));
    }

    Ok(ShapedRecipe {
        pattern,
        key,
        result: json!({"item": result_id, "count": result_count.max(1)}),
    })
}

/// Build a shapeless recipe from an ingredient list.
pub fn build_shapeless(ingredients: &[String], result_id: &str, result_count: u32) -> Result<Value> {
    let ing: Vec<&str> = ingredients
        .iter()
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .collect();
    if ing.is_empty() {
        return Err(PackError::invalid("enter at least one ingredient"));
    }
    Ok(json!({
        "type": "minecraft:crafting_shapeless",
        "ingredients": ing.iter().map(|x| item_entry(x)).collect::<Vec<_>>(),
        "result": {"item": result_id, "count": result_count.max(1)},
    }))
}
