//! Single-pool loot table builder.

use crate::error::{PackError, Result};
use serde_json::{json, Map, Value};

/// One pool, one `minecraft:item` entry. `weight` appears only above 1;
/// a `set_count` function appears only when min/max leave 1.
pub fn build_loot_table(item: &str, weight: u32, count_min: u32, count_max: u32) -> Result<Value> {
    let item = item.trim();
    if item.is_empty() {
        return Err(PackError::invalid("enter an item id"));
    }

    let mut entry = Map::new();
    entry.insert("type".to_string(), json!("minecraft:item"));
    entry.insert("name".to_string(), json!(item));
    if weight > 1 {
        entry.insert("weight".to_string(), json!(weight));
    }
    if count_min != 1 || count_max != 1 {
        entry.insert(
            "functions".to_string(),
            json!([{
                "function": "minecraft:set_count",
                "count": {"min": count_min, "max": count_max},
            }]),
        );
    }

    Ok(json!({"pools": [{"rolls": 1, "entries": [entry]}]}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_table_omits_weight_and_count() {
        let table = build_loot_table("minecraft:diamond", 1, 1, 1).unwrap();
        let entry = &table["pools"][0]["entries"][0];
        assert_eq!(entry["name"], "minecraft:diamond");
        assert!(entry.get("weight").is_none());
        assert!(entry.get("functions").is_none());
    }

    #[test]
    fn test_weight_and_set_count_emitted() {
        let table = build_loot_table("minecraft:emerald", 3, 2, 5).unwrap();
        let entry = &table["pools"][0]["entries"][0];
        assert_eq!(entry["weight"], 3);
        assert_eq!(entry["functions"][0]["function"], "minecraft:set_count");
        assert_eq!(entry["functions"][0]["count"]["min"], 2);
        assert_eq!(entry["functions"][0]["count"]["max"], 5);
    }

    #[test]
    fn test_empty_item_rejected() {
        assert!(build_loot_table("  ", 1, 1, 1).is_err());
    }
}
