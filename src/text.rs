//! Gradient chat text: per-character color interpolation for
//! `tellraw` and `title` payloads.

use crate::error::{PackError, Result};
use serde_json::{json, Value};

/// Parse `#RGB` or `#RRGGBB` (leading `#` optional) into channels.
fn hex_to_rgb(hex_code: &str) -> Result<(u8, u8, u8)> {
    let code = hex_code.trim().trim_start_matches('#');
    let code = match code.len() {
        6 => code.to_string(),
        3 => code.chars().flat_map(|c| [c, c]).collect(),
        _ => {
            return Err(PackError::invalid(
                "color must be #RRGGBB or #RGB".to_string(),
            ))
        }
    };
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&code[range], 16)
            .map_err(|_| PackError::invalid(format!("not a hex color: {}", hex_code)))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// One JSON text component per character, colors linearly interpolated
/// from `start_color` to `end_color`.
pub fn gradient_text_payload(
    text: &str,
    start_color: &str,
    end_color: &str,
    bold: bool,
    italic: bool,
) -> Result<Vec<Value>> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Err(PackError::invalid("text must not be empty".to_string()));
    }
    let (r1, g1, b1) = hex_to_rgb(start_color)?;
    let (r2, g2, b2) = hex_to_rgb(end_color)?;

    let length = (chars.len() - 1).max(1) as f64;
    let mut payload = Vec::with_capacity(chars.len());
    for (idx, ch) in chars.iter().enumerate() {
        let t = idx as f64 / length;
        let r = lerp(r1 as f64, r2 as f64, t) as u8;
        let g = lerp(g1 as f64, g2 as f64, t) as u8;
        let b = lerp(b1 as f64, b2 as f64, t) as u8;
        let mut part = json!({
            "text": ch.to_string(),
            "color": format!("#{:02x}{:02x}{:02x}", r, g, b),
        });
        if bold {
            part["bold"] = Value::Bool(true);
        }
        if italic {
            part["italic"] = Value::Bool(true);
        }
        payload.push(part);
    }
    Ok(payload)
}

/// The payload wrapped in an empty root component, as both `tellraw`
/// and `title` want it.
pub fn wrap_payload(payload: Vec<Value>) -> Value {
    json!({"text": "", "extra": payload})
}

/// `tellraw <target> <json>` for a gradient message.
pub fn gradient_tellraw(
    target: &str,
    text: &str,
    start_color: &str,
    end_color: &str,
    bold: bool,
    italic: bool,
) -> Result<String> {
    let payload = gradient_text_payload(text, start_color, end_color, bold, italic)?;
    Ok(format!("tellraw {} {}", target, wrap_payload(payload)))
}

/// `title <target> title <json>` for a gradient title.
pub fn gradient_title(
    target: &str,
    text: &str,
    start_color: &str,
    end_color: &str,
    bold: bool,
    italic: bool,
) -> Result<String> {
    let payload = gradient_text_payload(text, start_color, end_color, bold, italic)?;
    Ok(format!("title {} title {}", target, wrap_payload(payload)))
}
