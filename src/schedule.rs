//! `/schedule` block generator.

use crate::error::{PackError, Result};
use crate::workspace::Workspace;
use std::fs;
use std::path::PathBuf;

/// One delayed function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub ticks: u32,
    pub function_path: String,
}

/// Parse `"20:tick, 200:cleanup"` entries of the form `ticks:path`.
pub fn parse_entries(text: &str) -> Result<Vec<ScheduleEntry>> {
    let mut entries = Vec::new();
    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let Some((ticks, path)) = part.split_once(':') else {
            return Err(PackError::invalid(format!(
                "expected ticks:function_path, got: {}",
                part
            )));
        };
        let ticks: u32 = ticks
            .trim()
            .parse()
            .map_err(|_| PackError::invalid(format!("not a tick count: {}", part)))?;
        entries.push(ScheduleEntry {
            ticks,
            function_path: path.trim().to_string(),
        });
    }
    if entries.is_empty() {
        return Err(PackError::invalid(
            "enter at least one schedule entry".to_string(),
        ));
    }
    Ok(entries)
}

/// `schedule function <ns>:<path> <ticks>t replace` lines, ordered by
/// tick then path.
pub fn build_schedule(namespace: &str, entries: &[ScheduleEntry]) -> String {
    let mut sorted: Vec<&ScheduleEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        a.ticks
            .cmp(&b.ticks)
            .then_with(|| a.function_path.cmp(&b.function_path))
    });
    sorted
        .iter()
        .map(|e| {
            format!(
                "schedule function {}:{} {}t replace",
                namespace, e.function_path, e.ticks
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the schedule block as `<name>.mcfunction` in the namespace's
/// functions directory.
pub fn save_schedule(
    ws: &Workspace,
    namespace: &str,
    name: &str,
    content: &str,
) -> Result<PathBuf> {
    let dir = ws.function_dir(namespace);
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.mcfunction", name));
    fs::write(&path, format!("{}\n", content))?;
    Ok(path)
}
