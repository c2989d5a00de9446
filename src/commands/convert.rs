//! Convert command handler - Coordinate and time conversions

use crate::cli::{ConvertArgs, ConvertOperation};
use crate::commands::{render, CommandContext};
use crate::convert::{
    distance, nether_to_overworld, overworld_to_nether, seconds_to_ticks, ticks_to_seconds,
};
use crate::error::Result;

/// Run the convert command
pub fn run_convert(args: &ConvertArgs, ctx: &CommandContext) -> Result<String> {
    let (json_value, text) = match &args.operation {
        ConvertOperation::Nether { x, z } => {
            let (nx, nz) = overworld_to_nether(*x, *z);
            (
                serde_json::json!({
                    "_type": "convert",
                    "operation": "nether",
                    "x": nx,
                    "z": nz,
                }),
                format!("nether: x={}, z={}\n", nx, nz),
            )
        }
        ConvertOperation::Overworld { x, z } => {
            let (ox, oz) = nether_to_overworld(*x, *z);
            (
                serde_json::json!({
                    "_type": "convert",
                    "operation": "overworld",
                    "x": ox,
                    "z": oz,
                }),
                format!("overworld: x={}, z={}\n", ox, oz),
            )
        }
        ConvertOperation::Distance {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        } => {
            let d = distance((*x1, *y1, *z1), (*x2, *y2, *z2));
            (
                serde_json::json!({
                    "_type": "convert",
                    "operation": "distance",
                    "blocks": d,
                }),
                format!("distance: {:.2} blocks\n", d),
            )
        }
        ConvertOperation::Ticks { seconds } => {
            let ticks = seconds_to_ticks(*seconds);
            (
                serde_json::json!({
                    "_type": "convert",
                    "operation": "ticks",
                    "seconds": seconds,
                    "ticks": ticks,
                }),
                format!("{} second(s) = {} tick(s)\n", seconds, ticks),
            )
        }
        ConvertOperation::Seconds { ticks } => {
            let seconds = ticks_to_seconds(*ticks);
            (
                serde_json::json!({
                    "_type": "convert",
                    "operation": "seconds",
                    "ticks": ticks,
                    "seconds": seconds,
                }),
                format!("{} tick(s) = {} second(s)\n", ticks, seconds),
            )
        }
    };
    render(ctx, json_value, text)
}
