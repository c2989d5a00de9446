//! Coordinate and time conversions for the overworld/nether portal
//! math and the 20 ticks-per-second clock.

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Overworld x/z to nether coordinates (divide by 8, 3 decimals).
pub fn overworld_to_nether(x: f64, z: f64) -> (f64, f64) {
    (round3(x / 8.0), round3(z / 8.0))
}

/// Nether x/z to overworld coordinates (multiply by 8, 3 decimals).
pub fn nether_to_overworld(x: f64, z: f64) -> (f64, f64) {
    (round3(x * 8.0), round3(z * 8.0))
}

/// Euclidean distance between two points, rendered to 2 decimals by the
/// CLI.
pub fn distance(p1: (f64, f64, f64), p2: (f64, f64, f64)) -> f64 {
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    let dz = p2.2 - p1.2;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

pub fn ticks_to_seconds(ticks: f64) -> f64 {
    ticks / 20.0
}

pub fn seconds_to_ticks(seconds: f64) -> f64 {
    seconds * 20.0
}
