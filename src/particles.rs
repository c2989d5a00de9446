//! Particle path generators: `execute positioned ... run particle` lines
//! along a line segment or a circle.

use crate::error::{PackError, Result};

fn parse_coord(val: &str) -> Result<f64> {
    val.trim()
        .parse()
        .map_err(|_| PackError::invalid(format!("not a number: {}", val)))
}

fn particle_line(x: f64, y: f64, z: f64, particle: &str, count: u32, speed: f64) -> String {
    format!(
        "execute positioned {:.3} {:.3} {:.3} run particle {} ~ ~ ~ 0 0 0 {} {}",
        x, y, z, particle, speed, count
    )
}

/// Commands for `steps` evenly spaced points from `start` to `end`,
/// endpoints included.
pub fn generate_line_commands(
    particle: &str,
    start: &[String; 3],
    end: &[String; 3],
    steps: u32,
    count: u32,
    speed: f64,
) -> Result<Vec<String>> {
    if steps < 2 {
        return Err(PackError::invalid("steps must be at least 2".to_string()));
    }
    let (sx, sy, sz) = (
        parse_coord(&start[0])?,
        parse_coord(&start[1])?,
        parse_coord(&start[2])?,
    );
    let (ex, ey, ez) = (
        parse_coord(&end[0])?,
        parse_coord(&end[1])?,
        parse_coord(&end[2])?,
    );
    let n = (steps - 1) as f64;
    let (dx, dy, dz) = ((ex - sx) / n, (ey - sy) / n, (ez - sz) / n);

    let mut cmds = Vec::with_capacity(steps as usize);
    for i in 0..steps {
        let i = i as f64;
        cmds.push(particle_line(
            sx + dx * i,
            sy + dy * i,
            sz + dz * i,
            particle,
            count,
            speed,
        ));
    }
    Ok(cmds)
}

/// Commands for `points` positions on a horizontal circle around
/// `center`.
pub fn generate_circle_commands(
    particle: &str,
    center: &[String; 3],
    radius: f64,
    points: u32,
    count: u32,
    speed: f64,
) -> Result<Vec<String>> {
    if radius <= 0.0 {
        return Err(PackError::invalid(
            "radius must be greater than 0".to_string(),
        ));
    }
    if points < 3 {
        return Err(PackError::invalid("points must be at least 3".to_string()));
    }
    let (cx, cy, cz) = (
        parse_coord(&center[0])?,
        parse_coord(&center[1])?,
        parse_coord(&center[2])?,
    );

    let mut cmds = Vec::with_capacity(points as usize);
    for i in 0..points {
        let angle = 2.0 * std::f64::consts::PI * i as f64 / points as f64;
        let x = cx + radius * angle.cos();
        let z = cz + radius * angle.sin();
        cmds.push(particle_line(x, cy, z, particle, count, speed));
    }
    Ok(cmds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(x: &str, y: &str, z: &str) -> [String; 3] {
        [x.to_string(), y.to_string(), z.to_string()]
    }

    #[test]
    fn test_line_endpoints_and_count() {
        let cmds = generate_line_commands(
            "minecraft:flame",
            &coords("0", "64", "0"),
            &coords("4", "64", "0"),
            5,
            2,
            0.0,
        )
        .unwrap();
        assert_eq!(cmds.len(), 5);
        assert_eq!(
            cmds[0],
            "execute positioned 0.000 64.000 0.000 run particle minecraft:flame ~ ~ ~ 0 0 0 0 2"
        );
        assert!(cmds[4].starts_with("execute positioned 4.000 64.000 0.000"));
    }

    #[test]
    fn test_line_rejects_one_step() {
        let err = generate_line_commands(
            "minecraft:flame",
            &coords("0", "0", "0"),
            &coords("1", "0", "0"),
            1,
            1,
            0.0,
        )
        .unwrap_err();
        assert!(matches!(err, PackError::InvalidInput { .. }));
    }

    #[test]
    fn test_line_rejects_bad_coordinate() {
        let err = generate_line_commands(
            "minecraft:flame",
            &coords("~", "0", "0"),
            &coords("1", "0", "0"),
            2,
            1,
            0.0,
        )
        .unwrap_err();
        assert!(matches!(err, PackError::InvalidInput { .. }));
    }

    #[test]
    fn test_circle_point_count_and_radius() {
        let cmds = generate_circle_commands(
            "minecraft:end_rod",
            &coords("0", "70", "0"),
            3.0,
            8,
            1,
            0.01,
        )
        .unwrap();
        assert_eq!(cmds.len(), 8);
        assert_eq!(
            cmds[0],
            "execute positioned 3.000 70.000 0.000 run particle minecraft:end_rod ~ ~ ~ 0 0 0 0.01 1"
        );
    }

    #[test]
    fn test_circle_validation() {
        let center = coords("0", "0", "0");
        assert!(generate_circle_commands("p", &center, 0.0, 8, 1, 0.0).is_err());
        assert!(generate_circle_commands("p", &center, 1.0, 2, 1, 0.0).is_err());
    }
}
