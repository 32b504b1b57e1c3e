/// Flat per-facet lighting from a single directional light
use std::f64::consts::PI;

use nalgebra::{Point3, Vector3};

use crate::geometry::Color;

/// Light intensity in `[0, 1]` for a facet with corners `a`, `b`, `c`.
///
/// The normal is the cross product of the unit edge vectors `ab` and `ac`
/// and is not renormalized. Intensity is `acos(normal · light) / π`, so a
/// facet facing the light head-on gets 0 and one edge-on to it gets 0.5.
///
/// Corners must be distinct; a zero-length edge produces NaN.
pub fn intensity(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    light_direction: &Vector3<f64>,
) -> f64 {
    let ab = (b - a).normalize();
    let ac = (c - a).normalize();
    let normal = ab.cross(&ac);

    let dot = normal.dot(light_direction).clamp(-1.0, 1.0);
    dot.acos() / PI
}

/// The base color of a facet scaled by its light intensity.
pub fn shade(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    base: Color,
    light_direction: &Vector3<f64>,
) -> Color {
    base.scaled(intensity(a, b, c, light_direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    // normal of this facet is +z
    fn corners() -> (Point3<f64>, Point3<f64>, Point3<f64>) {
        (
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        )
    }

    #[test]
    fn test_facing_light_is_black() {
        let (a, b, c) = corners();
        let light = Vector3::new(0.0, 0.0, 1.0);
        assert_eq!(shade(&a, &b, &c, Color::new(100, 255, 100), &light), Color::BLACK);
        assert_eq!(shade(&a, &b, &c, Color::new(255, 255, 255), &light), Color::BLACK);
    }

    #[test]
    fn test_perpendicular_light_is_half() {
        let (a, b, c) = corners();
        let light = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(intensity(&a, &b, &c, &light), 0.5);
        assert_eq!(
            shade(&a, &b, &c, Color::new(100, 255, 7), &light),
            Color::new(50, 127, 3)
        );
    }

    #[test]
    fn test_facing_away_is_full() {
        let (a, b, c) = corners();
        let light = Vector3::new(0.0, 0.0, -1.0);
        assert_eq!(intensity(&a, &b, &c, &light), 1.0);
        assert_eq!(
            shade(&a, &b, &c, Color::new(100, 255, 100), &light),
            Color::new(100, 255, 100)
        );
    }

    #[test]
    fn test_dot_is_clamped() {
        let (a, b, c) = corners();
        // longer than unit length; dot would be 3
        let light = Vector3::new(0.0, 0.0, 3.0);
        assert_eq!(intensity(&a, &b, &c, &light), 0.0);
    }
}
