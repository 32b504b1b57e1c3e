/// Rendering constants gathered in one place
use std::time::Duration;

use nalgebra::{Point3, Vector3};

use crate::geometry::Color;

/// Everything a scene and its frame clock are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Virtual drawing surface size in pixels
    pub width: u32,
    pub height: u32,

    pub camera_position: Point3<f64>,
    /// Effective focal length of the perspective projection
    pub distortion: f64,
    pub light_direction: Vector3<f64>,

    pub line_color: Color,
    pub facet_color: Color,
    pub text_color: Color,
    pub background_dark: Color,
    pub background_light: Color,
    pub checker_size: u32,

    /// Radians added to each axis per frame while auto-rotating
    pub rotation_step: f64,
    /// Radians per unit of pointer motion while dragging
    pub drag_sensitivity: f64,

    pub frame_interval: Duration,
    pub refresh_period: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            camera_position: Point3::new(0.0, 0.0, -10.0),
            distortion: 512.0,
            light_direction: Vector3::new(0.7, 0.7, -0.7),
            line_color: Color::new(50, 50, 50),
            facet_color: Color::new(100, 255, 100),
            text_color: Color::BLACK,
            background_dark: Color::new(175, 175, 175),
            background_light: Color::new(235, 235, 235),
            checker_size: 32,
            rotation_step: 0.02,
            drag_sensitivity: 0.02,
            // rounded up so that 60 intervals fill a whole refresh period
            frame_interval: Duration::from_nanos(1_000_000_000u64.div_ceil(60)),
            refresh_period: Duration::from_secs(1),
        }
    }
}
