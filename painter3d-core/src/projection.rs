/// Camera state and perspective projection
use nalgebra::{Point3, Vector3};

use crate::config::RenderConfig;
use crate::geometry::Vertex;
use crate::transform::{RotationState, Transform};

/// Stand-in for a camera-space depth of exactly zero
pub const DEPTH_EPSILON: f64 = 0.00001;

/// Camera configuration for 3D rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f64>,
    pub rotation: RotationState,
    pub distortion: f64,
    pub light_direction: Vector3<f64>,
}

impl Camera {
    pub fn new(position: Point3<f64>, distortion: f64, light_direction: Vector3<f64>) -> Self {
        Self {
            position,
            rotation: RotationState::zero(),
            distortion,
            light_direction,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(
            config.camera_position,
            config.distortion,
            config.light_direction,
        )
    }

    /// Project an object-space vertex to the screen.
    pub fn project(&self, vertex: &Vertex, viewport: &Viewport) -> ProjectedVertex {
        let p = Transform::to_camera_space(&vertex.position, &self.rotation, &self.position);

        let depth = if p.z == 0.0 { DEPTH_EPSILON } else { p.z };
        let (centre_x, centre_y) = viewport.centre();

        let screen_x = self.distortion * p.x / depth + f64::from(centre_x);
        let screen_y = self.distortion * p.y / depth + f64::from(centre_y);

        ProjectedVertex {
            x: screen_x as i32,
            y: screen_y as i32,
            depth,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn centre(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// A vertex after projection; only valid for the frame it was computed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    pub x: i32,
    pub y: i32,
    /// Camera-space depth before the divide, used for ordering only
    pub depth: f64,
}

impl ProjectedVertex {
    pub fn point(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
