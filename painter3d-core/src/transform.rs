/// Rotation state and the per-vertex object-to-camera transform
use nalgebra::{Point3, Rotation3, Vector3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Object-space to camera-space transform
pub struct Transform;

impl Transform {
    /// Rotate about X, then Y, then Z. Each step feeds the next, so the order matters.
    pub fn rotate(point: &Point3<f64>, rotation: &RotationState) -> Point3<f64> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z);

        let point = rx * point;
        let point = ry * point;
        rz * point
    }

    /// Rotate a point and move it into camera space.
    pub fn to_camera_space(
        point: &Point3<f64>,
        rotation: &RotationState,
        camera_position: &Point3<f64>,
    ) -> Point3<f64> {
        let rotated = Self::rotate(point, rotation);
        Point3::from(rotated.coords - camera_position.coords)
    }
}
