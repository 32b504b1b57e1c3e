/// Scene state and the per-frame render pipeline
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nalgebra::Vector3;

use crate::canvas::{Canvas, ScreenPoint};
use crate::config::RenderConfig;
use crate::error::MeshResult;
use crate::geometry::{Color, Mesh};
use crate::obj;
use crate::painter::sort_back_to_front;
use crate::projection::{Camera, ProjectedVertex, Viewport};
use crate::shading::shade;
use crate::transform::RotationState;

/// Anything that can produce a complete mesh for the scene.
pub trait MeshProducer {
    fn produce(&self) -> MeshResult<Mesh>;
}

/// The built-in cube
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMesh;

impl MeshProducer for DefaultMesh {
    fn produce(&self) -> MeshResult<Mesh> {
        Ok(Mesh::cube())
    }
}

/// A Wavefront OBJ file on disk
#[derive(Debug, Clone)]
pub struct ObjFile(pub PathBuf);

impl MeshProducer for ObjFile {
    fn produce(&self) -> MeshResult<Mesh> {
        obj::load_obj(&self.0)
    }
}

/// Render mode switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderFlags {
    /// Advance the rotation every frame
    pub rotating: bool,
    /// Depth-sorted shaded facets instead of a wireframe
    pub filled: bool,
}

/// The rendered scene: one mesh, one camera, one light.
pub struct Scene {
    mesh: Arc<Mesh>,
    camera: Camera,
    flags: RenderFlags,
    viewport: Viewport,
    config: RenderConfig,
}

impl Scene {
    pub fn new(config: RenderConfig) -> Self {
        let mut scene = Self {
            mesh: Arc::new(Mesh::default()),
            camera: Camera::from_config(&config),
            flags: RenderFlags::default(),
            viewport: Viewport::new(config.width, config.height),
            config,
        };
        // The cube cannot fail to build, but it still goes through the regular load path.
        if let Err(e) = scene.load(&DefaultMesh) {
            tracing::error!("default mesh failed to load: {e}");
        }
        scene
    }

    /// Replace the mesh with whatever `producer` builds.
    ///
    /// On error the current mesh is left untouched.
    pub fn load<P: MeshProducer + ?Sized>(&mut self, producer: &P) -> MeshResult<()> {
        let mesh = producer.produce()?;
        self.mesh = Arc::new(mesh);
        Ok(())
    }

    pub fn load_mesh(&mut self, path: impl AsRef<Path>) -> MeshResult<()> {
        self.load(&ObjFile(path.as_ref().to_path_buf()))
    }

    pub fn mesh(&self) -> Arc<Mesh> {
        Arc::clone(&self.mesh)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn flags(&self) -> RenderFlags {
        self.flags
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_light_direction(&mut self, x: f64, y: f64, z: f64) {
        self.camera.light_direction = Vector3::new(x, y, z);
    }

    pub fn set_distortion(&mut self, distortion: f64) {
        self.camera.distortion = distortion;
    }

    pub fn toggle_rotating(&mut self) {
        self.flags.rotating = !self.flags.rotating;
    }

    pub fn toggle_filled(&mut self) {
        self.flags.filled = !self.flags.filled;
    }

    pub fn set_flags(&mut self, flags: RenderFlags) {
        self.flags = flags;
    }

    /// Put the camera back where it started, unrotated.
    pub fn reset_camera(&mut self) {
        self.camera.position = self.config.camera_position;
        self.camera.rotation = RotationState::zero();
    }

    /// Draw one frame: background, frame-rate overlay, then the model.
    pub fn render_frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C, frame_rate: u32) {
        self.render_background(canvas);
        canvas.draw_text(&frame_rate.to_string(), (8, 8), self.config.text_color);
        self.render_model(canvas);
    }

    fn render_background<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let size = self.config.checker_size.max(1);
        let step = size as i32;

        for column in 0..self.viewport.width.div_ceil(size) {
            for row in 0..self.viewport.height.div_ceil(size) {
                let color = if column % 2 != row % 2 {
                    self.config.background_dark
                } else {
                    self.config.background_light
                };

                let (x, y) = (column as i32 * step, row as i32 * step);
                canvas.fill_polygon(
                    &[(x, y), (x + step, y), (x + step, y + step), (x, y + step)],
                    color,
                );
            }
        }
    }

    fn render_model<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        if self.flags.rotating {
            let step = self.config.rotation_step;
            self.camera.rotation.rotate(step, step, step);
        }

        let mesh = self.mesh();
        let projected = self.project_vertices(&mesh);

        if self.flags.filled {
            let depths: Vec<f64> = projected.iter().map(|p| p.depth).collect();
            let vertices = mesh.vertices();

            for facet in sort_back_to_front(mesh.facets(), &depths) {
                let [a, b, c] = facet.indices;
                let color = shade(
                    &vertices[a].position,
                    &vertices[b].position,
                    &vertices[c].position,
                    facet.color.unwrap_or(self.config.facet_color),
                    &self.camera.light_direction,
                );
                let points: [ScreenPoint; 3] = [
                    projected[a].point(),
                    projected[b].point(),
                    projected[c].point(),
                ];
                canvas.fill_polygon(&points, color);
            }
        } else {
            let color: Color = self.config.line_color;
            for facet in mesh.facets() {
                let [a, b, c] = facet.indices;
                canvas.outline_polygon(
                    &[projected[a].point(), projected[b].point(), projected[c].point()],
                    color,
                );
            }
        }
    }

    /// Project every vertex of `mesh` with the current camera.
    pub fn project_vertices(&self, mesh: &Mesh) -> Vec<ProjectedVertex> {
        mesh.vertices()
            .iter()
            .map(|vertex| self.camera.project(vertex, &self.viewport))
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};
    use crate::error::MeshError;
    use crate::geometry::{Facet, Vertex};

    struct Failing;

    impl MeshProducer for Failing {
        fn produce(&self) -> MeshResult<Mesh> {
            Err(MeshError::Parse {
                line: 1,
                message: "broken".into(),
            })
        }
    }

    struct Triangle;

    impl MeshProducer for Triangle {
        fn produce(&self) -> MeshResult<Mesh> {
            Mesh::new(
                vec![
                    Vertex::new(0.0, 0.0, 0.0),
                    Vertex::new(1.0, 0.0, 0.0),
                    Vertex::new(0.0, 1.0, 0.0),
                ],
                vec![Facet::new(0, 1, 2)],
            )
        }
    }

    fn model_commands(list: &DrawList) -> &[DrawCommand] {
        // 25 x 19 checker squares and the overlay come first
        &list.commands()[25 * 19 + 1..]
    }

    #[test]
    fn test_failed_load_keeps_mesh() {
        let mut scene = Scene::default();
        scene.load(&Triangle).unwrap();
        assert!(scene.load(&Failing).is_err());
        assert_eq!(scene.mesh().facets().len(), 1);

        assert!(scene.load_mesh("/no/such/mesh.obj").is_err());
        assert_eq!(scene.mesh().vertices().len(), 3);
    }

    #[test]
    fn test_starts_with_cube() {
        let scene = Scene::default();
        assert_eq!(*scene.mesh(), Mesh::cube());
    }

    #[test]
    fn test_frame_layout() {
        let mut scene = Scene::default();
        let mut list = DrawList::new();
        scene.render_frame(&mut list, 42);

        let commands = list.commands();
        assert_eq!(
            commands[0],
            DrawCommand::FillPolygon {
                points: vec![(0, 0), (32, 0), (32, 32), (0, 32)],
                color: Color::new(235, 235, 235),
            }
        );
        // second square in the first column
        assert_eq!(
            commands[1],
            DrawCommand::FillPolygon {
                points: vec![(0, 32), (32, 32), (32, 64), (0, 64)],
                color: Color::new(175, 175, 175),
            }
        );
        assert_eq!(
            commands[25 * 19],
            DrawCommand::Text {
                text: "42".into(),
                position: (8, 8),
                color: Color::BLACK,
            }
        );
        // wireframe cube: one outline per facet
        assert_eq!(model_commands(&list).len(), 12);
    }

    #[test]
    fn test_wireframe_outlines_facets() {
        let mut scene = Scene::default();
        scene.load(&Triangle).unwrap();
        let mut list = DrawList::new();
        scene.render_frame(&mut list, 0);

        // camera-space z = 10, 512 / 10 = 51.2
        assert_eq!(
            model_commands(&list),
            &[DrawCommand::OutlinePolygon {
                points: vec![(400, 300), (451, 300), (400, 351)],
                color: Color::new(50, 50, 50),
            }]
        );
    }

    #[test]
    fn test_filled_mode_fills_every_facet() {
        let mut scene = Scene::default();
        scene.toggle_filled();
        let mut list = DrawList::new();
        scene.render_frame(&mut list, 0);

        let model = model_commands(&list);
        assert_eq!(model.len(), 12);
        assert!(model
            .iter()
            .all(|c| matches!(c, DrawCommand::FillPolygon { points, .. } if points.len() == 3)));
    }

    #[test]
    fn test_rotation_advances_once_per_frame() {
        let mut scene = Scene::default();
        scene.toggle_rotating();
        let mut list = DrawList::new();
        scene.render_frame(&mut list, 0);
        scene.render_frame(&mut list, 0);

        let rotation = scene.camera().rotation;
        assert!((rotation.x - 0.04).abs() < 1e-12);
        assert!((rotation.y - 0.04).abs() < 1e-12);
        assert!((rotation.z - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_light_and_distortion_mutators() {
        let mut scene = Scene::default();
        scene.set_flags(RenderFlags {
            rotating: false,
            filled: true,
        });

        // facing away from the light gives the full base color
        scene.load(&Triangle).unwrap();
        scene.set_light_direction(0.0, 0.0, -1.0);
        scene.set_distortion(100.0);

        let mut list = DrawList::new();
        scene.render_frame(&mut list, 0);
        assert_eq!(
            model_commands(&list),
            &[DrawCommand::FillPolygon {
                points: vec![(400, 300), (410, 300), (400, 310)],
                color: Color::new(100, 255, 100),
            }]
        );
    }

    #[test]
    fn test_reset_camera() {
        let mut scene = Scene::default();
        scene.camera_mut().position.z = -3.0;
        scene.camera_mut().rotation.rotate(1.0, 2.0, 3.0);
        scene.reset_camera();
        assert_eq!(scene.camera(), &Camera::default());
    }
}
