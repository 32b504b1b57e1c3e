/// painter3d core library - software rendering pipeline for triangle meshes
///
/// Loads OBJ meshes, projects them with a rotating perspective camera, orders
/// facets back to front with the painter's algorithm and shades them with a
/// single directional light. Drawing and input are delegated to a host
/// through the [`Canvas`] and [`InputSource`] traits.

pub mod canvas;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod obj;
pub mod painter;
pub mod projection;
pub mod scene;
pub mod shading;
pub mod transform;

// Re-export commonly used types
pub use canvas::{Canvas, DrawCommand, DrawList, HostEvent, InputSource, PointerButton, ScreenPoint};
pub use config::RenderConfig;
pub use error::{MeshError, MeshResult};
pub use frame::FrameClock;
pub use geometry::{Color, Edge, Facet, Mesh, Vertex};
pub use input::InputMapper;
pub use projection::{Camera, ProjectedVertex, Viewport, DEPTH_EPSILON};
pub use scene::{DefaultMesh, MeshProducer, ObjFile, RenderFlags, Scene};
pub use transform::{RotationState, Transform};
