/// Geometry primitives for 3D rendering
use nalgebra::Point3;

use crate::error::{MeshError, MeshResult};
use crate::obj::derive_edges;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor` and floor the result.
    pub fn scaled(self, factor: f64) -> Self {
        let channel = |c: u8| (f64::from(c) * factor).floor().clamp(0.0, 255.0) as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// A vertex position in object space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f64>,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }
}

/// A triangle face defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facet {
    pub indices: [usize; 3],
    pub color: Option<Color>,
}

impl Facet {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            indices: [a, b, c],
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// An undirected edge, always stored as `(min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(usize, usize);

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn start(&self) -> usize {
        self.0
    }

    pub fn end(&self) -> usize {
        self.1
    }
}

/// A triangle mesh: vertices, facets and the edges derived from them.
///
/// A `Mesh` is only ever built whole, so a renderer holding one never sees a
/// partially loaded model.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    facets: Vec<Facet>,
    edges: Vec<Edge>,
}

impl Mesh {
    /// Validate facet indices and derive the edge list.
    pub fn new(vertices: Vec<Vertex>, facets: Vec<Facet>) -> MeshResult<Self> {
        let vertex_count = vertices.len();
        for (facet_index, facet) in facets.iter().enumerate() {
            if let Some(&index) = facet.indices.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    facet: facet_index,
                    index,
                    vertex_count,
                });
            }
        }

        let edges = derive_edges(&facets);
        Ok(Self {
            vertices,
            facets,
            edges,
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The built-in cube, two units across and centred on the origin
    pub fn cube() -> Self {
        let vertices = vec![
            Vertex::new(-1.0, -1.0, 1.0),
            Vertex::new(-1.0, 1.0, 1.0),
            Vertex::new(1.0, 1.0, 1.0),
            Vertex::new(1.0, -1.0, 1.0),
            Vertex::new(-1.0, -1.0, -1.0),
            Vertex::new(-1.0, 1.0, -1.0),
            Vertex::new(1.0, 1.0, -1.0),
            Vertex::new(1.0, -1.0, -1.0),
        ];

        let facets = [
            [0, 1, 2],
            [2, 3, 0],
            [1, 5, 6],
            [6, 2, 1],
            [5, 4, 7],
            [7, 6, 5],
            [4, 0, 3],
            [3, 7, 4],
            [3, 2, 6],
            [6, 7, 3],
            [0, 5, 1],
            [0, 4, 5],
        ]
        .into_iter()
        .map(|[a, b, c]| Facet::new(a, b, c))
        .collect::<Vec<_>>();

        let edges = derive_edges(&facets);
        Self {
            vertices,
            facets,
            edges,
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::cube()
    }
}
