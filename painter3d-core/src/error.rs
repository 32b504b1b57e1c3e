/// Error types for mesh loading
use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh loading operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that abort a mesh load. None of them touch the active scene.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A vertex or facet line had a malformed field.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The mesh file does not exist.
    #[error("mesh file not found: {}", path.display())]
    MissingResource { path: PathBuf },

    /// A facet refers to a vertex that was never defined.
    #[error("facet {facet} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        facet: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Attach a 1-based line number to an error produced by a single-line parser.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse { line, message },
            other => other,
        }
    }
}
