/// Wavefront OBJ reader (vertex and facet records only)
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{char, digit1, space0, space1},
    combinator::{all_consuming, map_res, opt, rest, value},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Edge, Facet, Mesh, Vertex};

const VERTEX_TAG: &str = "v";
const FACET_TAG: &str = "f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Record {
    Vertex,
    Facet,
}

/// Recognize the record tag at the start of a line; the tag must be followed by whitespace.
fn record_kind(input: &str) -> IResult<&str, Record> {
    alt((
        value(Record::Vertex, pair(tag(VERTEX_TAG), space1)),
        value(Record::Facet, pair(tag(FACET_TAG), space1)),
    ))(input)
}

/// Whitespace-separated fields up to the end of the line
fn fields(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(delimited(
        space0,
        separated_list0(space1, is_not(" \t")),
        space0,
    ))(input)
}

fn number(input: &str) -> IResult<&str, f64> {
    all_consuming(double)(input)
}

/// The 1-based index in front of any `/`-separated texture or normal references
fn index(input: &str) -> IResult<&str, usize> {
    all_consuming(terminated(
        map_res(digit1, |digits: &str| digits.parse::<usize>()),
        opt(preceded(char('/'), rest)),
    ))(input)
}

/// Fields following `expected` tag, or a parse error if the line is some other record.
fn record_fields(line: &str, expected: Record) -> MeshResult<Vec<&str>> {
    let line = line.trim_end();
    let (remainder, kind) = record_kind(line)
        .map_err(|_| MeshError::parse(0, format!("not a mesh record: `{line}`")))?;
    if kind != expected {
        return Err(MeshError::parse(0, format!("expected a {expected:?} record")));
    }

    fields(remainder)
        .map(|(_, fields)| fields)
        .map_err(|_| MeshError::parse(0, format!("unreadable fields: `{remainder}`")))
}

/// Parse a `v x y z` line.
pub fn parse_vertex(line: &str) -> MeshResult<Vertex> {
    let fields = record_fields(line, Record::Vertex)?;
    if fields.len() != 3 {
        return Err(MeshError::parse(
            0,
            format!("vertex needs 3 coordinates, found {}", fields.len()),
        ));
    }

    let mut coords = [0.0; 3];
    for (coord, field) in coords.iter_mut().zip(&fields) {
        *coord = number(field)
            .map(|(_, value)| value)
            .map_err(|_| MeshError::parse(0, format!("`{field}` is not a number")))?;
    }

    Ok(Vertex::new(coords[0], coords[1], coords[2]))
}

/// Parse an `f i j k` line into a facet with 0-based indices.
///
/// Tokens may carry secondary references (`3/1/2`, `3//2`); only the leading
/// vertex index is used. Tokens after the third are checked but dropped.
pub fn parse_facet(line: &str) -> MeshResult<Facet> {
    let fields = record_fields(line, Record::Facet)?;
    if fields.len() < 3 {
        return Err(MeshError::parse(
            0,
            format!("facet needs 3 vertex indices, found {}", fields.len()),
        ));
    }

    let mut indices = Vec::with_capacity(fields.len());
    for field in &fields {
        let (_, one_based) = index(field)
            .map_err(|_| MeshError::parse(0, format!("`{field}` is not a vertex index")))?;
        let zero_based = one_based
            .checked_sub(1)
            .ok_or_else(|| MeshError::parse(0, "vertex indices start at 1"))?;
        indices.push(zero_based);
    }

    Ok(Facet::new(indices[0], indices[1], indices[2]))
}

/// Collect the unique undirected edges of `facets` in first-seen order.
pub fn derive_edges(facets: &[Facet]) -> Vec<Edge> {
    let mut seen = HashSet::with_capacity(facets.len() * 3);
    let mut edges = Vec::with_capacity(facets.len() * 3);

    for facet in facets {
        let [a, b, c] = facet.indices;
        for edge in [Edge::new(a, b), Edge::new(b, c), Edge::new(a, c)] {
            if edge.start() != edge.end() && seen.insert(edge) {
                edges.push(edge);
            }
        }
    }

    edges
}

/// Build a mesh from OBJ text. Lines that are neither vertices nor facets are skipped.
pub fn read(source: &str) -> MeshResult<Mesh> {
    let mut vertices = Vec::new();
    let mut facets = Vec::new();
    let mut ignored = 0usize;

    for (number, line) in source.lines().enumerate() {
        let line_number = number + 1;
        match record_kind(line) {
            Ok((_, Record::Vertex)) => {
                vertices.push(parse_vertex(line).map_err(|e| e.at_line(line_number))?)
            }
            Ok((_, Record::Facet)) => {
                facets.push(parse_facet(line).map_err(|e| e.at_line(line_number))?)
            }
            Err(_) => ignored += 1,
        }
    }

    tracing::debug!(ignored, "skipped non-geometry lines");
    Mesh::new(vertices, facets)
}

/// Read and parse an OBJ file.
pub fn load_obj(path: impl AsRef<Path>) -> MeshResult<Mesh> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MeshError::MissingResource {
            path: path.to_path_buf(),
        },
        _ => MeshError::Io(e),
    })?;

    let mesh = read(&source)?;
    tracing::info!(
        path = %path.display(),
        vertices = mesh.vertices().len(),
        facets = mesh.facets().len(),
        edges = mesh.edges().len(),
        "loaded mesh"
    );
    Ok(mesh)
}
