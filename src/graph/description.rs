//! The positional text format for graphs:
//!
//! ```text
//! n m
//! <n vertex labels>
//! <m edges, each `u v w`, or each `u v` with weight 1>
//! ```
//!
//! Line breaks carry no meaning, so `3 2 1 2 3 1 2 5 2 3 4` is a valid
//! description. All edges use the same form, told apart by the number of
//! fields left after the labels.

use crate::{
    error::{GraphError, InputError},
    text::{self, Field, Spanned},
};

use super::{
    matrix::MatrixGraph,
    model::{Graph, GraphKind},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription {
    pub vertices: Vec<i64>,
    /// `(u, v, weight)` triples.
    pub edges: Vec<(i64, i64, i64)>,
}

impl GraphDescription {
    pub fn parse(source: &str) -> Result<Self, InputError> {
        let lines = text::read_lines(source)?;
        let fields: Vec<_> = text::fields(&lines).collect();
        let [n, m, rest @ ..] = fields.as_slice() else {
            return Err(InputError::MissingHeader);
        };
        let (n, m) = (n.as_count()?, m.as_count()?);

        if rest.len() < n {
            return Err(InputError::ShapeMismatch {
                what: "vertex labels",
                expected: n,
                found: rest.len(),
            });
        }
        let (labels, rest) = rest.split_at(n);
        let vertices = labels
            .iter()
            .map(|field| field.as_num())
            .collect::<Result<Vec<_>, _>>()?;

        let width = match rest.len() {
            found if found == m.saturating_mul(3) => 3,
            found if found == m.saturating_mul(2) => 2,
            found => {
                return Err(InputError::ShapeMismatch {
                    what: "edge fields",
                    expected: m.saturating_mul(3),
                    found,
                })
            }
        };
        let edges = rest
            .chunks(width)
            .map(edge)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { vertices, edges })
    }
}

fn edge(fields: &[&Spanned<Field>]) -> Result<(i64, i64, i64), InputError> {
    let [u, v, weight @ ..] = fields else {
        return Err(InputError::ShapeMismatch {
            what: "edge fields",
            expected: 2,
            found: fields.len(),
        });
    };
    let weight = match weight.first() {
        Some(weight) => weight.as_num()?,
        None => 1,
    };
    Ok((u.as_num()?, v.as_num()?, weight))
}

impl Graph {
    pub fn from_description(
        description: &GraphDescription,
        kind: GraphKind,
    ) -> Result<Self, GraphError> {
        let mut graph = Graph::new(kind);
        for &label in &description.vertices {
            graph.insert_vertex(label);
        }
        for &(u, v, weight) in &description.edges {
            graph.insert_edge(u, v, weight)?;
        }
        Ok(graph)
    }
}

impl MatrixGraph {
    /// Builds the graph reading each edge endpoint as a vertex index.
    pub fn from_description(description: &GraphDescription) -> Result<Self, GraphError> {
        let mut graph = MatrixGraph::new();
        for &value in &description.vertices {
            graph.insert_vertex(value);
        }
        for &(u, v, weight) in &description.edges {
            let [u, v] = [u, v].map(|index| usize::try_from(index).unwrap_or(usize::MAX));
            graph.insert_edge(u, v, weight)?;
        }
        Ok(graph)
    }
}

/// Reads an undirected graph from its text description.
pub fn parse(source: &str) -> Result<Graph, GraphError> {
    let description = GraphDescription::parse(source)?;
    Graph::from_description(&description, GraphKind::Undirected)
}
