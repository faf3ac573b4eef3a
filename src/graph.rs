//! Graphs with vertices identified by integer labels.
//!
//! [`Graph`] owns its vertices and edges in two arenas and links them with
//! typed indices. [`MatrixGraph`] is the simpler index-based variant kept as
//! a weight matrix plus adjacency lists.

pub use description::{parse, GraphDescription};
pub use matrix::MatrixGraph;
pub use model::{
    AdjacencyMatrix, Edge, EdgeId, Graph, GraphKind, LabeledEdge, Vertex, VertexId,
};
pub use shortest_path::ShortestPaths;
pub use spanning::SpanningForest;

mod description;
mod matrix;
mod model;
mod shortest_path;
mod spanning;
mod traversal;
