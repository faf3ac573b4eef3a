use std::fmt;

use tracing::{debug, warn};

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphKind {
    #[default]
    Undirected,
    /// Edges are only registered on their first endpoint.
    Directed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    label: i64,
    /// Incident edges in insertion order.
    edges: Vec<EdgeId>,
}

impl Vertex {
    pub fn label(&self) -> i64 {
        self.label
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    ends: [VertexId; 2],
    weight: i64,
}

impl Edge {
    pub fn ends(&self) -> [VertexId; 2] {
        self.ends
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// The endpoint opposite to `from`.
    pub fn other_end(&self, from: VertexId) -> VertexId {
        if self.ends[0] == from {
            self.ends[1]
        } else {
            self.ends[0]
        }
    }

    fn same_as(&self, ends: [VertexId; 2], weight: i64) -> bool {
        let [u, v] = ends;
        self.weight == weight && (self.ends == [u, v] || self.ends == [v, u])
    }
}

/// An edge expressed with vertex labels.
///
/// Ordered by first label, then second label, then weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabeledEdge {
    pub from: i64,
    pub to: i64,
    pub weight: i64,
}

impl fmt::Display for LabeledEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.to, self.weight)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    kind: GraphKind,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: vec![],
            edges: vec![],
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex, or returns the existing one with the same label.
    pub fn insert_vertex(&mut self, label: i64) -> VertexId {
        if let Some(id) = self.vertex_id(label) {
            debug!(label, "vertex already present");
            return id;
        }
        self.vertices.push(Vertex {
            label,
            edges: vec![],
        });
        VertexId(self.vertices.len() - 1)
    }

    /// Adds an edge between two existing vertices.
    ///
    /// Inserting an edge equal to an existing one (same weight, same
    /// endpoints in either orientation) returns the existing edge.
    pub fn insert_edge(&mut self, u: i64, v: i64, weight: i64) -> Result<EdgeId, GraphError> {
        let ends = [self.resolve(u)?, self.resolve(v)?];

        if let Some(index) = self.edges.iter().position(|e| e.same_as(ends, weight)) {
            debug!(u, v, weight, "edge already present");
            return Ok(EdgeId(index));
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { ends, weight });
        self.vertices[ends[0].0].edges.push(id);
        if self.kind == GraphKind::Undirected && ends[0] != ends[1] {
            self.vertices[ends[1].0].edges.push(id);
        }
        Ok(id)
    }

    pub fn vertex_id(&self, label: i64) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|vertex| vertex.label == label)
            .map(VertexId)
    }

    pub fn vertex(&self, label: i64) -> Option<&Vertex> {
        self.vertex_id(label).map(|id| &self.vertices[id.0])
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn label(&self, id: VertexId) -> i64 {
        self.vertices[id.0].label
    }

    pub fn labeled(&self, edge: &Edge) -> LabeledEdge {
        LabeledEdge {
            from: self.label(edge.ends[0]),
            to: self.label(edge.ends[1]),
            weight: edge.weight,
        }
    }

    /// Finds an edge between `u` and `v` in either orientation,
    /// optionally requiring a particular weight.
    pub fn edge(&self, u: i64, v: i64, weight: Option<i64>) -> Option<&Edge> {
        let ends = [self.vertex_id(u)?, self.vertex_id(v)?];
        self.edges.iter().find(|edge| {
            (edge.ends == ends || edge.ends == [ends[1], ends[0]])
                && weight.map_or(true, |w| edge.weight == w)
        })
    }

    /// Labels at the other end of each incident edge, in insertion order.
    pub fn neighbors(&self, label: i64) -> Result<Vec<i64>, GraphError> {
        let id = self.resolve(label)?;
        Ok(self
            .incident(id)
            .map(|(next, _, _)| self.label(next))
            .collect())
    }

    /// Each vertex label with the labels of its neighbours.
    pub fn adjacency_list(&self) -> Vec<(i64, Vec<i64>)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| {
                let neighbors = self
                    .incident(VertexId(index))
                    .map(|(next, _, _)| self.label(next))
                    .collect();
                (vertex.label, neighbors)
            })
            .collect()
    }

    /// Weights indexed by vertex insertion order.
    /// Parallel edges keep the smallest weight.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let n = self.vertices.len();
        let mut cells = vec![vec![None; n]; n];
        for from in 0..n {
            for (to, weight, _) in self.incident(VertexId(from)) {
                let cell: &mut Option<i64> = &mut cells[from][to.0];
                *cell = Some(cell.map_or(weight, |w| w.min(weight)));
            }
        }
        AdjacencyMatrix {
            labels: self.vertices.iter().map(|v| v.label).collect(),
            cells,
        }
    }

    /// Whether the edge `u`-`v` shares an endpoint with an edge of this graph.
    pub fn is_linked(&self, u: i64, v: i64) -> bool {
        self.edges.iter().any(|edge| {
            let [a, b] = [self.label(edge.ends[0]), self.label(edge.ends[1])];
            [a, b].contains(&u) || [a, b].contains(&v)
        })
    }

    pub fn has_cycle(&self) -> bool {
        match self.kind {
            GraphKind::Undirected => self.has_undirected_cycle(),
            GraphKind::Directed => self.has_directed_cycle(),
        }
    }

    /// Depth-first search remembering the edge each vertex was reached by;
    /// meeting a visited vertex through any other edge closes a cycle.
    fn has_undirected_cycle(&self) -> bool {
        let mut visited = vec![false; self.vertices.len()];
        for root in 0..self.vertices.len() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            let mut stack: Vec<(VertexId, Option<EdgeId>)> = vec![(VertexId(root), None)];
            while let Some((vertex, parent)) = stack.pop() {
                for (next, _, edge) in self.incident(vertex) {
                    if Some(edge) == parent {
                        continue;
                    }
                    if visited[next.0] {
                        return true;
                    }
                    visited[next.0] = true;
                    stack.push((next, Some(edge)));
                }
            }
        }
        false
    }

    /// Depth-first search marking the vertices on the current path;
    /// reaching one of them again means a back edge.
    fn has_directed_cycle(&self) -> bool {
        let n = self.vertices.len();
        let mut visited = vec![false; n];
        let mut on_path = vec![false; n];
        for root in 0..n {
            if visited[root] {
                continue;
            }
            let mut stack = vec![(VertexId(root), 0)];
            visited[root] = true;
            on_path[root] = true;
            while let Some((vertex, cursor)) = stack.last_mut() {
                let vertex = *vertex;
                match self.vertices[vertex.0].edges.get(*cursor) {
                    Some(&edge) => {
                        *cursor += 1;
                        let next = self.edges[edge.0].other_end(vertex);
                        if on_path[next.0] {
                            return true;
                        }
                        if !visited[next.0] {
                            visited[next.0] = true;
                            on_path[next.0] = true;
                            stack.push((next, 0));
                        }
                    }
                    None => {
                        on_path[vertex.0] = false;
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    /// Looks up a vertex by label, logging a warning when it is absent.
    pub(crate) fn resolve(&self, label: i64) -> Result<VertexId, GraphError> {
        self.vertex_id(label).ok_or_else(|| {
            warn!(label, "vertex not found in graph");
            GraphError::VertexNotFound { label }
        })
    }

    /// Neighbour, weight and edge of each edge registered on `vertex`.
    pub(crate) fn incident(
        &self,
        vertex: VertexId,
    ) -> impl Iterator<Item = (VertexId, i64, EdgeId)> + '_ {
        self.vertices[vertex.0].edges.iter().map(move |&id| {
            let edge = &self.edges[id.0];
            (edge.other_end(vertex), edge.weight, id)
        })
    }
}

/// Dense weight table; `None` means there is no edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    labels: Vec<i64>,
    cells: Vec<Vec<Option<i64>>>,
}

impl AdjacencyMatrix {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row and column labels.
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    pub fn get(&self, row: usize, column: usize) -> Option<i64> {
        self.cells.get(row)?.get(column).copied().flatten()
    }

    pub fn row(&self, row: usize) -> &[Option<i64>] {
        self.cells.get(row).map_or(&[][..], Vec::as_slice)
    }

    /// Sets every vertex's distance to itself to zero.
    pub fn with_zero_diagonal(mut self) -> Self {
        for (i, row) in self.cells.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        self
    }
}
