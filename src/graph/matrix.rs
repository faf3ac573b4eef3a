use tracing::warn;

use crate::error::GraphError;

/// Undirected graph over dense vertex indices `0..n`, kept both as a
/// symmetric weight matrix and as per-vertex adjacency lists.
///
/// A matrix entry of zero means "no edge".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixGraph {
    vertices: Vec<i64>,
    matrix: Vec<Vec<i64>>,
    /// `(neighbor, weight)` pairs in insertion order.
    lists: Vec<Vec<(usize, i64)>>,
    edge_count: usize,
}

impl MatrixGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex with the given value; its index is the number of
    /// vertices inserted before it.
    pub fn insert_vertex(&mut self, value: i64) -> usize {
        self.vertices.push(value);
        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; self.vertices.len()]);
        self.lists.push(vec![]);
        self.vertices.len() - 1
    }

    pub fn insert_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<(), GraphError> {
        let (u, v) = (self.check(u)?, self.check(v)?);
        self.matrix[u][v] = weight;
        self.matrix[v][u] = weight;
        self.lists[u].push((v, weight));
        if u != v {
            self.lists[v].push((u, weight));
        }
        self.edge_count += 1;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Value stored for the vertex at `index`.
    pub fn value(&self, index: usize) -> Option<i64> {
        self.vertices.get(index).copied()
    }

    pub fn adjacent(&self, u: usize) -> Result<&[(usize, i64)], GraphError> {
        let u = self.check(u)?;
        Ok(&self.lists[u])
    }

    /// Every non-zero matrix cell as `(row, column, weight)`, row by row.
    pub fn matrix_entries(&self) -> Vec<(usize, usize, i64)> {
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &w)| w != 0)
                    .map(move |(j, &w)| (i, j, w))
            })
            .collect()
    }

    /// Every adjacency list entry as `(vertex, neighbor, weight)`.
    pub fn list_entries(&self) -> Vec<(usize, usize, i64)> {
        self.lists
            .iter()
            .enumerate()
            .flat_map(|(i, list)| list.iter().map(move |&(j, w)| (i, j, w)))
            .collect()
    }

    fn check(&self, index: usize) -> Result<usize, GraphError> {
        if index < self.vertices.len() {
            Ok(index)
        } else {
            warn!(index, len = self.vertices.len(), "vertex index out of range");
            Err(GraphError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> MatrixGraph {
        let mut graph = MatrixGraph::new();
        for value in [10, 20, 30] {
            graph.insert_vertex(value);
        }
        graph.insert_edge(0, 1, 1).unwrap();
        graph.insert_edge(1, 2, 4).unwrap();
        graph
    }

    #[test]
    fn matrix_is_symmetric() {
        let graph = sample();
        assert_eq!(
            graph.matrix_entries(),
            vec![(0, 1, 1), (1, 0, 1), (1, 2, 4), (2, 1, 4)]
        );
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.value(2), Some(30));
    }

    #[test]
    fn adjacency_lists_keep_insertion_order() {
        let graph = sample();
        assert_eq!(graph.adjacent(1), Ok(&[(0, 1), (2, 4)][..]));
        assert_eq!(
            graph.list_entries(),
            vec![(0, 1, 1), (1, 0, 1), (1, 2, 4), (2, 1, 4)]
        );
    }

    #[test]
    fn out_of_range_indices() {
        let mut graph = sample();
        assert_eq!(
            graph.insert_edge(0, 3, 1),
            Err(GraphError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(graph.adjacent(5).is_err());
        assert!(MatrixGraph::new().is_empty());
    }
}
