use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::{debug, warn};

use crate::error::GraphError;

use super::model::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    cost: i64,
    position: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source distances, with the predecessor of each reached vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: i64,
    labels: Vec<i64>,
    distances: Vec<Option<i64>>,
    previous: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn source(&self) -> i64 {
        self.source
    }

    /// Distance from the source, or `None` when `label` is unreachable,
    /// not in the graph, or farther than `i64::MAX`.
    pub fn distance(&self, label: i64) -> Option<i64> {
        self.distances[self.position(label)?]
    }

    /// Vertex labels from the source to `label`, both included.
    pub fn path_to(&self, label: i64) -> Option<Vec<i64>> {
        let mut position = self.position(label)?;
        self.distances[position]?;

        let mut path = vec![self.labels[position]];
        while let Some(previous) = self.previous[position] {
            path.push(self.labels[previous]);
            position = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Every vertex with its distance, in vertex insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Option<i64>)> + '_ {
        self.labels.iter().copied().zip(self.distances.iter().copied())
    }

    fn position(&self, label: i64) -> Option<usize> {
        self.labels.iter().position(|&l| l == label)
    }
}

impl Graph {
    /// Dijkstra's algorithm over the adjacency matrix.
    pub fn shortest_paths(&self, source: i64) -> Result<ShortestPaths, GraphError> {
        let start = self.resolve(source)?.index();
        if let Some(edge) = self.edges().iter().find(|edge| edge.weight() < 0) {
            warn!(edge = %self.labeled(edge), "negative edge weight");
            return Err(GraphError::NegativeWeight {
                weight: edge.weight(),
            });
        }

        let matrix = self.adjacency_matrix().with_zero_diagonal();
        let n = matrix.len();
        let mut distances: Vec<Option<i64>> = vec![None; n];
        let mut previous = vec![None; n];
        let mut heap = BinaryHeap::new();

        distances[start] = Some(0);
        heap.push(State {
            cost: 0,
            position: start,
        });

        while let Some(State { cost, position }) = heap.pop() {
            if distances[position].is_some_and(|best| cost > best) {
                continue;
            }

            for (next, weight) in matrix.row(position).iter().enumerate() {
                let Some(weight) = weight else {
                    continue;
                };
                let Some(next_cost) = cost.checked_add(*weight) else {
                    debug!(
                        from = matrix.labels()[position],
                        to = matrix.labels()[next],
                        "distance overflows i64"
                    );
                    continue;
                };
                if distances[next].map_or(true, |best| next_cost < best) {
                    debug!(
                        from = matrix.labels()[position],
                        to = matrix.labels()[next],
                        distance = next_cost,
                        "relaxed"
                    );
                    distances[next] = Some(next_cost);
                    previous[next] = Some(position);
                    heap.push(State {
                        cost: next_cost,
                        position: next,
                    });
                }
            }
        }

        Ok(ShortestPaths {
            source,
            labels: matrix.labels().to_vec(),
            distances,
            previous,
        })
    }

    /// Shortest paths from the vertex labelled `0`.
    pub fn shortest_paths_from_zero(&self) -> Result<ShortestPaths, GraphError> {
        self.shortest_paths(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;
    use pretty_assertions::assert_eq;

    fn sample(kind: GraphKind) -> Graph {
        let mut graph = Graph::new(kind);
        for label in 0..=5 {
            graph.insert_vertex(label);
        }
        for (u, v, w) in [
            (0, 1, 7),
            (0, 2, 9),
            (0, 5, 14),
            (1, 2, 10),
            (1, 3, 15),
            (2, 3, 11),
            (2, 5, 2),
            (3, 4, 6),
            (4, 5, 9),
        ] {
            graph.insert_edge(u, v, w).unwrap();
        }
        graph
    }

    #[test]
    fn distances_and_paths() {
        let paths = sample(GraphKind::Undirected).shortest_paths_from_zero().unwrap();
        let distances: Vec<_> = paths.iter().collect();
        assert_eq!(
            distances,
            vec![
                (0, Some(0)),
                (1, Some(7)),
                (2, Some(9)),
                (3, Some(20)),
                (4, Some(20)),
                (5, Some(11)),
            ]
        );
        assert_eq!(paths.path_to(4), Some(vec![0, 2, 5, 4]));
        assert_eq!(paths.path_to(0), Some(vec![0]));
        assert_eq!(paths.distance(42), None);
    }

    #[test]
    fn directed_graph_leaves_unreachable_vertices() {
        let paths = sample(GraphKind::Directed).shortest_paths(2).unwrap();
        assert_eq!(paths.distance(0), None);
        assert_eq!(paths.path_to(0), None);
        assert_eq!(paths.distance(4), Some(17));
        assert_eq!(paths.path_to(4), Some(vec![2, 3, 4]));
    }

    #[test]
    fn rejects_negative_weights_and_unknown_sources() {
        let mut graph = sample(GraphKind::Undirected);
        assert_eq!(
            graph.shortest_paths(9),
            Err(GraphError::VertexNotFound { label: 9 })
        );
        graph.insert_edge(3, 5, -1).unwrap();
        assert_eq!(
            graph.shortest_paths(0),
            Err(GraphError::NegativeWeight { weight: -1 })
        );
    }

    #[test]
    fn overflowing_distance_is_unreachable() {
        let heavy = i64::MAX / 2 + 1;
        let mut graph = Graph::new(GraphKind::Undirected);
        for label in 0..3 {
            graph.insert_vertex(label);
        }
        graph.insert_edge(0, 1, heavy).unwrap();
        graph.insert_edge(1, 2, heavy).unwrap();

        let paths = graph.shortest_paths(0).unwrap();
        assert_eq!(paths.distance(1), Some(heavy));
        assert_eq!(paths.distance(2), None);
        assert_eq!(paths.path_to(2), None);
    }
}
