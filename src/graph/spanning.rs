//! Minimum spanning forests.
//!
//! Both algorithms ignore edge direction and return one tree per connected
//! component, so they agree on the total weight for any input.

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::debug;

use super::model::{EdgeId, Graph, LabeledEdge, VertexId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    edges: Vec<LabeledEdge>,
    total_weight: i128,
}

impl SpanningForest {
    fn new(mut edges: Vec<LabeledEdge>) -> Self {
        edges.sort();
        let total_weight = edges.iter().map(|edge| i128::from(edge.weight)).sum();
        Self {
            edges,
            total_weight,
        }
    }

    /// Chosen edges sorted by first label, second label and weight.
    pub fn edges(&self) -> &[LabeledEdge] {
        &self.edges
    }

    /// Sum of the edge weights, widened so that it cannot overflow.
    pub fn total_weight(&self) -> i128 {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Union-find over vertex indices, with path halving and union by size.
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Returns false when `a` and `b` were already in the same set.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        true
    }
}

/// Candidate edge in Prim's frontier. Ordered so that the max-heap
/// pops the lightest edge, the earliest inserted one among equals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    weight: i64,
    edge: EdgeId,
    to: VertexId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.edge.cmp(&self.edge))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Graph {
    /// Kruskal: scan edges by increasing weight and keep those joining two
    /// different components.
    pub fn kruskal(&self) -> SpanningForest {
        let mut order: Vec<EdgeId> = (0..self.edges().len()).map(EdgeId).collect();
        order.sort_by_key(|id| self.edges()[id.index()].weight());

        let mut sets = DisjointSets::new(self.vertices().len());
        let mut chosen = vec![];
        for id in order {
            let edge = &self.edges()[id.index()];
            let [u, v] = edge.ends();
            if sets.union(u.index(), v.index()) {
                chosen.push(self.labeled(edge));
            } else {
                debug!(edge = %self.labeled(edge), "edge rejected, it would close a cycle");
            }
        }
        SpanningForest::new(chosen)
    }

    /// Prim: grow a tree from each unvisited vertex, always taking the
    /// lightest edge leaving the tree.
    pub fn prim(&self) -> SpanningForest {
        let adjacency = self.undirected_adjacency();
        let mut in_tree = vec![false; self.vertices().len()];
        let mut chosen = vec![];

        for root in 0..self.vertices().len() {
            if in_tree[root] {
                continue;
            }
            in_tree[root] = true;
            let mut frontier: BinaryHeap<Candidate> = adjacency[root].iter().copied().collect();

            while let Some(Candidate { edge, to, .. }) = frontier.pop() {
                if in_tree[to.index()] {
                    continue;
                }
                in_tree[to.index()] = true;
                chosen.push(self.labeled(&self.edges()[edge.index()]));
                frontier.extend(
                    adjacency[to.index()]
                        .iter()
                        .filter(|candidate| !in_tree[candidate.to.index()])
                        .copied(),
                );
            }
        }
        SpanningForest::new(chosen)
    }

    pub fn minimum_spanning_tree(&self) -> SpanningForest {
        self.kruskal()
    }

    /// Every edge as a candidate from both of its endpoints,
    /// whatever the graph kind.
    fn undirected_adjacency(&self) -> Vec<Vec<Candidate>> {
        let mut adjacency = vec![vec![]; self.vertices().len()];
        for (index, edge) in self.edges().iter().enumerate() {
            let [u, v] = edge.ends();
            let (edge, weight) = (EdgeId(index), edge.weight());
            adjacency[u.index()].push(Candidate { weight, edge, to: v });
            adjacency[v.index()].push(Candidate { weight, edge, to: u });
        }
        adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;
    use pretty_assertions::assert_eq;

    fn edge(from: i64, to: i64, weight: i64) -> LabeledEdge {
        LabeledEdge { from, to, weight }
    }

    fn weighted(kind: GraphKind, vertices: &[i64], edges: &[(i64, i64, i64)]) -> Graph {
        let mut graph = Graph::new(kind);
        for &label in vertices {
            graph.insert_vertex(label);
        }
        for &(u, v, w) in edges {
            graph.insert_edge(u, v, w).unwrap();
        }
        graph
    }

    #[test]
    fn kruskal_and_prim_agree() {
        let graph = weighted(
            GraphKind::Undirected,
            &[0, 1, 2, 3, 4],
            &[
                (0, 1, 2),
                (0, 3, 6),
                (1, 2, 3),
                (1, 3, 8),
                (1, 4, 5),
                (2, 4, 7),
                (3, 4, 9),
            ],
        );
        let expected = vec![edge(0, 1, 2), edge(0, 3, 6), edge(1, 2, 3), edge(1, 4, 5)];

        let kruskal = graph.kruskal();
        assert_eq!(kruskal.edges(), expected.as_slice());
        assert_eq!(kruskal.total_weight(), 16);
        assert_eq!(graph.prim(), kruskal);
        assert_eq!(graph.minimum_spanning_tree(), kruskal);
    }

    #[test]
    fn disconnected_graph_gives_a_forest() {
        let graph = weighted(
            GraphKind::Undirected,
            &[1, 2, 3, 4, 5],
            &[(1, 2, 4), (2, 3, 1), (1, 3, 2), (4, 5, 7)],
        );
        let forest = graph.kruskal();
        assert_eq!(forest.edges(), &[edge(1, 3, 2), edge(2, 3, 1), edge(4, 5, 7)]);
        assert_eq!(forest.total_weight(), 10);
        assert_eq!(graph.prim().total_weight(), 10);
    }

    #[test]
    fn direction_is_ignored() {
        let graph = weighted(
            GraphKind::Directed,
            &[1, 2, 3],
            &[(2, 1, 1), (3, 2, 1), (1, 3, 5)],
        );
        assert_eq!(graph.prim().total_weight(), 2);
        assert_eq!(graph.kruskal().total_weight(), 2);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::default();
        assert!(graph.kruskal().is_empty());
        assert!(graph.prim().is_empty());
    }

    #[test]
    fn total_weight_does_not_overflow() {
        let graph = weighted(
            GraphKind::Undirected,
            &[0, 1, 2],
            &[(0, 1, i64::MAX), (1, 2, i64::MAX)],
        );
        let expected = 2 * i128::from(i64::MAX);
        assert_eq!(graph.kruskal().total_weight(), expected);
        assert_eq!(graph.prim().total_weight(), expected);
    }
}
