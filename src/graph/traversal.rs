use std::collections::VecDeque;

use crate::error::GraphError;

use super::model::{Graph, VertexId};

impl Graph {
    /// Breadth-first order of the vertices reachable from `start`.
    pub fn bfs(&self, start: i64) -> Result<Vec<i64>, GraphError> {
        let start = self.resolve(start)?;
        let mut visited = vec![false; self.vertices().len()];
        let mut order = vec![];
        let mut queue = VecDeque::from([start]);
        visited[start.index()] = true;

        while let Some(vertex) = queue.pop_front() {
            order.push(self.label(vertex));
            for (next, _, _) in self.incident(vertex) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        Ok(order)
    }

    /// Depth-first order in which the vertices reachable from `start`
    /// are discovered.
    pub fn dfs(&self, start: i64) -> Result<Vec<i64>, GraphError> {
        let (discovered, _) = self.depth_first(self.resolve(start)?);
        Ok(discovered)
    }

    /// Depth-first order in which the vertices reachable from `start`
    /// are finished, i.e. after all their descendants.
    pub fn dfs_postorder(&self, start: i64) -> Result<Vec<i64>, GraphError> {
        let (_, finished) = self.depth_first(self.resolve(start)?);
        Ok(finished)
    }

    fn depth_first(&self, start: VertexId) -> (Vec<i64>, Vec<i64>) {
        let mut visited = vec![false; self.vertices().len()];
        let mut discovered = vec![self.label(start)];
        let mut finished = vec![];
        // Each frame holds a vertex and how many of its edges were explored.
        let mut stack = vec![(start, 0)];
        visited[start.index()] = true;

        while let Some((vertex, cursor)) = stack.last_mut() {
            let vertex = *vertex;
            let Some(next) = self.incident(vertex).nth(*cursor).map(|(next, _, _)| next) else {
                finished.push(self.label(vertex));
                stack.pop();
                continue;
            };
            *cursor += 1;
            if !visited[next.index()] {
                visited[next.index()] = true;
                discovered.push(self.label(next));
                stack.push((next, 0));
            }
        }
        (discovered, finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;
    use pretty_assertions::assert_eq;

    //   1 - 2 - 4
    //   |   |
    //   3 - 5   6
    fn sample() -> Graph {
        let mut graph = Graph::default();
        for label in 1..=6 {
            graph.insert_vertex(label);
        }
        for (u, v) in [(1, 2), (1, 3), (2, 4), (2, 5), (3, 5)] {
            graph.insert_edge(u, v, 1).unwrap();
        }
        graph
    }

    #[test]
    fn bfs_visits_by_distance() {
        assert_eq!(sample().bfs(1), Ok(vec![1, 2, 3, 4, 5]));
        assert_eq!(sample().bfs(5), Ok(vec![5, 2, 3, 1, 4]));
        assert_eq!(sample().bfs(6), Ok(vec![6]));
    }

    #[test]
    fn dfs_discovery_and_finish_order() {
        let graph = sample();
        assert_eq!(graph.dfs(1), Ok(vec![1, 2, 4, 5, 3]));
        assert_eq!(graph.dfs_postorder(1), Ok(vec![4, 3, 5, 2, 1]));
    }

    #[test]
    fn unknown_start_vertex() {
        assert_eq!(sample().bfs(9), Err(GraphError::VertexNotFound { label: 9 }));
        assert_eq!(sample().dfs(9), Err(GraphError::VertexNotFound { label: 9 }));
    }

    #[test]
    fn directed_traversal_follows_edge_direction() {
        let mut graph = Graph::new(GraphKind::Directed);
        for label in 1..=3 {
            graph.insert_vertex(label);
        }
        graph.insert_edge(1, 2, 1).unwrap();
        graph.insert_edge(3, 2, 1).unwrap();
        assert_eq!(graph.bfs(1), Ok(vec![1, 2]));
        assert_eq!(graph.dfs(3), Ok(vec![3, 2]));
    }
}
