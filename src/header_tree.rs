//! A complete binary tree filled in level order, with *header lists* that
//! group every node holding the same value.
//!
//! Used on text, the header lists give a character frequency chart, and let
//! a reader jump from one occurrence of a character straight to the next.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct TreeNode<T> {
    data: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Index of the header list this node belongs to.
    header: usize,
}

/// The nodes sharing one value, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderList {
    nodes: Vec<NodeId>,
}

impl HeaderList {
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct LinkedBinaryTree<T> {
    /// Nodes in level order; node `i` is the parent of `2i + 1` and `2i + 2`.
    nodes: Vec<TreeNode<T>>,
    /// Header lists in order of the first appearance of their value.
    headers: Vec<HeaderList>,
}

impl<T: PartialEq> LinkedBinaryTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![],
            headers: vec![],
        }
    }

    /// Adds `data` at the next free position in level order
    /// and registers it in the header list for its value.
    pub fn insert(&mut self, data: T) -> NodeId {
        let id = NodeId(self.nodes.len());

        if let Some(parent) = id.0.checked_sub(1).map(|i| i / 2) {
            let parent = &mut self.nodes[parent];
            if parent.left.is_none() {
                parent.left = Some(id);
            } else {
                parent.right = Some(id);
            }
        }

        let header = match self.header_index(&data) {
            Some(index) => {
                self.headers[index].nodes.push(id);
                index
            }
            None => {
                self.headers.push(HeaderList { nodes: vec![id] });
                self.headers.len() - 1
            }
        };

        self.nodes.push(TreeNode {
            data,
            left: None,
            right: None,
            header,
        });
        id
    }

    fn header_index(&self, data: &T) -> Option<usize> {
        self.headers.iter().position(|list| {
            list.nodes
                .first()
                .is_some_and(|first| self.nodes[first.0].data == *data)
        })
    }

    pub fn header_list(&self, data: &T) -> Option<&HeaderList> {
        self.header_index(data).map(|index| &self.headers[index])
    }
}

impl<T> LinkedBinaryTree<T> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).map(|node| &node.data)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.right)
    }

    pub fn headers(&self) -> impl Iterator<Item = &HeaderList> {
        self.headers.iter()
    }

    /// The next node, in insertion order, holding the same value as `id`.
    pub fn next_occurrence(&self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(id.0)?;
        let nodes = &self.headers[node.header].nodes;
        let position = nodes.iter().position(|&other| other == id)?;
        nodes.get(position + 1).copied()
    }

    /// Each distinct value with its number of occurrences,
    /// in order of first appearance.
    pub fn frequencies(&self) -> Vec<(&T, usize)> {
        self.headers
            .iter()
            .filter_map(|list| {
                let first = list.nodes.first()?;
                Some((&self.nodes[first.0].data, list.len()))
            })
            .collect()
    }

    /// Number of edges from the root to the deepest leaf,
    /// or `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        self.root().map(|root| self.levels(Some(root)) - 1)
    }

    fn levels(&self, id: Option<NodeId>) -> usize {
        match id {
            Some(id) => 1 + self.levels(self.left(id)).max(self.levels(self.right(id))),
            None => 0,
        }
    }

    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut queue: VecDeque<NodeId> = self.root().into_iter().collect();
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id.0];
            out.push(&node.data);
            queue.extend(node.left);
            queue.extend(node.right);
        }
        out
    }

    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![];
        let mut current = self.root();
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.left(id);
            }
            if let Some(id) = stack.pop() {
                out.push(&self.nodes[id.0].data);
                current = self.right(id);
            }
        }
        out
    }
}

impl LinkedBinaryTree<char> {
    /// Builds the tree from the characters of `text`.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<T: PartialEq> Default for LinkedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for LinkedBinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for data in iter {
            tree.insert(data);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_fills_levels_left_to_right() {
        let tree: LinkedBinaryTree<i32> = (1..=6).collect();
        let root = tree.root().unwrap();
        let left = tree.left(root).unwrap();
        let right = tree.right(root).unwrap();

        assert_eq!(tree.get(left), Some(&2));
        assert_eq!(tree.get(right), Some(&3));
        assert_eq!(tree.left(left).and_then(|id| tree.get(id)), Some(&4));
        assert_eq!(tree.right(left).and_then(|id| tree.get(id)), Some(&5));
        assert_eq!(tree.left(right).and_then(|id| tree.get(id)), Some(&6));
        assert_eq!(tree.right(right), None);
        assert_eq!(tree.height(), Some(2));
    }

    #[test]
    fn traversals() {
        let tree: LinkedBinaryTree<i32> = (1..=5).collect();
        assert_eq!(tree.level_order(), vec![&1, &2, &3, &4, &5]);
        assert_eq!(tree.in_order(), vec![&4, &2, &5, &1, &3]);
    }

    #[test]
    fn character_frequencies() {
        let tree = LinkedBinaryTree::from_text("banana");
        assert_eq!(tree.frequencies(), vec![(&'b', 1), (&'a', 3), (&'n', 2)]);
        assert_eq!(tree.headers().count(), 3);
    }

    #[test]
    fn header_list_links_every_occurrence() {
        let tree = LinkedBinaryTree::from_text("abcab");
        let list = tree.header_list(&'a').unwrap();
        assert_eq!(list.nodes(), &[NodeId(0), NodeId(3)]);
        assert!(tree.header_list(&'z').is_none());

        assert_eq!(tree.next_occurrence(NodeId(0)), Some(NodeId(3)));
        assert_eq!(tree.next_occurrence(NodeId(3)), None);
        assert_eq!(tree.next_occurrence(NodeId(1)), Some(NodeId(4)));
    }

    #[test]
    fn empty_tree() {
        let tree = LinkedBinaryTree::from_text("");
        assert!(tree.is_empty());
        assert_eq!(tree.height(), None);
        assert_eq!(tree.frequencies(), vec![]);
    }
}
