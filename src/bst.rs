//! Binary search tree over boxed nodes.
//!
//! Smaller values go to the left and equal or larger values go to the right.
//! After [`BinarySearchTree::reverse`] the tree is mirrored and the rule flips,
//! so an in-order traversal yields the values in descending order.

use std::{collections::VecDeque, fmt};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    PreOrder,
    InOrder,
    PostOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

type Link<T> = Option<Box<TreeNode<T>>>;

struct TreeNode<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> TreeNode<T> {
    fn leaf(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn child(&self, side: Side) -> &Link<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
    reversed: bool,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            reversed: false,
        }
    }

    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        loop {
            match link {
                Some(node) => {
                    let towards = side(&value, &node.data, self.reversed);
                    link = node.child_mut(towards);
                }
                None => {
                    *link = Some(TreeNode::leaf(value));
                    self.len += 1;
                    return;
                }
            }
        }
    }

    pub fn get(&self, value: &T) -> Option<&T> {
        let mut link = &self.root;
        while let Some(node) = link {
            if node.data == *value {
                return Some(&node.data);
            }
            link = node.child(side(value, &node.data, self.reversed));
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Removes one node holding `value`.
    ///
    /// A node with two children is replaced by its in-order predecessor,
    /// the right-most node of its left subtree.
    pub fn delete(&mut self, value: &T) -> bool {
        let reversed = self.reversed;
        let mut link = &mut self.root;
        loop {
            let towards = match link.as_deref() {
                Some(node) if node.data == *value => break,
                Some(node) => side(value, &node.data, reversed),
                None => {
                    debug!("value to delete was not found in the tree");
                    return false;
                }
            };
            link = match link {
                Some(node) => node.child_mut(towards),
                None => return false,
            };
        }

        let Some(mut node) = link.take() else {
            return false;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut left = Some(left);
                if let Some(predecessor) = take_rightmost(&mut left) {
                    node.data = predecessor;
                }
                node.left = left;
                node.right = Some(right);
                Some(node)
            }
        };
        self.len -= 1;
        true
    }
}

impl<T> BinarySearchTree<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn traverse(&self, order: Order) -> Vec<&T> {
        traverse(&self.root, order)
    }

    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&TreeNode<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(&node.data);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }

    /// Number of edges on the longest path from the root to a leaf,
    /// or `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        levels(&self.root).checked_sub(1)
    }

    /// Number of nodes.
    pub fn weight(&self) -> usize {
        weight(&self.root)
    }

    /// Height of the left subtree minus height of the right subtree of the root.
    pub fn height_balance(&self) -> isize {
        match &self.root {
            Some(root) => levels(&root.left) as isize - levels(&root.right) as isize,
            None => 0,
        }
    }

    /// Weight of the left subtree minus weight of the right subtree of the root.
    pub fn weight_balance(&self) -> isize {
        match &self.root {
            Some(root) => weight(&root.left) as isize - weight(&root.right) as isize,
            None => 0,
        }
    }

    /// Mirrors the tree, swapping the children of every node.
    pub fn reverse(&mut self) {
        mirror(&mut self.root);
        self.reversed = !self.reversed;
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.traverse(Order::InOrder)).finish()
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

/// The subtree in which `value` belongs, relative to a node holding `pivot`.
fn side<T: Ord>(value: &T, pivot: &T, reversed: bool) -> Side {
    match (value < pivot, reversed) {
        (true, false) | (false, true) => Side::Left,
        (false, false) | (true, true) => Side::Right,
    }
}

// The helpers below walk the tree with explicit stacks, since a degenerate
// tree is as deep as it is long.

fn traverse<T>(root: &Link<T>, order: Order) -> Vec<&T> {
    let mut out = vec![];
    let mut stack: Vec<&TreeNode<T>> = vec![];
    match order {
        Order::PreOrder => {
            stack.extend(root.as_deref());
            while let Some(node) = stack.pop() {
                out.push(&node.data);
                stack.extend(node.right.as_deref());
                stack.extend(node.left.as_deref());
            }
        }
        Order::InOrder => {
            let mut cursor = root.as_deref();
            loop {
                while let Some(node) = cursor {
                    stack.push(node);
                    cursor = node.left.as_deref();
                }
                let Some(node) = stack.pop() else {
                    break;
                };
                out.push(&node.data);
                cursor = node.right.as_deref();
            }
        }
        Order::PostOrder => {
            // Node, right, left reversed.
            stack.extend(root.as_deref());
            while let Some(node) = stack.pop() {
                out.push(&node.data);
                stack.extend(node.left.as_deref());
                stack.extend(node.right.as_deref());
            }
            out.reverse();
        }
    }
    out
}

fn levels<T>(link: &Link<T>) -> usize {
    let mut level: Vec<&TreeNode<T>> = link.as_deref().into_iter().collect();
    let mut count = 0;
    while !level.is_empty() {
        count += 1;
        level = level
            .iter()
            .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
            .flatten()
            .collect();
    }
    count
}

fn weight<T>(link: &Link<T>) -> usize {
    let mut stack: Vec<&TreeNode<T>> = link.as_deref().into_iter().collect();
    let mut count = 0;
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    count
}

fn mirror<T>(link: &mut Link<T>) {
    let mut stack: Vec<&mut TreeNode<T>> = link.as_deref_mut().into_iter().collect();
    while let Some(node) = stack.pop() {
        let TreeNode { left, right, .. } = node;
        std::mem::swap(left, right);
        stack.extend(left.as_deref_mut());
        stack.extend(right.as_deref_mut());
    }
}

/// Detaches the right-most node of the subtree, putting its left child
/// in its place, and returns its value.
fn take_rightmost<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.right.is_some() {
        link = &mut link.as_mut()?.right;
    }
    let node = link.take()?;
    let TreeNode { data, left, .. } = *node;
    *link = left;
    Some(data)
}
