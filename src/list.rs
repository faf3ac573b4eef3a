//! Singly linked list with the usual coursework operations:
//! counting, replacing, rotating and slicing.
//!
//! Nodes live in a slot vector and link to each other by index. The list
//! keeps the index of its last node, so appending does not walk the list.

use std::{
    fmt,
    ops::{Add, AddAssign},
};

use tracing::debug;

use crate::error::ListError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = ListError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' | 'l' => Ok(Direction::Left),
            'R' | 'r' => Ok(Direction::Right),
            _ => Err(ListError::InvalidDirection(c)),
        }
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    next: Option<usize>,
}

#[derive(Clone)]
pub struct List<T> {
    /// `None` marks a slot freed by `remove`, reused by the next `attach`.
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    first: Option<usize>,
    last: Option<usize>,
    len: usize,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            slots: vec![],
            free: vec![],
            first: None,
            last: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Appends `data` at the end of the list.
    pub fn attach(&mut self, data: T) {
        let index = self.alloc(Node { data, next: None });
        match self.last {
            Some(last) => self.set_next(last, Some(index)),
            None => self.first = Some(index),
        }
        self.last = Some(index);
        self.len += 1;
    }

    pub fn first(&self) -> Option<&T> {
        self.node(self.first?).map(|node| &node.data)
    }

    pub fn last(&self) -> Option<&T> {
        self.node(self.last?).map(|node| &node.data)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.first,
        }
    }

    /// Rotates the list `k` times.
    ///
    /// Rotating left moves the first element to the back;
    /// rotating right moves the last element to the front.
    pub fn rotate(&mut self, direction: Direction, k: usize) {
        if self.len == 0 {
            return;
        }

        let shift = match direction {
            Direction::Left => k % self.len,
            Direction::Right => (self.len - k % self.len) % self.len,
        };
        if shift == 0 {
            return;
        }
        debug!(?direction, k, "rotating list");

        // The first `shift` nodes move behind the old last node.
        let Some(new_last) = self.index_at(shift - 1) else {
            return;
        };
        let new_first = self.node(new_last).and_then(|node| node.next);
        if let Some(old_last) = self.last {
            self.set_next(old_last, self.first);
        }
        self.set_next(new_last, None);
        self.first = new_first;
        self.last = Some(new_last);
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Option<T> {
        let node = self.slots.get_mut(index)?.take()?;
        self.free.push(index);
        Some(node.data)
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index)?.as_ref()
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(index)?.as_mut()
    }

    fn set_next(&mut self, index: usize, next: Option<usize>) {
        if let Some(node) = self.node_mut(index) {
            node.next = next;
        }
    }

    /// Slot of the node at `position`, counting from the first.
    fn index_at(&self, position: usize) -> Option<usize> {
        let mut index = self.first?;
        for _ in 0..position {
            index = self.node(index)?.next?;
        }
        Some(index)
    }
}

impl<T: PartialEq> List<T> {
    /// Number of occurrences of `k`.
    pub fn appear(&self, k: &T) -> usize {
        self.iter().filter(|&data| data == k).count()
    }

    /// Whether `k` occurs exactly `m` times.
    pub fn appear_m(&self, k: &T, m: usize) -> bool {
        self.appear(k) == m
    }

    /// Replaces every `a` with `b` and returns the number of replacements.
    pub fn replace_all(&mut self, a: &T, b: T) -> usize
    where
        T: Clone,
    {
        if *a == b {
            return 0;
        }

        let mut count = 0;
        let mut cursor = self.first;
        while let Some(index) = cursor {
            let Some(node) = self.node_mut(index) else {
                break;
            };
            if node.data == *a {
                node.data = b.clone();
                count += 1;
            }
            cursor = node.next;
        }
        count
    }

    /// Removes the first occurrence of `x`.
    pub fn remove(&mut self, x: &T) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        let mut previous = None;
        let mut cursor = self.first;
        while let Some(index) = cursor {
            let Some(node) = self.node(index) else {
                break;
            };
            if node.data != *x {
                previous = Some(index);
                cursor = node.next;
                continue;
            }

            let next = node.next;
            match previous {
                Some(previous) => self.set_next(previous, next),
                None => self.first = next,
            }
            if self.last == Some(index) {
                self.last = previous;
            }
            self.len -= 1;
            return self.release(index).ok_or(ListError::NotFound);
        }

        debug!("value to remove was not found in the list");
        Err(ListError::NotFound)
    }
}

impl<T: Clone> List<T> {
    /// Copies the elements at positions `start..=end` into a new list.
    pub fn sub_list(&self, start: usize, end: usize) -> Result<List<T>, ListError> {
        if end >= self.len {
            return Err(ListError::IndexOutOfRange {
                index: end,
                len: self.len,
            });
        }
        if start > end {
            return Err(ListError::InvalidRange { start, end });
        }

        Ok(self.iter().skip(start).take(end - start + 1).cloned().collect())
    }

    /// Appends a copy of every element of `other`.
    pub fn extend_from(&mut self, other: &List<T>) {
        for data in other.iter() {
            self.attach(data.clone());
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        for data in iter {
            list.attach(data);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Clone> Add for &List<T> {
    type Output = List<T>;

    fn add(self, other: &List<T>) -> List<T> {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T: Clone> AddAssign<&List<T>> for List<T> {
    fn add_assign(&mut self, other: &List<T>) {
        self.extend_from(other);
    }
}

pub struct Iter<'a, T> {
    list: &'a List<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next?)?;
        self.next = node.next;
        Some(&node.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(items: &[i32]) -> List<i32> {
        items.iter().copied().collect()
    }

    fn items(list: &List<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn attach_appends_in_order() {
        let mut l = List::new();
        l.attach(3);
        l.attach(1);
        l.attach(4);
        assert_eq!(items(&l), vec![3, 1, 4]);
        assert_eq!(l.len(), 3);
        assert_eq!(l.first(), Some(&3));
        assert_eq!(l.last(), Some(&4));
    }

    #[test]
    fn appear_counts_occurrences() {
        let l = list(&[1, 2, 1, 3, 1]);
        assert_eq!(l.appear(&1), 3);
        assert!(l.appear_m(&1, 3));
        assert!(!l.appear_m(&2, 2));
        assert!(l.appear_m(&9, 0));
    }

    #[test]
    fn replace_all_reports_count() {
        let mut l = list(&[4, 0, 4, 2]);
        assert_eq!(l.replace_all(&4, 7), 2);
        assert_eq!(items(&l), vec![7, 0, 7, 2]);
        assert_eq!(l.replace_all(&0, 0), 0);
        assert_eq!(l.replace_all(&5, 1), 0);
    }

    #[test]
    fn rotate_left_and_right() {
        let mut l = list(&[1, 2, 3, 4, 5]);
        l.rotate(Direction::Left, 2);
        assert_eq!(items(&l), vec![3, 4, 5, 1, 2]);

        l.rotate(Direction::Right, 2);
        assert_eq!(items(&l), vec![1, 2, 3, 4, 5]);

        l.rotate(Direction::Right, 6);
        assert_eq!(items(&l), vec![5, 1, 2, 3, 4]);

        l.rotate(Direction::Left, 5);
        assert_eq!(items(&l), vec![5, 1, 2, 3, 4]);
        assert_eq!(l.last(), Some(&4));
    }

    #[test]
    fn rotate_empty_list_is_noop() {
        let mut l: List<i32> = List::new();
        l.rotate(Direction::Left, 3);
        assert!(l.is_empty());
    }

    #[test]
    fn direction_from_char() {
        assert_eq!(Direction::try_from('L'), Ok(Direction::Left));
        assert_eq!(Direction::try_from('R'), Ok(Direction::Right));
        assert_eq!(Direction::try_from('x'), Err(ListError::InvalidDirection('x')));
    }

    #[test]
    fn sub_list_is_inclusive() {
        let l = list(&[0, 1, 2, 3, 4]);
        assert_eq!(items(&l.sub_list(1, 3).unwrap()), vec![1, 2, 3]);
        assert_eq!(items(&l.sub_list(4, 4).unwrap()), vec![4]);
        assert_eq!(
            l.sub_list(2, 5),
            Err(ListError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            l.sub_list(3, 1),
            Err(ListError::InvalidRange { start: 3, end: 1 })
        );
    }

    #[test]
    fn remove_first_occurrence() {
        let mut l = list(&[1, 2, 3, 2]);
        assert_eq!(l.remove(&2), Ok(2));
        assert_eq!(items(&l), vec![1, 3, 2]);
        assert_eq!(l.remove(&2), Ok(2));
        assert_eq!(l.last(), Some(&3));
        assert_eq!(l.remove(&1), Ok(1));
        assert_eq!(l.remove(&9), Err(ListError::NotFound));
        assert_eq!(l.remove(&3), Ok(3));
        assert_eq!(l.remove(&3), Err(ListError::Empty));
        assert_eq!(l.len(), 0);
    }

    #[test]
    fn concatenation_copies_both_lists() {
        let a = list(&[1, 2]);
        let b = list(&[3]);
        let c = &a + &b;
        assert_eq!(items(&c), vec![1, 2, 3]);
        assert_eq!(items(&a), vec![1, 2]);

        let mut d = list(&[0]);
        d += &c;
        assert_eq!(items(&d), vec![0, 1, 2, 3]);
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn last_follows_every_change() {
        let mut l = list(&[1, 2, 3]);
        assert_eq!(l.last(), Some(&3));

        l.rotate(Direction::Left, 1);
        assert_eq!(l.last(), Some(&1));
        l.attach(4);
        assert_eq!(items(&l), vec![2, 3, 1, 4]);

        l.rotate(Direction::Right, 1);
        assert_eq!(l.last(), Some(&1));
        l.attach(5);
        assert_eq!(items(&l), vec![4, 2, 3, 1, 5]);

        assert_eq!(l.remove(&5), Ok(5));
        assert_eq!(l.last(), Some(&1));
        l.attach(6);
        assert_eq!(items(&l), vec![4, 2, 3, 1, 6]);

        for x in [4, 2, 3, 1, 6] {
            assert_eq!(l.remove(&x), Ok(x));
        }
        assert_eq!(l.first(), None);
        assert_eq!(l.last(), None);
        l.attach(7);
        assert_eq!(items(&l), vec![7]);
        assert_eq!(l.last(), Some(&7));
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut l = list(&[1, 2, 3]);
        assert_eq!(l.remove(&2), Ok(2));
        l.attach(4);
        assert_eq!(l.slots.len(), 3);
        assert_eq!(items(&l), vec![1, 3, 4]);
    }

    #[test]
    fn long_list_attaches_and_drops() {
        let n = 200_000;
        let mut l = List::new();
        for i in 0..n {
            l.attach(i);
        }
        assert_eq!(l.len(), n as usize);
        assert_eq!(l.last(), Some(&(n - 1)));
        assert_eq!(l.appear(&(n / 2)), 1);
    }

    #[test]
    fn debug_lists_values() {
        assert_eq!(format!("{:?}", list(&[1, 2])), "[1, 2]");
    }
}
