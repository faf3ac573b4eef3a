//! Bounded LIFO stacks, one over contiguous storage and one over linked nodes.

use tracing::debug;

use crate::error::CollectionError;

/// Capacity used when a stack or queue is created without one, or with zero.
pub const DEFAULT_CAPACITY: usize = 10;

pub(crate) fn effective_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_CAPACITY
    } else {
        capacity
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayStack<T> {
    /// Bottom of the stack first.
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = effective_capacity(capacity);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.items.pop().ok_or(CollectionError::Empty)
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

impl<T: PartialEq> ArrayStack<T> {
    /// Moves the lowest occurrence of `item` to the top.
    /// The other elements keep their relative order.
    ///
    /// Returns whether the item was found.
    pub fn move_to_top(&mut self, item: &T) -> Result<bool, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }

        match self.items.iter().position(|x| x == item) {
            Some(index) => {
                let found = self.items.remove(index);
                self.items.push(found);
                Ok(true)
            }
            None => {
                debug!("value to move was not found in the stack");
                Ok(false)
            }
        }
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A stack of boxed nodes, where the head node is the top.
#[derive(Debug)]
pub struct LinkedStack<T> {
    top: Link<T>,
    len: usize,
    capacity: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            top: None,
            len: 0,
            capacity: effective_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::Full {
                capacity: self.capacity,
            });
        }
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, CollectionError> {
        let node = self.top.take().ok_or(CollectionError::Empty)?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn top(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }

    /// Detaches the node at `index`, counted from the top.
    fn unlink(&mut self, index: usize) -> Option<Box<Node<T>>> {
        let mut link = &mut self.top;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        let mut node = link.take()?;
        *link = node.next.take();
        Some(node)
    }
}

impl<T: PartialEq> LinkedStack<T> {
    /// Moves the occurrence of `value` closest to the top onto the top.
    ///
    /// Returns whether the value was found.
    pub fn move_to_top(&mut self, value: &T) -> Result<bool, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }

        let Some(index) = self.iter().position(|x| x == value) else {
            debug!("value to move was not found in the stack");
            return Ok(false);
        };

        if let Some(mut node) = self.unlink(index) {
            node.next = self.top.take();
            self.top = Some(node);
        }
        Ok(true)
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn array_stack_is_lifo() {
        let mut stack = ArrayStack::new();
        for i in 1..=3 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.top(), Some(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(CollectionError::Empty));
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let stack: ArrayStack<i32> = ArrayStack::with_capacity(0);
        assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn array_stack_rejects_push_when_full() {
        let mut stack = ArrayStack::with_capacity(2);
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert!(stack.is_full());
        assert_eq!(stack.push('c'), Err(CollectionError::Full { capacity: 2 }));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn array_stack_move_to_top_keeps_order_of_others() {
        let mut stack = ArrayStack::new();
        for i in [1, 2, 3, 4, 5] {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.move_to_top(&2), Ok(true));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2, 5, 4, 3, 1]);

        assert_eq!(stack.move_to_top(&42), Ok(false));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2, 5, 4, 3, 1]);
    }

    #[test]
    fn move_to_top_on_empty_stack_fails() {
        let mut array: ArrayStack<i32> = ArrayStack::new();
        let mut linked: LinkedStack<i32> = LinkedStack::new();
        assert_eq!(array.move_to_top(&1), Err(CollectionError::Empty));
        assert_eq!(linked.move_to_top(&1), Err(CollectionError::Empty));
    }

    #[test]
    fn linked_stack_is_lifo_and_bounded() {
        let mut stack = LinkedStack::with_capacity(3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert_eq!(stack.push(4), Err(CollectionError::Full { capacity: 3 }));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(&2));
    }

    #[test]
    fn linked_stack_move_to_top() {
        let mut stack = LinkedStack::new();
        for i in 1..=5 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.move_to_top(&3), Ok(true));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 5, 4, 2, 1]);

        // Already on top.
        assert_eq!(stack.move_to_top(&3), Ok(true));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 5, 4, 2, 1]);

        assert_eq!(stack.move_to_top(&1), Ok(true));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 4, 2]);
        assert_eq!(stack.len(), 5);
    }

    #[test]
    fn linked_stack_move_to_top_of_missing_value() {
        let mut stack = LinkedStack::new();
        for i in 1..=3 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.move_to_top(&42), Ok(false));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(stack.len(), 3);
    }
}
