//! Bounded circular queue, and a stack-queue (deque) built on top of it.

use tracing::debug;

use crate::{error::CollectionError, stack::effective_capacity};

/// FIFO ring buffer.
///
/// The buffer has one more slot than the capacity and always keeps one slot
/// free, so `front == rear` means empty and `rear + 1 == front` means full
/// (modulo the slot count).
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
}

impl<T> CircularQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(crate::stack::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let slots = effective_capacity(capacity) + 1;
        Self {
            slots: (0..slots).map(|_| None).collect(),
            front: 0,
            rear: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn len(&self) -> usize {
        (self.rear + self.slots.len() - self.front) % self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    pub fn is_full(&self) -> bool {
        (self.rear + 1) % self.slots.len() == self.front
    }

    /// Adds an item at the rear.
    pub fn add(&mut self, item: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(self.full());
        }
        self.slots[self.rear] = Some(item);
        self.rear = (self.rear + 1) % self.slots.len();
        Ok(())
    }

    /// Removes the item at the front.
    pub fn delete(&mut self) -> Result<T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        item.ok_or(CollectionError::Empty)
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.front].as_ref()
        }
    }

    /// Iterates from the front to the rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len()).filter_map(move |k| self.slots[self.slot(k)].as_ref())
    }

    pub(crate) fn add_front(&mut self, item: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(self.full());
        }
        self.front = (self.front + self.slots.len() - 1) % self.slots.len();
        self.slots[self.front] = Some(item);
        Ok(())
    }

    /// Physical slot of the `k`-th element counted from the front.
    fn slot(&self, k: usize) -> usize {
        (self.front + k) % self.slots.len()
    }

    fn full(&self) -> CollectionError {
        debug!(capacity = self.capacity(), "queue is full");
        CollectionError::Full {
            capacity: self.capacity(),
        }
    }
}

impl<T: PartialEq> CircularQueue<T> {
    fn position(&self, item: &T) -> Result<usize, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        self.iter().position(|x| x == item).ok_or_else(|| {
            debug!("value to move was not found in the queue");
            CollectionError::NotFound
        })
    }

    /// Moves the first occurrence of `item` to the front,
    /// shifting the elements before it one place towards the rear.
    pub fn move_to_front(&mut self, item: &T) -> Result<(), CollectionError> {
        let position = self.position(item)?;
        for k in (1..=position).rev() {
            let (a, b) = (self.slot(k), self.slot(k - 1));
            self.slots.swap(a, b);
        }
        Ok(())
    }

    /// Moves the first occurrence of `item` to the rear,
    /// shifting the elements after it one place towards the front.
    pub fn move_to_rear(&mut self, item: &T) -> Result<(), CollectionError> {
        let position = self.position(item)?;
        for k in position..self.len() - 1 {
            let (a, b) = (self.slot(k), self.slot(k + 1));
            self.slots.swap(a, b);
        }
        Ok(())
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A queue that also accepts pushes at the front, so it can act as a stack.
#[derive(Debug, Clone)]
pub struct StackQueue<T> {
    queue: CircularQueue<T>,
}

impl<T> StackQueue<T> {
    pub fn new() -> Self {
        Self {
            queue: CircularQueue::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: CircularQueue::with_capacity(capacity),
        }
    }

    /// Pushes onto the front, where `pop` takes from.
    pub fn push(&mut self, item: T) -> Result<(), CollectionError> {
        self.queue.add_front(item)
    }

    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.queue.delete()
    }

    pub fn add_rear(&mut self, item: T) -> Result<(), CollectionError> {
        self.queue.add(item)
    }

    pub fn delete_front(&mut self) -> Result<T, CollectionError> {
        self.queue.delete()
    }

    pub fn front(&self) -> Option<&T> {
        self.queue.front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.queue.iter()
    }
}

impl<T> Default for StackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> StackQueue<T> {
    pub fn move_to_front(&mut self, item: &T) -> Result<(), CollectionError> {
        self.queue.move_to_front(item)
    }

    pub fn move_to_rear(&mut self, item: &T) -> Result<(), CollectionError> {
        self.queue.move_to_rear(item)
    }
}
