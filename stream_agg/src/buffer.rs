//! Bounded FIFO buffer for stream retention
//!
//! Every dashboard keeps only the most recent slice of its event stream.
//! `BoundedBuffer` formalizes that pattern: a fixed-capacity ring over a
//! `VecDeque` that evicts the oldest entry once full. Eviction is silent.

use crate::{Result, StreamError};
use std::collections::VecDeque;

/// Fixed-capacity FIFO buffer. Oldest entries are evicted first on overflow.
#[derive(Debug, Clone)]
pub struct BoundedBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    /// Create a buffer holding at most `capacity` entries
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StreamError::InvalidInput(
                "Buffer capacity must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append an entry at the tail, evicting from the head while over capacity
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);

        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
    }

    /// Append a batch of entries in order
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, batch: I) {
        for item in batch {
            self.push(item);
        }
    }

    /// Number of retained entries (always <= capacity)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of retained entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over retained entries, oldest first
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// The most recently appended entry, if any
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterate over the most recent `n` entries, oldest of those first
    pub fn latest(&self, n: usize) -> impl Iterator<Item = &T> {
        let skip = self.items.len().saturating_sub(n);
        self.items.iter().skip(skip)
    }

    /// Drop all retained entries, keeping the capacity
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> BoundedBuffer<T> {
    /// Copy the retained entries, oldest first, without mutating the buffer
    pub fn snapshot(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(BoundedBuffer::<f64>::new(0).is_err());
    }

    #[test]
    fn test_len_tracks_min_of_appends_and_capacity() {
        let mut buffer = BoundedBuffer::new(3).unwrap();

        buffer.push(1);
        assert_eq!(buffer.len(), 1);

        buffer.push(2);
        buffer.push(3);
        assert_eq!(buffer.len(), 3);

        // Over capacity: oldest entry goes first
        buffer.push(4);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.snapshot(), vec![2, 3, 4]);
    }

    #[test]
    fn test_retains_last_hundred_of_150_appends() {
        let mut buffer = BoundedBuffer::new(100).unwrap();
        for i in 0..150 {
            buffer.push(i);
        }

        assert_eq!(buffer.len(), 100);
        let contents = buffer.snapshot();
        assert_eq!(contents.first(), Some(&50));
        assert_eq!(contents.last(), Some(&149));
    }

    #[test]
    fn test_latest_takes_the_tail() {
        let mut buffer = BoundedBuffer::new(10).unwrap();
        buffer.extend(0..5);

        let tail: Vec<_> = buffer.latest(2).copied().collect();
        assert_eq!(tail, vec![3, 4]);

        // Asking for more than is retained returns everything
        let all: Vec<_> = buffer.latest(50).copied().collect();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = BoundedBuffer::new(4).unwrap();
        buffer.extend(0..4);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 4);

        buffer.push(9);
        assert_eq!(buffer.snapshot(), vec![9]);
    }
}
