use std::collections::VecDeque;
use std::hash::Hash;
use std::iter::FromIterator;

use ahash::AHashSet;

/// A FIFO queue that remembers every value ever inserted.
/// A value is enqueued at most once, even after it has been popped.
pub struct SetQueue<T> {
    visited: AHashSet<T>,
    queue: VecDeque<T>,
}

impl<T: Hash + Eq + Clone> SetQueue<T> {
    pub fn new() -> Self {
        Self {
            visited: AHashSet::default(),
            queue: VecDeque::new(),
        }
    }

    /// Enqueues `e` and marks it visited. Returns false if `e` was visited before.
    pub fn insert(&mut self, e: T) -> bool {
        if self.visited.insert(e.clone()) {
            self.queue.push_back(e);
            true
        } else {
            false
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    pub fn is_visited(&self, e: &T) -> bool {
        self.visited.contains(e)
    }

    /// The number of values waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T: Hash + Eq + Clone> Default for SetQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for SetQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for e in iter {
            queue.insert(e);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::SetQueue;

    #[test]
    fn first_in_first_out() {
        let mut q: SetQueue<_> = vec![3, 1, 2].into_iter().collect();
        assert_eq!(Some(3), q.pop());
        assert_eq!(Some(1), q.pop());
        assert_eq!(Some(2), q.pop());
        assert_eq!(None, q.pop());
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut q = SetQueue::new();
        assert!(q.insert(1));
        assert!(!q.insert(1));
        assert_eq!(1, q.len());
    }

    #[test]
    fn popped_values_stay_visited() {
        let mut q = SetQueue::new();
        q.insert("a");
        assert_eq!(Some("a"), q.pop());
        assert!(q.is_empty());
        assert!(q.is_visited(&"a"));
        assert!(!q.insert("a"));
        assert!(q.is_empty());
    }
}
