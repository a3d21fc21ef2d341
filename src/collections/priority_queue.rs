use std::borrow::Borrow;
use std::hash::Hash;

use ahash::AHashMap;

struct Item<K, V, P> {
    key: K,
    value: V,
    priority: P,
    // breaks ties between equal priorities, lower is popped first
    sequence: u64,
}

impl<K, V, P: Ord> Item<K, V, P> {
    fn precedes(&self, other: &Self) -> bool {
        (&self.priority, self.sequence) < (&other.priority, other.sequence)
    }
}

/// A min-priority queue backed by a binary heap in a `Vec`, which supports changing
/// the priority of a queued entry.
///
/// Each entry is identified by a unique key. `indices` maps every queued key to the
/// entry's current slot in `heap` and is updated on every swap.
pub struct PriorityQueue<K, V, P> {
    heap: Vec<Item<K, V, P>>,
    indices: AHashMap<K, usize>,
    next_sequence: u64,
}

impl<K, V, P> PriorityQueue<K, V, P>
where
    K: Hash + Eq + Clone,
    P: Ord + Copy,
{
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            indices: AHashMap::default(),
            next_sequence: 0,
        }
    }

    /// Adds an entry. Returns false, leaving the queue unchanged, if `key` is already queued.
    pub fn push(&mut self, key: K, value: V, priority: P) -> bool {
        if self.indices.contains_key(&key) {
            return false;
        }
        let index = self.heap.len();
        self.indices.insert(key.clone(), index);
        self.heap.push(Item {
            key,
            value,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.sift_up(index);
        true
    }

    /// Removes the entry with the lowest priority.
    /// Among equal priorities, the entry pushed first is removed first.
    pub fn pop(&mut self) -> Option<(K, V, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop()?;
        self.indices.remove(&item.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item.key, item.value, item.priority))
    }

    /// Sets the priority of a queued entry and restores the heap order.
    /// Returns false if `key` is not queued.
    pub fn update_priority<Q>(&mut self, key: &Q, priority: P) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = match self.indices.get(key) {
            Some(&index) => index,
            None => return false,
        };
        let old = std::mem::replace(&mut self.heap[index].priority, priority);
        if priority < old {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        true
    }

    #[cfg(test)]
    pub fn priority<Q>(&self, key: &Q) -> Option<P>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.get(key).map(|&i| self.heap[i].priority)
    }

    #[cfg(test)]
    pub fn peek_priority(&self) -> Option<P> {
        self.heap.first().map(|item| item.priority)
    }

    #[cfg(test)]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.heap[index].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut first = index;
            if left < len && self.heap[left].precedes(&self.heap[first]) {
                first = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[first]) {
                first = right;
            }
            if first == index {
                break;
            }
            self.swap(index, first);
            index = first;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        for &i in [a, b].iter() {
            if let Some(slot) = self.indices.get_mut(&self.heap[i].key) {
                *slot = i;
            }
        }
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        assert_eq!(self.heap.len(), self.indices.len());
        for (i, item) in self.heap.iter().enumerate() {
            assert_eq!(Some(&i), self.indices.get(&item.key));
            if i > 0 {
                assert!(!item.precedes(&self.heap[(i - 1) / 2]));
            }
        }
    }
}

impl<K, V, P> Default for PriorityQueue<K, V, P>
where
    K: Hash + Eq + Clone,
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
