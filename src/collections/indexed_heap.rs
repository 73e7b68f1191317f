//! `IndexedMinHeap`: a binary min-heap addressable by key.
//!
//! Each key appears at most once. Its slot is tracked in a side table so the
//! priority can be lowered in place ("decrease-key") with a single sift-up,
//! which is what Dijkstra-style frontiers need.
//!
//! Priorities only need `PartialOrd`; incomparable pairs (for example a `NaN`
//! cost) are treated as equal. Equal priorities pop in insertion order, which
//! keeps every algorithm built on the heap deterministic.

use core::cmp::Ordering;
use core::hash::Hash;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Entry<K, P> {
    key: K,
    priority: P,
    seq: u64,
}

/// A min-priority queue with decrease-key.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K, P> {
    data: Vec<Entry<K, P>>,
    slots: HashMap<K, usize>,
    next_seq: u64,
}

impl<K, P> IndexedMinHeap<K, P>
where
    K: Copy + Eq + Hash,
    P: Copy + PartialOrd,
{
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            slots: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty heap with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns the number of queued keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if `key` is currently queued.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Returns the queued priority of `key`.
    pub fn priority(&self, key: &K) -> Option<P> {
        self.slots.get(key).map(|&slot| self.data[slot].priority)
    }

    /// Returns the minimum entry without removing it.
    pub fn peek(&self) -> Option<(K, P)> {
        self.data.first().map(|e| (e.key, e.priority))
    }

    /// Inserts `key`, or lowers its priority if it is already queued.
    ///
    /// Returns `true` if the heap changed. A priority that is not lower than
    /// the queued one is ignored.
    pub fn push_or_decrease(&mut self, key: K, priority: P) -> bool {
        if let Some(&slot) = self.slots.get(&key) {
            if priority < self.data[slot].priority {
                self.data[slot].priority = priority;
                self.sift_up(slot);
                return true;
            }
            return false;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        let slot = self.data.len();
        self.data.push(Entry { key, priority, seq });
        self.slots.insert(key, slot);
        self.sift_up(slot);
        true
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap(0, last);
        let entry = self.data.pop()?;
        self.slots.remove(&entry.key);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some((entry.key, entry.priority))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.data.clear();
        self.slots.clear();
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        let (ea, eb) = (&self.data[a], &self.data[b]);
        match ea.priority.partial_cmp(&eb.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => ea.seq < eb.seq,
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.data.swap(a, b);
        self.slots.insert(self.data[a].key, a);
        self.slots.insert(self.data[b].key, b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}

impl<K, P> Default for IndexedMinHeap<K, P>
where
    K: Copy + Eq + Hash,
    P: Copy + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut heap = IndexedMinHeap::new();
        for (k, p) in [(1, 5), (2, 3), (3, 8), (4, 1), (5, 4)] {
            assert!(heap.push_or_decrease(k, p));
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|(k, _)| k).collect();
        assert_eq!(order, vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn decrease_key_moves_entry_up() {
        let mut heap = IndexedMinHeap::new();
        heap.push_or_decrease('a', 10.0);
        heap.push_or_decrease('b', 5.0);
        heap.push_or_decrease('c', 7.0);

        assert!(heap.push_or_decrease('a', 1.0));
        assert!(!heap.push_or_decrease('b', 6.0));
        assert_eq!(heap.priority(&'a'), Some(1.0));
        assert_eq!(heap.peek(), Some(('a', 1.0)));
        assert_eq!(heap.len(), 3);

        assert_eq!(heap.pop(), Some(('a', 1.0)));
        assert_eq!(heap.pop(), Some(('b', 5.0)));
        assert_eq!(heap.pop(), Some(('c', 7.0)));
        assert!(heap.is_empty());
        assert!(!heap.contains(&'a'));
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut heap = IndexedMinHeap::new();
        for k in [9, 3, 7, 1] {
            heap.push_or_decrease(k, 0u8);
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|(k, _)| k).collect();
        assert_eq!(order, vec![9, 3, 7, 1]);
    }
}
