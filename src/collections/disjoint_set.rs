//! Disjoint-set forest (union-find) over arbitrary hashable elements.
//!
//! Elements are interned into a dense index on [`make_set`](ForestDisjointSet::make_set);
//! the forest itself is stored as parallel `parent`/`rank` vectors so finds walk
//! contiguous memory.
//!
//! # Performance
//!
//! - Parent pointers live in `Cell<usize>` so `find` can compress paths through
//!   a shared reference.
//! - Path compression plus union-by-rank give amortized \(O(\alpha(n))\) finds.
//! - `element_count` and `set_count` are maintained incrementally (\(O(1)\)).
//!
//! # Invariants
//!
//! - Every element belongs to exactly one set.
//! - `element_count` never decreases (there is no removal).
//! - `set_count` drops by exactly one per merging `union`, and is unchanged otherwise.

use core::fmt::Debug;
use core::hash::Hash;
use std::cell::Cell;
use std::collections::HashMap;

use crate::error::{GraphError, Result};

/// A forest of disjoint sets over elements of type `T`.
#[derive(Debug, Clone)]
pub struct ForestDisjointSet<T> {
    index: HashMap<T, usize>,
    elements: Vec<T>,
    /// Parent pointers; a root points to itself.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
    set_count: usize,
}

impl<T> ForestDisjointSet<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty forest with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            elements: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// Number of elements ever added.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of disjoint sets.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns `true` if the forest holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if `element` has been added.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// Adds `element` as a singleton set.
    ///
    /// Returns `false` (and changes nothing) if the element is already present.
    pub fn make_set(&mut self, element: T) -> bool {
        if self.index.contains_key(&element) {
            return false;
        }
        let id = self.elements.len();
        self.index.insert(element.clone(), id);
        self.elements.push(element);
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        self.set_count += 1;
        true
    }

    /// Returns the representative of the set containing `element`, or `None`
    /// if the element is unknown.
    pub fn find(&self, element: &T) -> Option<&T> {
        let id = *self.index.get(element)?;
        Some(&self.elements[self.find_root(id)])
    }

    /// Returns `true` if both elements are known and belong to the same set.
    pub fn are_in_same_set(&self, a: &T, b: &T) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.find_root(ia) == self.find_root(ib),
            _ => false,
        }
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `Ok(true)` if two distinct sets were merged, `Ok(false)` if both
    /// elements were already in the same set.
    ///
    /// # Errors
    /// Returns an argument error if either element was never added.
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool> {
        let ia = self.id_of(a)?;
        let ib = self.id_of(b)?;
        Ok(self.union_ids(ia, ib))
    }

    /// Iterates over every element in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.elements.iter()
    }

    fn id_of(&self, element: &T) -> Result<usize> {
        self.index.get(element).copied().ok_or_else(|| {
            GraphError::InvalidArgument(format!("element {element:?} is not in the disjoint set"))
        })
    }

    /// Two-pass find: locate the root, then point every node on the path at it.
    fn find_root(&self, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let cell = &self.parent[curr];
            let next = cell.get();
            cell.set(root);
            curr = next;
        }

        root
    }

    fn union_ids(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find_root(a);
        let root_b = self.find_root(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[root_a];
        let rank_b = self.rank[root_b];
        if rank_a < rank_b {
            self.parent[root_a].set(root_b);
        } else if rank_a > rank_b {
            self.parent[root_b].set(root_a);
        } else {
            self.parent[root_b].set(root_a);
            self.rank[root_a] = rank_a.saturating_add(1);
        }

        self.set_count -= 1;
        true
    }
}

impl<T> Default for ForestDisjointSet<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ForestDisjointSet<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.make_set(element);
        }
        set
    }
}
