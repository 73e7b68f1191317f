//! Auxiliary data structures used by the graph algorithms.
//!
//! - `disjoint_set`: union-find forest over hashable elements
//! - `indexed_heap`: binary min-heap with decrease-key

pub mod disjoint_set;
pub mod indexed_heap;

pub use disjoint_set::ForestDisjointSet;
pub use indexed_heap::IndexedMinHeap;
