//! Vertex color marks for traversals.
//!
//! A traversal moves each vertex White -> Gray -> Black exactly once. Colors
//! are kept in a side map keyed by vertex handle and live for a single walk;
//! vertices absent from the map are White.

use core::hash::Hash;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Traversal state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// Not yet discovered.
    #[default]
    White,
    /// Discovered, still on the frontier.
    Gray,
    /// Finished.
    Black,
}

/// Sparse vertex -> [`Color`] map.
#[derive(Debug, Clone)]
pub struct ColorMap<V> {
    colors: HashMap<V, Color>,
}

impl<V: Copy + Eq + Hash> ColorMap<V> {
    /// Creates a map where every vertex is White.
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Creates an all-White map with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: HashMap::with_capacity(capacity),
        }
    }

    /// Color of `vertex`.
    #[inline]
    pub fn get(&self, vertex: V) -> Color {
        self.colors.get(&vertex).copied().unwrap_or_default()
    }

    /// Sets the color of `vertex`.
    #[inline]
    pub fn set(&mut self, vertex: V, color: Color) {
        self.colors.insert(vertex, color);
    }

    /// Returns `true` if `vertex` is still White.
    #[inline]
    pub fn is_white(&self, vertex: V) -> bool {
        self.get(vertex) == Color::White
    }

    /// Resets every vertex to White.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Iterates over every non-White vertex and its color.
    pub fn iter(&self) -> impl Iterator<Item = (V, Color)> + '_ {
        self.colors.iter().map(|(&v, &c)| (v, c))
    }
}

impl<V: Copy + Eq + Hash> Default for ColorMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
