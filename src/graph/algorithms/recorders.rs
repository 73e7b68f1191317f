//! Ready-made visitors that record what a traversal did.

use core::hash::Hash;
use std::collections::HashMap;

use crate::graph::algorithms::traversal::{Control, Visitor};
use crate::graph::traits::GraphEdge;

/// Records the tree edge through which each vertex was discovered.
#[derive(Debug, Clone)]
pub struct VertexPredecessorRecorder<V, E> {
    predecessors: HashMap<V, E>,
}

impl<V, E> VertexPredecessorRecorder<V, E>
where
    V: Copy + Eq + Hash,
    E: GraphEdge<Vertex = V>,
{
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            predecessors: HashMap::new(),
        }
    }

    /// The tree edge that discovered `vertex`; roots have none.
    pub fn predecessor(&self, vertex: V) -> Option<E> {
        self.predecessors.get(&vertex).copied()
    }

    /// The whole vertex -> tree edge map.
    pub fn predecessors(&self) -> &HashMap<V, E> {
        &self.predecessors
    }

    /// Tree path from the root of `vertex`'s search tree to `vertex`.
    ///
    /// Returns `None` if `vertex` was reached as a root or never reached.
    pub fn path_to(&self, vertex: V) -> Option<Vec<E>> {
        let mut path = Vec::new();
        let mut current = vertex;
        // Tree edges form a forest, so the walk always ends at a root.
        while let Some(&edge) = self.predecessors.get(&current) {
            path.push(edge);
            current = edge.source();
        }
        if path.is_empty() {
            return None;
        }
        path.reverse();
        Some(path)
    }
}

impl<V, E> Default for VertexPredecessorRecorder<V, E>
where
    V: Copy + Eq + Hash,
    E: GraphEdge<Vertex = V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Visitor<V, E> for VertexPredecessorRecorder<V, E>
where
    V: Copy + Eq + Hash,
    E: GraphEdge<Vertex = V>,
{
    fn tree_edge(&mut self, edge: E) -> Control {
        self.predecessors.insert(edge.target(), edge);
        Control::Continue
    }
}

/// Records discovery and finish sequences.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryRecorder<V> {
    /// Vertices in discovery order.
    pub discovered: Vec<V>,
    /// Vertices in finish order.
    pub finished: Vec<V>,
}

impl<V> DiscoveryRecorder<V> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            discovered: Vec::new(),
            finished: Vec::new(),
        }
    }
}

impl<V: Copy, E> Visitor<V, E> for DiscoveryRecorder<V> {
    fn discover_vertex(&mut self, vertex: V) -> Control {
        self.discovered.push(vertex);
        Control::Continue
    }

    fn finish_vertex(&mut self, vertex: V) -> Control {
        self.finished.push(vertex);
        Control::Continue
    }
}
