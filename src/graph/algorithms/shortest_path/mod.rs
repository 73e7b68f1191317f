//! Single-source shortest paths.
//!
//! Every algorithm in this module shares the same relaxation core: a distance
//! map in which an absent vertex is unreached (at [`Weight::unreached`]), a
//! predecessor map from each reached vertex to the edge that last improved it,
//! and the relax step
//!
//! ```text
//! if dist[u] + w(u, v) < dist[v] { dist[v] = dist[u] + w(u, v); pred[v] = (u, v) }
//! ```
//!
//! They differ only in the order in which edges are relaxed:
//!
//! | Algorithm | Order | Weights |
//! |-----------|-------|---------|
//! | [`dijkstra`] | frontier keyed by tentative distance | non-negative (not checked) |
//! | [`astar`] | frontier keyed by distance + heuristic | non-negative, admissible heuristic |
//! | [`bellman_ford`] | every edge, up to `|V| - 1` passes | any; negative cycles reported |
//! | [`dag_shortest_paths`] | topological order, one pass | any; graph must be acyclic |
//!
//! Each returns a [`ShortestPaths`] accessor owning its maps.

mod bellman_ford;
mod dag;
mod dijkstra;

pub use bellman_ford::{bellman_ford, BellmanFordPaths};
pub use dag::dag_shortest_paths;
pub use dijkstra::{astar, dijkstra};

use core::hash::Hash;
use std::collections::HashMap;

use crate::graph::traits::GraphEdge;
use crate::weight::Weight;

/// Distances and shortest-path tree computed from one root.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, E, W> {
    root: V,
    distances: HashMap<V, W>,
    predecessors: HashMap<V, E>,
}

impl<V, E, W> ShortestPaths<V, E, W>
where
    V: Copy + Eq + Hash + core::fmt::Debug,
    E: GraphEdge<Vertex = V>,
    W: Weight,
{
    /// The vertex every path starts from.
    #[inline]
    pub fn root(&self) -> V {
        self.root
    }

    /// Accumulated cost of the best path found to `vertex`, or `None` if the
    /// vertex was never reached.
    #[inline]
    pub fn distance(&self, vertex: V) -> Option<W> {
        self.distances.get(&vertex).copied()
    }

    /// The edge through which `vertex` was last improved.
    #[inline]
    pub fn predecessor(&self, vertex: V) -> Option<E> {
        self.predecessors.get(&vertex).copied()
    }

    /// Returns `true` if a path to `vertex` was found.
    #[inline]
    pub fn is_reached(&self, vertex: V) -> bool {
        self.distances.contains_key(&vertex)
    }

    /// Every reached vertex, root included, in no particular order.
    pub fn reached_vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.distances.keys().copied()
    }

    /// The edge sequence from the root to `target`.
    ///
    /// Returns `None` if `target` was not reached. The root itself yields an
    /// empty path.
    ///
    /// A predecessor chain that never returns to the root (a negative cycle
    /// left behind by Bellman-Ford) is detected after at most one step per
    /// recorded predecessor; the walk then gives up and reports `None`.
    pub fn path_to(&self, target: V) -> Option<Vec<E>> {
        if !self.is_reached(target) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = target;
        while current != self.root {
            let edge = *self.predecessors.get(&current)?;
            if path.len() == self.predecessors.len() {
                tracing::warn!(
                    target = ?target,
                    "predecessor chain does not reach the root; negative cycle on the path"
                );
                return None;
            }
            path.push(edge);
            current = edge.source();
        }
        path.reverse();
        Some(path)
    }
}

/// Distance and predecessor maps shared by every relaxation-based algorithm.
pub(crate) struct Relaxation<V, E, W> {
    root: V,
    distances: HashMap<V, W>,
    predecessors: HashMap<V, E>,
}

impl<V, E, W> Relaxation<V, E, W>
where
    V: Copy + Eq + Hash + core::fmt::Debug,
    E: GraphEdge<Vertex = V>,
    W: Weight,
{
    pub(crate) fn new(root: V) -> Self {
        let mut distances = HashMap::new();
        distances.insert(root, W::zero());
        Self {
            root,
            distances,
            predecessors: HashMap::new(),
        }
    }

    /// Current tentative distance; unreached vertices are at `W::unreached()`.
    #[inline]
    pub(crate) fn distance(&self, vertex: V) -> W {
        self.distances
            .get(&vertex)
            .copied()
            .unwrap_or_else(W::unreached)
    }

    /// Relaxes `edge`. Returns `true` if its target improved.
    pub(crate) fn relax(&mut self, edge: E, weight: W) -> bool {
        let from = self.distance(edge.source());
        if from.is_unreached() {
            return false;
        }
        let candidate = from.combine(weight);
        let target = edge.target();
        if candidate < self.distance(target) {
            tracing::trace!(edge = ?edge, distance = ?candidate, "relaxed");
            self.distances.insert(target, candidate);
            self.predecessors.insert(target, edge);
            true
        } else {
            false
        }
    }

    pub(crate) fn reached_count(&self) -> usize {
        self.distances.len()
    }

    pub(crate) fn finish(self) -> ShortestPaths<V, E, W> {
        ShortestPaths {
            root: self.root,
            distances: self.distances,
            predecessors: self.predecessors,
        }
    }
}
