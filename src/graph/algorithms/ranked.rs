//! Ranked loopless shortest paths (Hoffman-Pavley).
//!
//! A reverse shortest-path tree rooted at the target gives, for every vertex,
//! its exact distance to the target and the next edge on a shortest route
//! there. The first ranked path follows that tree from the source. Every
//! accepted path then spawns *deviations*: at each position past the point
//! where it left its own parent, take a different out-edge and finish along
//! the tree. A deviation is scored
//!
//! ```text
//! cost(prefix) + w(alternative edge) + distance(alternative target -> target)
//! ```
//!
//! which is exactly its total weight. Candidates wait in a min-heap; each pop
//! is the next-ranked path unless it revisits a vertex, in which case it is
//! dropped (its own deviations are still explored, since a loopless path may
//! branch off its loop-free prefix).
//!
//! Weights must be non-negative, as for [`dijkstra`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::collections::IndexedMinHeap;
use crate::error::{GraphError, Result};
use crate::graph::algorithms::shortest_path::{dijkstra, ShortestPaths};
use crate::graph::reversed::{Reversed, ReversedEdge};
use crate::graph::traits::{BidirectionalGraph, GraphEdge};
use crate::weight::Weight;

/// Knobs for [`ranked_shortest_paths`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedPathOptions<W> {
    /// Maximum number of paths to produce.
    pub path_count: usize,
    /// Paths heavier than this are never produced.
    pub max_weight: Option<W>,
}

impl<W> Default for RankedPathOptions<W> {
    fn default() -> Self {
        Self {
            path_count: 3,
            max_weight: None,
        }
    }
}

impl<W> RankedPathOptions<W> {
    /// Options producing up to `path_count` paths.
    pub fn with_path_count(path_count: usize) -> Self {
        Self {
            path_count,
            max_weight: None,
        }
    }

    /// Caps the total path weight.
    #[must_use]
    pub fn max_weight(mut self, max_weight: W) -> Self {
        self.max_weight = Some(max_weight);
        self
    }
}

/// One ranked path with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath<E, W> {
    /// Edges from source to target.
    pub edges: Vec<E>,
    /// Sum of the edge weights.
    pub weight: W,
}

struct Candidate<E, W> {
    edges: Vec<E>,
    weight: W,
    /// First position at which this path may deviate.
    branch_from: usize,
}

/// Lazy, finite sequence of loopless paths in ascending weight order.
///
/// Produced by [`ranked_shortest_paths`]. Ties are broken by discovery order,
/// so asking for more paths only ever extends the sequence.
pub struct RankedPaths<'g, G, W, F>
where
    G: BidirectionalGraph,
{
    graph: &'g G,
    weight: F,
    tree: ShortestPaths<G::Vertex, ReversedEdge<G::Edge>, W>,
    candidates: Vec<Option<Candidate<G::Edge, W>>>,
    queue: IndexedMinHeap<usize, W>,
    remaining: usize,
    max_weight: Option<W>,
}

/// Enumerates up to `options.path_count` loopless paths from `source` to
/// `target`, lightest first.
///
/// The first path is always a plain shortest path. If `target` is unreachable
/// the sequence is empty; if `source == target` it holds the empty path.
///
/// # Errors
/// - [`GraphError::VertexNotFound`] if either endpoint is not in the graph;
/// - [`GraphError::InvalidArgument`] if `options.path_count` is zero.
pub fn ranked_shortest_paths<G, W, F>(
    graph: &G,
    source: G::Vertex,
    target: G::Vertex,
    mut weight: F,
    options: RankedPathOptions<W>,
) -> Result<RankedPaths<'_, G, W, F>>
where
    G: BidirectionalGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    if !graph.contains_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }
    if options.path_count == 0 {
        return Err(GraphError::InvalidArgument(
            "path_count must be at least 1".to_owned(),
        ));
    }
    let tree = dijkstra(&Reversed::new(graph), target, |e: ReversedEdge<G::Edge>| {
        weight(e.original())
    })?;
    tracing::debug!(
        source = ?source,
        target = ?target,
        paths = options.path_count,
        "ranked shortest paths"
    );

    let mut paths = RankedPaths {
        graph,
        weight,
        tree,
        candidates: Vec::new(),
        queue: IndexedMinHeap::new(),
        remaining: options.path_count,
        max_weight: options.max_weight,
    };
    if let (Some(edges), Some(total)) = (paths.suffix(source), paths.tree.distance(source)) {
        paths.enqueue(Candidate {
            edges,
            weight: total,
            branch_from: 0,
        });
    }
    Ok(paths)
}

impl<G, W, F> RankedPaths<'_, G, W, F>
where
    G: BidirectionalGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    /// Shortest route from `vertex` to the target along the reverse tree.
    fn suffix(&self, vertex: G::Vertex) -> Option<Vec<G::Edge>> {
        let reversed = self.tree.path_to(vertex)?;
        Some(reversed.into_iter().rev().map(ReversedEdge::original).collect())
    }

    fn enqueue(&mut self, candidate: Candidate<G::Edge, W>) {
        if let Some(max) = self.max_weight {
            if candidate.weight > max {
                return;
            }
        }
        let slot = self.candidates.len();
        self.queue.push_or_decrease(slot, candidate.weight);
        self.candidates.push(Some(candidate));
    }

    fn branch(&mut self, parent: &Candidate<G::Edge, W>) {
        let graph = self.graph;
        let mut prefix_vertices = HashSet::new();
        let mut prefix_cost = W::zero();

        for (i, &edge) in parent.edges.iter().enumerate() {
            let vertex = edge.source();
            if !prefix_vertices.insert(vertex) {
                // Every later deviation would keep this loop.
                break;
            }
            if i >= parent.branch_from {
                for alternative in graph.out_edges(vertex) {
                    let next = alternative.target();
                    if alternative == edge || prefix_vertices.contains(&next) {
                        continue;
                    }
                    let Some(rest) = self.tree.distance(next) else {
                        continue;
                    };
                    let Some(suffix) = self.suffix(next) else {
                        continue;
                    };
                    let total = prefix_cost.combine((self.weight)(alternative)).combine(rest);
                    let mut edges = Vec::with_capacity(i + 1 + suffix.len());
                    edges.extend_from_slice(&parent.edges[..i]);
                    edges.push(alternative);
                    edges.extend(suffix);
                    self.enqueue(Candidate {
                        edges,
                        weight: total,
                        branch_from: i + 1,
                    });
                }
            }
            prefix_cost = prefix_cost.combine((self.weight)(edge));
        }
    }
}

impl<G, W, F> Iterator for RankedPaths<'_, G, W, F>
where
    G: BidirectionalGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    type Item = RankedPath<G::Edge, W>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let (slot, _) = self.queue.pop()?;
            let candidate = self.candidates[slot].take()?;
            let loopless = is_loopless(&candidate.edges);
            if loopless {
                self.remaining -= 1;
            } else {
                tracing::trace!(hops = candidate.edges.len(), "dropped looping candidate");
            }
            if self.remaining > 0 {
                self.branch(&candidate);
            }
            if loopless {
                return Some(RankedPath {
                    edges: candidate.edges,
                    weight: candidate.weight,
                });
            }
        }
        None
    }
}

fn is_loopless<E: GraphEdge>(edges: &[E]) -> bool {
    let Some(first) = edges.first() else {
        return true;
    };
    let mut seen = HashSet::with_capacity(edges.len() + 1);
    seen.insert(first.source());
    edges.iter().all(|e| seen.insert(e.target()))
}
