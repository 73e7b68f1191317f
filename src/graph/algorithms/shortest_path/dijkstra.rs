use std::collections::HashSet;

use super::{Relaxation, ShortestPaths};
use crate::collections::IndexedMinHeap;
use crate::error::{GraphError, Result};
use crate::graph::traits::{GraphEdge, IncidenceGraph};
use crate::weight::Weight;

/// Dijkstra's algorithm from `root`.
///
/// Weights must be non-negative; this is not checked. Equal tentative
/// distances are settled in the order they were first queued.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `root` is not in the graph.
pub fn dijkstra<G, W, F>(
    graph: &G,
    root: G::Vertex,
    weight: F,
) -> Result<ShortestPaths<G::Vertex, G::Edge, W>>
where
    G: IncidenceGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    tracing::debug!(root = ?root, "dijkstra");
    best_first(graph, root, weight, |_| W::zero())
}

/// A* search from `root`: Dijkstra with the frontier keyed by
/// `distance + heuristic(vertex)`.
///
/// The heuristic is trusted. An inadmissible one (overestimating the
/// remaining cost) makes the search settle vertices too early and report
/// suboptimal paths.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `root` is not in the graph.
pub fn astar<G, W, F, H>(
    graph: &G,
    root: G::Vertex,
    weight: F,
    heuristic: H,
) -> Result<ShortestPaths<G::Vertex, G::Edge, W>>
where
    G: IncidenceGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    H: FnMut(G::Vertex) -> W,
{
    tracing::debug!(root = ?root, "a*");
    best_first(graph, root, weight, heuristic)
}

fn best_first<G, W, F, H>(
    graph: &G,
    root: G::Vertex,
    mut weight: F,
    mut heuristic: H,
) -> Result<ShortestPaths<G::Vertex, G::Edge, W>>
where
    G: IncidenceGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    H: FnMut(G::Vertex) -> W,
{
    if !graph.contains_vertex(root) {
        return Err(GraphError::vertex_not_found(root));
    }

    let mut relax: Relaxation<_, G::Edge, W> = Relaxation::new(root);
    let mut settled = HashSet::new();
    let mut frontier = IndexedMinHeap::new();
    frontier.push_or_decrease(root, heuristic(root));

    while let Some((u, _)) = frontier.pop() {
        settled.insert(u);
        for edge in graph.out_edges(u) {
            let v = edge.target();
            if settled.contains(&v) {
                continue;
            }
            if relax.relax(edge, weight(edge)) {
                let key = relax.distance(v).combine(heuristic(v));
                frontier.push_or_decrease(v, key);
            }
        }
    }

    tracing::debug!(reached = relax.reached_count(), "best-first search finished");
    Ok(relax.finish())
}
