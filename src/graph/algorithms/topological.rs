//! Topological orderings of directed acyclic graphs.
//!
//! Three orderers, all rejecting cyclic input with
//! [`GraphError::CycleDetected`]:
//!
//! - [`topological_sort`]: reverse depth-first postorder. A back edge means a
//!   cycle.
//! - [`source_first_topological_sort`]: Kahn's algorithm. Repeatedly emits a
//!   vertex with no remaining in-edges, which yields a layered order that
//!   generally differs from the depth-first one.
//! - [`bidirectional_topological_sort`]: Kahn's algorithm in either
//!   direction. `Backward` peels sinks instead of sources, producing an order
//!   in which every edge points from later to earlier.
//!
//! Ties are broken by vertex enumeration order and then out-edge order, so the
//! result is deterministic for a given graph.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::algorithms::traversal::{Control, Traversal, TraversalOrder, TraversalStatus, Visitor};
use crate::graph::traits::{BidirectionalGraph, GraphEdge, IncidenceGraph, VertexListGraph};

/// Orientation of a [`bidirectional_topological_sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TopologicalDirection {
    /// Sources first; every edge points forward in the order.
    #[default]
    Forward,
    /// Sinks first; every edge points backward in the order.
    Backward,
}

/// Collects finish order and stops at the first back edge.
struct Postorder<V> {
    finished: Vec<V>,
    cycle_at: Option<V>,
}

impl<V: Copy, E: GraphEdge<Vertex = V>> Visitor<V, E> for Postorder<V> {
    fn back_edge(&mut self, edge: E) -> Control {
        self.cycle_at = Some(edge.target());
        Control::Break
    }

    fn finish_vertex(&mut self, vertex: V) -> Control {
        self.finished.push(vertex);
        Control::Continue
    }
}

/// Depth-first topological sort: every edge's source precedes its target.
///
/// Roots are taken in vertex enumeration order.
///
/// # Errors
/// Returns [`GraphError::CycleDetected`] if the graph has a cycle (self-loops
/// included).
pub fn topological_sort<G>(graph: &G) -> Result<Vec<G::Vertex>>
where
    G: VertexListGraph + IncidenceGraph,
{
    let mut postorder = Postorder {
        finished: Vec::with_capacity(graph.vertex_count()),
        cycle_at: None,
    };
    let status = Traversal::new(graph, TraversalOrder::DepthFirst).visit_all(&mut postorder);
    if status == TraversalStatus::Stopped {
        if let Some(vertex) = postorder.cycle_at {
            return Err(GraphError::cycle_at(vertex));
        }
    }
    let mut order = postorder.finished;
    order.reverse();
    tracing::debug!(vertices = order.len(), "depth-first topological sort");
    Ok(order)
}

/// Source-first (Kahn) topological sort.
///
/// In-degrees are counted from the out-edges, so only out-incidence is
/// required.
///
/// # Errors
/// Returns [`GraphError::CycleDetected`] if the graph has a cycle.
pub fn source_first_topological_sort<G>(graph: &G) -> Result<Vec<G::Vertex>>
where
    G: VertexListGraph + IncidenceGraph,
{
    let mut in_degree: HashMap<G::Vertex, usize> =
        graph.vertices().map(|v| (v, 0)).collect();
    for u in graph.vertices() {
        for edge in graph.out_edges(u) {
            *in_degree.entry(edge.target()).or_insert(0) += 1;
        }
    }
    let order = peel(graph, in_degree, |v| graph.out_edges(v).map(|e| e.target()))?;
    tracing::debug!(vertices = order.len(), "source-first topological sort");
    Ok(order)
}

/// Kahn's algorithm in the given direction, reading degrees straight from
/// the graph's bidirectional incidence.
///
/// # Errors
/// Returns [`GraphError::CycleDetected`] if the graph has a cycle.
pub fn bidirectional_topological_sort<G>(
    graph: &G,
    direction: TopologicalDirection,
) -> Result<Vec<G::Vertex>>
where
    G: VertexListGraph + BidirectionalGraph,
{
    let order = match direction {
        TopologicalDirection::Forward => {
            let degree = graph.vertices().map(|v| (v, graph.in_degree(v))).collect();
            peel(graph, degree, |v| graph.out_edges(v).map(|e| e.target()))?
        }
        TopologicalDirection::Backward => {
            let degree = graph.vertices().map(|v| (v, graph.out_degree(v))).collect();
            peel(graph, degree, |v| graph.in_edges(v).map(|e| e.source()))?
        }
    };
    tracing::debug!(vertices = order.len(), ?direction, "bidirectional topological sort");
    Ok(order)
}

/// Returns `true` if the graph has no directed cycle.
pub fn is_directed_acyclic_graph<G>(graph: &G) -> bool
where
    G: VertexListGraph + IncidenceGraph,
{
    topological_sort(graph).is_ok()
}

/// Emits zero-degree vertices FIFO, lowering the degree of each vertex's
/// `next` neighbours as it goes.
fn peel<G, N, I>(
    graph: &G,
    mut degree: HashMap<G::Vertex, usize>,
    mut next: N,
) -> Result<Vec<G::Vertex>>
where
    G: VertexListGraph,
    N: FnMut(G::Vertex) -> I,
    I: Iterator<Item = G::Vertex>,
{
    let mut queue: VecDeque<G::Vertex> = graph
        .vertices()
        .filter(|v| degree.get(v) == Some(&0))
        .collect();
    let mut order = Vec::with_capacity(degree.len());

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for v in next(u) {
            if let Some(d) = degree.get_mut(&v) {
                *d -= 1;
                if *d == 0 {
                    queue.push_back(v);
                }
            }
        }
    }

    if order.len() < degree.len() {
        return Err(first_blocked(graph, &degree));
    }
    Ok(order)
}

/// A vertex whose degree never dropped to zero lies on or behind a cycle.
fn first_blocked<G>(graph: &G, degree: &HashMap<G::Vertex, usize>) -> GraphError
where
    G: VertexListGraph,
{
    graph
        .vertices()
        .find(|v| degree.get(v).is_some_and(|&d| d > 0))
        .map_or(GraphError::InvalidOperation("cycle detected"), GraphError::cycle_at)
}
