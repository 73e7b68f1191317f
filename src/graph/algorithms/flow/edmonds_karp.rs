use std::collections::{HashMap, VecDeque};

use super::ReversedEdgeAugmentor;
use crate::error::{GraphError, Result};
use crate::graph::traits::{EdgeListGraph, GraphEdge, IncidenceGraph, MutableGraph};
use crate::weight::Weight;

/// Result of a maximum-flow computation.
#[derive(Debug, Clone)]
pub struct MaximumFlow<E, W> {
    /// Total flow leaving the source.
    pub total: W,
    /// Net flow on every original edge that carries any.
    pub edge_flow: HashMap<E, W>,
    /// Remaining residual capacity of every edge, synthetic ones included.
    pub residual_capacities: HashMap<E, W>,
}

impl<E: GraphEdge, W: Weight> MaximumFlow<E, W> {
    /// Flow on `edge`; zero for edges that carry none.
    #[inline]
    pub fn flow(&self, edge: E) -> W {
        self.edge_flow.get(&edge).copied().unwrap_or_else(W::zero)
    }
}

/// Edmonds-Karp maximum flow from `source` to `sink`.
///
/// Repeatedly finds a shortest (fewest edges) augmenting path by
/// breadth-first search over edges with positive residual capacity and
/// pushes the path's bottleneck through it, lowering the residual of each
/// path edge and raising that of its reverse. Synthetic reverse edges start
/// with zero capacity. Runs in \(O(V E^2)\).
///
/// Residual and total sums saturate at the weight's largest value, so
/// `W::max_value()` works as an unbounded capacity.
///
/// # Errors
/// - [`GraphError::SourceIsSink`] if `source == sink`;
/// - [`GraphError::VertexNotFound`] if either endpoint is not in the graph;
/// - [`GraphError::InvalidOperation`] if the augmentor has not added the
///   reverse edges yet.
pub fn edmonds_karp<G, W, F>(
    augmentor: &ReversedEdgeAugmentor<'_, G>,
    mut capacity: F,
    source: G::Vertex,
    sink: G::Vertex,
) -> Result<MaximumFlow<G::Edge, W>>
where
    G: IncidenceGraph + EdgeListGraph + MutableGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    if source == sink {
        return Err(GraphError::SourceIsSink(format!("{source:?}")));
    }
    let graph = augmentor.graph();
    for vertex in [source, sink] {
        if !graph.contains_vertex(vertex) {
            return Err(GraphError::vertex_not_found(vertex));
        }
    }
    if !augmentor.is_augmented() {
        return Err(GraphError::InvalidOperation(
            "reverse edges must be augmented before computing a flow",
        ));
    }

    let mut capacities = HashMap::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        let c = if augmentor.is_augmented_edge(edge) {
            W::zero()
        } else {
            capacity(edge)
        };
        capacities.insert(edge, c);
    }
    let mut residual = capacities.clone();
    tracing::debug!(
        source = ?source,
        sink = ?sink,
        edges = capacities.len(),
        "edmonds-karp"
    );

    let mut total = W::zero();
    let mut augmentations = 0usize;
    while let Some(path) = augmenting_path(graph, &residual, source, sink) {
        let bottleneck = path
            .iter()
            .map(|e| residual_of(&residual, *e))
            .fold(W::unreached(), W::min_weight);

        for &edge in &path {
            let forward = residual_of(&residual, edge);
            residual.insert(edge, forward - bottleneck);
            if let Some(reverse) = augmentor.reversed_edge(edge) {
                let back = residual_of(&residual, reverse);
                residual.insert(reverse, back.combine(bottleneck));
            }
        }
        total = total.combine(bottleneck);
        augmentations += 1;
        tracing::trace!(hops = path.len(), bottleneck = ?bottleneck, "augmented");
    }

    let edge_flow = capacities
        .iter()
        .filter(|(edge, _)| !augmentor.is_augmented_edge(**edge))
        .filter_map(|(&edge, &c)| {
            let r = residual_of(&residual, edge);
            (r < c).then(|| (edge, c - r))
        })
        .collect();

    tracing::debug!(total = ?total, augmentations, "edmonds-karp finished");
    Ok(MaximumFlow {
        total,
        edge_flow,
        residual_capacities: residual,
    })
}

#[inline]
fn residual_of<E: GraphEdge, W: Weight>(residual: &HashMap<E, W>, edge: E) -> W {
    residual.get(&edge).copied().unwrap_or_else(W::zero)
}

/// Breadth-first search for a source-to-sink path using only edges with
/// positive residual capacity.
fn augmenting_path<G, W>(
    graph: &G,
    residual: &HashMap<G::Edge, W>,
    source: G::Vertex,
    sink: G::Vertex,
) -> Option<Vec<G::Edge>>
where
    G: IncidenceGraph,
    W: Weight,
{
    let mut via: HashMap<G::Vertex, G::Edge> = HashMap::new();
    let mut queue = VecDeque::from([source]);
    'search: while let Some(u) = queue.pop_front() {
        for edge in graph.out_edges(u) {
            let v = edge.target();
            if v == source || via.contains_key(&v) {
                continue;
            }
            if residual_of(residual, edge) > W::zero() {
                via.insert(v, edge);
                if v == sink {
                    break 'search;
                }
                queue.push_back(v);
            }
        }
    }

    let mut path = Vec::new();
    let mut current = sink;
    while current != source {
        let edge = *via.get(&current)?;
        path.push(edge);
        current = edge.source();
    }
    path.reverse();
    Some(path)
}
