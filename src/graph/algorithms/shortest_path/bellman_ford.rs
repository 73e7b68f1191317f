use super::{Relaxation, ShortestPaths};
use crate::error::{GraphError, Result};
use crate::graph::traits::{IncidenceGraph, VertexListGraph};
use crate::weight::Weight;

/// Output of [`bellman_ford`].
#[derive(Debug, Clone)]
pub struct BellmanFordPaths<V, E, W> {
    /// Distances and predecessor tree after the last relaxation pass.
    pub paths: ShortestPaths<V, E, W>,
    /// An edge could still be relaxed after `|V| - 1` passes.
    pub found_negative_cycle: bool,
}

/// Bellman-Ford from `root`. Accepts negative weights.
///
/// Relaxes every edge leaving a reached vertex, repeating up to `|V| - 1`
/// times and stopping early once a pass changes nothing. One more pass then
/// checks whether any edge can still be improved; if so a negative cycle is
/// reachable from `root` and `found_negative_cycle` is set. This is a signal,
/// not an error: distances and paths to vertices whose predecessor chain
/// stays clear of the cycle are still valid, and
/// [`ShortestPaths::path_to`] reports `None` for the others.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `root` is not in the graph.
pub fn bellman_ford<G, W, F>(
    graph: &G,
    root: G::Vertex,
    mut weight: F,
) -> Result<BellmanFordPaths<G::Vertex, G::Edge, W>>
where
    G: VertexListGraph + IncidenceGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    if !graph.contains_vertex(root) {
        return Err(GraphError::vertex_not_found(root));
    }
    let vertex_count = graph.vertex_count();
    tracing::debug!(root = ?root, vertices = vertex_count, "bellman-ford");

    let mut relax: Relaxation<_, G::Edge, W> = Relaxation::new(root);
    let mut passes = 0;
    for _ in 1..vertex_count {
        passes += 1;
        if !relaxation_pass(graph, &mut relax, &mut weight) {
            break;
        }
    }

    let found_negative_cycle = relaxation_pass(graph, &mut relax, &mut weight);
    if found_negative_cycle {
        tracing::warn!(root = ?root, "negative cycle reachable from root");
    }
    tracing::debug!(passes, reached = relax.reached_count(), "bellman-ford finished");

    Ok(BellmanFordPaths {
        paths: relax.finish(),
        found_negative_cycle,
    })
}

/// Relaxes every edge once. Returns `true` if any distance changed.
fn relaxation_pass<G, W, F>(
    graph: &G,
    relax: &mut Relaxation<G::Vertex, G::Edge, W>,
    weight: &mut F,
) -> bool
where
    G: VertexListGraph + IncidenceGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    let mut changed = false;
    for u in graph.vertices() {
        if relax.distance(u).is_unreached() {
            continue;
        }
        for edge in graph.out_edges(u) {
            changed |= relax.relax(edge, weight(edge));
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::traits::{GraphEdge, MutableGraph};
    use crate::graph::{AdjacencyGraph, Edge};
    use std::collections::HashMap;

    fn build(edges: &[(u32, u32, i32)]) -> (AdjacencyGraph<u32>, HashMap<Edge<u32>, i32>) {
        let mut g = AdjacencyGraph::new();
        let mut w = HashMap::new();
        for &(s, t, c) in edges {
            let e = g.add_vertices_and_edge(s, t).unwrap();
            w.insert(e, c);
        }
        (g, w)
    }

    #[test]
    fn handles_negative_edges() {
        let (g, w) = build(&[(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 3, 2)]);
        let result = bellman_ford(&g, 0, |e| w[&e]).unwrap();
        assert!(!result.found_negative_cycle);
        assert_eq!(result.paths.distance(1), Some(2));
        assert_eq!(result.paths.distance(3), Some(4));

        let hops: Vec<_> = result
            .paths
            .path_to(3)
            .unwrap()
            .iter()
            .map(|e| e.target())
            .collect();
        assert_eq!(hops, vec![2, 1, 3]);
    }

    #[test]
    fn reports_negative_cycle() {
        let (g, w) = build(&[(1, 2, 12), (2, 4, -42), (4, 1, 22)]);
        let result = bellman_ford(&g, 1, |e| w[&e]).unwrap();
        assert!(result.found_negative_cycle);
    }

    #[test]
    fn chain_through_cycle_is_truncated() {
        // 0 -> 1, then 1 -> 2 -> 3 -> 1 with total weight -1.
        let (g, w) = build(&[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 1, -4)]);
        let result = bellman_ford(&g, 0, |e| w[&e]).unwrap();
        assert!(result.found_negative_cycle);
        assert_eq!(result.paths.path_to(2), None);
        assert_eq!(result.paths.path_to(0), Some(vec![]));
    }

    #[test]
    fn single_vertex_graph() {
        let mut g = AdjacencyGraph::new();
        g.add_vertex(5u32);
        let result = bellman_ford(&g, 5, |_: Edge<u32>| 1i32).unwrap();
        assert!(!result.found_negative_cycle);
        assert_eq!(result.paths.distance(5), Some(0));
    }
}
