use super::{Relaxation, ShortestPaths};
use crate::error::{GraphError, Result};
use crate::graph::algorithms::topological::topological_sort;
use crate::graph::traits::{IncidenceGraph, VertexListGraph};
use crate::weight::Weight;

/// Shortest paths in a directed acyclic graph, in \(O(V + E)\).
///
/// Orders the whole graph topologically, then relaxes the out-edges of each
/// reached vertex exactly once in that order. Negative weights are fine.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `root` is not in the graph and
/// [`GraphError::CycleDetected`] if the graph is not acyclic.
pub fn dag_shortest_paths<G, W, F>(
    graph: &G,
    root: G::Vertex,
    mut weight: F,
) -> Result<ShortestPaths<G::Vertex, G::Edge, W>>
where
    G: VertexListGraph + IncidenceGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    if !graph.contains_vertex(root) {
        return Err(GraphError::vertex_not_found(root));
    }
    let order = topological_sort(graph)?;
    tracing::debug!(root = ?root, vertices = order.len(), "dag shortest paths");

    let mut relax: Relaxation<_, G::Edge, W> = Relaxation::new(root);
    // Vertices before the root in the order cannot be reached from it.
    for u in order.into_iter().skip_while(|&v| v != root) {
        if relax.distance(u).is_unreached() {
            continue;
        }
        for edge in graph.out_edges(u) {
            relax.relax(edge, weight(edge));
        }
    }

    tracing::debug!(reached = relax.reached_count(), "dag shortest paths finished");
    Ok(relax.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::graph::traits::GraphEdge;
    use crate::graph::AdjacencyGraph;

    #[test]
    fn longest_path_via_negated_weights() {
        let g = AdjacencyGraph::from_edges([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (1, 4)]);
        let paths = dag_shortest_paths(&g, 0, |_| -1i64).unwrap();
        assert_eq!(paths.distance(4), Some(-3));
        assert_eq!(paths.path_to(4).unwrap().len(), 3);
    }

    #[test]
    fn vertices_upstream_of_root_stay_unreached() {
        let g = AdjacencyGraph::from_edges([(0, 1), (1, 2), (3, 1)]);
        let paths = dag_shortest_paths(&g, 1, |_| 1u32).unwrap();
        assert!(!paths.is_reached(0));
        assert!(!paths.is_reached(3));
        assert_eq!(paths.path_to(2).map(|p| p[0].target()), Some(2));
    }

    #[test]
    fn cyclic_graph_is_rejected() {
        let g = AdjacencyGraph::from_edges([(0, 1), (1, 0)]);
        let err = dag_shortest_paths(&g, 0, |_| 1u32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
    }
}
