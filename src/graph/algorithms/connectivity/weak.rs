use std::collections::HashMap;

use super::ComponentLabeling;
use crate::collections::ForestDisjointSet;
use crate::graph::algorithms::traversal::{Control, Traversal, TraversalOrder, Visitor};
use crate::graph::traits::{GraphEdge, IncidenceGraph, VertexListGraph};

/// Gives every depth-first tree a provisional id and merges ids whenever an
/// edge lands in an earlier tree.
struct TreeMerger<V> {
    current: usize,
    trees: usize,
    provisional: HashMap<V, usize>,
    merges: ForestDisjointSet<usize>,
}

impl<V: Copy + Eq + core::hash::Hash> TreeMerger<V> {
    fn join(&mut self, target: V) {
        if let Some(&other) = self.provisional.get(&target) {
            if other != self.current {
                // Both ids were created by `start_vertex`, so the union cannot fail.
                let _ = self.merges.union(&self.current, &other);
            }
        }
    }
}

impl<V, E> Visitor<V, E> for TreeMerger<V>
where
    V: Copy + Eq + core::hash::Hash,
    E: GraphEdge<Vertex = V>,
{
    fn start_vertex(&mut self, _vertex: V) -> Control {
        self.current = self.trees;
        self.merges.make_set(self.trees);
        self.trees += 1;
        Control::Continue
    }

    fn discover_vertex(&mut self, vertex: V) -> Control {
        self.provisional.insert(vertex, self.current);
        Control::Continue
    }

    fn cross_edge(&mut self, edge: E) -> Control {
        self.join(edge.target());
        Control::Continue
    }
}

/// Labels the weakly connected components of a directed graph.
///
/// One depth-first pass over out-edges: a walk that runs into a vertex
/// finished by an earlier walk merges the two trees. Component ids are then
/// numbered in order of each component's first vertex in the enumeration.
pub fn weakly_connected_components<G>(graph: &G) -> ComponentLabeling<G::Vertex>
where
    G: VertexListGraph + IncidenceGraph,
{
    let mut merger = TreeMerger {
        current: 0,
        trees: 0,
        provisional: HashMap::with_capacity(graph.vertex_count()),
        merges: ForestDisjointSet::new(),
    };
    Traversal::new(graph, TraversalOrder::DepthFirst).visit_all(&mut merger);

    let mut compact: HashMap<usize, usize> = HashMap::new();
    let mut labels = HashMap::with_capacity(merger.provisional.len());
    for v in graph.vertices() {
        let Some(tree) = merger.provisional.get(&v) else {
            continue;
        };
        let Some(&root) = merger.merges.find(tree) else {
            continue;
        };
        let next = compact.len();
        let id = *compact.entry(root).or_insert(next);
        labels.insert(v, id);
    }

    tracing::debug!(
        vertices = labels.len(),
        trees = merger.trees,
        components = compact.len(),
        "weakly connected components"
    );
    ComponentLabeling {
        count: compact.len(),
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::traits::MutableGraph;
    use crate::graph::AdjacencyGraph;

    #[test]
    fn direction_is_ignored() {
        // 2 -> 1 and 3 -> 1 are reached from later roots.
        let mut g = AdjacencyGraph::from_edges([(1, 4), (2, 1), (3, 1), (5, 6)]);
        g.add_vertex(7);
        let result = weakly_connected_components(&g);

        assert_eq!(result.count, 3);
        assert!(result.same_component(2, 3));
        assert!(result.same_component(4, 2));
        assert!(result.same_component(5, 6));
        assert!(!result.same_component(1, 5));
        assert_eq!(result.component_of(1), Some(0));
        assert_eq!(result.component_of(5), Some(1));
        assert_eq!(result.component_of(7), Some(2));
    }

    #[test]
    fn chained_merges_collapse_to_one() {
        // Each new root points into the previous tree.
        let g = AdjacencyGraph::from_edges([(0, 9), (1, 0), (2, 1), (3, 2), (4, 3)]);
        let result = weakly_connected_components(&g);
        assert_eq!(result.count, 1);
        assert_eq!(result.groups(0..10).iter().map(Vec::len).sum::<usize>(), 6);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g: AdjacencyGraph<u8> = AdjacencyGraph::new();
        assert_eq!(weakly_connected_components(&g).count, 0);
    }
}
