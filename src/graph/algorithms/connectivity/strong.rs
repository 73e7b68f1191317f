use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use super::ComponentLabeling;
use crate::graph::algorithms::traversal::{Control, Traversal, TraversalOrder, Visitor};
use crate::graph::traits::{GraphEdge, IncidenceGraph, VertexListGraph};

/// Tarjan's bookkeeping driven by depth-first events.
struct LowLink<V> {
    index: HashMap<V, usize>,
    low: HashMap<V, usize>,
    parent: HashMap<V, V>,
    stack: Vec<V>,
    on_stack: HashSet<V>,
    labels: HashMap<V, usize>,
    count: usize,
}

impl<V: Copy + Eq + Hash> LowLink<V> {
    fn lower(&mut self, vertex: V, to: usize) {
        if let Some(low) = self.low.get_mut(&vertex) {
            if to < *low {
                *low = to;
            }
        }
    }

    /// An edge into a vertex still on the stack shares its component.
    fn non_tree(&mut self, source: V, target: V) {
        if self.on_stack.contains(&target) {
            if let Some(&index) = self.index.get(&target) {
                self.lower(source, index);
            }
        }
    }
}

impl<V, E> Visitor<V, E> for LowLink<V>
where
    V: Copy + Eq + Hash,
    E: GraphEdge<Vertex = V>,
{
    fn discover_vertex(&mut self, vertex: V) -> Control {
        let index = self.index.len();
        self.index.insert(vertex, index);
        self.low.insert(vertex, index);
        self.stack.push(vertex);
        self.on_stack.insert(vertex);
        Control::Continue
    }

    fn tree_edge(&mut self, edge: E) -> Control {
        self.parent.insert(edge.target(), edge.source());
        Control::Continue
    }

    fn back_edge(&mut self, edge: E) -> Control {
        self.non_tree(edge.source(), edge.target());
        Control::Continue
    }

    fn forward_edge(&mut self, edge: E) -> Control {
        self.non_tree(edge.source(), edge.target());
        Control::Continue
    }

    fn cross_edge(&mut self, edge: E) -> Control {
        self.non_tree(edge.source(), edge.target());
        Control::Continue
    }

    fn finish_vertex(&mut self, vertex: V) -> Control {
        let low = self.low.get(&vertex).copied().unwrap_or(usize::MAX);
        if Some(&low) == self.index.get(&vertex) {
            let id = self.count;
            self.count += 1;
            while let Some(member) = self.stack.pop() {
                self.on_stack.remove(&member);
                self.labels.insert(member, id);
                if member == vertex {
                    break;
                }
            }
        }
        if let Some(&parent) = self.parent.get(&vertex) {
            self.lower(parent, low);
        }
        Control::Continue
    }
}

/// Labels the strongly connected components.
///
/// A component is numbered when its low-link root finishes, starting at 0,
/// so a component is always numbered before every component that can reach
/// it: sinks of the condensation come first.
pub fn strongly_connected_components<G>(graph: &G) -> ComponentLabeling<G::Vertex>
where
    G: VertexListGraph + IncidenceGraph,
{
    let capacity = graph.vertex_count();
    let mut tarjan = LowLink {
        index: HashMap::with_capacity(capacity),
        low: HashMap::with_capacity(capacity),
        parent: HashMap::with_capacity(capacity),
        stack: Vec::new(),
        on_stack: HashSet::new(),
        labels: HashMap::with_capacity(capacity),
        count: 0,
    };
    Traversal::new(graph, TraversalOrder::DepthFirst).visit_all(&mut tarjan);
    debug_assert!(tarjan.stack.is_empty());

    tracing::debug!(
        vertices = tarjan.labels.len(),
        components = tarjan.count,
        "strongly connected components"
    );
    ComponentLabeling {
        count: tarjan.count,
        labels: tarjan.labels,
    }
}
