use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::traits::{EdgeListGraph, GraphEdge, IncidenceGraph, MutableGraph};

/// Pairs every edge of a graph with a reverse edge, adding synthetic ones
/// where the graph has none.
///
/// An existing antiparallel edge is reused as the reverse of its partner
/// instead of being duplicated. Synthetic edges live in the caller's graph
/// until [`remove_reversed_edges`](Self::remove_reversed_edges) is called or
/// the augmentor is dropped, whichever comes first.
pub struct ReversedEdgeAugmentor<'g, G>
where
    G: IncidenceGraph + EdgeListGraph + MutableGraph,
{
    graph: &'g mut G,
    reversed: HashMap<G::Edge, G::Edge>,
    augmented: Vec<G::Edge>,
    synthetic: HashSet<G::Edge>,
    is_augmented: bool,
}

impl<'g, G> ReversedEdgeAugmentor<'g, G>
where
    G: IncidenceGraph + EdgeListGraph + MutableGraph,
{
    /// Wraps `graph` without touching it yet.
    pub fn new(graph: &'g mut G) -> Self {
        Self {
            graph,
            reversed: HashMap::new(),
            augmented: Vec::new(),
            synthetic: HashSet::new(),
            is_augmented: false,
        }
    }

    /// The graph, including any synthetic edges.
    #[inline]
    pub fn graph(&self) -> &G {
        &*self.graph
    }

    /// Returns `true` between [`add_reversed_edges`](Self::add_reversed_edges)
    /// and the matching removal.
    #[inline]
    pub fn is_augmented(&self) -> bool {
        self.is_augmented
    }

    /// The reverse partner of `edge`.
    #[inline]
    pub fn reversed_edge(&self, edge: G::Edge) -> Option<G::Edge> {
        self.reversed.get(&edge).copied()
    }

    /// Every edge mapped to its reverse partner, in both directions.
    pub fn reversed_edges(&self) -> &HashMap<G::Edge, G::Edge> {
        &self.reversed
    }

    /// The synthetic edges added to the graph, in insertion order.
    pub fn augmented_edges(&self) -> &[G::Edge] {
        &self.augmented
    }

    /// Returns `true` if `edge` was added by this augmentor.
    #[inline]
    pub fn is_augmented_edge(&self, edge: G::Edge) -> bool {
        self.synthetic.contains(&edge)
    }

    /// Pairs every edge with a reverse edge.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidOperation`] if the graph is already
    /// augmented. If the graph refuses a synthetic edge, the edges added so
    /// far are removed and the graph's error is returned.
    pub fn add_reversed_edges(&mut self) -> Result<()> {
        if self.is_augmented {
            return Err(GraphError::InvalidOperation("reverse edges are already augmented"));
        }

        let edges: Vec<G::Edge> = self.graph.edges().collect();
        for edge in edges {
            if self.reversed.contains_key(&edge) {
                continue;
            }
            if let Some(partner) = self.find_unpaired_reverse(edge) {
                self.reversed.insert(edge, partner);
                self.reversed.insert(partner, edge);
                continue;
            }
            match self.graph.add_edge(edge.target(), edge.source()) {
                Ok(synthetic) => {
                    self.reversed.insert(edge, synthetic);
                    self.reversed.insert(synthetic, edge);
                    self.augmented.push(synthetic);
                    self.synthetic.insert(synthetic);
                }
                Err(err) => {
                    self.teardown();
                    return Err(err);
                }
            }
        }

        self.is_augmented = true;
        tracing::debug!(
            paired = self.reversed.len(),
            added = self.augmented.len(),
            "reverse edges augmented"
        );
        Ok(())
    }

    /// Removes every synthetic edge and forgets the pairing.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidOperation`] if the graph is not augmented.
    pub fn remove_reversed_edges(&mut self) -> Result<()> {
        if !self.is_augmented {
            return Err(GraphError::InvalidOperation("reverse edges are not augmented"));
        }
        self.teardown();
        Ok(())
    }

    fn find_unpaired_reverse(&self, edge: G::Edge) -> Option<G::Edge> {
        let (source, target) = (edge.source(), edge.target());
        self.graph
            .out_edges(target)
            .find(|e| e.target() == source && *e != edge && !self.reversed.contains_key(e))
    }

    fn teardown(&mut self) {
        let removed = self.augmented.len();
        for edge in self.augmented.drain(..) {
            self.graph.remove_edge(edge);
        }
        self.reversed.clear();
        self.synthetic.clear();
        self.is_augmented = false;
        tracing::debug!(removed, "reverse edges removed");
    }
}

impl<G> Drop for ReversedEdgeAugmentor<'_, G>
where
    G: IncidenceGraph + EdgeListGraph + MutableGraph,
{
    fn drop(&mut self) {
        if self.is_augmented {
            self.teardown();
        }
    }
}
