//! A zero-copy view of a bidirectional graph with every edge flipped.

use crate::graph::traits::{
    BidirectionalGraph, EdgeListGraph, GraphBase, GraphEdge, IncidenceGraph, VertexListGraph,
    VertexSet,
};

/// An edge of a [`Reversed`] view: the wrapped edge with its endpoints swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReversedEdge<E>(E);

impl<E> ReversedEdge<E> {
    /// The edge of the underlying graph.
    #[inline]
    pub fn original(self) -> E {
        self.0
    }
}

impl<E: GraphEdge> GraphEdge for ReversedEdge<E> {
    type Vertex = E::Vertex;

    #[inline]
    fn source(&self) -> E::Vertex {
        self.0.target()
    }

    #[inline]
    fn target(&self) -> E::Vertex {
        self.0.source()
    }
}

/// Out-edges of the view are the in-edges of the wrapped graph and vice versa.
pub struct Reversed<'g, G> {
    graph: &'g G,
}

impl<G> Clone for Reversed<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Reversed<'_, G> {}

impl<'g, G> Reversed<'g, G> {
    /// Wraps `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// The wrapped graph.
    pub fn inner(&self) -> &'g G {
        self.graph
    }
}

impl<G: GraphBase> GraphBase for Reversed<'_, G> {
    type Vertex = G::Vertex;
    type Edge = ReversedEdge<G::Edge>;

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn allows_parallel_edges(&self) -> bool {
        self.graph.allows_parallel_edges()
    }
}

impl<G: VertexSet> VertexSet for Reversed<'_, G> {
    fn contains_vertex(&self, vertex: Self::Vertex) -> bool {
        self.graph.contains_vertex(vertex)
    }
}

impl<G: VertexListGraph> VertexListGraph for Reversed<'_, G> {
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.graph.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

impl<G: BidirectionalGraph> IncidenceGraph for Reversed<'_, G> {
    fn out_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph.in_edges(vertex).map(ReversedEdge)
    }

    fn out_degree(&self, vertex: Self::Vertex) -> usize {
        self.graph.in_degree(vertex)
    }
}

impl<G: BidirectionalGraph> BidirectionalGraph for Reversed<'_, G> {
    fn in_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph.out_edges(vertex).map(ReversedEdge)
    }

    fn in_degree(&self, vertex: Self::Vertex) -> usize {
        self.graph.out_degree(vertex)
    }
}

impl<G: EdgeListGraph> EdgeListGraph for Reversed<'_, G> {
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph.edges().map(ReversedEdge)
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn contains_edge(&self, edge: Self::Edge) -> bool {
        self.graph.contains_edge(edge.0)
    }
}
