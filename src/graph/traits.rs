//! Capability contracts consumed by the algorithms.
//!
//! Algorithms never depend on a concrete storage type. Each one names the
//! smallest set of capabilities it needs:
//!
//! | Trait | Operations |
//! |-------|------------|
//! | [`VertexSet`] | `contains_vertex` |
//! | [`VertexListGraph`] | `vertices`, `vertex_count` |
//! | [`IncidenceGraph`] | `out_edges`, `out_degree` |
//! | [`BidirectionalGraph`] | `in_edges`, `in_degree` |
//! | [`EdgeListGraph`] | `edges`, `edge_count`, `contains_edge` |
//! | [`MutableGraph`] | add/remove vertices and edges |
//! | [`ObservableGraph`] | subscribe to mutation notifications |
//!
//! Vertices and edges are small `Copy` handles. Auxiliary algorithm state is
//! always kept in maps keyed by these handles; nothing is ever written back
//! into the caller's graph unless the algorithm is explicitly a mutating one.

use core::fmt::Debug;
use core::hash::Hash;
use std::cell::RefCell;
use std::rc::Weak;

use crate::error::Result;
use crate::graph::observer::{GraphObserver, SubscriptionId};

/// An edge handle exposing its endpoints.
///
/// Equality is edge identity: two parallel edges with the same endpoints are
/// distinct as long as their handles differ.
pub trait GraphEdge: Copy + Eq + Hash + Debug {
    /// Vertex handle type.
    type Vertex: Copy + Eq + Hash + Debug;

    /// The vertex this edge leaves.
    fn source(&self) -> Self::Vertex;

    /// The vertex this edge enters.
    fn target(&self) -> Self::Vertex;
}

/// Vertex and edge handle types plus the immutable shape flags of a graph.
pub trait GraphBase {
    /// Vertex handle type.
    type Vertex: Copy + Eq + Hash + Debug;
    /// Edge handle type.
    type Edge: GraphEdge<Vertex = Self::Vertex>;

    /// Whether edges are directed. Constant for the graph's lifetime.
    fn is_directed(&self) -> bool {
        true
    }

    /// Whether several edges may join the same ordered pair of vertices.
    /// Constant for the graph's lifetime.
    fn allows_parallel_edges(&self) -> bool {
        true
    }
}

/// Vertex membership.
pub trait VertexSet: GraphBase {
    /// Returns `true` if `vertex` is part of the graph.
    fn contains_vertex(&self, vertex: Self::Vertex) -> bool;
}

/// Vertex enumeration.
///
/// The enumeration order must be stable between mutations; whole-graph
/// algorithms restart their walks in this order.
pub trait VertexListGraph: VertexSet {
    /// Iterates over every vertex.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

/// Out-edge incidence.
pub trait IncidenceGraph: VertexSet {
    /// Iterates over the edges leaving `vertex`. Unknown vertices have none.
    fn out_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// Number of edges leaving `vertex`.
    fn out_degree(&self, vertex: Self::Vertex) -> usize {
        self.out_edges(vertex).count()
    }
}

/// In-edge incidence, on top of out-edges.
pub trait BidirectionalGraph: IncidenceGraph {
    /// Iterates over the edges entering `vertex`. Unknown vertices have none.
    fn in_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// Number of edges entering `vertex`.
    fn in_degree(&self, vertex: Self::Vertex) -> usize {
        self.in_edges(vertex).count()
    }
}

/// Edge enumeration.
pub trait EdgeListGraph: GraphBase {
    /// Iterates over every edge.
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_;

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns `true` if `edge` is part of the graph.
    fn contains_edge(&self, edge: Self::Edge) -> bool;
}

/// Structural mutation.
///
/// Implementations that are also [`ObservableGraph`] must notify their
/// observers before each successful mutating call returns.
pub trait MutableGraph: VertexSet {
    /// Adds `vertex`. Returns `false` if it was already present.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Removes `vertex` and every incident edge. Returns `false` if absent.
    fn remove_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Adds an edge from `source` to `target`.
    ///
    /// # Errors
    /// Fails with an argument error if an endpoint is missing, or if the graph
    /// forbids parallel edges and one already joins the endpoints.
    fn add_edge(&mut self, source: Self::Vertex, target: Self::Vertex) -> Result<Self::Edge>;

    /// Removes `edge`. Returns `false` if absent.
    fn remove_edge(&mut self, edge: Self::Edge) -> bool;
}

/// A shared, weakly held mutation observer.
pub type WeakObserver<V, E> = Weak<RefCell<dyn GraphObserver<V, E>>>;

/// Mutation notification.
pub trait ObservableGraph: GraphBase {
    /// Registers an observer.
    ///
    /// The graph keeps only a weak reference: once every strong reference to
    /// the observer is gone it is never called again.
    fn subscribe(&mut self, observer: WeakObserver<Self::Vertex, Self::Edge>) -> SubscriptionId;

    /// Removes a subscription. Returns `false` if it was unknown.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

impl<G: GraphBase> GraphBase for &G {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn allows_parallel_edges(&self) -> bool {
        (**self).allows_parallel_edges()
    }
}

impl<G: VertexSet> VertexSet for &G {
    fn contains_vertex(&self, vertex: Self::Vertex) -> bool {
        (**self).contains_vertex(vertex)
    }
}

impl<G: VertexListGraph> VertexListGraph for &G {
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        (**self).vertices()
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }
}

impl<G: IncidenceGraph> IncidenceGraph for &G {
    fn out_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        (**self).out_edges(vertex)
    }

    fn out_degree(&self, vertex: Self::Vertex) -> usize {
        (**self).out_degree(vertex)
    }
}

impl<G: BidirectionalGraph> BidirectionalGraph for &G {
    fn in_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        (**self).in_edges(vertex)
    }

    fn in_degree(&self, vertex: Self::Vertex) -> usize {
        (**self).in_degree(vertex)
    }
}

impl<G: EdgeListGraph> EdgeListGraph for &G {
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        (**self).edges()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn contains_edge(&self, edge: Self::Edge) -> bool {
        (**self).contains_edge(edge)
    }
}
