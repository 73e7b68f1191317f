//! Graph capability contracts, a reference storage type, and the algorithms.
//!
//! - `traits`: the capabilities algorithms are written against
//! - `observer`: synchronous mutation notification
//! - `adjacency`: `AdjacencyGraph`, a bidirectional, mutable, observable graph
//! - `reversed`: a view with every edge flipped
//! - `access`: per-invocation vertex bookkeeping (colors)
//! - `algorithms`: traversal, shortest paths, ordering, connectivity, flow, ranking

pub mod access;
pub mod adjacency;
pub mod algorithms;
pub mod observer;
pub mod reversed;
pub mod traits;

pub use adjacency::{AdjacencyGraph, Edge, EdgeId};
pub use observer::{downgrade_observer, GraphObserver, ObserverList, SubscriptionId};
pub use reversed::{Reversed, ReversedEdge};
pub use traits::{
    BidirectionalGraph, EdgeListGraph, GraphBase, GraphEdge, IncidenceGraph, MutableGraph,
    ObservableGraph, VertexListGraph, VertexSet, WeakObserver,
};
