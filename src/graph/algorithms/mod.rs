//! Algorithms generic over the capability traits in [`crate::graph::traits`].
//!
//! Organized by family:
//! - `traversal` / `recorders`: BFS and DFS with a visitor protocol
//! - `shortest_path`: Dijkstra, A*, Bellman-Ford, DAG relaxation
//! - `topological`: depth-first and source-first orderings
//! - `connectivity`: weak, strong and incremental components
//! - `flow`: reverse-edge augmentation and Edmonds-Karp
//! - `ranked`: Hoffman-Pavley k shortest loopless paths

pub mod connectivity;
pub mod flow;
pub mod ranked;
pub mod recorders;
pub mod shortest_path;
pub mod topological;
pub mod traversal;

pub use connectivity::{
    strongly_connected_components, weakly_connected_components, ComponentLabeling,
    IncrementalComponents,
};
pub use flow::{edmonds_karp, MaximumFlow, ReversedEdgeAugmentor};
pub use ranked::{ranked_shortest_paths, RankedPath, RankedPathOptions, RankedPaths};
pub use recorders::{DiscoveryRecorder, VertexPredecessorRecorder};
pub use shortest_path::{
    astar, bellman_ford, dag_shortest_paths, dijkstra, BellmanFordPaths, ShortestPaths,
};
pub use topological::{
    bidirectional_topological_sort, is_directed_acyclic_graph, source_first_topological_sort,
    topological_sort, TopologicalDirection,
};
pub use traversal::{
    breadth_first_search, depth_first_search, traverse, traverse_all, Control, Traversal,
    TraversalOrder, TraversalStatus, Visitor,
};
