//! # `weft` - Generic Graph Algorithms
//!
//! Traversal, shortest-path, ordering, connectivity, flow and ranking
//! algorithms that run over any graph exposing a small set of capability
//! traits. Callers bring their own vertex and edge handles and supply edge
//! weights as functions; the algorithms never store anything on the graph.
//!
//! ## Design
//!
//! ### Capabilities, not storage
//! Each algorithm asks for the smallest set of traits it needs
//! ([`graph::VertexListGraph`], [`graph::IncidenceGraph`],
//! [`graph::BidirectionalGraph`], ...). [`graph::AdjacencyGraph`] implements all
//! of them and is what the tests and benches use, but any type can opt in.
//!
//! ### Handles and side tables
//! Vertices and edges are small `Copy + Eq + Hash` handles. Colors, distances,
//! predecessors, residual capacities and component ids live in maps owned by
//! the result of one call, so graphs never carry back-references.
//!
//! ### Generic weights
//! [`Weight`] covers every numeric type with ordering, addition, a zero and a
//! largest value (read as "unreached"), so `u32`, `i64` and `f64` costs all work.
//!
//! ## Algorithms
//!
//! | Family | Entry points |
//! |--------|--------------|
//! | Traversal | [`breadth_first_search`], [`depth_first_search`], [`traverse_all`] |
//! | Shortest paths | [`dijkstra`], [`astar`], [`bellman_ford`], [`dag_shortest_paths`] |
//! | Ordering | [`topological_sort`], [`source_first_topological_sort`], [`bidirectional_topological_sort`] |
//! | Connectivity | [`weakly_connected_components`], [`strongly_connected_components`], [`IncrementalComponents`] |
//! | Flow | [`ReversedEdgeAugmentor`], [`edmonds_karp`] |
//! | Ranking | [`ranked_shortest_paths`] |
//!
//! ## Errors
//!
//! Invalid arguments, unsuitable graph shapes and missing preparatory steps
//! are reported as [`GraphError`] before any work starts; see
//! [`ErrorKind`] for the classification. A negative cycle found by
//! Bellman-Ford is a flag on the result, not an error.
//!
//! ## Example
//!
//! ```rust
//! use weft::graph::AdjacencyGraph;
//! use weft::dijkstra;
//!
//! let graph = AdjacencyGraph::from_edges([(1, 2), (2, 3), (1, 3)]);
//! let paths = dijkstra(&graph, 1, |_| 1u32)?;
//!
//! assert_eq!(paths.distance(3), Some(1));
//! assert_eq!(paths.path_to(3).map(|p| p.len()), Some(1));
//! # Ok::<(), weft::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod weight;

pub use collections::{ForestDisjointSet, IndexedMinHeap};
pub use error::{ErrorKind, GraphError, Result};
pub use graph::algorithms::{
    astar, bellman_ford, bidirectional_topological_sort, breadth_first_search,
    dag_shortest_paths, depth_first_search, dijkstra, edmonds_karp, is_directed_acyclic_graph,
    ranked_shortest_paths, source_first_topological_sort, strongly_connected_components,
    topological_sort, traverse, traverse_all, weakly_connected_components, IncrementalComponents,
    RankedPathOptions, ReversedEdgeAugmentor,
};
pub use weight::{path_weight, Weight};
