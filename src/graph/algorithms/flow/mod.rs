//! Maximum flow over a graph temporarily augmented with reverse edges.
//!
//! Residual bookkeeping needs a reverse edge for every edge. The
//! [`ReversedEdgeAugmentor`] adds them to the caller's graph for as long as it
//! lives, and [`edmonds_karp`] computes a flow through it:
//!
//! ```
//! use weft::graph::algorithms::flow::{edmonds_karp, ReversedEdgeAugmentor};
//! use weft::graph::{AdjacencyGraph, EdgeListGraph};
//!
//! let mut graph = AdjacencyGraph::from_edges([('s', 'a'), ('a', 't'), ('s', 't')]);
//! let mut augmentor = ReversedEdgeAugmentor::new(&mut graph);
//! augmentor.add_reversed_edges()?;
//! let flow = edmonds_karp(&augmentor, |_| 5u32, 's', 't')?;
//! assert_eq!(flow.total, 10);
//! drop(augmentor); // synthetic reverse edges are removed here
//! assert_eq!(graph.edge_count(), 3);
//! # Ok::<(), weft::GraphError>(())
//! ```

mod augmentor;
mod edmonds_karp;

pub use augmentor::ReversedEdgeAugmentor;
pub use edmonds_karp::{edmonds_karp, MaximumFlow};
