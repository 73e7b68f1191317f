//! Error taxonomy shared by every algorithm in the crate.
//!
//! Failures fall into three kinds (see [`ErrorKind`]):
//! - **argument** errors: a vertex that is not part of the graph, or an
//!   argument combination that can never succeed (`source == sink`);
//! - **structural** errors: the graph has a shape the algorithm cannot accept,
//!   such as a cycle where a DAG is required;
//! - **precondition** errors: a collaborator step has not been performed yet,
//!   such as requesting a flow before reverse edges were augmented.
//!
//! All of them are raised before any algorithm state is built, so a failed call
//! never returns a partial result. Soft signals (a negative cycle found by
//! Bellman-Ford) are reported through the result value instead.

use core::fmt::Debug;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A caller-supplied argument is invalid.
    Argument,
    /// The graph does not have the shape the algorithm requires.
    Structural,
    /// A required preparatory step has not been performed.
    Precondition,
}

/// Errors raised by graph algorithms and by the reference graph storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The vertex is not part of the graph.
    #[error("vertex {0} is not part of the graph")]
    VertexNotFound(String),

    /// Flow was requested between a vertex and itself.
    #[error("source and sink must be distinct, both are {0}")]
    SourceIsSink(String),

    /// Any other invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The graph forbids parallel edges and one already joins these endpoints.
    #[error("graph does not allow parallel edges: {from} -> {to} already exists")]
    ParallelEdge {
        /// Source vertex of the rejected edge.
        from: String,
        /// Target vertex of the rejected edge.
        to: String,
    },

    /// A cycle was found where a directed acyclic graph is required.
    #[error("graph is not acyclic: cycle detected through vertex {vertex}")]
    CycleDetected {
        /// A vertex lying on the detected cycle.
        vertex: String,
    },

    /// The operation is not valid in the current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

impl GraphError {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexNotFound(_)
            | Self::SourceIsSink(_)
            | Self::InvalidArgument(_)
            | Self::ParallelEdge { .. } => ErrorKind::Argument,
            Self::CycleDetected { .. } => ErrorKind::Structural,
            Self::InvalidOperation(_) => ErrorKind::Precondition,
        }
    }

    pub(crate) fn vertex_not_found(vertex: impl Debug) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }

    pub(crate) fn cycle_at(vertex: impl Debug) -> Self {
        Self::CycleDetected {
            vertex: format!("{vertex:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct_per_family() {
        assert_eq!(GraphError::vertex_not_found(3).kind(), ErrorKind::Argument);
        assert_eq!(
            GraphError::SourceIsSink("1".into()).kind(),
            ErrorKind::Argument
        );
        assert_eq!(GraphError::cycle_at(1).kind(), ErrorKind::Structural);
        assert_eq!(
            GraphError::InvalidOperation("not augmented").kind(),
            ErrorKind::Precondition
        );
    }

    #[test]
    fn messages_render_debug_form_of_vertex() {
        let err = GraphError::vertex_not_found("a");
        assert_eq!(err.to_string(), "vertex \"a\" is not part of the graph");

        let err = GraphError::cycle_at(7u32);
        assert_eq!(
            err.to_string(),
            "graph is not acyclic: cycle detected through vertex 7"
        );
    }
}
