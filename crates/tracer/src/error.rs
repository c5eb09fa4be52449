//! Tracer-level error types.
//!
//! Tracing itself never fails; these errors come from parsing names and
//! from [`validate_graph`](crate::validate_graph), the upstream check that
//! callers run before handing a graph to a tracer.

use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TracerError {
    // ------ Validation errors ------

    /// Two or more nodes share the same id.
    #[error("duplicate node ID: {0}")]
    DuplicateNodeId(NodeId),

    /// An edge references a node id that isn't declared.
    #[error("edge references unknown node {node_id} ({side} side)")]
    UnknownNodeReference {
        node_id: NodeId,
        side: &'static str,
    },

    /// Dijkstra requires nonnegative weights.
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    /// NaN or infinite weight.
    #[error("edge {from} -> {to} has non-finite weight")]
    NonFiniteWeight { from: NodeId, to: NodeId },

    // ------ Parsing errors ------

    #[error("unknown graph algorithm '{0}' (expected dfs, bfs or dijkstra)")]
    UnknownAlgorithm(String),

    #[error("unknown pivot method '{0}' (expected last, first, middle, random or median)")]
    UnknownPivotMethod(String),
}
