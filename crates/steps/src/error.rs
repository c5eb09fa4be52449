//! Replay error types.

use thiserror::Error;

use crate::NodeId;

/// Inconsistencies found while folding a [`StepSequence`](crate::StepSequence)
/// back into algorithm state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReplayError {
    // ------ Array traces ------

    /// A `swap` or `pivot` step names an index past the end of the array.
    #[error("step {step} touches index {index} of an array of length {len}")]
    IndexOutOfBounds {
        step: usize,
        index: usize,
        len: usize,
    },

    /// The snapshot carried by a step differs from the replayed array.
    #[error("step {step} snapshot does not match the replayed array")]
    SnapshotMismatch { step: usize },

    /// The sequence ended without the whole-array `sorted` step.
    #[error("trace has no terminal `sorted` step")]
    MissingTerminalSorted,

    // ------ Graph traces ------

    /// A node was visited more than once.
    #[error("node {0} visited twice")]
    VisitedTwice(NodeId),

    /// A `complete` step arrived for a node that was never visited.
    #[error("node {0} completed before it was visited")]
    CompletedBeforeVisit(NodeId),
}
