//! `steps` crate — the trace contract shared by every tracer and consumer.
//!
//! A tracer appends [`Step`] records to a [`StepRecorder`] and hands back a
//! finished [`StepSequence`]. Consumers (renderers, test harnesses) read the
//! sequence and, with the [`replay`] module, reconstruct the algorithm's
//! state without re-running it.

pub mod error;
pub mod replay;
pub mod sequence;
pub mod step;

pub use error::ReplayError;
pub use replay::{ArrayReplay, GraphReplay};
pub use sequence::{StepRecorder, StepSequence};
pub use step::{IndexRange, NodeId, Step};
