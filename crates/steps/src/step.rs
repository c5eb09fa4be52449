//! The [`Step`] record — one action performed by a traced algorithm.
//!
//! The serialised form is the wire contract with renderers: an object whose
//! `type` field selects the schema of the remaining fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer node identifier, unique within a graph.
pub type NodeId = i64;

/// Inclusive `[low, high]` bounds of a QuickSort sub-array.
pub type IndexRange = [usize; 2];

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// A single entry of a trace.
///
/// Graph tracers emit `Visit` through `Path`; the QuickSort tracer emits
/// `Pivot` through `Range`. Every QuickSort step carries a full `array`
/// snapshot taken at the instant the step was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// A node was reached for the first time (Dijkstra: settled).
    Visit {
        node: NodeId,
        /// Settled distance; only Dijkstra populates it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        distance: Option<f64>,
    },
    /// The algorithm is about to follow the edge `from → to`.
    Explore { from: NodeId, to: NodeId },
    /// Every neighbour of `node` has been considered.
    Complete { node: NodeId },
    /// DFS returned from `from` to the previous node on its path.
    Backtrack { from: NodeId, to: NodeId },
    /// The best known distance to `node` changed.
    Distance { node: NodeId, distance: f64 },
    /// Dijkstra tested whether `from` offers a shorter route to `to`.
    Relax {
        from: NodeId,
        to: NodeId,
        success: bool,
        /// Best known distance to `to` after the test, whatever its outcome.
        #[serde(rename = "newDistance")]
        new_distance: f64,
    },
    /// Terminal shortest-path tree as `(predecessor, node)` pairs.
    Path { edges: Vec<(NodeId, NodeId)> },
    /// `pivot` was chosen and its value moved to `range[1]`.
    Pivot {
        pivot: usize,
        range: IndexRange,
        array: Vec<f64>,
    },
    /// Lomuto pointers initialised for a new partition.
    Pointers {
        i_pointer: i64,
        j_pointer: usize,
        range: IndexRange,
        array: Vec<f64>,
    },
    /// `comparing[0]` is compared against the pivot at `comparing[1]`.
    Compare {
        comparing: [usize; 2],
        i_pointer: i64,
        j_pointer: usize,
        range: IndexRange,
        array: Vec<f64>,
    },
    /// The two indices in `swapping` were exchanged.
    Swap {
        swapping: [usize; 2],
        i_pointer: i64,
        j_pointer: usize,
        range: IndexRange,
        array: Vec<f64>,
    },
    /// The listed indices hold their final values. `range` is absent on the
    /// terminal whole-array step.
    Sorted {
        sorted: Vec<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<IndexRange>,
        array: Vec<f64>,
    },
    /// A sub-array is about to be partitioned.
    Range { range: IndexRange, array: Vec<f64> },
}

impl Step {
    /// The wire tag of this step (`"visit"`, `"swap"`, …).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Visit { .. } => "visit",
            Self::Explore { .. } => "explore",
            Self::Complete { .. } => "complete",
            Self::Backtrack { .. } => "backtrack",
            Self::Distance { .. } => "distance",
            Self::Relax { .. } => "relax",
            Self::Path { .. } => "path",
            Self::Pivot { .. } => "pivot",
            Self::Pointers { .. } => "pointers",
            Self::Compare { .. } => "compare",
            Self::Swap { .. } => "swap",
            Self::Sorted { .. } => "sorted",
            Self::Range { .. } => "range",
        }
    }

    /// The array snapshot carried by QuickSort steps.
    pub fn array(&self) -> Option<&[f64]> {
        match self {
            Self::Pivot { array, .. }
            | Self::Pointers { array, .. }
            | Self::Compare { array, .. }
            | Self::Swap { array, .. }
            | Self::Sorted { array, .. }
            | Self::Range { array, .. } => Some(array.as_slice()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Narration
// ---------------------------------------------------------------------------

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visit { node, distance: Some(d) } => {
                write!(f, "Visiting node {node} with distance {d}")
            }
            Self::Visit { node, distance: None } => write!(f, "Visiting node {node}"),
            Self::Explore { from, to } => write!(f, "Exploring edge from {from} to {to}"),
            Self::Complete { node } => write!(f, "Completed exploration of node {node}"),
            Self::Backtrack { from, to } => write!(f, "Backtracking from {from} to {to}"),
            Self::Distance { node, distance } => {
                write!(f, "Setting distance of node {node} to {distance}")
            }
            Self::Relax { from, to, success: true, new_distance } => write!(
                f,
                "Relaxing edge from {from} to {to} succeeded, best distance {new_distance}"
            ),
            Self::Relax { from, to, success: false, new_distance } => write!(
                f,
                "Relaxing edge from {from} to {to} failed, best distance stays {new_distance}"
            ),
            Self::Path { edges } => {
                write!(f, "Final shortest paths use {} edges", edges.len())
            }
            Self::Pivot { pivot, range: [low, high], .. } => {
                write!(f, "Choosing index {pivot} as pivot for range [{low}, {high}]")
            }
            Self::Pointers { i_pointer, j_pointer, .. } => {
                write!(f, "Starting partition with i = {i_pointer}, j = {j_pointer}")
            }
            Self::Compare { comparing: [j, p], .. } => {
                write!(f, "Comparing index {j} with pivot at index {p}")
            }
            Self::Swap { swapping: [a, b], .. } => write!(f, "Swapping indices {a} and {b}"),
            Self::Sorted { range: None, .. } => write!(f, "Array is sorted"),
            Self::Sorted { sorted, .. } => {
                write!(f, "Index {sorted:?} is in its final position")
            }
            Self::Range { range: [low, high], .. } => {
                write!(f, "Partitioning range [{low}, {high}]")
            }
        }
    }
}
