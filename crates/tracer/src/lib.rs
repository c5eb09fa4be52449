//! `tracer` crate — graph models, adjacency construction, and the DFS, BFS,
//! Dijkstra and QuickSort tracers.
//!
//! Every tracer runs to completion synchronously and returns a finished
//! [`StepSequence`]. Soft outcomes are not errors: an unknown start node
//! yields an empty sequence, and an unknown pivot name falls back to `last`.

pub mod adjacency;
pub mod algorithm;
pub mod bfs;
pub mod config;
pub mod dfs;
pub mod dijkstra;
pub mod error;
pub mod models;
pub mod pivot;
pub mod quicksort;
pub mod validate;

pub use adjacency::{AdjacencyList, Neighbor};
pub use algorithm::GraphAlgorithm;
pub use config::{GraphConfig, SortConfig};
pub use error::TracerError;
pub use models::{Edge, Graph, Node, NodeId, NodeRef};
pub use pivot::PivotMethod;
pub use steps::{Step, StepSequence};
pub use validate::{validate_graph, validate_weights};
