//! Name-based dispatch over the graph tracers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use steps::StepSequence;

use crate::{bfs, dfs, dijkstra, AdjacencyList, Graph, GraphConfig, NodeId, TracerError};

/// The traversal algorithms a graph can be traced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphAlgorithm {
    Dfs,
    Bfs,
    Dijkstra,
}

impl GraphAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
        }
    }

    /// Run this algorithm on `graph` from `start`.
    pub fn trace(self, graph: &Graph, start: NodeId, config: &GraphConfig) -> StepSequence {
        match self {
            Self::Dfs => dfs::trace(graph, start, config),
            Self::Bfs => bfs::trace(graph, start, config),
            Self::Dijkstra => dijkstra::trace(graph, start, config),
        }
    }

    /// Run this algorithm over an adjacency list built once and reused.
    pub fn trace_adjacency(self, adjacency: &AdjacencyList, start: NodeId) -> StepSequence {
        match self {
            Self::Dfs => dfs::trace_adjacency(adjacency, start),
            Self::Bfs => bfs::trace_adjacency(adjacency, start),
            Self::Dijkstra => dijkstra::trace_adjacency(adjacency, start),
        }
    }
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphAlgorithm {
    type Err = TracerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Self::Dfs),
            "bfs" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(TracerError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("DFS".parse::<GraphAlgorithm>(), Ok(GraphAlgorithm::Dfs));
        assert_eq!(" dijkstra ".parse::<GraphAlgorithm>(), Ok(GraphAlgorithm::Dijkstra));
        assert_eq!(
            "prim".parse::<GraphAlgorithm>(),
            Err(TracerError::UnknownAlgorithm("prim".into()))
        );
    }

    #[test]
    fn adjacency_reuse_matches_direct_trace() {
        let graph = Graph::new([0, 1, 2], vec![Edge::new(0, 1), Edge::new(1, 2)], false);
        let config = GraphConfig::default();
        let adjacency = AdjacencyList::build(&graph, &config);

        for algo in [GraphAlgorithm::Dfs, GraphAlgorithm::Bfs, GraphAlgorithm::Dijkstra] {
            assert_eq!(algo.trace(&graph, 1, &config), algo.trace_adjacency(&adjacency, 1));
        }
    }
}
