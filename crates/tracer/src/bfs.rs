//! Breadth-first search tracer.
//!
//! Nodes are marked visited when enqueued, not when dequeued, so no node is
//! ever queued twice. Each newly discovered neighbour yields a paired
//! `explore(current, neighbour)` + `visit(neighbour)`; each dequeued node
//! ends with `complete(node)`.

use std::collections::{HashSet, VecDeque};

use steps::{Step, StepRecorder, StepSequence};
use tracing::{debug, info, instrument};

use crate::{AdjacencyList, Graph, GraphConfig, NodeId};

/// Trace a BFS of `graph` from `start`.
///
/// Returns an empty sequence if `start` is not a node of `graph`.
#[instrument(skip(graph, config), fields(nodes = graph.nodes.len()))]
pub fn trace(graph: &Graph, start: NodeId, config: &GraphConfig) -> StepSequence {
    if !graph.contains(start) {
        debug!("start node not in graph, returning empty trace");
        return StepSequence::empty();
    }
    trace_adjacency(&AdjacencyList::build(graph, config), start)
}

/// Trace a BFS over a prebuilt adjacency list.
pub fn trace_adjacency(adjacency: &AdjacencyList, start: NodeId) -> StepSequence {
    if !adjacency.contains(start) {
        debug!(start, "start node not in adjacency list, returning empty trace");
        return StepSequence::empty();
    }

    let mut rec = StepRecorder::new();
    let mut visited: HashSet<NodeId> = HashSet::with_capacity(adjacency.len());
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);

    visited.insert(start);
    rec.push(Step::Visit { node: start, distance: None });

    while let Some(current) = queue.pop_front() {
        for neighbor in adjacency.neighbors(current) {
            let target = neighbor.node;
            if visited.insert(target) {
                queue.push_back(target);
                rec.push(Step::Explore { from: current, to: target });
                rec.push(Step::Visit { node: target, distance: None });
            }
        }
        rec.push(Step::Complete { node: current });
    }

    info!(steps = rec.len(), visited = visited.len(), "bfs trace complete");
    rec.finish()
}
