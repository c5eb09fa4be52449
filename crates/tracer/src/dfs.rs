//! Depth-first search tracer.
//!
//! The traversal runs on an explicit stack of `(node, next neighbour index)`
//! frames instead of host recursion, so trace depth is bounded by memory
//! rather than by the call stack. The emitted order is that of the textbook
//! recursive DFS:
//!
//! - `visit(n)` when `n` is first reached,
//! - `explore(n, m)` right before descending into an unvisited neighbour `m`,
//! - `complete(n)` once every neighbour of `n` was considered,
//! - `backtrack(n, p)` when returning to `p`, the previous node on the path.

use std::collections::HashSet;

use steps::{Step, StepRecorder, StepSequence};
use tracing::{debug, info, instrument};

use crate::{AdjacencyList, Graph, GraphConfig, NodeId};

/// A node on the current DFS path.
struct Frame {
    node: NodeId,
    /// Index into the node's neighbour list of the next entry to consider.
    next: usize,
}

/// Trace a DFS of `graph` from `start`.
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

/// Trace a DFS over a prebuilt adjacency list.
pub fn trace_adjacency(adjacency: &AdjacencyList, start: NodeId) -> StepSequence {
    if !adjacency.contains(start) {
        debug!(start, "start node not in adjacency list, returning empty trace");
        return StepSequence::empty();
    }

    let mut rec = StepRecorder::new();
    let mut visited: HashSet<NodeId> = HashSet::with_capacity(adjacency.len());
    let mut path: Vec<Frame> = Vec::new();

    enter(start, &mut visited, &mut path, &mut rec);

    while let Some(frame) = path.last_mut() {
        let node = frame.node;
        match adjacency.neighbors(node).get(frame.next) {
            Some(neighbor) => {
                frame.next += 1;
                if !visited.contains(&neighbor.node) {
                    rec.push(Step::Explore { from: node, to: neighbor.node });
                    enter(neighbor.node, &mut visited, &mut path, &mut rec);
                }
            }
            None => {
                path.pop();
                rec.push(Step::Complete { node });
                if let Some(previous) = path.last() {
                    rec.push(Step::Backtrack { from: node, to: previous.node });
                }
            }
        }
    }

    info!(steps = rec.len(), visited = visited.len(), "dfs trace complete");
    rec.finish()
}

fn enter(
    node: NodeId,
    visited: &mut HashSet<NodeId>,
    path: &mut Vec<Frame>,
    rec: &mut StepRecorder,
) {
    visited.insert(node);
    path.push(Frame { node, next: 0 });
    rec.push(Step::Visit { node, distance: None });
}
