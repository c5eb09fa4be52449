//! Dijkstra shortest-path tracer (lazy deletion).
//!
//! Stale queue entries are left in place and discarded silently when popped.
//! Every unvisited neighbour of a settled node yields a `relax` step whatever
//! its outcome; successful relaxations are followed by a `distance` step.
//! After the queue drains, a single `path` step lists the shortest-path tree.
//!
//! Weights must be nonnegative; see [`validate_weights`](crate::validate_weights).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use steps::{Step, StepRecorder, StepSequence};
use tracing::{debug, info, instrument};

use crate::{AdjacencyList, Graph, GraphConfig, NodeId};

/// Priority-queue entry. Ties on distance are broken by the smaller node id
/// so the pop order is fully deterministic.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Trace Dijkstra's algorithm on `graph` from `start`.
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

/// Trace Dijkstra's algorithm over a prebuilt adjacency list.
pub fn trace_adjacency(adjacency: &AdjacencyList, start: NodeId) -> StepSequence {
    if !adjacency.contains(start) {
        debug!(start, "start node not in adjacency list, returning empty trace");
        return StepSequence::empty();
    }

    let mut rec = StepRecorder::new();
    let mut distance: HashMap<NodeId, f64> = adjacency
        .nodes()
        .iter()
        .map(|&node| (node, f64::INFINITY))
        .collect();
    let mut predecessor: HashMap<NodeId, NodeId> = HashMap::new();
    let mut visited: HashSet<NodeId> = HashSet::with_capacity(adjacency.len());
    let mut queue = BinaryHeap::new();

    distance.insert(start, 0.0);
    queue.push(Reverse(QueueEntry { distance: 0.0, node: start }));
    rec.push(Step::Distance { node: start, distance: 0.0 });

    while let Some(Reverse(QueueEntry { distance: popped, node: current })) = queue.pop() {
        if !visited.insert(current) {
            continue;
        }
        rec.push(Step::Visit { node: current, distance: Some(popped) });

        let base = best(&distance, current);
        for neighbor in adjacency.neighbors(current) {
            let target = neighbor.node;
            if visited.contains(&target) {
                continue;
            }

            let old = best(&distance, target);
            let candidate = base + neighbor.weight;
            let success = candidate < old;
            rec.push(Step::Relax {
                from: current,
                to: target,
                success,
                new_distance: if success { candidate } else { old },
            });

            if success {
                distance.insert(target, candidate);
                predecessor.insert(target, current);
                queue.push(Reverse(QueueEntry { distance: candidate, node: target }));
                rec.push(Step::Distance { node: target, distance: candidate });
            }
        }

        rec.push(Step::Complete { node: current });
    }

    let edges = shortest_path_edges(adjacency, start, &predecessor);
    if !edges.is_empty() {
        rec.push(Step::Path { edges });
    }

    info!(steps = rec.len(), settled = visited.len(), "dijkstra trace complete");
    rec.finish()
}

fn best(distance: &HashMap<NodeId, f64>, node: NodeId) -> f64 {
    distance.get(&node).copied().unwrap_or(f64::INFINITY)
}

/// Walk every node's predecessor chain, in declaration order, collecting
/// `(predecessor, node)` edges deduplicated by unordered pair in first
/// discovery order.
fn shortest_path_edges(
    adjacency: &AdjacencyList,
    start: NodeId,
    predecessor: &HashMap<NodeId, NodeId>,
) -> Vec<(NodeId, NodeId)> {
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut edges = Vec::new();

    for &node in adjacency.nodes() {
        if node == start {
            continue;
        }
        let mut current = node;
        while let Some(&previous) = predecessor.get(&current) {
            // The rest of this chain was walked by an earlier node.
            if !seen.insert((previous.min(current), previous.max(current))) {
                break;
            }
            edges.push((previous, current));
            current = previous;
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;
    use steps::GraphReplay;

    fn triangle() -> Graph {
        Graph::new(
            [0, 1, 2],
            vec![Edge::weighted(0, 1, 1.0), Edge::weighted(1, 2, 1.0), Edge::weighted(0, 2, 5.0)],
            false,
        )
    }

    #[test]
    fn triangle_prefers_two_hop_route() {
        let seq = trace(&triangle(), 0, &GraphConfig::default());
        let replay = GraphReplay::replay(&seq).expect("consistent trace");

        assert_eq!(replay.distances()[&0], 0.0);
        assert_eq!(replay.distances()[&1], 1.0);
        assert_eq!(replay.distances()[&2], 2.0);
        assert_eq!(replay.visit_order(), &[0, 1, 2]);
        assert_eq!(replay.path(), &[(0, 1), (1, 2)]);
    }

    #[test]
    fn triangle_full_trace() {
        let seq = trace(&triangle(), 0, &GraphConfig::default());
        assert_eq!(
            seq.steps(),
            &[
                Step::Distance { node: 0, distance: 0.0 },
                Step::Visit { node: 0, distance: Some(0.0) },
                Step::Relax { from: 0, to: 1, success: true, new_distance: 1.0 },
                Step::Distance { node: 1, distance: 1.0 },
                Step::Relax { from: 0, to: 2, success: true, new_distance: 5.0 },
                Step::Distance { node: 2, distance: 5.0 },
                Step::Complete { node: 0 },
                Step::Visit { node: 1, distance: Some(1.0) },
                Step::Relax { from: 1, to: 2, success: true, new_distance: 2.0 },
                Step::Distance { node: 2, distance: 2.0 },
                Step::Complete { node: 1 },
                Step::Visit { node: 2, distance: Some(2.0) },
                Step::Complete { node: 2 },
                Step::Path { edges: vec![(0, 1), (1, 2)] },
            ]
        );
    }

    #[test]
    fn failed_relax_reports_unchanged_distance() {
        // 0 —1— 1, 0 —1— 2, 1 —5— 2: relaxing 1→2 fails and keeps 1.
        let graph = Graph::new(
            [0, 1, 2],
            vec![Edge::weighted(0, 1, 1.0), Edge::weighted(0, 2, 1.0), Edge::weighted(1, 2, 5.0)],
            false,
        );
        let seq = trace(&graph, 0, &GraphConfig::default());
        assert!(seq.iter().any(|s| *s
            == Step::Relax { from: 1, to: 2, success: false, new_distance: 1.0 }));
    }

    #[test]
    fn stale_entries_are_discarded_without_steps() {
        // Node 2 is queued at 5 then at 2; the stale 5 entry produces nothing.
        let seq = trace(&triangle(), 0, &GraphConfig::default());
        let visits_of_2 = seq
            .iter()
            .filter(|s| matches!(s, Step::Visit { node: 2, .. }))
            .count();
        assert_eq!(visits_of_2, 1);
    }

    #[test]
    fn isolated_start_has_no_path_step() {
        let graph = Graph::new([0, 1], vec![], false);
        let seq = trace(&graph, 0, &GraphConfig::default());
        assert_eq!(
            seq.steps(),
            &[
                Step::Distance { node: 0, distance: 0.0 },
                Step::Visit { node: 0, distance: Some(0.0) },
                Step::Complete { node: 0 },
            ]
        );
    }

    #[test]
    fn path_edges_are_deduplicated_in_discovery_order() {
        // 0 → 1 → 2 and 0 → 1 → 3 share the (0, 1) edge.
        let graph = Graph::new(
            [0, 1, 2, 3],
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(1, 3)],
            true,
        );
        let seq = trace(&graph, 0, &GraphConfig::default());
        assert_eq!(seq.last(), Some(&Step::Path { edges: vec![(0, 1), (1, 2), (1, 3)] }));
    }

    #[test]
    fn unknown_start_yields_empty_trace() {
        assert!(trace(&triangle(), 3, &GraphConfig::default()).is_empty());
    }
}
