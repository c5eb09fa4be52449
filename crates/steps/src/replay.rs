//! Replay — rebuild algorithm state from a trace alone.
//!
//! [`ArrayReplay`] re-applies the exchanges described by a QuickSort trace to
//! a private copy of the original input and checks every snapshot against
//! it. [`GraphReplay`] folds a graph trace into visit order, completion
//! order, final distances and the shortest-path tree.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{NodeId, ReplayError, Step, StepSequence};

// ---------------------------------------------------------------------------
// ArrayReplay
// ---------------------------------------------------------------------------

/// Replays a QuickSort trace against a copy of the unsorted input.
///
/// Two step kinds move values: `swap` exchanges its `swapping` pair, and
/// `pivot` exchanges the chosen index with `range[1]` before its snapshot is
/// taken.
#[derive(Debug, Clone)]
pub struct ArrayReplay {
    working: Vec<f64>,
    applied: usize,
    terminal: Option<Vec<f64>>,
}

impl ArrayReplay {
    pub fn new(original: &[f64]) -> Self {
        Self {
            working: original.to_vec(),
            applied: 0,
            terminal: None,
        }
    }

    /// Replay a whole sequence and return the reconstructed final array.
    pub fn replay(original: &[f64], trace: &StepSequence) -> Result<Vec<f64>, ReplayError> {
        let mut replay = Self::new(original);
        for step in trace {
            replay.apply(step)?;
        }
        replay.finish()
    }

    /// The array as reconstructed so far.
    pub fn current(&self) -> &[f64] {
        &self.working
    }

    /// Apply one step, then check its snapshot (if any) against the
    /// reconstruction.
    pub fn apply(&mut self, step: &Step) -> Result<(), ReplayError> {
        let index = self.applied;
        self.applied += 1;

        match step {
            Step::Swap { swapping: [a, b], .. } => self.exchange(index, *a, *b)?,
            Step::Pivot { pivot, range: [_, high], .. } => self.exchange(index, *pivot, *high)?,
            _ => {}
        }

        if let Some(snapshot) = step.array() {
            if snapshot != self.working.as_slice() {
                debug!(step = index, kind = step.kind(), "snapshot diverged from replay");
                return Err(ReplayError::SnapshotMismatch { step: index });
            }
        }

        if let Step::Sorted { range: None, .. } = step {
            self.terminal = Some(self.working.clone());
        }

        Ok(())
    }

    /// Consume the replay, requiring that the terminal `sorted` step was seen.
    pub fn finish(self) -> Result<Vec<f64>, ReplayError> {
        self.terminal.ok_or(ReplayError::MissingTerminalSorted)
    }

    fn exchange(&mut self, step: usize, a: usize, b: usize) -> Result<(), ReplayError> {
        let len = self.working.len();
        for index in [a, b] {
            if index >= len {
                return Err(ReplayError::IndexOutOfBounds { step, index, len });
            }
        }
        self.working.swap(a, b);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GraphReplay
// ---------------------------------------------------------------------------

/// State reconstructed from a DFS, BFS or Dijkstra trace.
#[derive(Debug, Clone, Default)]
pub struct GraphReplay {
    visited: HashSet<NodeId>,
    visit_order: Vec<NodeId>,
    completed: Vec<NodeId>,
    tree_edges: Vec<(NodeId, NodeId)>,
    distances: HashMap<NodeId, f64>,
    path: Vec<(NodeId, NodeId)>,
}

impl GraphReplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replay(trace: &StepSequence) -> Result<Self, ReplayError> {
        let mut replay = Self::new();
        for step in trace {
            replay.apply(step)?;
        }
        Ok(replay)
    }

    pub fn apply(&mut self, step: &Step) -> Result<(), ReplayError> {
        match step {
            Step::Visit { node, .. } => {
                if !self.visited.insert(*node) {
                    return Err(ReplayError::VisitedTwice(*node));
                }
                self.visit_order.push(*node);
            }
            Step::Explore { from, to } => self.tree_edges.push((*from, *to)),
            Step::Complete { node } => {
                if !self.visited.contains(node) {
                    return Err(ReplayError::CompletedBeforeVisit(*node));
                }
                self.completed.push(*node);
            }
            Step::Distance { node, distance } => {
                self.distances.insert(*node, *distance);
            }
            Step::Path { edges } => self.path = edges.clone(),
            _ => {}
        }
        Ok(())
    }

    /// Nodes in the order their `visit` steps appeared.
    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    /// Nodes in the order their `complete` steps appeared.
    pub fn completed(&self) -> &[NodeId] {
        &self.completed
    }

    /// `(from, to)` pairs of every `explore` step.
    pub fn tree_edges(&self) -> &[(NodeId, NodeId)] {
        &self.tree_edges
    }

    /// Last distance reported for each node.
    pub fn distances(&self) -> &HashMap<NodeId, f64> {
        &self.distances
    }

    /// Edges of the terminal `path` step, empty if none was emitted.
    pub fn path(&self) -> &[(NodeId, NodeId)] {
        &self.path
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::StepRecorder;

    fn swap(a: usize, b: usize, array: Vec<f64>) -> Step {
        Step::Swap { swapping: [a, b], i_pointer: a as i64, j_pointer: b, range: [0, 1], array }
    }

    fn terminal(array: Vec<f64>) -> Step {
        Step::Sorted { sorted: (0..array.len()).collect(), range: None, array }
    }

    #[test]
    fn swaps_rebuild_final_array() {
        let mut rec = StepRecorder::new();
        rec.push(swap(0, 1, vec![1.0, 2.0]));
        rec.push(terminal(vec![1.0, 2.0]));

        let out = ArrayReplay::replay(&[2.0, 1.0], &rec.finish()).expect("replay");
        assert_eq!(out, vec![1.0, 2.0]);
    }

    #[test]
    fn pivot_step_moves_pivot_to_high() {
        let mut rec = StepRecorder::new();
        rec.push(Step::Pivot { pivot: 0, range: [0, 2], array: vec![9.0, 5.0, 4.0] });
        let mut replay = ArrayReplay::new(&[4.0, 5.0, 9.0]);
        for step in &rec.finish() {
            replay.apply(step).expect("apply");
        }
        assert_eq!(replay.current(), &[9.0, 5.0, 4.0]);
    }

    #[test]
    fn tampered_snapshot_is_detected() {
        let mut rec = StepRecorder::new();
        rec.push(swap(0, 1, vec![2.0, 1.0]));
        assert_eq!(
            ArrayReplay::replay(&[2.0, 1.0], &rec.finish()),
            Err(ReplayError::SnapshotMismatch { step: 0 })
        );
    }

    #[test]
    fn out_of_range_swap_is_rejected() {
        let mut rec = StepRecorder::new();
        rec.push(swap(0, 5, vec![1.0]));
        assert!(matches!(
            ArrayReplay::replay(&[1.0], &rec.finish()),
            Err(ReplayError::IndexOutOfBounds { index: 5, len: 1, .. })
        ));
    }

    #[test]
    fn missing_terminal_sorted_is_an_error() {
        assert_eq!(
            ArrayReplay::replay(&[1.0], &StepSequence::empty()),
            Err(ReplayError::MissingTerminalSorted)
        );
    }

    #[test]
    fn graph_replay_tracks_order_and_distances() {
        let mut rec = StepRecorder::new();
        rec.push(Step::Distance { node: 0, distance: 0.0 });
        rec.push(Step::Visit { node: 0, distance: Some(0.0) });
        rec.push(Step::Distance { node: 1, distance: 4.0 });
        rec.push(Step::Distance { node: 1, distance: 3.0 });
        rec.push(Step::Complete { node: 0 });
        rec.push(Step::Path { edges: vec![(0, 1)] });

        let replay = GraphReplay::replay(&rec.finish()).expect("replay");
        assert_eq!(replay.visit_order(), &[0]);
        assert_eq!(replay.completed(), &[0]);
        assert_eq!(replay.distances()[&1], 3.0);
        assert_eq!(replay.path(), &[(0, 1)]);
    }

    #[test]
    fn double_visit_is_rejected() {
        let mut rec = StepRecorder::new();
        rec.push(Step::Visit { node: 4, distance: None });
        rec.push(Step::Visit { node: 4, distance: None });
        assert_eq!(
            GraphReplay::replay(&rec.finish()).unwrap_err(),
            ReplayError::VisitedTwice(4)
        );
    }

    #[test]
    fn completion_requires_prior_visit() {
        let mut rec = StepRecorder::new();
        rec.push(Step::Complete { node: 2 });
        assert_eq!(
            GraphReplay::replay(&rec.finish()).unwrap_err(),
            ReplayError::CompletedBeforeVisit(2)
        );
    }
}
