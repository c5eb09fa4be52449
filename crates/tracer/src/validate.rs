//! Graph validation — run this before tracing a graph you didn't build.
//!
//! The tracers assume these rules and never check them:
//! 1. Node ids must be unique within the graph.
//! 2. Every edge must reference declared node ids (both `source` and `target`).
//! 3. For Dijkstra, every weight must be finite and nonnegative.

use std::collections::HashSet;

use crate::{Graph, GraphConfig, TracerError};

/// Check node uniqueness and edge endpoints.
///
/// # Errors
/// - [`TracerError::DuplicateNodeId`] if two nodes share an id.
/// - [`TracerError::UnknownNodeReference`] if an edge references a missing node.
pub fn validate_graph(graph: &Graph) -> Result<(), TracerError> {
    let mut seen_ids = HashSet::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        if !seen_ids.insert(node.id) {
            return Err(TracerError::DuplicateNodeId(node.id));
        }
    }

    for edge in &graph.links {
        let (source, target) = (edge.source.id(), edge.target.id());
        if !seen_ids.contains(&source) {
            return Err(TracerError::UnknownNodeReference { node_id: source, side: "source" });
        }
        if !seen_ids.contains(&target) {
            return Err(TracerError::UnknownNodeReference { node_id: target, side: "target" });
        }
    }

    Ok(())
}

/// Check that every effective weight is usable by Dijkstra.
///
/// # Errors
/// - [`TracerError::NonFiniteWeight`] for NaN or infinite weights.
/// - [`TracerError::NegativeWeight`] for weights below zero.
pub fn validate_weights(graph: &Graph, config: &GraphConfig) -> Result<(), TracerError> {
    for edge in &graph.links {
        let weight = edge.weight.unwrap_or(config.default_weight);
        let (from, to) = (edge.source.id(), edge.target.id());
        if !weight.is_finite() {
            return Err(TracerError::NonFiniteWeight { from, to });
        }
        if weight < 0.0 {
            return Err(TracerError::NegativeWeight { from, to, weight });
        }
    }
    Ok(())
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;

    #[test]
    fn well_formed_graph_is_valid() {
        // 0 — 1 — 2
        let graph = Graph::new([0, 1, 2], vec![Edge::new(0, 1), Edge::new(1, 2)], false);
        assert_eq!(validate_graph(&graph), Ok(()));
    }

    #[test]
    fn duplicate_node_id_is_rejected() {
        let graph = Graph::new([0, 0], vec![], false); // duplicate!
        assert_eq!(validate_graph(&graph), Err(TracerError::DuplicateNodeId(0)));
    }

    #[test]
    fn edge_referencing_missing_node_is_rejected() {
        let graph = Graph::new([0], vec![Edge::new(0, 9)], true); // 9 doesn't exist
        assert!(matches!(
            validate_graph(&graph),
            Err(TracerError::UnknownNodeReference { node_id: 9, side: "target" })
        ));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let graph = Graph::new([0, 1], vec![Edge::weighted(0, 1, -2.0)], false);
        assert!(matches!(
            validate_weights(&graph, &GraphConfig::default()),
            Err(TracerError::NegativeWeight { from: 0, to: 1, .. })
        ));
    }

    #[test]
    fn default_weight_is_checked_too() {
        let graph = Graph::new([0, 1], vec![Edge::new(0, 1)], false);
        let config = GraphConfig { default_weight: f64::NAN };
        assert_eq!(
            validate_weights(&graph, &config),
            Err(TracerError::NonFiniteWeight { from: 0, to: 1 })
        );
    }

    #[test]
    fn single_node_no_edges_is_valid() {
        let graph = Graph::new([7], vec![], false);
        assert!(validate_graph(&graph).is_ok());
        assert!(validate_weights(&graph, &GraphConfig::default()).is_ok());
    }
}
