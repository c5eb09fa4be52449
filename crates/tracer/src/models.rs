//! Input models for the graph tracers.
//!
//! These mirror the JSON a renderer hands over: an ordered node list, an
//! ordered link list whose endpoints are either bare ids or node objects,
//! and a directedness flag.

use serde::{Deserialize, Serialize};

pub use steps::NodeId;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A graph vertex. Only its id matters to the tracers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
}

// ---------------------------------------------------------------------------
// NodeRef
// ---------------------------------------------------------------------------

/// An edge endpoint: either a bare id or a node object carrying `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Id(NodeId),
    Node { id: NodeId },
}

impl NodeRef {
    /// Resolve either form to its node id.
    pub fn id(self) -> NodeId {
        match self {
            Self::Id(id) | Self::Node { id } => id,
        }
    }
}

impl From<NodeId> for NodeRef {
    fn from(id: NodeId) -> Self {
        Self::Id(id)
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A link between two nodes. A missing weight falls back to
/// [`GraphConfig::default_weight`](crate::GraphConfig::default_weight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeRef,
    pub target: NodeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Edge {
    /// Unweighted edge between two ids.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: None,
        }
    }

    /// Weighted edge between two ids.
    pub fn weighted(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            weight: Some(weight),
            ..Self::new(source, target)
        }
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A complete graph description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Edge>,
    #[serde(default)]
    pub directed: bool,
}

impl Graph {
    /// Convenience constructor: nodes are given by id.
    pub fn new(ids: impl IntoIterator<Item = NodeId>, links: Vec<Edge>, directed: bool) -> Self {
        Self {
            nodes: ids.into_iter().map(|id| Node { id }).collect(),
            links,
            directed,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoints_accept_ids_and_objects() {
        let graph: Graph = serde_json::from_value(json!({
            "nodes": [{ "id": 0 }, { "id": 1 }, { "id": 2 }],
            "links": [
                { "source": 0, "target": 1 },
                { "source": { "id": 1, "x": 4.5 }, "target": { "id": 2 }, "weight": 3 }
            ],
            "directed": false
        }))
        .expect("valid graph json");

        assert_eq!(graph.links[0].source.id(), 0);
        assert_eq!(graph.links[0].weight, None);
        assert_eq!(graph.links[1].source.id(), 1);
        assert_eq!(graph.links[1].target.id(), 2);
        assert_eq!(graph.links[1].weight, Some(3.0));
    }

    #[test]
    fn directed_defaults_to_false() {
        let graph: Graph = serde_json::from_value(json!({ "nodes": [], "links": [] })).unwrap();
        assert!(!graph.directed);
    }

    #[test]
    fn contains_checks_declared_ids() {
        let graph = Graph::new([1, 2], vec![Edge::new(1, 2)], true);
        assert!(graph.contains(2));
        assert!(!graph.contains(3));
    }
}
