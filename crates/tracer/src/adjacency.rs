//! Adjacency list construction.
//!
//! Insertion order is the only source of neighbour-iteration order in every
//! graph tracer, so it is preserved exactly: for each link in input order the
//! forward entry is appended, then (undirected graphs only) the mirrored one.

use std::collections::HashMap;

use tracing::trace;

use crate::{Graph, GraphConfig, NodeId};

/// One entry of a node's neighbour list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: f64,
}

/// Mapping from node id to its ordered neighbour list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyList {
    order: Vec<NodeId>,
    neighbors: HashMap<NodeId, Vec<Neighbor>>,
}

impl AdjacencyList {
    /// Build the adjacency list of `graph`.
    ///
    /// Every declared node gets an entry, even if isolated. Edges naming
    /// undeclared nodes are a caller precondition violation; they are
    /// tolerated by giving the stray id an entry after the declared ones.
    pub fn build(graph: &Graph, config: &GraphConfig) -> Self {
        let mut adjacency = Self::default();
        for node in &graph.nodes {
            adjacency.ensure(node.id);
        }

        for edge in &graph.links {
            let source = edge.source.id();
            let target = edge.target.id();
            let weight = edge.weight.unwrap_or(config.default_weight);

            adjacency.append(source, Neighbor { node: target, weight });
            if graph.directed {
                adjacency.ensure(target);
            } else {
                adjacency.append(target, Neighbor { node: source, weight });
            }
        }

        trace!(
            nodes = adjacency.order.len(),
            links = graph.links.len(),
            directed = graph.directed,
            "adjacency list built"
        );
        adjacency
    }

    /// Node ids in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.order
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.neighbors.contains_key(&node)
    }

    /// Neighbours of `node` in insertion order; empty for unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        self.neighbors.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn ensure(&mut self, node: NodeId) -> &mut Vec<Neighbor> {
        if !self.neighbors.contains_key(&node) {
            self.order.push(node);
        }
        self.neighbors.entry(node).or_default()
    }

    fn append(&mut self, node: NodeId, neighbor: Neighbor) {
        self.ensure(node).push(neighbor);
    }
}
