use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Identifier for a location in the network.
pub type NodeId = i64;

/// Minimum vehicle power required to traverse a route.
pub type Power = u64;

/// Length of a route.
pub type Distance = u64;

/// Distance assigned to routes that do not specify one.
pub const DEFAULT_DISTANCE: Distance = 1;

/// Undirected route between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub power_min: Power,
    pub distance: Distance,
}

impl Edge {
    /// Whether both endpoints are the same location.
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// Endpoint opposite `node`, or `None` when `node` is not an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Adjacency record seen from one endpoint of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbour {
    pub target: NodeId,
    pub power_min: Power,
    pub distance: Distance,
}

/// Adjacency-list representation of the delivery network.
///
/// Nodes keep their registration order, which makes component discovery and
/// tree rooting reproducible. Parallel edges and self-loops are stored as
/// given.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<Neighbour>>,
    edges: Vec<Edge>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network with the given nodes registered and no edges.
    pub fn with_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut network = Self::new();
        for node in nodes {
            network.add_node(node);
        }
        network
    }

    /// Register `node` if it is not already part of the network and return
    /// its dense index.
    pub fn add_node(&mut self, node: NodeId) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.index.insert(node, idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add a route with the default distance.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, power_min: Power) {
        self.add_edge_with_distance(a, b, power_min, DEFAULT_DISTANCE);
    }

    /// Add a route between `a` and `b`, registering either endpoint if new.
    pub fn add_edge_with_distance(
        &mut self,
        a: NodeId,
        b: NodeId,
        power_min: Power,
        distance: Distance,
    ) {
        let a_idx = self.add_node(a);
        let b_idx = self.add_node(b);

        self.adjacency[a_idx].push(Neighbour {
            target: b,
            power_min,
            distance,
        });
        self.adjacency[b_idx].push(Neighbour {
            target: a,
            power_min,
            distance,
        });
        self.edges.push(Edge {
            a,
            b,
            power_min,
            distance,
        });
    }

    /// Registered nodes in registration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Every edge in insertion order, including parallel edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Return the adjacency records for `node`.
    pub fn neighbours(&self, node: NodeId) -> Result<&[Neighbour]> {
        self.index
            .get(&node)
            .map(|&idx| self.adjacency[idx].as_slice())
            .ok_or(Error::UnknownNode { node })
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn index_of(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    pub(crate) fn adjacency_at(&self, idx: usize) -> &[Neighbour] {
        &self.adjacency[idx]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("The network is empty");
        }
        writeln!(
            f,
            "The network has {} nodes and {} edges.",
            self.node_count(),
            self.edge_count()
        )?;
        for (node, neighbours) in self.nodes.iter().zip(&self.adjacency) {
            let rendered = neighbours
                .iter()
                .map(|n| format!("({}, {}, {})", n.target, n.power_min, n.distance))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{node}-->[{rendered}]")?;
        }
        Ok(())
    }
}
