//! Connected component discovery.
//!
//! Components are found with an iterative depth-first traversal so deeply
//! chained networks never grow the call stack.

use std::collections::{BTreeSet, HashSet};

use crate::network::{Network, NodeId};

/// Partition of a network's nodes into connected components.
///
/// Components are numbered in the order their first node appears in the
/// network; that first node is the component's representative.
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    labels: Vec<usize>,
    members: Vec<Vec<NodeId>>,
}

impl ComponentIndex {
    /// Partition `network` into connected components.
    pub fn build(network: &Network) -> Self {
        let node_count = network.node_count();
        let mut labels = vec![usize::MAX; node_count];
        let mut members = Vec::new();
        let mut stack = Vec::new();

        for start in 0..node_count {
            if labels[start] != usize::MAX {
                continue;
            }

            let label = members.len();
            let mut component = Vec::new();
            labels[start] = label;
            stack.push(start);

            while let Some(current) = stack.pop() {
                component.push(network.nodes()[current]);
                for neighbour in network.adjacency_at(current) {
                    let Some(next) = network.index_of(neighbour.target) else {
                        continue;
                    };
                    if labels[next] == usize::MAX {
                        labels[next] = label;
                        stack.push(next);
                    }
                }
            }

            members.push(component);
        }

        Self { labels, members }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Component label for the node at dense index `idx`.
    pub(crate) fn label_at(&self, idx: usize) -> usize {
        self.labels[idx]
    }

    /// Component label of `node`, if registered in `network`.
    pub fn label_of(&self, network: &Network, node: NodeId) -> Option<usize> {
        network.index_of(node).map(|idx| self.labels[idx])
    }

    /// Representative (first discovered node) of component `label`.
    pub fn representative(&self, label: usize) -> Option<NodeId> {
        self.members.get(label).and_then(|nodes| nodes.first().copied())
    }

    /// Nodes of each component, in discovery order.
    pub fn members(&self) -> &[Vec<NodeId>] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Vec<NodeId>> {
        self.members
    }

    /// Order-independent view of the partition.
    pub fn as_set(&self) -> HashSet<BTreeSet<NodeId>> {
        self.members
            .iter()
            .map(|nodes| nodes.iter().copied().collect())
            .collect()
    }
}

/// Return the connected components of `network`.
///
/// Every node appears in exactly one component. Components are ordered by the
/// registration order of their first node.
pub fn connected_components(network: &Network) -> Vec<Vec<NodeId>> {
    ComponentIndex::build(network).into_members()
}

/// Return the connected components as a set of node sets, for membership
/// checks that should not depend on discovery order.
pub fn connected_components_set(network: &Network) -> HashSet<BTreeSet<NodeId>> {
    ComponentIndex::build(network).as_set()
}
