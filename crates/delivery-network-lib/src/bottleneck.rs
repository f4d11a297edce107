//! Minimum-bottleneck spanning forest construction.
//!
//! Edges are admitted in increasing order of required power and merged with a
//! disjoint-set union (Kruskal). Once two nodes are joined, every tree edge
//! between them has power no greater than any edge that could have joined
//! them later, so each tree path is a minimax path of the original network.

use std::collections::HashMap;

use tracing::debug;

use crate::components::ComponentIndex;
use crate::dsu::DisjointSet;
use crate::network::{Edge, Network, NodeId, Power};

/// Spanning tree of one connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottleneckTree {
    /// Node the tree is rooted at (the component's representative).
    pub root: NodeId,
    /// Every node of the component, root first.
    pub nodes: Vec<NodeId>,
    /// Tree edges in admission order; always `nodes.len() - 1` of them.
    pub edges: Vec<Edge>,
}

impl BottleneckTree {
    /// Largest power requirement over all tree edges, `None` for a lone node.
    pub fn max_power(&self) -> Option<Power> {
        self.edges.iter().map(|edge| edge.power_min).max()
    }
}

/// One bottleneck tree per connected component, keyed by component root.
#[derive(Debug, Clone, Default)]
pub struct BottleneckForest {
    trees: HashMap<NodeId, BottleneckTree>,
}

impl BottleneckForest {
    /// Build the forest for `network`, reusing an existing component partition.
    pub fn from_components(network: &Network, components: &ComponentIndex) -> Self {
        let mut order: Vec<usize> = (0..network.edge_count()).collect();
        // Stable sort keeps insertion order among equal powers.
        order.sort_by_key(|&idx| network.edges()[idx].power_min);

        let mut sets = DisjointSet::new(network.node_count());
        let mut tree_edges: Vec<Vec<Edge>> = vec![Vec::new(); components.len()];
        let mut skipped = 0usize;

        for idx in order {
            let edge = network.edges()[idx];
            let (Some(a), Some(b)) = (network.index_of(edge.a), network.index_of(edge.b)) else {
                continue;
            };
            if sets.union(a, b) {
                tree_edges[components.label_at(a)].push(edge);
            } else {
                skipped += 1;
            }
        }

        let trees: HashMap<NodeId, BottleneckTree> = components
            .members()
            .iter()
            .zip(tree_edges)
            .filter_map(|(nodes, edges)| {
                let root = *nodes.first()?;
                Some((
                    root,
                    BottleneckTree {
                        root,
                        nodes: nodes.clone(),
                        edges,
                    },
                ))
            })
            .collect();

        debug!(
            trees = trees.len(),
            skipped_edges = skipped,
            "built bottleneck forest"
        );

        Self { trees }
    }

    /// Tree rooted at `root`.
    pub fn get(&self, root: NodeId) -> Option<&BottleneckTree> {
        self.trees.get(&root)
    }

    pub fn trees(&self) -> impl Iterator<Item = &BottleneckTree> {
        self.trees.values()
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Total number of tree edges across the forest.
    pub fn edge_count(&self) -> usize {
        self.trees.values().map(|tree| tree.edges.len()).sum()
    }
}

/// Build the minimum-bottleneck spanning forest of `network`.
pub fn build_bottleneck_forest(network: &Network) -> BottleneckForest {
    let components = ComponentIndex::build(network);
    BottleneckForest::from_components(network, &components)
}
