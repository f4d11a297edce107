//! Binary-lifting ancestor tables over bottleneck trees.
//!
//! Each table stores, for every node and every power-of-two distance `2^k`,
//! the ancestor reached by that jump and the largest edge power crossed on
//! the way. Path maxima between two nodes then take `O(log n)` jumps.

use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::bottleneck::BottleneckTree;
use crate::error::{Error, Result};
use crate::network::{Distance, NodeId, Power};

/// Result of a bottleneck path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerPath {
    /// Largest power requirement along `path`; the minimum vehicle power
    /// that can make the trip.
    pub power: Power,
    /// Nodes from source to destination, both included.
    pub path: Vec<NodeId>,
    /// Sum of the route distances along `path`, saturating at `Distance::MAX`.
    pub distance: Distance,
}

impl PowerPath {
    /// Number of routes travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Ancestor jump table for one bottleneck tree.
#[derive(Debug, Clone)]
pub struct AncestorTable {
    root: NodeId,
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    depth: Vec<usize>,
    parent_distance: Vec<Distance>,
    /// `up[k][v]` is the ancestor `2^k` steps above `v` (the root maps to itself).
    up: Vec<Vec<usize>>,
    /// `up_power[k][v]` is the largest edge power on the jump `up[k][v]`.
    up_power: Vec<Vec<Power>>,
}

impl AncestorTable {
    /// Root `tree` at its root node and build the jump tables.
    pub fn build(tree: &BottleneckTree) -> Self {
        let nodes = tree.nodes.clone();
        let index: HashMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect();
        let n = nodes.len();

        let mut adjacency: Vec<Vec<(usize, Power, Distance)>> = vec![Vec::new(); n];
        for edge in &tree.edges {
            let (Some(&a), Some(&b)) = (index.get(&edge.a), index.get(&edge.b)) else {
                continue;
            };
            adjacency[a].push((b, edge.power_min, edge.distance));
            adjacency[b].push((a, edge.power_min, edge.distance));
        }

        let mut parent: Vec<usize> = (0..n).collect();
        let mut parent_power = vec![0; n];
        let mut parent_distance = vec![0; n];
        let mut depth = vec![0; n];
        let mut visited = vec![false; n];

        if let Some(&root_idx) = index.get(&tree.root) {
            let mut stack = vec![root_idx];
            visited[root_idx] = true;
            while let Some(current) = stack.pop() {
                for &(next, power, distance) in &adjacency[current] {
                    if visited[next] {
                        continue;
                    }
                    visited[next] = true;
                    parent[next] = current;
                    parent_power[next] = power;
                    parent_distance[next] = distance;
                    depth[next] = depth[current] + 1;
                    stack.push(next);
                }
            }
        }

        let max_depth = depth.iter().copied().max().unwrap_or(0);
        let mut levels = 1;
        while (1usize << levels) <= max_depth {
            levels += 1;
        }

        let mut up = Vec::with_capacity(levels);
        let mut up_power = Vec::with_capacity(levels);
        up.push(parent);
        up_power.push(parent_power);
        for k in 1..levels {
            let prev = &up[k - 1];
            let prev_power = &up_power[k - 1];
            let mut level = Vec::with_capacity(n);
            let mut level_power = Vec::with_capacity(n);
            for v in 0..n {
                let mid = prev[v];
                level.push(prev[mid]);
                level_power.push(prev_power[v].max(prev_power[mid]));
            }
            up.push(level);
            up_power.push(level_power);
        }

        Self {
            root: tree.root,
            nodes,
            index,
            depth,
            parent_distance,
            up,
            up_power,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Depth of `node` below the root.
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).map(|&idx| self.depth[idx])
    }

    /// Number of jump levels stored.
    pub fn levels(&self) -> usize {
        self.up.len()
    }

    /// Find the tree path between `src` and `dest` and the largest power
    /// requirement along it.
    ///
    /// Fails with [`Error::NoPath`] when either node is outside this tree.
    pub fn max_power_on_path(&self, src: NodeId, dest: NodeId) -> Result<PowerPath> {
        let (Some(&s), Some(&d)) = (self.index.get(&src), self.index.get(&dest)) else {
            return Err(Error::NoPath { src, dest });
        };

        let (lca, power) = self.lowest_common_ancestor(s, d);

        let (mut path, up_distance) = self.walk_up(s, lca);
        let (mut tail, down_distance) = self.walk_up(d, lca);
        tail.pop();
        tail.reverse();
        path.extend(tail);

        trace!(src, dest, power, hops = path.len() - 1, "resolved tree path");

        Ok(PowerPath {
            power,
            path,
            distance: up_distance.saturating_add(down_distance),
        })
    }

    /// Lowest common ancestor of `a` and `b` with the max edge power on the
    /// paths from both up to it.
    fn lowest_common_ancestor(&self, mut a: usize, mut b: usize) -> (usize, Power) {
        let mut best: Power = 0;
        if self.depth[a] < self.depth[b] {
            std::mem::swap(&mut a, &mut b);
        }

        let mut diff = self.depth[a] - self.depth[b];
        let mut k = 0;
        while diff > 0 {
            if diff & 1 == 1 {
                best = best.max(self.up_power[k][a]);
                a = self.up[k][a];
            }
            diff >>= 1;
            k += 1;
        }

        if a == b {
            return (a, best);
        }

        for k in (0..self.up.len()).rev() {
            if self.up[k][a] != self.up[k][b] {
                best = best.max(self.up_power[k][a]).max(self.up_power[k][b]);
                a = self.up[k][a];
                b = self.up[k][b];
            }
        }

        best = best.max(self.up_power[0][a]).max(self.up_power[0][b]);
        (self.up[0][a], best)
    }

    /// Nodes from `from` up to and including `ancestor`, with the distance
    /// covered.
    fn walk_up(&self, from: usize, ancestor: usize) -> (Vec<NodeId>, Distance) {
        let mut nodes = vec![self.nodes[from]];
        let mut distance: Distance = 0;
        let mut current = from;
        while current != ancestor {
            distance = distance.saturating_add(self.parent_distance[current]);
            current = self.up[0][current];
            nodes.push(self.nodes[current]);
        }
        (nodes, distance)
    }
}
