//! Minimum-power path queries.
//!
//! [`PathQueryEngine`] owns an immutable network snapshot together with its
//! derived structures: the component partition, one bottleneck tree per
//! component and one ancestor table per tree. Everything is built up front so
//! queries only read, which lets a single engine be shared across threads.
//!
//! # Example
//!
//! ```ignore
//! use delivery_network_lib::{load_network, PathQueryEngine};
//!
//! let network = load_network("network.01.in".as_ref())?;
//! let engine = PathQueryEngine::build(network);
//! let route = engine.path_with_power(1, 3, 25)?;
//! println!("power {} via {:?}", route.power, route.path);
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::ancestors::{AncestorTable, PowerPath};
use crate::bottleneck::BottleneckForest;
use crate::components::ComponentIndex;
use crate::error::{Error, Result};
use crate::network::{Network, NodeId, Power};

/// Query engine over one network snapshot.
#[derive(Debug, Clone)]
pub struct PathQueryEngine {
    network: Arc<Network>,
    components: ComponentIndex,
    tables: HashMap<NodeId, AncestorTable>,
}

impl PathQueryEngine {
    /// Build every derived structure for `network`.
    ///
    /// A network that changes afterwards needs a new engine.
    pub fn build(network: impl Into<Arc<Network>>) -> Self {
        let network = network.into();
        let components = ComponentIndex::build(&network);
        let forest = BottleneckForest::from_components(&network, &components);
        let tables: HashMap<NodeId, AncestorTable> = forest
            .trees()
            .map(|tree| (tree.root, AncestorTable::build(tree)))
            .collect();

        debug!(
            nodes = network.node_count(),
            edges = network.edge_count(),
            components = components.len(),
            tree_edges = forest.edge_count(),
            "built path query engine"
        );

        Self {
            network,
            components,
            tables,
        }
    }

    /// Network snapshot the engine answers for.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Connected components in discovery order.
    pub fn components(&self) -> &[Vec<NodeId>] {
        self.components.members()
    }

    /// Order-independent view of the components.
    pub fn components_set(&self) -> HashSet<BTreeSet<NodeId>> {
        self.components.as_set()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Minimum vehicle power that can travel from `src` to `dest`, and a path
    /// achieving it.
    pub fn minimum_power(&self, src: NodeId, dest: NodeId) -> Result<PowerPath> {
        let src_label = self.label(src)?;
        let dest_label = self.label(dest)?;
        if src_label != dest_label {
            trace!(src, dest, "endpoints lie in different components");
            return Err(Error::NoPath { src, dest });
        }

        let table = self
            .components
            .representative(src_label)
            .and_then(|root| self.tables.get(&root))
            .ok_or(Error::NoPath { src, dest })?;
        table.max_power_on_path(src, dest)
    }

    /// Path from `src` to `dest` usable by a vehicle with `power`.
    ///
    /// Fails with [`Error::InsufficientPower`] carrying the required power when
    /// the vehicle is too weak for every path.
    pub fn path_with_power(&self, src: NodeId, dest: NodeId, power: Power) -> Result<PowerPath> {
        let route = self.minimum_power(src, dest)?;
        if route.power > power {
            return Err(Error::InsufficientPower {
                src,
                dest,
                required: route.power,
                supplied: power,
            });
        }
        Ok(route)
    }

    /// Whether a vehicle with `power` can travel from `src` to `dest`.
    ///
    /// Unknown nodes and disconnected endpoints are still reported as errors.
    pub fn can_traverse(&self, src: NodeId, dest: NodeId, power: Power) -> Result<bool> {
        match self.path_with_power(src, dest, power) {
            Ok(_) => Ok(true),
            Err(Error::InsufficientPower { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn label(&self, node: NodeId) -> Result<usize> {
        self.components
            .label_of(&self.network, node)
            .ok_or(Error::UnknownNode { node })
    }
}
