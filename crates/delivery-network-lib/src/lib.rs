//! Delivery network library entry points.
//!
//! This crate loads a delivery network (locations joined by routes that each
//! require a minimum vehicle power), partitions it into connected components,
//! and answers minimum-bottleneck-power path queries. Queries run against a
//! [`PathQueryEngine`] built once per immutable network snapshot; consumers
//! should only depend on the functions exported here.
//!

#![deny(warnings)]

pub mod ancestors;
pub mod bottleneck;
pub mod components;
mod dsu;
pub mod error;
pub mod network;
pub mod parse;
pub mod query;

pub use ancestors::{AncestorTable, PowerPath};
pub use bottleneck::{build_bottleneck_forest, BottleneckForest, BottleneckTree};
pub use components::{connected_components, connected_components_set, ComponentIndex};
pub use error::{Error, Result};
pub use network::{Distance, Edge, Neighbour, Network, NodeId, Power, DEFAULT_DISTANCE};
pub use parse::{load_network, parse_network, MAX_NODES};
pub use query::PathQueryEngine;
