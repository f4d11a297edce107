//! Loading networks from their textual description.
//!
//! The format is a header line `n m` followed by `m` route lines of the form
//! `node1 node2 power_min [dist]`. Nodes are named `1..=n` and every value is
//! a non-negative integer; `dist` must be positive and defaults to
//! [`DEFAULT_DISTANCE`]. Headers declaring more than [`MAX_NODES`] nodes are
//! rejected before any node is allocated.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::network::{Distance, Network, NodeId, Power, DEFAULT_DISTANCE};

/// Largest node count a header may declare.
pub const MAX_NODES: NodeId = 1 << 24;

/// Load a network description from `path`.
pub fn load_network(path: &Path) -> Result<Network> {
    let file = fs::File::open(path)?;
    let network = parse_network(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        nodes = network.node_count(),
        edges = network.edge_count(),
        "loaded network"
    );
    Ok(network)
}

/// Parse a network description from any buffered reader.
pub fn parse_network<R: BufRead>(reader: R) -> Result<Network> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|text| (idx + 1, text)))
        .filter(|entry| !matches!(entry, Ok((_, text)) if text.trim().is_empty()));

    let (header_line, header) = lines.next().transpose()?.ok_or(Error::Parse {
        line: 1,
        message: "missing `n m` header".to_string(),
    })?;
    let fields = integers(header_line, &header)?;
    let &[node_count, edge_count] = fields.as_slice() else {
        return Err(Error::Parse {
            line: header_line,
            message: format!("expected `n m` header, found {} values", fields.len()),
        });
    };

    let node_count = to_node(header_line, node_count)?;
    if node_count > MAX_NODES {
        return Err(Error::Parse {
            line: header_line,
            message: format!("node count {node_count} exceeds the limit of {MAX_NODES}"),
        });
    }
    let mut network = Network::with_nodes(1..=node_count);
    let mut last_line = header_line;

    for parsed in 0..edge_count {
        let Some(entry) = lines.next() else {
            return Err(Error::Parse {
                line: last_line + 1,
                message: format!("expected {edge_count} routes, found {parsed}"),
            });
        };
        let (line, text) = entry?;
        last_line = line;

        let fields = integers(line, &text)?;
        let (a, b, power, distance): (u64, u64, Power, Distance) = match *fields.as_slice() {
            [a, b, power] => (a, b, power, DEFAULT_DISTANCE),
            [a, b, power, distance] => (a, b, power, distance),
            _ => {
                return Err(Error::Parse {
                    line,
                    message: format!(
                        "expected `node1 node2 power_min [dist]`, found {} values",
                        fields.len()
                    ),
                })
            }
        };

        if distance == 0 {
            return Err(Error::Parse {
                line,
                message: "route distance must be positive".to_string(),
            });
        }

        let a = endpoint(line, a, node_count)?;
        let b = endpoint(line, b, node_count)?;
        if a == b {
            warn!(line, node = a, "route is a self-loop and will never be used");
        }
        network.add_edge_with_distance(a, b, power, distance);
    }

    Ok(network)
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_network(s.as_bytes())
    }
}

fn integers(line: usize, text: &str) -> Result<Vec<u64>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<u64>().map_err(|err| Error::Parse {
                line,
                message: format!("invalid integer `{token}`: {err}"),
            })
        })
        .collect()
}

fn to_node(line: usize, value: u64) -> Result<NodeId> {
    NodeId::try_from(value).map_err(|_| Error::Parse {
        line,
        message: format!("node value {value} is out of range"),
    })
}

fn endpoint(line: usize, value: u64, node_count: NodeId) -> Result<NodeId> {
    let node = to_node(line, value)?;
    if !(1..=node_count).contains(&node) {
        return Err(Error::Parse {
            line,
            message: format!("node {node} is outside 1..={node_count}"),
        });
    }
    Ok(node)
}
