#![allow(dead_code)]

use std::path::PathBuf;

use delivery_network_lib::{load_network, Network};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_network(name: &str) -> Network {
    let path = fixtures_dir().join(name);
    load_network(&path).unwrap_or_else(|err| panic!("load fixture {name}: {err}"))
}

/// Routes `(1,2,10)`, `(2,3,20)`, `(1,3,30)`.
pub fn triangle() -> Network {
    let mut network = Network::new();
    network.add_edge(1, 2, 10);
    network.add_edge(2, 3, 20);
    network.add_edge(1, 3, 30);
    network
}

/// Two disjoint triangles `{1,2,3}` and `{4,5,6}`.
pub fn two_triangles() -> Network {
    let mut network = Network::new();
    network.add_edge(1, 2, 1);
    network.add_edge(2, 3, 2);
    network.add_edge(3, 1, 3);
    network.add_edge(4, 5, 4);
    network.add_edge(5, 6, 5);
    network.add_edge(6, 4, 6);
    network
}
