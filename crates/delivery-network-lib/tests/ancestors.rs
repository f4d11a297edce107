mod common;

use delivery_network_lib::{build_bottleneck_forest, AncestorTable, Error, Network};

use common::fixture_network;

fn table_for(network: &Network, root: i64) -> AncestorTable {
    let forest = build_bottleneck_forest(network);
    AncestorTable::build(forest.get(root).expect("tree for root"))
}

#[test]
fn depths_and_levels_follow_the_rooted_tree() {
    let network = fixture_network("network.02.in");
    let table = table_for(&network, 1);

    assert_eq!(table.root(), 1);
    assert_eq!(table.depth(1), Some(0));
    assert_eq!(table.depth(2), Some(1));
    assert_eq!(table.depth(5), Some(1));
    assert_eq!(table.depth(3), Some(2));
    assert_eq!(table.depth(4), Some(2));
    assert_eq!(table.depth(6), None);
    assert_eq!(table.levels(), 2);
}

#[test]
fn path_through_the_root_joins_both_branches() {
    let network = fixture_network("network.02.in");
    let table = table_for(&network, 1);

    let route = table.max_power_on_path(3, 4).expect("same tree");
    assert_eq!(route.power, 11);
    assert_eq!(route.path, vec![3, 2, 1, 5, 4]);
    assert_eq!(route.distance, 2 + 5 + 1 + 3);
    assert_eq!(route.hop_count(), 4);
}

#[test]
fn ancestor_and_descendant_paths() {
    let network = fixture_network("network.02.in");
    let table = table_for(&network, 1);

    let down = table.max_power_on_path(1, 4).expect("same tree");
    assert_eq!(down.power, 7);
    assert_eq!(down.path, vec![1, 5, 4]);

    let up = table.max_power_on_path(4, 1).expect("same tree");
    assert_eq!(up.power, 7);
    assert_eq!(up.path, vec![4, 5, 1]);
}

#[test]
fn same_node_needs_no_power() {
    let network = fixture_network("network.02.in");
    let table = table_for(&network, 1);

    let route = table.max_power_on_path(3, 3).expect("same node");
    assert_eq!(route.power, 0);
    assert_eq!(route.path, vec![3]);
    assert_eq!(route.distance, 0);
}

#[test]
fn nodes_outside_the_tree_have_no_path() {
    let network = fixture_network("network.02.in");
    let table = table_for(&network, 1);

    let err = table.max_power_on_path(1, 7).expect_err("different tree");
    assert!(matches!(err, Error::NoPath { src: 1, dest: 7 }));
}

#[test]
fn deep_chain_uses_logarithmic_levels() {
    let mut network = Network::new();
    for node in 1..9 {
        network.add_edge(node, node + 1, node as u64);
    }
    let table = table_for(&network, 1);

    assert_eq!(table.depth(9), Some(8));
    assert_eq!(table.levels(), 4);

    let route = table.max_power_on_path(9, 1).expect("chain");
    assert_eq!(route.power, 8);
    assert_eq!(route.path, (1..=9).rev().collect::<Vec<_>>());

    let inner = table.max_power_on_path(3, 6).expect("chain");
    assert_eq!(inner.power, 5);
    assert_eq!(inner.path, vec![3, 4, 5, 6]);
}
