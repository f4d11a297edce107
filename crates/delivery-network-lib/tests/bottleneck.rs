mod common;

use delivery_network_lib::{build_bottleneck_forest, Edge, Network};

use common::{fixture_network, triangle};

#[test]
fn triangle_tree_drops_the_strongest_edge() {
    let forest = build_bottleneck_forest(&triangle());

    assert_eq!(forest.len(), 1);
    let tree = forest.get(1).expect("tree rooted at first node");
    assert_eq!(tree.nodes.len(), 3);
    let powers: Vec<_> = tree.edges.iter().map(|edge| edge.power_min).collect();
    assert_eq!(powers, vec![10, 20]);
    assert_eq!(tree.max_power(), Some(20));
}

#[test]
fn one_spanning_tree_per_component() {
    let network = fixture_network("network.02.in");
    let forest = build_bottleneck_forest(&network);

    assert_eq!(forest.len(), 3);
    for tree in forest.trees() {
        assert_eq!(tree.edges.len(), tree.nodes.len() - 1);
        assert_eq!(tree.nodes[0], tree.root);
    }
    assert_eq!(forest.edge_count(), 10 - 3);

    let roots: Vec<_> = {
        let mut roots: Vec<_> = forest.trees().map(|tree| tree.root).collect();
        roots.sort_unstable();
        roots
    };
    assert_eq!(roots, vec![1, 6, 9]);
}

#[test]
fn cheapest_parallel_edge_is_kept_and_self_loops_skipped() {
    let mut network = Network::new();
    network.add_edge(1, 1, 0);
    network.add_edge(1, 2, 9);
    network.add_edge(2, 1, 4);

    let forest = build_bottleneck_forest(&network);
    let tree = forest.get(1).expect("tree");
    assert_eq!(
        tree.edges,
        vec![Edge {
            a: 2,
            b: 1,
            power_min: 4,
            distance: 1
        }]
    );
}

#[test]
fn ties_are_broken_by_insertion_order() {
    let mut network = Network::new();
    network.add_edge_with_distance(1, 2, 5, 10);
    network.add_edge_with_distance(1, 2, 5, 20);

    let forest = build_bottleneck_forest(&network);
    let tree = forest.get(1).expect("tree");
    assert_eq!(tree.edges.len(), 1);
    assert_eq!(tree.edges[0].distance, 10);
}

#[test]
fn isolated_node_gets_a_single_node_tree() {
    let network = Network::with_nodes([42]);
    let forest = build_bottleneck_forest(&network);

    let tree = forest.get(42).expect("singleton tree");
    assert_eq!(tree.nodes, vec![42]);
    assert!(tree.edges.is_empty());
    assert_eq!(tree.max_power(), None);
}

#[test]
fn building_twice_gives_identical_forests() {
    let network = fixture_network("network.02.in");
    let first = build_bottleneck_forest(&network);
    let second = build_bottleneck_forest(&network);

    for tree in first.trees() {
        assert_eq!(Some(tree), second.get(tree.root));
    }
}
