//! Integration tests for the graph store and its island partition.

use std::collections::{HashMap, HashSet, VecDeque};

use graphwalk::prelude::*;

/// The reference graph: a->f(9), f->b(2), a->b(1), c->d(7), g->d(5), isolated e.
fn reference() -> (Graph<&'static str>, HashMap<&'static str, NodeId>) {
    let mut graph = Graph::directed();
    let ids: HashMap<&str, NodeId> = ["a", "b", "c", "d", "e", "f", "g"]
        .into_iter()
        .map(|label| (label, graph.add_node(label)))
        .collect();
    for (s, t, w) in [
        ("a", "f", 9.0),
        ("f", "b", 2.0),
        ("a", "b", 1.0),
        ("c", "d", 7.0),
        ("g", "d", 5.0),
    ] {
        graph.add_edge(ids[s], ids[t], w).unwrap();
    }
    (graph, ids)
}

/// Deterministic pseudo-random graph.
fn scrambled(directed: bool, nodes: usize, edges: usize, seed: u64) -> Graph<usize> {
    let mut graph = Graph::new(directed);
    for i in 0..nodes {
        graph.add_node(i);
    }
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as usize
    };
    for _ in 0..edges {
        let s = NodeId::new(next() % nodes);
        let t = NodeId::new(next() % nodes);
        let w = (next() % 100) as f64;
        let _ = graph.add_edge(s, t, w);
    }
    graph
}

/// Undirected reachability by breadth-first search, used as an oracle.
fn connected<P>(graph: &Graph<P>, from: NodeId, to: NodeId) -> bool {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(node) = queue.pop_front() {
        if node == to {
            return true;
        }
        for edge in graph.incident_edges(node) {
            if let Some(other) = edge.opposite(node) {
                if seen.insert(other) {
                    queue.push_back(other);
                }
            }
        }
    }
    false
}

fn island_labels(graph: &Graph<&'static str>, index: usize) -> Vec<&'static str> {
    graph
        .island_nodes(index)
        .unwrap()
        .into_iter()
        .map(|node| *node.payload())
        .collect()
}

#[test]
fn test_reference_islands() {
    let (graph, _) = reference();

    assert_eq!(graph.node_count(), 7);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.island_count(), 3);
    assert_eq!(island_labels(&graph, 0), vec!["a", "b", "f"]);
    assert_eq!(island_labels(&graph, 1), vec!["c", "d", "g"]);
    assert_eq!(island_labels(&graph, 2), vec!["e"]);
}

#[test]
fn test_reference_remove_shortcut_keeps_islands() {
    let (mut graph, ids) = reference();
    let shortcut = *graph.edge(ids["a"], ids["b"]).unwrap();

    assert_eq!(graph.remove_edge(&shortcut), Some(shortcut));
    assert_eq!(graph.island_count(), 3);
    assert_eq!(island_labels(&graph, 0), vec!["a", "b", "f"]);
    assert!(!graph.is_edge(ids["a"], ids["b"]));
}

#[test]
fn test_every_node_in_exactly_one_island() {
    for seed in 0..20 {
        let graph = scrambled(seed % 2 == 0, 40, 30, seed);
        let islands = graph.islands();

        let mut seen = HashSet::new();
        for island in islands {
            for &node in island.nodes() {
                assert!(seen.insert(node), "node {node} appears twice");
            }
        }
        assert_eq!(seen.len(), graph.node_count());

        let total_edges: usize = islands.iter().map(|i| i.edges().len()).sum();
        assert_eq!(total_edges, graph.edge_count());
    }
}

#[test]
fn test_islands_match_reachability() {
    let graph = scrambled(true, 25, 18, 7);
    let islands = graph.islands();
    let ids: Vec<NodeId> = graph.node_ids().collect();

    for &a in &ids {
        for &b in &ids {
            assert_eq!(
                islands.same_island(a, b),
                connected(&graph, a, b),
                "{a} / {b}"
            );
        }
    }
}

#[test]
fn test_islands_ordered_by_lowest_node() {
    let graph = scrambled(false, 30, 12, 3);
    let roots: Vec<NodeId> = graph.islands().iter().filter_map(Island::root).collect();

    let mut sorted = roots.clone();
    sorted.sort();
    assert_eq!(roots, sorted);
}

#[test]
fn test_add_remove_edge_round_trip() {
    let (mut graph, ids) = reference();
    let before: Vec<Edge> = graph.edges().copied().collect();
    let islands_before = graph.island_count();

    let id = graph.add_edge(ids["e"], ids["g"], 4.0).unwrap();
    assert_eq!(graph.island_count(), 2);

    let edge = *graph.edge_by_id(id).unwrap();
    graph.remove_edge(&edge).unwrap();

    assert_eq!(graph.edges().copied().collect::<Vec<_>>(), before);
    assert_eq!(graph.island_count(), islands_before);
    assert_eq!(graph.incident_edges(ids["e"]).count(), 0);
}

#[test]
fn test_rejected_mutations_leave_graph_untouched() {
    let (mut graph, ids) = reference();
    let snapshot = graph.clone();

    assert!(graph.add_edge(ids["a"], ids["f"], 1.0).is_err());
    assert!(graph.add_edge(ids["a"], NodeId::new(100), 1.0).is_err());
    assert!(graph.add_edge(ids["a"], ids["e"], f64::NAN).is_err());
    assert!(graph.add_node_with_id(ids["c"], "again").is_err());
    assert!(graph.remove_node(NodeId::new(100)).is_err());
    assert!(graph.remove_edge_between(ids["a"], NodeId::new(100)).is_err());

    assert_eq!(
        graph.edges().copied().collect::<Vec<_>>(),
        snapshot.edges().copied().collect::<Vec<_>>()
    );
    assert_eq!(
        graph.nodes().collect::<Vec<_>>(),
        snapshot.nodes().collect::<Vec<_>>()
    );
}

#[test]
fn test_remove_node_leaves_no_dangling_edges() {
    let mut graph = scrambled(false, 20, 40, 11);
    for raw in [3, 7, 11, 19] {
        graph.remove_node(NodeId::new(raw)).unwrap();
    }

    for edge in graph.edges() {
        assert!(graph.contains_node(edge.source()));
        assert!(graph.contains_node(edge.target()));
    }
    for node in graph.node_ids() {
        for edge in graph.incident_edges(node) {
            assert!(edge.touches(node));
        }
    }
}

#[test]
fn test_switch_directedness() {
    let (mut graph, ids) = reference();
    assert!(!graph.is_edge(ids["f"], ids["a"]));

    graph.set_directed(false).unwrap();
    assert!(graph.is_edge(ids["f"], ids["a"]));
    assert!(graph.add_edge(ids["b"], ids["a"], 1.0).is_err());

    graph.set_directed(true).unwrap();
    graph.add_edge(ids["b"], ids["a"], 1.0).unwrap();
    assert!(matches!(
        graph.set_directed(false),
        Err(Error::DuplicateEdge { .. })
    ));
    assert!(graph.is_directed());
}

#[test]
fn test_labels() {
    let (graph, ids) = reference();
    let node = graph.node(ids["f"]).unwrap();
    assert_eq!(node.label(), "f");
    assert_eq!(node.to_string(), "f");
}
