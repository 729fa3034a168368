// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for partition refinement and automorphism search.

mod common;

use common::{assert_is_automorphism, automorphisms, cycle_graph, path_graph};
use orbit_search::graph::Graph;
use orbit_search::symmetry::{AutomorphismSearch, Mapping, PartitionRefiner};
use std::collections::HashSet;

#[test]
fn test_partition_covers_vertices() {
    let graphs = [
        Graph::grid(1).unwrap(),
        Graph::grid(3).unwrap(),
        Graph::grid(4).unwrap(),
        cycle_graph(7),
        path_graph(6),
    ];
    for graph in &graphs {
        let (partition, _) = PartitionRefiner::new(graph).unwrap().run().unwrap();
        let mut seen = HashSet::new();
        for class in partition.classes() {
            assert!(!class.is_empty());
            for &v in class {
                assert!(seen.insert(v), "vertex {} in two classes", v);
                assert_eq!(partition.class_of(v).map(|c| &partition.classes()[c]), Some(class));
            }
        }
        assert_eq!(seen.len(), graph.size());
    }
}

#[test]
fn test_grid_4_partition() {
    let graph = Graph::grid(4).unwrap();
    let search = AutomorphismSearch::new(&graph).unwrap();
    assert_eq!(
        search.partition().classes(),
        &[
            vec![0, 3, 12, 15],
            vec![1, 2, 4, 7, 8, 11, 13, 14],
            vec![5, 6, 9, 10],
        ]
    );
}

#[test]
fn test_grid_groups() {
    assert_eq!(automorphisms(&Graph::grid(1).unwrap()), vec![Mapping::identity(1)]);

    for k in [2, 3] {
        let graph = Graph::grid(k).unwrap();
        let group = automorphisms(&graph);
        assert_eq!(group.len(), 8, "grid {}", k);
        assert_eq!(group[0], Mapping::identity(k * k));

        let distinct: HashSet<_> = group.iter().collect();
        assert_eq!(distinct.len(), 8);
        for mapping in &group {
            assert_is_automorphism(&graph, mapping);
        }
    }
}

#[test]
fn test_rectangle_has_four_symmetries() {
    // 2 x 3 grid: 0 1 2 / 3 4 5
    let mut graph = Graph::new(6).unwrap();
    for (a, b) in [(0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5)] {
        graph.add_edge(a, b).unwrap();
    }
    let group = automorphisms(&graph);
    assert_eq!(group.len(), 4);
    for mapping in &group {
        assert_is_automorphism(&graph, mapping);
    }
}

#[test]
fn test_complete_graph_is_symmetric_group() {
    let mut graph = Graph::new(4).unwrap();
    for a in 0..4 {
        for b in a + 1..4 {
            graph.add_edge(a, b).unwrap();
        }
    }
    assert_eq!(automorphisms(&graph).len(), 24);
}

#[test]
fn test_disjoint_edges() {
    // 0 - 1 and 2 - 3: swap within each edge and swap the edges
    let mut graph = Graph::new(4).unwrap();
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(2, 3).unwrap();

    let group = automorphisms(&graph);
    assert_eq!(group.len(), 8);
    for mapping in &group {
        assert_is_automorphism(&graph, mapping);
    }
}

#[test]
fn test_cycles_have_dihedral_groups() {
    for n in 3..=6 {
        let graph = cycle_graph(n);
        let group = automorphisms(&graph);
        assert_eq!(group.len(), 2 * n, "cycle {}", n);
        for mapping in &group {
            assert_is_automorphism(&graph, mapping);
        }
    }
}

#[test]
fn test_star_fixes_centre() {
    let mut graph = Graph::new(5).unwrap();
    for leaf in 1..5 {
        graph.add_edge(0, leaf).unwrap();
    }
    let group = automorphisms(&graph);
    assert_eq!(group.len(), 24);
    for mapping in &group {
        assert_eq!(mapping.lookup(0).unwrap(), Some(0));
    }
}

#[test]
fn test_identity_always_present() {
    let graphs = [
        Graph::new(3).unwrap(),
        path_graph(5),
        cycle_graph(5),
        Graph::grid(3).unwrap(),
    ];
    for graph in &graphs {
        let group = automorphisms(graph);
        assert!(group.contains(&Mapping::identity(graph.size())));
    }
}
