// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use orbit_search::graph::Graph;
use orbit_search::symmetry::{AutomorphismSearch, Mapping};

/// Compute the automorphism group, panicking on error.
pub fn automorphisms(graph: &Graph) -> Vec<Mapping> {
    AutomorphismSearch::new(graph)
        .expect("partition refinement")
        .compute_automorphisms()
        .expect("automorphism search")
}

/// The undirected cycle 0 - 1 - ... - (n-1) - 0.
pub fn cycle_graph(n: usize) -> Graph {
    let mut graph = Graph::new(n).expect("graph size");
    for v in 0..n {
        graph.add_edge(v, (v + 1) % n).unwrap();
    }
    graph
}

/// The undirected path 0 - 1 - ... - (n-1).
pub fn path_graph(n: usize) -> Graph {
    let mut graph = Graph::new(n).expect("graph size");
    for v in 1..n {
        graph.add_edge(v - 1, v).unwrap();
    }
    graph
}

/// Assert that `mapping` is a bijection sending every arc to an adjacent pair.
pub fn assert_is_automorphism(graph: &Graph, mapping: &Mapping) {
    assert!(mapping.is_valid(), "not a bijection:\n{}", mapping);
    for arc in graph.arcs() {
        let i = mapping.lookup(arc.from).unwrap().unwrap();
        let j = mapping.lookup(arc.to).unwrap().unwrap();
        assert!(
            graph.is_adjacent(i, j).unwrap(),
            "arc {} -> {} maps to non-adjacent {} and {}",
            arc.from,
            arc.to,
            i,
            j
        );
    }
}
