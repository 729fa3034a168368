// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Equitable partitions by colour refinement.
//!
//! Vertices start out coloured by their `(in-degree, out-degree)` pair. Each
//! refinement step recolours a vertex by its current colour together with
//! the multiset of its neighbours' colours. Steps repeat until the partition
//! stops changing. Vertices in different classes of the result can never
//! be swapped by an automorphism, so the classes over-approximate the orbits.
//!
//! Every step produces a new [`Partition`] value; earlier snapshots are
//! never modified.

use crate::error::Result;
use crate::graph::Graph;
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

/// A split of the vertex set into disjoint non-empty classes.
///
/// Classes list their vertices in ascending order and are themselves
/// ordered by their smallest vertex, so two partitions with the same
/// classes compare equal regardless of how they were built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    classes: Vec<Vec<usize>>,
    /// Class index of each vertex.
    class_of: Vec<usize>,
}

impl Partition {
    /// Group vertices `0..n` by a key, keeping classes in order of first
    /// appearance.
    fn group_by<K, F>(n: usize, mut key: F) -> Result<Self>
    where
        K: Hash + Eq,
        F: FnMut(usize) -> Result<K>,
    {
        let mut index_of_key: HashMap<K, usize> = HashMap::new();
        let mut classes: Vec<Vec<usize>> = Vec::new();
        let mut class_of = Vec::with_capacity(n);

        for v in 0..n {
            let next = classes.len();
            let index = *index_of_key.entry(key(v)?).or_insert(next);
            if index == next {
                classes.push(Vec::new());
            }
            classes[index].push(v);
            class_of.push(index);
        }
        Ok(Self { classes, class_of })
    }

    /// The partition with every vertex in one class.
    pub fn unit(n: usize) -> Self {
        if n == 0 {
            return Self {
                classes: Vec::new(),
                class_of: Vec::new(),
            };
        }
        Self {
            classes: vec![(0..n).collect()],
            class_of: vec![0; n],
        }
    }

    pub fn classes(&self) -> &[Vec<usize>] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of vertices covered.
    pub fn vertex_count(&self) -> usize {
        self.class_of.len()
    }

    /// Index of the class containing `v`, if `v` is covered.
    pub fn class_of(&self, v: usize) -> Option<usize> {
        self.class_of.get(v).copied()
    }

    /// Whether every class holds a single vertex.
    pub fn is_discrete(&self) -> bool {
        self.classes.iter().all(|class| class.len() == 1)
    }

    /// Whether every class of `self` lies inside a class of `coarser`.
    pub fn refines(&self, coarser: &Partition) -> bool {
        self.vertex_count() == coarser.vertex_count()
            && self.classes.iter().all(|class| {
                let target = coarser.class_of[class[0]];
                class.iter().all(|&v| coarser.class_of[v] == target)
            })
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, class) in self.classes.iter().enumerate() {
            writeln!(f, "Class {} : {:?}", index + 1, class)?;
        }
        Ok(())
    }
}

/// Computes the equitable partition of a graph.
#[derive(Debug)]
pub struct PartitionRefiner<'g> {
    graph: &'g Graph,
    neighbours: Vec<Vec<usize>>,
}

impl<'g> PartitionRefiner<'g> {
    pub fn new(graph: &'g Graph) -> Result<Self> {
        let neighbours = (0..graph.size())
            .map(|v| graph.neighbours(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { graph, neighbours })
    }

    /// Colour vertices by `(in-degree, out-degree)`, folded into one key.
    pub fn initial(&self) -> Result<Partition> {
        let n = self.graph.size();
        Partition::group_by(n, |v| {
            Ok(self.graph.in_degree(v)? * (n + 1) + self.graph.out_degree(v)?)
        })
    }

    /// One refinement step.
    ///
    /// A vertex's signature maps each class index to the number of its
    /// out-neighbours in that class. Vertices stay together only if they
    /// share both their current class and their signature, so the result
    /// always refines `current`.
    pub fn refine(&self, current: &Partition) -> Result<Partition> {
        Partition::group_by(self.graph.size(), |v| {
            let mut signature: BTreeMap<usize, usize> = BTreeMap::new();
            for &w in &self.neighbours[v] {
                *signature.entry(current.class_of[w]).or_insert(0) += 1;
            }
            Ok((current.class_of[v], signature))
        })
    }

    /// Refine from the initial colouring until nothing changes.
    ///
    /// Returns the fixed point and the number of refinement steps taken.
    /// Each step that changes the partition adds at least one class, so
    /// there are at most `n` steps.
    pub fn run(&self) -> Result<(Partition, usize)> {
        let mut current = self.initial()?;
        debug!("initial partition has {} classes", current.len());

        let mut steps = 0;
        loop {
            let next = self.refine(&current)?;
            steps += 1;
            if next == current {
                debug!(
                    "partition stable after {} steps with {} classes",
                    steps,
                    next.len()
                );
                return Ok((next, steps));
            }
            debug!("refinement step {}: {} classes", steps, next.len());
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(partition: &Partition, n: usize) {
        let mut seen = vec![false; n];
        for class in partition.classes() {
            assert!(!class.is_empty());
            for &v in class {
                assert!(!seen[v], "vertex {} appears twice", v);
                seen[v] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_initial_groups_by_degree() {
        let graph = Graph::grid(3).unwrap();
        let refiner = PartitionRefiner::new(&graph).unwrap();
        let initial = refiner.initial().unwrap();

        assert_eq!(
            initial.classes(),
            &[vec![0, 2, 6, 8], vec![1, 3, 5, 7], vec![4]]
        );
        assert_covers(&initial, 9);
    }

    #[test]
    fn test_initial_separates_in_and_out_degree() {
        // 0 -> 1 -> 2: in/out degrees (0,1), (1,1), (1,0)
        let mut graph = Graph::new(3).unwrap();
        graph.add_arc(0, 1).unwrap();
        graph.add_arc(1, 2).unwrap();
        let refiner = PartitionRefiner::new(&graph).unwrap();

        assert!(refiner.initial().unwrap().is_discrete());
    }

    #[test]
    fn test_grid_is_already_equitable() {
        let graph = Graph::grid(3).unwrap();
        let refiner = PartitionRefiner::new(&graph).unwrap();
        let (partition, steps) = refiner.run().unwrap();

        assert_eq!(steps, 1);
        assert_eq!(partition, refiner.initial().unwrap());
    }

    #[test]
    fn test_path_refines_past_degrees() {
        // path 0 - 1 - 2 - 3 - 4: degrees split ends from the rest,
        // refinement then separates 1, 3 from the centre 2
        let mut graph = Graph::new(5).unwrap();
        for v in 0..4 {
            graph.add_edge(v, v + 1).unwrap();
        }
        let refiner = PartitionRefiner::new(&graph).unwrap();
        let initial = refiner.initial().unwrap();
        assert_eq!(initial.len(), 2);

        let (partition, steps) = refiner.run().unwrap();
        assert_eq!(partition.classes(), &[vec![0, 4], vec![1, 3], vec![2]]);
        assert_eq!(steps, 2);
        assert!(partition.refines(&initial));
        assert_covers(&partition, 5);
    }

    #[test]
    fn test_refine_never_merges() {
        // Two disjoint 3-cycles plus a 6-cycle: all vertices have degree 2,
        // so refinement cannot split them, but must not merge anything either
        let mut graph = Graph::new(12).unwrap();
        for (a, b) in [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)] {
            graph.add_edge(a, b).unwrap();
        }
        for v in 6..12 {
            graph.add_edge(v, if v == 11 { 6 } else { v + 1 }).unwrap();
        }
        let refiner = PartitionRefiner::new(&graph).unwrap();
        let (partition, _) = refiner.run().unwrap();

        assert_eq!(partition, Partition::unit(12));
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new(0).unwrap();
        let refiner = PartitionRefiner::new(&graph).unwrap();
        let (partition, steps) = refiner.run().unwrap();
        assert!(partition.is_empty());
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_display() {
        let graph = Graph::grid(2).unwrap();
        let refiner = PartitionRefiner::new(&graph).unwrap();
        let (partition, _) = refiner.run().unwrap();
        assert_eq!(format!("{}", partition), "Class 1 : [0, 1, 2, 3]\n");
    }
}
