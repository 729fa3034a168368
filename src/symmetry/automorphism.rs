// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Automorphism group computation.
//!
//! The search first computes the equitable partition of the graph, then
//! builds mappings class by class. For each class, every permutation of its
//! vertices extends every surviving partial mapping, and extensions that
//! break an arc between already-mapped vertices are dropped before the next
//! class is considered. The mappings that survive all classes are exactly
//! the automorphisms.
//!
//! The cost is bounded by the product of `|class|!` over the classes. When
//! refinement cannot split a large class (tori, complete graphs, disjoint
//! unions of equal cycles) every permutation of that class is tried, which
//! is exponential. This is a known limitation of the method.
//!
//! # Examples
//!
//! ```
//! use orbit_search::graph::Graph;
//! use orbit_search::symmetry::AutomorphismSearch;
//!
//! // The 4-cycle has the 8 symmetries of the square
//! let graph = Graph::grid(2).unwrap();
//! let group = AutomorphismSearch::new(&graph).unwrap().compute_automorphisms().unwrap();
//! assert_eq!(group.len(), 8);
//! assert!(group[0].is_valid());
//! ```

use super::mapping::Mapping;
use super::partition::{Partition, PartitionRefiner};
use super::permutation::{factorial, Permutations};
use crate::error::Result;
use crate::graph::Graph;
use log::{debug, info, warn};

/// Classes larger than this make the permutation enumeration expensive.
const LARGE_CLASS: usize = 8;

/// One pending piece of work: a partial mapping and the next class to extend.
#[derive(Debug)]
struct WorkItem {
    mapping: Mapping,
    next_class: usize,
}

/// Finds the automorphisms of a graph.
#[derive(Debug)]
pub struct AutomorphismSearch<'g> {
    graph: &'g Graph,
    partition: Partition,
    refinement_steps: usize,
}

impl<'g> AutomorphismSearch<'g> {
    /// Prepare a search by computing the equitable partition of `graph`.
    pub fn new(graph: &'g Graph) -> Result<Self> {
        let (partition, refinement_steps) = PartitionRefiner::new(graph)?.run()?;
        for class in partition.classes() {
            if class.len() > LARGE_CLASS {
                warn!(
                    "partition class of {} vertices: up to {} permutations per candidate",
                    class.len(),
                    factorial(class.len()).map_or_else(|| "overflow".to_string(), |f| f.to_string())
                );
            }
        }
        Ok(Self {
            graph,
            partition,
            refinement_steps,
        })
    }

    /// The equitable partition the search permutes within.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Number of refinement steps taken to reach the partition.
    pub fn refinement_steps(&self) -> usize {
        self.refinement_steps
    }

    /// Compute every automorphism of the graph.
    ///
    /// The result is sorted by target vector, so the identity comes first.
    /// Work items are processed from an explicit stack; its size is bounded
    /// by the number of live partial mappings, independent of how many
    /// classes the partition has.
    pub fn compute_automorphisms(&self) -> Result<Vec<Mapping>> {
        let classes = self.partition.classes();
        let mut group = Vec::new();
        let mut worklist = vec![WorkItem {
            mapping: Mapping::new(self.graph.size()),
            next_class: 0,
        }];
        let mut candidates: u64 = 0;
        let mut pruned: u64 = 0;

        while let Some(WorkItem {
            mapping,
            next_class,
        }) = worklist.pop()
        {
            let Some(class) = classes.get(next_class) else {
                group.push(mapping);
                continue;
            };

            for permutation in Permutations::new(class.len()) {
                candidates += 1;
                let extended = mapping.clone_and_permute(class, &permutation)?;
                if self.graph.check_mapping(&extended)? {
                    worklist.push(WorkItem {
                        mapping: extended,
                        next_class: next_class + 1,
                    });
                } else {
                    pruned += 1;
                }
            }
        }

        group.sort_unstable();
        debug!(
            "tried {} candidate extensions, pruned {}",
            candidates, pruned
        );
        info!(
            "found {} automorphisms on {} vertices ({} classes)",
            group.len(),
            self.graph.size(),
            classes.len()
        );
        Ok(group)
    }
}
