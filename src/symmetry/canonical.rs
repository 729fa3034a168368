// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical forms of packed states under a group of vertex mappings.
//!
//! The canonical form of a state is the smallest value, as an ordinary
//! integer, among all images of the state under the group. States related
//! by a symmetry of the graph therefore share one canonical form.

use super::mapping::Mapping;
use std::collections::BTreeSet;

/// Result of comparing a state with its images under the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// The state is its orbit's minimum and only the identity fixes it.
    Canonical,
    /// The state is its orbit's minimum and some other symmetry fixes it.
    Equivocal,
    /// Some symmetry maps the state to a smaller value.
    NonCanonical,
}

/// Reduces packed states to orbit representatives.
///
/// # Examples
///
/// ```
/// use orbit_search::graph::Graph;
/// use orbit_search::symmetry::{AutomorphismSearch, Canonicalizer};
///
/// let graph = Graph::grid(2).unwrap();
/// let group = AutomorphismSearch::new(&graph).unwrap().compute_automorphisms().unwrap();
/// let canon = Canonicalizer::new(group, 2);
///
/// // A single level-1 vertex anywhere on the square reduces to vertex 0
/// for v in 0..4 {
///     assert_eq!(canon.reduce(1 << (2 * v)), 1);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    group: Vec<Mapping>,
    field_width: u32,
}

impl Canonicalizer {
    /// Wrap a group of complete mappings acting on `field_width`-bit fields.
    pub fn new(group: Vec<Mapping>, field_width: u32) -> Self {
        Self { group, field_width }
    }

    pub fn group(&self) -> &[Mapping] {
        &self.group
    }

    pub fn field_width(&self) -> u32 {
        self.field_width
    }

    /// Smallest image of `state` under the group.
    ///
    /// The state itself is a candidate, so `reduce(state) <= state` holds
    /// even for an empty group.
    pub fn reduce(&self, state: u64) -> u64 {
        self.group
            .iter()
            .map(|mapping| mapping.map_packed(state, self.field_width))
            .fold(state, u64::min)
    }

    /// All distinct images of `state` under the group.
    pub fn orbit(&self, state: u64) -> BTreeSet<u64> {
        self.group
            .iter()
            .map(|mapping| mapping.map_packed(state, self.field_width))
            .collect()
    }

    /// Classify `state` against its images.
    pub fn check_canonicality(&self, state: u64) -> SymmetryType {
        let mut fixed_by = 0;
        for mapping in &self.group {
            let image = mapping.map_packed(state, self.field_width);
            if image < state {
                return SymmetryType::NonCanonical;
            }
            if image == state {
                fixed_by += 1;
            }
        }
        if fixed_by > 1 {
            SymmetryType::Equivocal
        } else {
            SymmetryType::Canonical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::symmetry::AutomorphismSearch;

    fn square() -> Canonicalizer {
        let graph = Graph::grid(2).unwrap();
        let group = AutomorphismSearch::new(&graph)
            .unwrap()
            .compute_automorphisms()
            .unwrap();
        Canonicalizer::new(group, 2)
    }

    #[test]
    fn test_trivial_group_is_identity() {
        let canon = Canonicalizer::new(vec![Mapping::identity(1)], 2);
        for state in 0..4 {
            assert_eq!(canon.reduce(state), state);
            assert_eq!(canon.orbit(state).len(), 1);
        }
    }

    #[test]
    fn test_reduce_is_idempotent_and_decreasing() {
        let canon = square();
        for state in 0..256u64 {
            let reduced = canon.reduce(state);
            assert!(reduced <= state);
            assert_eq!(canon.reduce(reduced), reduced);
        }
    }

    #[test]
    fn test_orbit_members_share_canonical_form() {
        let canon = square();
        for state in 0..256u64 {
            let orbit = canon.orbit(state);
            assert_eq!(8 % orbit.len(), 0);
            assert!(orbit.contains(&state));
            let reduced = canon.reduce(state);
            for &member in &orbit {
                assert_eq!(canon.reduce(member), reduced);
            }
        }
    }

    #[test]
    fn test_check_canonicality() {
        let canon = square();

        // all zero: fixed by every symmetry
        assert_eq!(canon.check_canonicality(0), SymmetryType::Equivocal);
        // vertex 0 raised: still fixed by the diagonal reflection through 0 and 3
        assert_eq!(canon.check_canonicality(1), SymmetryType::Equivocal);
        // vertex 3 raised: maps down to vertex 0 raised
        assert_eq!(canon.check_canonicality(1 << 6), SymmetryType::NonCanonical);
        // levels 1, 2 on vertices 0, 1 swap to the smaller 2, 1
        assert_eq!(canon.check_canonicality(1 | (2 << 2)), SymmetryType::NonCanonical);
        // levels 2, 1 on adjacent vertices 0 and 1: only identity fixes it
        let state = 2 | (1 << 2);
        assert_eq!(canon.reduce(state), state);
        assert_eq!(canon.check_canonicality(state), SymmetryType::Canonical);
    }
}
