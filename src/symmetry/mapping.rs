// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex mappings.
//!
//! A [`Mapping`] sends each vertex label `0..n` to a target label, or leaves
//! it unmapped. Automorphism search starts from the empty mapping and extends
//! it one partition class at a time; each extension is a fresh copy, so a
//! mapping that has been accepted is never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use orbit_search::symmetry::Mapping;
//!
//! // labels [3, 5, 7] permuted by [1, 0, 2]: 3 <-> 5, 7 fixed
//! let mut mapping = Mapping::new(8);
//! mapping.apply_permutation(&[3, 5, 7], &[1, 0, 2]).unwrap();
//!
//! assert_eq!(mapping.lookup(3).unwrap(), Some(5));
//! assert_eq!(mapping.lookup(5).unwrap(), Some(3));
//! assert_eq!(mapping.lookup(7).unwrap(), Some(7));
//! assert_eq!(mapping.lookup(0).unwrap(), None);
//! ```

use crate::error::{Result, SymmetryError};
use crate::graph::Graph;
use std::fmt;

/// A partial or complete map from vertex labels to vertex labels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mapping {
    targets: Vec<Option<usize>>,
}

impl Mapping {
    /// Create a mapping on `n` vertices with nothing mapped.
    pub fn new(n: usize) -> Self {
        Self {
            targets: vec![None; n],
        }
    }

    /// The identity mapping on `n` vertices.
    pub fn identity(n: usize) -> Self {
        Self {
            targets: (0..n).map(Some).collect(),
        }
    }

    /// Build a mapping on `graph.size()` vertices from a single permutation
    /// of `labels`.
    pub fn construct(graph: &Graph, labels: &[usize], permutation: &[usize]) -> Result<Self> {
        let mut mapping = Self::new(graph.size());
        mapping.apply_permutation(labels, permutation)?;
        Ok(mapping)
    }

    /// Number of vertices the mapping is defined on.
    pub fn size(&self) -> usize {
        self.targets.len()
    }

    /// Image of `v`, or `None` if `v` is not mapped yet.
    pub fn lookup(&self, v: usize) -> Result<Option<usize>> {
        self.targets
            .get(v)
            .copied()
            .ok_or(SymmetryError::VertexOutOfRange {
                vertex: v,
                size: self.size(),
            })
    }

    /// Whether some vertex is still unmapped.
    pub fn is_incomplete(&self) -> bool {
        self.targets.iter().any(Option::is_none)
    }

    /// Whether the mapping is a bijection of `0..n` onto itself.
    pub fn is_valid(&self) -> bool {
        let mut hit = vec![false; self.size()];
        for target in &self.targets {
            match *target {
                Some(t) if t < hit.len() && !hit[t] => hit[t] = true,
                _ => return false,
            }
        }
        true
    }

    /// Map `labels[i]` onto `labels[permutation[i]]` for every `i`.
    ///
    /// For example labels `[3, 5, 7]` with permutation `[1, 0, 2]` sends 3
    /// to 5, 5 to 3 and 7 to itself. All arguments are validated before the
    /// mapping is touched, so on error it is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`SymmetryError::LengthMismatch`] if the two slices differ in length
    /// - [`SymmetryError::PermutationIndexOutOfRange`] if a permutation entry
    ///   is not below `labels.len()`
    /// - [`SymmetryError::VertexOutOfRange`] if a label is not below `size()`
    pub fn apply_permutation(&mut self, labels: &[usize], permutation: &[usize]) -> Result<()> {
        if labels.len() != permutation.len() {
            return Err(SymmetryError::LengthMismatch {
                labels: labels.len(),
                permutation: permutation.len(),
            });
        }
        if let Some(&index) = permutation.iter().find(|&&p| p >= labels.len()) {
            return Err(SymmetryError::PermutationIndexOutOfRange {
                index,
                len: labels.len(),
            });
        }
        if let Some(&vertex) = labels.iter().find(|&&l| l >= self.size()) {
            return Err(SymmetryError::VertexOutOfRange {
                vertex,
                size: self.size(),
            });
        }

        for (&from, &p) in labels.iter().zip(permutation) {
            self.targets[from] = Some(labels[p]);
        }
        Ok(())
    }

    /// Copy this mapping and apply a permutation to the copy.
    pub fn clone_and_permute(&self, labels: &[usize], permutation: &[usize]) -> Result<Self> {
        let mut extended = self.clone();
        extended.apply_permutation(labels, permutation)?;
        Ok(extended)
    }

    /// Relabel the fields of a packed state.
    ///
    /// The state holds one `field_width`-bit field per vertex, vertex 0 in
    /// the lowest bits. The field of every vertex `from` is moved to the
    /// slot of its image by shifting over `field_width * |from - to|` bits,
    /// and the moved fields are OR-ed together. Unmapped vertices contribute
    /// nothing.
    pub fn map_packed(&self, state: u64, field_width: u32) -> u64 {
        let width = field_width as usize;
        let base = if field_width >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << field_width) - 1
        };

        let mut result = 0;
        for (from, target) in self.targets.iter().enumerate() {
            let Some(to) = *target else { continue };
            let shift = from * width;
            if shift >= u64::BITS as usize {
                break;
            }
            let field = state & (base << shift);
            let moved = if from >= to {
                field.checked_shr((width * (from - to)) as u32)
            } else {
                field.checked_shl((width * (to - from)) as u32)
            };
            result |= moved.unwrap_or(0);
        }
        result
    }

    /// Images in label order, `None` for unmapped vertices.
    pub fn targets(&self) -> &[Option<usize>] {
        &self.targets
    }
}

impl fmt::Display for Mapping {
    /// One `from -> to` line per mapped vertex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mapping on {} vertices", self.size())?;
        for (from, target) in self.targets.iter().enumerate() {
            if let Some(to) = target {
                writeln!(f, "{} -> {}", from, to)?;
            }
        }
        Ok(())
    }
}
