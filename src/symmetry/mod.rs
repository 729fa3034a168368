// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph symmetry: automorphism groups and canonical forms.
//!
//! ## Module Structure
//!
//! - `partition`: Equitable partition by colour refinement
//! - `permutation`: Lazy permutation enumeration
//! - `mapping`: Partial and complete vertex mappings, packed-state relabelling
//! - `automorphism`: Branch-and-bound automorphism search
//! - `canonical`: Orbit representatives of packed states

pub mod automorphism;
pub mod canonical;
pub mod mapping;
pub mod partition;
pub mod permutation;

pub use automorphism::AutomorphismSearch;
pub use canonical::{Canonicalizer, SymmetryType};
pub use mapping::Mapping;
pub use partition::{Partition, PartitionRefiner};
pub use permutation::{factorial, Permutations};
