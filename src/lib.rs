// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph automorphisms and symmetry-reduced state-space search.
//!
//! The crate computes the automorphism group of a small graph, uses it to
//! reduce bit-packed per-vertex states to a canonical representative of
//! their symmetry orbit, and runs a bounded breadth-first search over the
//! game of Tower Bloxx while collapsing symmetric positions.
//!
//! # Architecture
//!
//! ```text
//! Graph ──> PartitionRefiner ──> AutomorphismSearch ──> Vec<Mapping>
//!                 Permutations ──┘                          │
//!                                                           v
//!                          StateEncoder + Canonicalizer (orbit minimum)
//!                                                           │
//!                                                           v
//!                              TowerBloxx (TransitionModel) ──> BoundedSearch
//! ```
//!
//! ## Automorphisms
//!
//! Vertices are first split into an equitable partition by colour
//! refinement. Every automorphism maps each class onto itself, so the
//! search only permutes vertices within classes, one class at a time,
//! discarding partial mappings as soon as they break an arc.
//!
//! ## Packed states
//!
//! A state holds one fixed-width field per vertex in a `u64`, vertex 0 in
//! the lowest bits, using at most 63 bits. A mapping relabels a state by
//! moving fields with shifts; the canonical form is the smallest image
//! over the whole group.
//!
//! # Example
//!
//! ```
//! use orbit_search::graph::Graph;
//! use orbit_search::symmetry::{AutomorphismSearch, Canonicalizer};
//!
//! let graph = Graph::grid(3).unwrap();
//! let group = AutomorphismSearch::new(&graph).unwrap().compute_automorphisms().unwrap();
//! assert_eq!(group.len(), 8);
//!
//! let canon = Canonicalizer::new(group, 2);
//! // a level-1 cell in the bottom-right corner is the same as top-left
//! assert_eq!(canon.reduce(1 << 16), 1);
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod graph;
pub mod search;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use config::SearchConfig;
pub use error::{Result, SymmetryError};
pub use game::{TowerBloxx, TransitionModel};
pub use graph::Graph;
pub use search::{BoundedSearch, SearchReport};
pub use symmetry::{AutomorphismSearch, Canonicalizer, Mapping};
