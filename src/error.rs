// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Every error is a contract violation on caller input. Nothing is retried
//! or recovered internally; each variant propagates to the caller of the
//! operation that detected it.

use thiserror::Error;

/// Invalid-argument failures raised by graphs, mappings and encoders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymmetryError {
    /// A vertex label outside `0..size`.
    #[error("vertex {vertex} is out of range for {size} vertices")]
    VertexOutOfRange { vertex: usize, size: usize },

    /// A label list and a permutation of different lengths.
    #[error("label list has {labels} entries but permutation has {permutation}")]
    LengthMismatch { labels: usize, permutation: usize },

    /// A permutation entry that does not index into the label list.
    #[error("permutation index {index} is out of range for {len} labels")]
    PermutationIndexOutOfRange { index: usize, len: usize },

    /// A mapping applied to a graph with a different number of vertices.
    #[error("mapping is defined on {mapping} vertices but the graph has {graph}")]
    SizeMismatch { mapping: usize, graph: usize },

    /// A per-vertex value that does not fit in the field width.
    #[error("value {value} does not fit in {bits} bits")]
    StateValueTooWide { value: u64, bits: u32 },

    /// A packing that needs more than the usable width of a `u64`.
    #[error("cannot pack {vertices} vertices of {bits} bits into {available} bits")]
    EncodingTooWide {
        vertices: usize,
        bits: u32,
        available: u32,
    },

    /// A packing with zero bits per vertex.
    #[error("field width must be at least one bit")]
    ZeroFieldWidth,

    /// A graph whose adjacency matrix cannot be allocated.
    #[error("cannot allocate an adjacency matrix for {vertices} vertices")]
    GraphTooLarge { vertices: usize },

    /// A grid dimension that cannot describe a game board.
    #[error("grid dimension {0} is not supported")]
    InvalidDimension(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SymmetryError>;
