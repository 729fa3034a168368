// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Packed per-vertex state and search bookkeeping.
//!
//! - `encoder`: fixed-width bit fields, one per vertex, in a `u64`
//! - `statistics`: counters kept while searching

pub mod encoder;
pub mod statistics;

pub use encoder::{StateEncoder, PACKED_BITS};
pub use statistics::{Counters, Statistics};
