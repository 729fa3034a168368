// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Games played on packed, symmetry-reduced states.
//!
//! A [`TransitionModel`] is everything the bounded search needs to know
//! about a game: how to canonicalize a state, which canonical states follow
//! it in one move, how to score it and how to show it.

pub mod tower_bloxx;

pub use tower_bloxx::{TowerBloxx, LEVELS, LEVEL_SCORES, STATE_BITS};

use crate::error::Result;

/// Move generation and scoring over canonical packed states.
///
/// # Example
///
/// ```
/// use orbit_search::error::Result;
/// use orbit_search::game::TransitionModel;
///
/// /// Count up to 3; no symmetry.
/// struct Counter;
///
/// impl TransitionModel for Counter {
///     fn canonical(&self, state: u64) -> u64 {
///         state
///     }
///
///     fn successors(&self, state: u64) -> Result<Vec<u64>> {
///         Ok(if state < 3 { vec![state + 1] } else { vec![] })
///     }
///
///     fn score(&self, state: u64) -> Result<u64> {
///         Ok(state)
///     }
///
///     fn render(&self, state: u64) -> Result<String> {
///         Ok(state.to_string())
///     }
/// }
///
/// assert_eq!(Counter.successors(1).unwrap(), vec![2]);
/// ```
pub trait TransitionModel {
    /// Orbit representative of `state`.
    fn canonical(&self, state: u64) -> u64;

    /// Distinct canonical states reachable in one move, in ascending order.
    fn successors(&self, state: u64) -> Result<Vec<u64>>;

    /// Score of `state`; higher is better.
    fn score(&self, state: u64) -> Result<u64>;

    /// Human-readable rendering of `state`.
    fn render(&self, state: u64) -> Result<String>;
}
