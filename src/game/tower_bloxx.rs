// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tower Bloxx city building on a square grid.
//!
//! Every cell holds a building of level 0 to 3. A building can be raised
//! to level `l` only while it has neighbours of every level below `l`:
//!
//! - level 0 becomes level 1 next to a level-0 neighbour
//! - below level 2 becomes level 2 next to level-0 and level-1 neighbours
//! - below level 3 becomes level 3 next to level-0, level-1 and level-2
//!   neighbours
//!
//! A building below level 3 with no level-0 neighbour cannot grow, so any
//! of its raised neighbours may be demolished back to level 0 instead.
//!
//! States use two bits per cell and are always kept in canonical form
//! under the symmetries of the grid.

use super::TransitionModel;
use crate::error::{Result, SymmetryError};
use crate::graph::Graph;
use crate::state::{StateEncoder, PACKED_BITS};
use crate::symmetry::{AutomorphismSearch, Canonicalizer};
use log::debug;
use std::collections::BTreeSet;

/// Number of building levels.
pub const LEVELS: usize = 4;

/// Bits needed per cell.
pub const STATE_BITS: u32 = 2;

/// Reward for a finished cell, by level.
pub const LEVEL_SCORES: [u64; LEVELS] = [205, 966, 2677, 5738];

/// A Tower Bloxx board of `dim x dim` cells.
#[derive(Debug, Clone)]
pub struct TowerBloxx {
    dim: usize,
    graph: Graph,
    encoder: StateEncoder,
    canonicalizer: Canonicalizer,
    /// Cached neighbour lists, one per cell.
    neighbours: Vec<Vec<usize>>,
}

impl TowerBloxx {
    /// Build the board, its symmetry group and its state encoding.
    ///
    /// # Errors
    ///
    /// Fails with [`SymmetryError::InvalidDimension`] for `k == 0` or when
    /// `k * k` overflows, and with [`SymmetryError::EncodingTooWide`] when
    /// `k * k` cells do not fit in a packed state (`k > 5`). The width is
    /// checked before the board graph is built.
    pub fn new(k: usize) -> Result<Self> {
        let cells = k
            .checked_mul(k)
            .filter(|&cells| cells > 0)
            .ok_or(SymmetryError::InvalidDimension(k))?;
        let fits = cells
            .checked_mul(STATE_BITS as usize)
            .is_some_and(|bits| bits <= PACKED_BITS as usize);
        if !fits {
            return Err(SymmetryError::EncodingTooWide {
                vertices: cells,
                bits: STATE_BITS,
                available: PACKED_BITS,
            });
        }
        let graph = Graph::grid(k)?;
        let encoder = StateEncoder::new(&graph, STATE_BITS)?;
        let group = AutomorphismSearch::new(&graph)?.compute_automorphisms()?;
        debug!("{}x{} board has {} symmetries", k, k, group.len());
        let canonicalizer = Canonicalizer::new(group, STATE_BITS);
        let neighbours = (0..graph.size())
            .map(|v| graph.neighbours(v))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            dim: k,
            graph,
            encoder,
            canonicalizer,
            neighbours,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn encoder(&self) -> &StateEncoder {
        &self.encoder
    }

    pub fn canonicalizer(&self) -> &Canonicalizer {
        &self.canonicalizer
    }

    /// Canonical form of `state` under the board symmetries.
    pub fn reduce(&self, state: u64) -> u64 {
        self.canonicalizer.reduce(state)
    }

    /// Number of neighbours of `v` at each level.
    pub fn histogram(&self, states: u64, v: usize) -> Result<[usize; LEVELS]> {
        let neighbours = self.neighbours.get(v).ok_or(SymmetryError::VertexOutOfRange {
            vertex: v,
            size: self.neighbours.len(),
        })?;
        let mut hist = [0; LEVELS];
        for &w in neighbours {
            hist[self.level(states, w)?] += 1;
        }
        Ok(hist)
    }

    /// Every canonical state one move away from `state`.
    pub fn expand(&self, state: u64) -> Result<BTreeSet<u64>> {
        let mut result = BTreeSet::new();
        for v in 0..self.graph.size() {
            let level = self.level(state, v)?;
            let hist = self.histogram(state, v)?;

            if level == 0 && hist[0] > 0 {
                result.insert(self.reduce(self.encoder.change_state(state, v, 1)?));
            }
            if level < 2 && hist[0] > 0 && hist[1] > 0 {
                result.insert(self.reduce(self.encoder.change_state(state, v, 2)?));
            }
            if level < 3 && hist[0] > 0 && hist[1] > 0 && hist[2] > 0 {
                result.insert(self.reduce(self.encoder.change_state(state, v, 3)?));
            }
            if level < 3 && hist[0] == 0 {
                for &w in &self.neighbours[v] {
                    if self.level(state, w)? > 0 {
                        result.insert(self.reduce(self.encoder.change_state(state, w, 0)?));
                    }
                }
            }
        }
        Ok(result)
    }

    /// Sum of the level rewards over all cells.
    pub fn compute_score(&self, states: u64) -> Result<u64> {
        (0..self.graph.size()).try_fold(0, |score: u64, v| -> Result<u64> {
            Ok(score + LEVEL_SCORES[self.level(states, v)?])
        })
    }

    /// The board as `dim` lines of `dim` digits.
    pub fn to_grid(&self, states: u64) -> Result<String> {
        self.encoder.to_grid(states, self.dim)
    }

    fn level(&self, states: u64, v: usize) -> Result<usize> {
        Ok(self.encoder.get_state(states, v)? as usize)
    }
}

impl TransitionModel for TowerBloxx {
    fn canonical(&self, state: u64) -> u64 {
        self.reduce(state)
    }

    fn successors(&self, state: u64) -> Result<Vec<u64>> {
        Ok(self.expand(state)?.into_iter().collect())
    }

    fn score(&self, state: u64) -> Result<u64> {
        self.compute_score(state)
    }

    fn render(&self, state: u64) -> Result<String> {
        self.to_grid(state)
    }
}
