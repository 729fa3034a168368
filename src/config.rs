// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

/// Parameters for one Tower Bloxx search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Side length `k` of the `k x k` board.
    pub dimension: usize,
    /// Maximum number of states to expand. Defaults to `3 * k * k`, the
    /// number of single-level upgrades needed to raise every cell to the
    /// top level.
    pub budget: Option<usize>,
}

impl SearchConfig {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            budget: None,
        }
    }

    /// The expansion budget, falling back to the default for the board size.
    /// The default saturates at `usize::MAX`.
    pub fn budget(&self) -> usize {
        self.budget.unwrap_or_else(|| {
            self.dimension
                .saturating_mul(self.dimension)
                .saturating_mul(3)
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(3)
    }
}
