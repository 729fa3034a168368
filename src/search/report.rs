// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Running a configured Tower Bloxx search and collecting its results.

use super::BoundedSearch;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::game::TowerBloxx;
use crate::state::Statistics;
use std::fmt;

/// Outcome of a bounded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Grid renderings from the start to the first best state.
    pub best_path: Vec<String>,
    pub best_score: u64,
    /// Number of distinct best-scoring canonical states.
    pub best_count: usize,
    /// Grid renderings of every best-scoring state, in discovery order.
    pub best_states: Vec<String>,
    pub statistics: Statistics,
}

/// Search the empty board described by `config`.
pub fn run(config: &SearchConfig) -> Result<SearchReport> {
    let game = TowerBloxx::new(config.dimension)?;
    let mut search = BoundedSearch::new(&game, 0)?;
    search.run_bfs(config.budget())?;

    Ok(SearchReport {
        best_path: search.best_path()?,
        best_score: search.best_score(),
        best_count: search.best_count(),
        best_states: search.best_states()?,
        statistics: search.statistics().clone(),
    })
}

impl fmt::Display for SearchReport {
    /// Path grids, a separator, the tie count, then every best grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for grid in &self.best_path {
            writeln!(f, "{}", grid)?;
        }
        writeln!(f, "----")?;
        writeln!(f, "Number of states with equal score: {}", self.best_count)?;
        for grid in &self.best_states {
            writeln!(f, "{}", grid)?;
        }
        Ok(())
    }
}
