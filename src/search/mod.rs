// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded breadth-first search over canonical states.
//!
//! The search keeps a FIFO frontier of discovered but unexpanded states and
//! a table of every discovered state. A state is recorded the first time it
//! is reached, together with its depth, score and the state it was reached
//! from; later arrivals are counted as duplicates and otherwise ignored.
//! Because the frontier is FIFO, this is the shallowest arrival.
//!
//! # Tie-break
//!
//! Successors are taken in ascending canonical value and the frontier in
//! discovery order, so discovery order is fully deterministic. The best
//! states are listed in discovery order, and the best path leads to the
//! first of them: the shallowest best-scoring state, and among those the
//! one discovered first.
//!
//! # Budget
//!
//! [`BoundedSearch::run_bfs`] expands at most `bound` states per call and
//! stops early when the frontier empties. A later call resumes where the
//! previous one stopped.

pub mod report;

pub use report::{run, SearchReport};

use crate::error::Result;
use crate::game::TransitionModel;
use crate::state::{Counters, Statistics};
use log::{debug, info};
use std::collections::{HashMap, VecDeque};

/// A discovered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// Canonical packed state.
    pub state: u64,
    /// Number of moves from the start.
    pub depth: usize,
    pub score: u64,
    /// State this one was first reached from; `None` for the start.
    pub parent: Option<u64>,
}

/// Breadth-first search over the canonical states of a model.
#[derive(Debug)]
pub struct BoundedSearch<'m, M: TransitionModel> {
    model: &'m M,
    start: u64,
    nodes: HashMap<u64, SearchNode>,
    frontier: VecDeque<u64>,
    best_score: u64,
    /// Best-scoring states in discovery order.
    best_states: Vec<u64>,
    statistics: Statistics,
}

impl<'m, M: TransitionModel> BoundedSearch<'m, M> {
    /// Prepare a search from the canonical form of `start`.
    ///
    /// The start state is discovered immediately and is the first best
    /// state candidate.
    pub fn new(model: &'m M, start: u64) -> Result<Self> {
        let start = model.canonical(start);
        let score = model.score(start)?;
        let mut nodes = HashMap::new();
        nodes.insert(
            start,
            SearchNode {
                state: start,
                depth: 0,
                score,
                parent: None,
            },
        );
        let mut statistics = Statistics::new();
        statistics.increment_counter(Counters::DiscoveredStates);

        Ok(Self {
            model,
            start,
            nodes,
            frontier: VecDeque::from([start]),
            best_score: score,
            best_states: vec![start],
            statistics,
        })
    }

    /// Expand up to `bound` frontier states.
    ///
    /// Returns the number of states expanded by this call.
    pub fn run_bfs(&mut self, bound: usize) -> Result<usize> {
        let mut expanded = 0;
        while expanded < bound {
            let Some(state) = self.frontier.pop_front() else {
                break;
            };
            self.expand(state)?;
            expanded += 1;
        }
        info!(
            "expanded {} states: {} discovered, {} on frontier, best score {} ({} states)",
            expanded,
            self.nodes.len(),
            self.frontier.len(),
            self.best_score,
            self.best_states.len()
        );
        Ok(expanded)
    }

    fn expand(&mut self, state: u64) -> Result<()> {
        let depth = self.nodes.get(&state).map_or(0, |node| node.depth);
        let successors = self.model.successors(state)?;
        self.statistics.increment_counter(Counters::ExpandedStates);
        self.statistics
            .add(Counters::GeneratedSuccessors, successors.len() as u64);

        for successor in successors {
            if self.nodes.contains_key(&successor) {
                self.statistics
                    .increment_counter(Counters::DuplicateSuccessors);
                continue;
            }
            let score = self.model.score(successor)?;
            self.nodes.insert(
                successor,
                SearchNode {
                    state: successor,
                    depth: depth + 1,
                    score,
                    parent: Some(state),
                },
            );
            self.statistics.increment_counter(Counters::DiscoveredStates);
            self.frontier.push_back(successor);
            self.record_score(successor, score);
        }
        Ok(())
    }

    fn record_score(&mut self, state: u64, score: u64) {
        if score > self.best_score {
            debug!("new best score {} at state {:#x}", score, state);
            self.best_score = score;
            self.best_states.clear();
            self.best_states.push(state);
        } else if score == self.best_score {
            self.best_states.push(state);
        }
    }

    /// Canonical start state.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Whether every reachable state has been expanded.
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of distinct canonical states discovered so far.
    pub fn visited_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, state: u64) -> Option<&SearchNode> {
        self.nodes.get(&state)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    /// Number of distinct best-scoring states.
    pub fn best_count(&self) -> usize {
        self.best_states.len()
    }

    /// Best-scoring states in discovery order.
    pub fn best_state_values(&self) -> &[u64] {
        &self.best_states
    }

    /// States from the start to the first best state, following parents.
    pub fn best_path_states(&self) -> Vec<u64> {
        let mut path = Vec::new();
        let mut current = self.best_states.first().copied();
        while let Some(state) = current {
            path.push(state);
            current = self.nodes.get(&state).and_then(|node| node.parent);
        }
        path.reverse();
        path
    }

    /// Renderings along [`Self::best_path_states`].
    pub fn best_path(&self) -> Result<Vec<String>> {
        self.best_path_states()
            .into_iter()
            .map(|state| self.model.render(state))
            .collect()
    }

    /// Renderings of all best-scoring states, in discovery order.
    pub fn best_states(&self) -> Result<Vec<String>> {
        self.best_states
            .iter()
            .map(|&state| self.model.render(state))
            .collect()
    }
}
