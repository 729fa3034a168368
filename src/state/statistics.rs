// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the bounded search, indexed by [`Counters`].

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// States taken off the frontier and expanded.
    ExpandedStates,
    /// Canonical successors produced by expansions.
    GeneratedSuccessors,
    /// Successors that had already been discovered.
    DuplicateSuccessors,
    /// Distinct canonical states discovered, including the start.
    DiscoveredStates,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
