// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy enumeration of permutations.
//!
//! [`Permutations`] yields every permutation of `0..k` in lexicographic
//! order, starting with the identity. It keeps an explicit backtracking
//! stack instead of recursing: each stack entry remembers the next index to
//! try at its position, and choosing or undoing an index only touches the
//! end of one growable prefix. Nothing proportional to `k!` is ever stored.
//!
//! # Examples
//!
//! ```
//! use orbit_search::symmetry::Permutations;
//!
//! let all: Vec<Vec<usize>> = Permutations::new(3).collect();
//! assert_eq!(all.len(), 6);
//! assert_eq!(all[0], vec![0, 1, 2]);
//! assert_eq!(all[1], vec![0, 2, 1]);
//! assert_eq!(all[5], vec![2, 1, 0]);
//! ```

/// Iterator over all permutations of `0..k`.
///
/// The iterator is finite. Cloning it, or calling [`Permutations::restart`],
/// gives an independent enumeration.
#[derive(Debug, Clone)]
pub struct Permutations {
    size: usize,
    /// Next candidate index to try at each position of the prefix.
    next_choice: Vec<usize>,
    /// Indices chosen so far.
    prefix: Vec<usize>,
    used: Vec<bool>,
    exhausted: bool,
}

impl Permutations {
    /// Enumerate the permutations of `0..k`.
    ///
    /// For `k == 0` a single empty permutation is produced.
    pub fn new(k: usize) -> Self {
        Self {
            size: k,
            next_choice: vec![0],
            prefix: Vec::with_capacity(k),
            used: vec![false; k],
            exhausted: false,
        }
    }

    /// Length of the permutations produced.
    pub fn size(&self) -> usize {
        self.size
    }

    /// A fresh enumeration of the same size.
    pub fn restart(&self) -> Self {
        Self::new(self.size)
    }

    /// Total number of permutations, `k!`, or `None` on overflow.
    pub fn total(&self) -> Option<u64> {
        factorial(self.size)
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.size == 0 {
            self.exhausted = true;
            return Some(Vec::new());
        }

        loop {
            let Some(depth) = self.next_choice.len().checked_sub(1) else {
                self.exhausted = true;
                return None;
            };

            // Undo the choice currently occupying this position
            if self.prefix.len() > depth {
                if let Some(previous) = self.prefix.pop() {
                    self.used[previous] = false;
                }
            }

            let mut candidate = self.next_choice[depth];
            while candidate < self.size && self.used[candidate] {
                candidate += 1;
            }
            if candidate >= self.size {
                // Position exhausted, backtrack
                self.next_choice.pop();
                continue;
            }

            self.next_choice[depth] = candidate + 1;
            self.used[candidate] = true;
            self.prefix.push(candidate);

            if self.prefix.len() == self.size {
                return Some(self.prefix.clone());
            }
            self.next_choice.push(0);
        }
    }
}

/// `k!`, or `None` if it does not fit in a `u64`.
pub fn factorial(k: usize) -> Option<u64> {
    (1..=k as u64).try_fold(1u64, |acc, i| acc.checked_mul(i))
}
