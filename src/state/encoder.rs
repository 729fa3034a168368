// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Packing per-vertex values into a single `u64`.
//!
//! Vertex `v` owns bits `v * state_size .. (v + 1) * state_size`, vertex 0
//! in the least significant bits. At most 63 bits are used, so packed
//! states remain valid non-negative values when exchanged with signed
//! 64-bit code.
//!
//! # Examples
//!
//! ```
//! use orbit_search::graph::Graph;
//! use orbit_search::state::StateEncoder;
//!
//! let graph = Graph::grid(2).unwrap();
//! let encoder = StateEncoder::new(&graph, 2).unwrap();
//!
//! let state = encoder.change_state(0, 3, 2).unwrap();
//! assert_eq!(state, 2 << 6);
//! assert_eq!(encoder.get_state(state, 3).unwrap(), 2);
//! assert_eq!(encoder.to_grid(state, 2).unwrap(), "00\n02\n");
//! ```

use crate::error::{Result, SymmetryError};
use crate::graph::Graph;

/// Usable bits of a packed state.
pub const PACKED_BITS: u32 = 63;

/// Fixed-width bit-field codec for per-vertex values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEncoder {
    state_size: u32,
    /// Bits belonging to each vertex.
    field_masks: Vec<u64>,
    /// Union of the field masks of each vertex's neighbours.
    neighbour_masks: Vec<u64>,
}

impl StateEncoder {
    /// Precompute field and neighbour masks for `graph`.
    ///
    /// # Errors
    ///
    /// Fails if `state_size` is zero or if `state_size * graph.size()`
    /// exceeds [`PACKED_BITS`].
    pub fn new(graph: &Graph, state_size: u32) -> Result<Self> {
        if state_size == 0 {
            return Err(SymmetryError::ZeroFieldWidth);
        }
        let vertices = graph.size();
        let too_wide = SymmetryError::EncodingTooWide {
            vertices,
            bits: state_size,
            available: PACKED_BITS,
        };
        let total = u32::try_from(vertices)
            .ok()
            .and_then(|n| n.checked_mul(state_size))
            .ok_or_else(|| too_wide.clone())?;
        if total > PACKED_BITS {
            return Err(too_wide);
        }

        let base = (1u64 << state_size) - 1;
        let field_masks: Vec<u64> = (0..vertices)
            .map(|v| base << (state_size as usize * v))
            .collect();
        let neighbour_masks = (0..vertices)
            .map(|v| {
                Ok(graph
                    .neighbours(v)?
                    .into_iter()
                    .fold(0, |mask, w| mask | field_masks[w]))
            })
            .collect::<Result<Vec<u64>>>()?;

        Ok(Self {
            state_size,
            field_masks,
            neighbour_masks,
        })
    }

    /// Bits per vertex.
    pub fn state_size(&self) -> u32 {
        self.state_size
    }

    pub fn vertex_count(&self) -> usize {
        self.field_masks.len()
    }

    /// Largest value a single field can hold.
    pub fn max_value(&self) -> u64 {
        (1u64 << self.state_size) - 1
    }

    /// Mask selecting the (unshifted) bits of vertex `v`.
    pub fn field_mask(&self, v: usize) -> Result<u64> {
        self.check_vertex(v)?;
        Ok(self.field_masks[v])
    }

    /// Mask selecting the bits of every neighbour of `v`.
    pub fn neighbour_mask(&self, v: usize) -> Result<u64> {
        self.check_vertex(v)?;
        Ok(self.neighbour_masks[v])
    }

    /// `states` with everything except the neighbours of `v` cleared.
    pub fn neighbour_states(&self, states: u64, v: usize) -> Result<u64> {
        Ok(states & self.neighbour_mask(v)?)
    }

    /// Value stored for vertex `v`.
    pub fn get_state(&self, states: u64, v: usize) -> Result<u64> {
        self.check_vertex(v)?;
        Ok((states & self.field_masks[v]) >> self.shift(v))
    }

    /// Replace the value stored for vertex `v`.
    ///
    /// # Errors
    ///
    /// Fails with [`SymmetryError::StateValueTooWide`] if `value` needs more
    /// than `state_size` bits.
    pub fn change_state(&self, states: u64, v: usize, value: u64) -> Result<u64> {
        self.check_vertex(v)?;
        if value > self.max_value() {
            return Err(SymmetryError::StateValueTooWide {
                value,
                bits: self.state_size,
            });
        }
        Ok((states & !self.field_masks[v]) | (value << self.shift(v)))
    }

    /// Values of all vertices in label order.
    pub fn decode(&self, states: u64) -> Vec<u64> {
        (0..self.vertex_count())
            .map(|v| (states & self.field_masks[v]) >> self.shift(v))
            .collect()
    }

    /// Pack one value per vertex.
    pub fn encode(&self, values: &[u64]) -> Result<u64> {
        if values.len() != self.vertex_count() {
            return Err(SymmetryError::LengthMismatch {
                labels: self.vertex_count(),
                permutation: values.len(),
            });
        }
        values
            .iter()
            .enumerate()
            .try_fold(0u64, |states, (v, &value)| self.change_state(states, v, value))
    }

    /// Render `states` as a `dim x dim` grid, one row per line.
    ///
    /// Vertices are laid out row-major: row `r`, column `c` is vertex
    /// `r * dim + c`.
    pub fn to_grid(&self, states: u64, dim: usize) -> Result<String> {
        let cells = dim
            .checked_mul(dim)
            .filter(|&cells| cells <= self.vertex_count())
            .ok_or_else(|| SymmetryError::VertexOutOfRange {
                vertex: dim.saturating_mul(dim) - 1,
                size: self.vertex_count(),
            })?;
        let mut grid = String::with_capacity(cells + dim);
        for row in 0..dim {
            for col in 0..dim {
                let value = self.get_state(states, row * dim + col)?;
                grid.push_str(&value.to_string());
            }
            grid.push('\n');
        }
        Ok(grid)
    }

    fn shift(&self, v: usize) -> usize {
        self.state_size as usize * v
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(SymmetryError::VertexOutOfRange {
                vertex: v,
                size: self.vertex_count(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_encoder(k: usize) -> StateEncoder {
        StateEncoder::new(&Graph::grid(k).unwrap(), 2).unwrap()
    }

    #[test]
    fn test_width_limit() {
        // 5x5 with 2 bits uses 50 bits, 6x6 would need 72
        assert!(StateEncoder::new(&Graph::grid(5).unwrap(), 2).is_ok());
        assert_eq!(
            StateEncoder::new(&Graph::grid(6).unwrap(), 2),
            Err(SymmetryError::EncodingTooWide {
                vertices: 36,
                bits: 2,
                available: 63
            })
        );
        // exactly 63 bits is allowed
        assert!(StateEncoder::new(&Graph::new(21).unwrap(), 3).is_ok());
        assert!(StateEncoder::new(&Graph::new(16).unwrap(), 4).is_err());
        assert_eq!(
            StateEncoder::new(&Graph::new(4).unwrap(), 0),
            Err(SymmetryError::ZeroFieldWidth)
        );
    }

    #[test]
    fn test_masks() {
        let encoder = grid_encoder(2);
        assert_eq!(encoder.field_mask(0).unwrap(), 0b11);
        assert_eq!(encoder.field_mask(3).unwrap(), 0b11 << 6);
        // vertex 0 neighbours 1 and 2
        assert_eq!(encoder.neighbour_mask(0).unwrap(), 0b00_11_11_00);
        assert_eq!(encoder.neighbour_mask(3).unwrap(), 0b00_11_11_00);
        assert_eq!(encoder.neighbour_mask(1).unwrap(), 0b11_00_00_11);
        assert_eq!(
            encoder.neighbour_states(0b11_10_01_11, 1).unwrap(),
            0b11_00_00_11
        );
    }

    #[test]
    fn test_get_and_change_state() {
        let encoder = grid_encoder(3);
        let mut states = 0;
        for v in 0..9 {
            states = encoder.change_state(states, v, (v % 4) as u64).unwrap();
        }
        for v in 0..9 {
            assert_eq!(encoder.get_state(states, v).unwrap(), (v % 4) as u64);
        }

        // overwrite clears the old bits
        let states = encoder.change_state(states, 3, 0).unwrap();
        assert_eq!(encoder.get_state(states, 3).unwrap(), 0);
        assert_eq!(encoder.get_state(states, 2).unwrap(), 2);
    }

    #[test]
    fn test_change_state_rejects_wide_values() {
        let encoder = grid_encoder(2);
        assert_eq!(
            encoder.change_state(0, 0, 4),
            Err(SymmetryError::StateValueTooWide { value: 4, bits: 2 })
        );
        assert_eq!(
            encoder.get_state(0, 4),
            Err(SymmetryError::VertexOutOfRange { vertex: 4, size: 4 })
        );
    }

    #[test]
    fn test_encode_decode() {
        let encoder = grid_encoder(2);
        let states = encoder.encode(&[3, 0, 1, 2]).unwrap();
        assert_eq!(states, 0b10_01_00_11);
        assert_eq!(encoder.decode(states), vec![3, 0, 1, 2]);
        assert!(encoder.encode(&[1, 2]).is_err());
    }

    #[test]
    fn test_to_grid_is_row_major() {
        let encoder = grid_encoder(3);
        let states = encoder.encode(&[1, 2, 3, 0, 0, 0, 3, 2, 1]).unwrap();
        assert_eq!(encoder.to_grid(states, 3).unwrap(), "123\n000\n321\n");
        assert!(encoder.to_grid(states, 4).is_err());
        assert_eq!(
            encoder.to_grid(states, usize::MAX),
            Err(SymmetryError::VertexOutOfRange {
                vertex: usize::MAX - 1,
                size: 9
            })
        );
    }
}
