// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Small dense graphs for automorphism computation.
//!
//! A [`Graph`] keeps both an adjacency matrix and an ordered arc list. The
//! matrix gives O(1) adjacency queries; the arc list gives a cheap pass over
//! every arc when validating a candidate mapping. This is aimed at graphs
//! with a few dozen vertices, such as the grids the game is played on.
//!
//! # Examples
//!
//! ```
//! use orbit_search::graph::Graph;
//!
//! let mut graph = Graph::new(3).unwrap();
//! graph.add_edge(0, 1).unwrap();
//! graph.add_arc(1, 2).unwrap();
//!
//! assert!(graph.is_adjacent(1, 0).unwrap());
//! assert!(graph.is_arc_present(1, 2).unwrap());
//! assert!(!graph.is_arc_present(2, 1).unwrap());
//! assert_eq!(graph.neighbours(1).unwrap(), vec![0, 2]);
//! ```

use crate::error::{Result, SymmetryError};
use crate::symmetry::Mapping;
use std::fmt;

/// A directed arc between two vertex labels.
///
/// Arcs compare by value only; they carry no reference to the graph that
/// owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedArc {
    pub from: usize,
    pub to: usize,
}

/// Directed graph on vertices `0..n`.
///
/// Degree counters always equal the number of set matrix entries in the
/// corresponding row or column, because arcs are inserted at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: usize,
    /// Row-major `vertices * vertices` adjacency matrix.
    adjacency: Vec<bool>,
    in_degrees: Vec<usize>,
    out_degrees: Vec<usize>,
    /// Arcs in insertion order.
    arcs: Vec<DirectedArc>,
}

impl Graph {
    /// Create a graph with `n` vertices and no arcs.
    ///
    /// # Errors
    ///
    /// Fails with [`SymmetryError::GraphTooLarge`] if the `n * n` adjacency
    /// matrix overflows or cannot be allocated.
    pub fn new(n: usize) -> Result<Self> {
        let too_large = SymmetryError::GraphTooLarge { vertices: n };
        let cells = n.checked_mul(n).ok_or_else(|| too_large.clone())?;
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(cells).map_err(|_| too_large)?;
        adjacency.resize(cells, false);
        Ok(Self {
            vertices: n,
            adjacency,
            in_degrees: vec![0; n],
            out_degrees: vec![0; n],
            arcs: Vec::new(),
        })
    }

    /// Build the `k x k` grid graph with 4-neighbour connectivity.
    ///
    /// Vertex `row * k + col` is joined to the vertices directly above,
    /// below, left and right of it.
    ///
    /// # Errors
    ///
    /// Fails with [`SymmetryError::InvalidDimension`] if `k * k` overflows,
    /// or as [`Graph::new`] does.
    pub fn grid(k: usize) -> Result<Self> {
        let vertices = k.checked_mul(k).ok_or(SymmetryError::InvalidDimension(k))?;
        let mut graph = Self::new(vertices)?;
        for row in 0..k {
            for col in 0..k {
                let v = row * k + col;
                if row + 1 < k {
                    graph.insert_edge(v, v + k);
                }
                if col + 1 < k {
                    graph.insert_edge(v, v + 1);
                }
            }
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.vertices
    }

    /// Add the directed arc `i -> j`. Adding an existing arc is a no-op.
    pub fn add_arc(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        self.insert_arc(i, j);
        Ok(())
    }

    /// Add both arcs `i -> j` and `j -> i`.
    pub fn add_edge(&mut self, i: usize, j: usize) -> Result<()> {
        self.add_arc(i, j)?;
        self.add_arc(j, i)
    }

    /// Whether the directed arc `i -> j` exists.
    pub fn is_arc_present(&self, i: usize, j: usize) -> Result<bool> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        Ok(self.arc_at(i, j))
    }

    /// Whether `i` and `j` are joined by an arc in either direction.
    pub fn is_adjacent(&self, i: usize, j: usize) -> Result<bool> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        Ok(self.arc_at(i, j) || self.arc_at(j, i))
    }

    /// All `j` with an arc `v -> j`, in ascending order.
    pub fn neighbours(&self, v: usize) -> Result<Vec<usize>> {
        self.check_vertex(v)?;
        Ok((0..self.vertices).filter(|&j| self.arc_at(v, j)).collect())
    }

    pub fn in_degree(&self, v: usize) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.in_degrees[v])
    }

    pub fn out_degree(&self, v: usize) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.out_degrees[v])
    }

    /// Arcs in the order they were first added.
    pub fn arcs(&self) -> &[DirectedArc] {
        &self.arcs
    }

    /// Check a (possibly partial) mapping against the graph structure.
    ///
    /// Returns `false` as soon as some arc `(i, j)` has both endpoints
    /// mapped and the images are not adjacent. Arcs with an unmapped
    /// endpoint are skipped, so a partial mapping that passes can still be
    /// extended; a mapping that fails can be pruned together with every
    /// extension of it.
    ///
    /// # Errors
    ///
    /// Fails with [`SymmetryError::SizeMismatch`] if the mapping is defined
    /// on a different number of vertices.
    pub fn check_mapping(&self, mapping: &Mapping) -> Result<bool> {
        if mapping.size() != self.vertices {
            return Err(SymmetryError::SizeMismatch {
                mapping: mapping.size(),
                graph: self.vertices,
            });
        }
        for arc in &self.arcs {
            if let (Some(i), Some(j)) = (mapping.lookup(arc.from)?, mapping.lookup(arc.to)?) {
                if !self.is_adjacent(i, j)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.vertices {
            Ok(())
        } else {
            Err(SymmetryError::VertexOutOfRange {
                vertex: v,
                size: self.vertices,
            })
        }
    }

    fn arc_at(&self, i: usize, j: usize) -> bool {
        self.adjacency[i * self.vertices + j]
    }

    /// Insert an arc whose endpoints are already known to be in range.
    fn insert_arc(&mut self, i: usize, j: usize) {
        let index = i * self.vertices + j;
        if !self.adjacency[index] {
            self.adjacency[index] = true;
            self.out_degrees[i] += 1;
            self.in_degrees[j] += 1;
            self.arcs.push(DirectedArc { from: i, to: j });
        }
    }

    fn insert_edge(&mut self, i: usize, j: usize) {
        self.insert_arc(i, j);
        self.insert_arc(j, i);
    }
}

impl fmt::Display for Graph {
    /// One line per edge (`i -- j`) or one-way arc (`i -> j`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph with {} vertices", self.vertices)?;
        for i in 0..self.vertices {
            for j in i..self.vertices {
                match (self.arc_at(i, j), self.arc_at(j, i)) {
                    (true, true) if i == j => writeln!(f, "{} -> {}", i, j)?,
                    (true, true) => writeln!(f, "{} -- {}", i, j)?,
                    (true, false) => writeln!(f, "{} -> {}", i, j)?,
                    (false, true) => writeln!(f, "{} -> {}", j, i)?,
                    (false, false) => {}
                }
            }
        }
        Ok(())
    }
}
