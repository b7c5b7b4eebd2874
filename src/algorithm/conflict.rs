//! Conflict graph over placements and its complement
//!
//! Two placements conflict when their cell masks intersect.

use crate::algorithm::mask::Mask;
use crate::io::error::{CoverError, Result};

/// Overlap graph between placements and its complement
///
/// Vertex `i` is the placement at position `i` of the placement list. Two
/// vertices are adjacent when their coverage masks intersect. Maximal cliques
/// of the complement are exactly the maximal independent sets of the graph.
#[derive(Clone, Debug)]
pub struct ConflictGraph<M> {
    adjacency: Vec<M>,
    complement: Vec<M>,
    vertices: M,
}

impl<M: Mask> ConflictGraph<M> {
    /// Build the graph from placement coverage masks
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the vertex count does not fit `M`
    pub fn build(masks: &[M]) -> Result<Self> {
        let vertex_count = masks.len();
        if !M::fits(vertex_count) {
            return Err(CoverError::CapacityExceeded {
                resource: "placements",
                required: vertex_count,
                capacity: M::CAPACITY.unwrap_or(usize::MAX),
            });
        }

        let mut adjacency = vec![M::empty(vertex_count); vertex_count];
        for (i, first) in masks.iter().enumerate() {
            for (j, second) in masks.iter().enumerate().skip(i + 1) {
                if first.intersects(second) {
                    if let Some(row) = adjacency.get_mut(i) {
                        row.include(j);
                    }
                    if let Some(row) = adjacency.get_mut(j) {
                        row.include(i);
                    }
                }
            }
        }

        let vertices = M::full(vertex_count);
        let complement = adjacency
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut inverse = vertices.difference(row);
                inverse.exclude(i);
                inverse
            })
            .collect();

        Ok(Self {
            adjacency,
            complement,
            vertices,
        })
    }

    /// Number of placements in the graph
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Mask with every vertex present
    pub const fn vertices(&self) -> &M {
        &self.vertices
    }

    /// Placements overlapping `vertex`
    pub fn adjacency(&self, vertex: usize) -> Option<&M> {
        self.adjacency.get(vertex)
    }

    /// Placements compatible with `vertex`, excluding itself
    pub fn complement(&self, vertex: usize) -> Option<&M> {
        self.complement.get(vertex)
    }

    /// Test whether two placements overlap
    pub fn conflicts(&self, first: usize, second: usize) -> bool {
        self.adjacency(first).is_some_and(|row| row.has(second))
    }

    /// Number of overlapping placement pairs
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Mask::cardinality).sum::<usize>() / 2
    }
}
