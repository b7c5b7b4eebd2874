//! Spatial data structures
//!
//! This module contains the grid model and placement generation:
//! - Cell addressing and axis directions
//! - Special-cell markers
//! - Straight three-cell placements anchored on special cells

/// Grid dimensions, special markers and cell indexing
pub mod grid;
/// Placement generation and de-duplication
pub mod placement;

pub use grid::{Cell, Direction, Grid};
pub use placement::{Placement, generate_placements};
