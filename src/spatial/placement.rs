//! Straight three-cell placements anchored on special cells
//!
//! A placement is generated from every special cell in each axis direction
//! whose two following cells stay inside the grid. Different anchors can
//! produce the same footprint (a special cell at the far end of another
//! special cell's placement, for example), so the list is de-duplicated by
//! covered cells rather than by anchor or direction.

use std::collections::HashSet;

use crate::algorithm::mask::Mask;
use crate::io::configuration::PLACEMENT_LENGTH;
use crate::spatial::grid::{Cell, Direction, Grid};

/// Three collinear cells touching at least one special cell
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    anchor: Cell,
    direction: Direction,
    /// Flat cell indices in ascending order
    cells: [usize; PLACEMENT_LENGTH],
}

impl Placement {
    /// Build the placement extending from `anchor` in `direction`
    ///
    /// Returns `None` when the footprint leaves the grid
    pub fn from_anchor(grid: &Grid, anchor: Cell, direction: Direction) -> Option<Self> {
        let near = grid.step(anchor, direction, 1)?;
        let far = grid.step(anchor, direction, 2)?;

        let mut cells = [grid.index(anchor), grid.index(near), grid.index(far)];
        cells.sort_unstable();

        Some(Self {
            anchor,
            direction,
            cells,
        })
    }

    /// Special cell the placement was first generated from
    pub const fn anchor(&self) -> Cell {
        self.anchor
    }

    /// Direction the placement extends from its anchor
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Covered flat cell indices in ascending order
    pub const fn cells(&self) -> &[usize; PLACEMENT_LENGTH] {
        &self.cells
    }

    /// Test whether two placements share a cell
    pub fn overlaps(&self, other: &Self) -> bool {
        self.cells.iter().any(|cell| other.cells.contains(cell))
    }

    /// Coverage mask of the placement over `cell_count` cells
    pub fn mask<M: Mask>(&self, cell_count: usize) -> M {
        M::from_indices(cell_count, &self.cells)
    }
}

/// Generate the distinct placements of a grid
///
/// Special cells are visited in row-major order and directions in
/// [`Direction::ALL`] order; the first anchor producing a footprint keeps it.
pub fn generate_placements(grid: &Grid) -> Vec<Placement> {
    let mut seen = HashSet::new();
    let mut placements = Vec::new();

    for anchor in grid.special_cells() {
        for direction in Direction::ALL {
            let Some(placement) = Placement::from_anchor(grid, anchor, direction) else {
                continue;
            };
            // Sorted footprints compare equal exactly when their masks do
            if seen.insert(placement.cells) {
                placements.push(placement);
            }
        }
    }

    placements
}

/// Coverage masks for a placement list, in list order
pub fn placement_masks<M: Mask>(placements: &[Placement], cell_count: usize) -> Vec<M> {
    placements
        .iter()
        .map(|placement| placement.mask(cell_count))
        .collect()
}
