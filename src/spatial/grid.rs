//! Rectangular grid of ordinary and special cells
//!
//! Cells are addressed by `(row, col)` and mapped to the flat index
//! `row * cols + col`, which is the bit position used by coverage masks.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::{ORDINARY_MARKER, SPECIAL_MARKER};
use crate::io::error::{Result, invalid_parameter};

/// Grid coordinates of a single cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
}

impl Cell {
    /// Create a cell from its coordinates
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One of the four axis directions a placement can extend in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decreasing row
    Up,
    /// Increasing row
    Down,
    /// Decreasing column
    Left,
    /// Increasing column
    Right,
}

impl Direction {
    /// All directions in generation order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column delta of a single step
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Grid dimensions plus the special-cell markers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    special: Array2<bool>,
}

impl Grid {
    /// Create a grid where every cell is ordinary
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            special: Array2::from_elem((rows, cols), false),
        }
    }

    /// Create a grid from row-major special markers
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `markers` does not hold exactly `rows * cols` entries
    pub fn from_markers(rows: usize, cols: usize, markers: Vec<bool>) -> Result<Self> {
        let provided = markers.len();
        Array2::from_shape_vec((rows, cols), markers)
            .map(|special| Self { special })
            .map_err(|error| {
                invalid_parameter(
                    "markers",
                    &provided,
                    &format!("expected {rows}x{cols} cells: {error}"),
                )
            })
    }

    /// Create a grid with the given cells marked special
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a cell lies outside the grid
    pub fn with_special_cells(rows: usize, cols: usize, cells: &[Cell]) -> Result<Self> {
        let mut grid = Self::new(rows, cols);
        for &cell in cells {
            if !grid.contains(cell) {
                return Err(invalid_parameter(
                    "special cell",
                    &format!("({}, {})", cell.row, cell.col),
                    &format!("outside {rows}x{cols} grid"),
                ));
            }
            grid.mark_special(cell);
        }
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.special.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.special.ncols()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.special.len()
    }

    /// Test whether a cell lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// Test whether a cell is marked special
    pub fn is_special(&self, cell: Cell) -> bool {
        self.special
            .get([cell.row, cell.col])
            .copied()
            .unwrap_or(false)
    }

    /// Mark a cell special, ignoring cells outside the grid
    pub fn mark_special(&mut self, cell: Cell) {
        if let Some(marker) = self.special.get_mut([cell.row, cell.col]) {
            *marker = true;
        }
    }

    /// Special cells in row-major order
    pub fn special_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.special
            .indexed_iter()
            .filter(|(_, special)| **special)
            .map(|((row, col), _)| Cell::new(row, col))
    }

    /// Number of special cells
    pub fn special_count(&self) -> usize {
        self.special.iter().filter(|special| **special).count()
    }

    /// Flat index of a cell, used as its bit position in coverage masks
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols() + cell.col
    }

    /// Cell reached after `distance` steps in `direction`, if still inside the grid
    pub fn step(&self, cell: Cell, direction: Direction, distance: usize) -> Option<Cell> {
        let (row_delta, col_delta) = direction.delta();
        let distance = isize::try_from(distance).ok()?;
        let row = cell
            .row
            .checked_add_signed(row_delta.checked_mul(distance)?)?;
        let col = cell
            .col
            .checked_add_signed(col_delta.checked_mul(distance)?)?;
        let target = Cell::new(row, col);
        self.contains(target).then_some(target)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.special.rows() {
            for &special in row {
                let marker = if special {
                    SPECIAL_MARKER
                } else {
                    ORDINARY_MARKER
                };
                write!(f, "{marker}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
