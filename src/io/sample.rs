//! Seeded random dataset generation

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::Write;

use crate::io::configuration::{
    DEFAULT_SAMPLE_COLS, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_ROWS, DEFAULT_SEED,
    DEFAULT_SPECIAL_DENSITY, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Cell, Grid};

/// Settings for random grid generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleConfig {
    /// Rows per grid
    pub rows: usize,
    /// Columns per grid
    pub cols: usize,
    /// Probability that a cell is special
    pub density: f64,
    /// Number of grids to generate
    pub count: usize,
    /// Random seed
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SAMPLE_ROWS,
            cols: DEFAULT_SAMPLE_COLS,
            density: DEFAULT_SPECIAL_DENSITY,
            count: DEFAULT_SAMPLE_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl SampleConfig {
    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the density is outside `[0, 1]` or a
    /// dimension exceeds `MAX_GRID_DIMENSION`
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(invalid_parameter(
                "density",
                &self.density,
                &"must be a probability between 0 and 1",
            ));
        }
        for (parameter, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

/// Generate random grids where each cell is special with probability `density`
///
/// The same configuration always produces the same grids.
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration fails validation
pub fn generate_grids(config: &SampleConfig) -> Result<Vec<Grid>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let grids = (0..config.count)
        .map(|_| {
            let mut grid = Grid::new(config.rows, config.cols);
            for row in 0..config.rows {
                for col in 0..config.cols {
                    if rng.random_bool(config.density) {
                        grid.mark_special(Cell::new(row, col));
                    }
                }
            }
            grid
        })
        .collect();

    Ok(grids)
}

/// Write grids in the dataset input format
///
/// # Errors
///
/// Returns `FileSystem` if writing fails
pub fn write_datasets<W: Write>(writer: &mut W, grids: &[Grid]) -> Result<()> {
    for grid in grids {
        writeln!(writer, "{} {}", grid.rows(), grid.cols())?;
        write!(writer, "{grid}")?;
    }
    writer.flush()?;
    Ok(())
}
