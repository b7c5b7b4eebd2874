//! Pipeline orchestration: placements, conflict graph, enumeration, deduplication
//!
//! The executor chooses a mask representation per dataset. Grids whose cell
//! count and placement count both fit a machine word run on `WordMask<u64>`
//! (or `u128`); anything wider falls back to a dynamic `BitVec`. The count is
//! the same whichever representation runs.

use bitvec::vec::BitVec;

use crate::algorithm::brute_force::count_distinct_covers_exhaustive;
use crate::algorithm::conflict::ConflictGraph;
use crate::algorithm::dedup::CoverSet;
use crate::algorithm::enumerator::enumerate_maximal_sets;
use crate::algorithm::mask::{Mask, MaskWidth, WordMask};
use crate::io::configuration::{BRUTE_FORCE_LIMIT, DEFAULT_MAX_PLACEMENTS};
use crate::io::error::{CoverError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::placement::{Placement, generate_placements, placement_masks};

/// Runtime settings for the counting pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest number of distinct placements accepted per dataset
    pub max_placements: usize,
    /// Force a representation instead of picking the narrowest one
    pub width: Option<MaskWidth>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_placements: DEFAULT_MAX_PLACEMENTS,
            width: None,
        }
    }
}

/// Outcome of counting one grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoverReport {
    /// Number of distinct coverage patterns of maximal sets
    pub distinct_covers: usize,
    /// Number of distinct placements generated
    pub placements: usize,
    /// Number of maximal independent sets visited
    pub maximal_sets: usize,
    /// Number of recursive search calls
    pub search_calls: usize,
    /// Representation the search ran on
    pub width: MaskWidth,
}

impl CoverReport {
    /// Report for a grid without placements: the empty arrangement is the only maximal set
    pub const fn empty(width: MaskWidth) -> Self {
        Self {
            distinct_covers: 1,
            placements: 0,
            maximal_sets: 1,
            search_calls: 0,
            width,
        }
    }
}

/// Counts distinct maximal tromino coverages of grids
#[derive(Clone, Copy, Debug, Default)]
pub struct CoverCounter {
    config: EngineConfig,
}

impl CoverCounter {
    /// Create a counter with the given settings
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline on one grid
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the grid produces more placements than the
    /// configured cap, or if a forced representation cannot hold the cells or placements
    pub fn count(&self, grid: &Grid) -> Result<CoverReport> {
        let placements = generate_placements(grid);
        self.count_placements(&placements, grid.cell_count())
    }

    /// Run the graph, enumeration and deduplication stages on generated placements
    ///
    /// # Errors
    ///
    /// Same conditions as [`CoverCounter::count`]
    pub fn count_placements(
        &self,
        placements: &[Placement],
        cell_count: usize,
    ) -> Result<CoverReport> {
        if placements.len() > self.config.max_placements {
            return Err(CoverError::CapacityExceeded {
                resource: "placements",
                required: placements.len(),
                capacity: self.config.max_placements,
            });
        }

        let width = self.select_width(placements.len(), cell_count)?;

        if placements.is_empty() {
            return Ok(CoverReport::empty(width));
        }

        match width {
            MaskWidth::Word64 => run_search::<WordMask<u64>>(placements, cell_count, width),
            MaskWidth::Word128 => run_search::<WordMask<u128>>(placements, cell_count, width),
            MaskWidth::Dynamic => run_search::<BitVec>(placements, cell_count, width),
        }
    }

    /// Count a grid with both the search and the exhaustive scan
    ///
    /// Returns the report together with the reference count, or `None` when the
    /// grid has more placements than the exhaustive scan accepts.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CoverCounter::count`]
    pub fn count_with_reference(&self, grid: &Grid) -> Result<(CoverReport, Option<usize>)> {
        let placements = generate_placements(grid);
        let report = self.count_placements(&placements, grid.cell_count())?;

        if placements.len() > BRUTE_FORCE_LIMIT {
            return Ok((report, None));
        }

        let masks: Vec<BitVec> = placement_masks(&placements, grid.cell_count());
        let reference = count_distinct_covers_exhaustive(&masks, grid.cell_count())?;
        Ok((report, Some(reference)))
    }

    fn select_width(&self, placements: usize, cell_count: usize) -> Result<MaskWidth> {
        let required = placements.max(cell_count);
        let Some(width) = self.config.width else {
            return Ok(MaskWidth::select(required));
        };

        if width.fits(required) {
            return Ok(width);
        }

        let resource = if cell_count >= placements {
            "cells"
        } else {
            "placements"
        };
        Err(CoverError::CapacityExceeded {
            resource,
            required,
            capacity: width.capacity().unwrap_or(usize::MAX),
        })
    }
}

fn run_search<M: Mask>(
    placements: &[Placement],
    cell_count: usize,
    width: MaskWidth,
) -> Result<CoverReport> {
    let masks: Vec<M> = placement_masks(placements, cell_count);
    let graph = ConflictGraph::build(&masks)?;

    let mut covers = CoverSet::new();
    let stats = enumerate_maximal_sets(&graph, &masks, cell_count, |_, cover| {
        covers.insert(cover.clone());
    });

    Ok(CoverReport {
        distinct_covers: covers.len(),
        placements: placements.len(),
        maximal_sets: stats.maximal_sets,
        search_calls: stats.search_calls,
        width,
    })
}

/// Count distinct maximal coverages of a grid with default settings
///
/// # Errors
///
/// Returns `CapacityExceeded` if the grid produces more than
/// `DEFAULT_MAX_PLACEMENTS` placements
pub fn count_distinct_covers(grid: &Grid) -> Result<usize> {
    CoverCounter::default()
        .count(grid)
        .map(|report| report.distinct_covers)
}
