//! Tests for pipeline orchestration and representation selection

#[cfg(test)]
mod tests {
    use tricover::algorithm::executor::{
        CoverCounter, CoverReport, EngineConfig, count_distinct_covers,
    };
    use tricover::algorithm::mask::MaskWidth;
    use tricover::spatial::grid::{Cell, Grid};
    use tricover::CoverError;

    fn full_grid(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                grid.mark_special(Cell::new(row, col));
            }
        }
        grid
    }

    fn forced(width: MaskWidth) -> CoverCounter {
        CoverCounter::new(EngineConfig {
            width: Some(width),
            ..EngineConfig::default()
        })
    }

    // Tests a centred special cell in a 3x3 grid has no room for placements
    // Verified by allowing placements that leave the grid
    #[test]
    fn test_centre_of_three_by_three_counts_one() {
        let grid = Grid::with_special_cells(3, 3, &[Cell::new(1, 1)]).unwrap();
        let report = CoverCounter::default().count(&grid).unwrap();

        assert_eq!(report, CoverReport::empty(MaskWidth::Word64));
        assert_eq!(report.distinct_covers, 1);
        assert_eq!(report.placements, 0);
    }

    // Tests a corner special cell gives two overlapping placements
    // Verified by counting maximal sets as a single coverage
    #[test]
    fn test_corner_of_three_by_three() {
        let grid = Grid::with_special_cells(3, 3, &[Cell::new(0, 0)]).unwrap();
        let report = CoverCounter::default().count(&grid).unwrap();

        assert_eq!(report.placements, 2);
        assert_eq!(report.maximal_sets, 2);
        assert_eq!(report.distinct_covers, 2);
    }

    // Tests rows and columns covering the same cells count once
    // Verified by deduplicating by member set instead of coverage
    #[test]
    fn test_full_square_counts_one_coverage() {
        let report = CoverCounter::default().count(&full_grid(3, 3)).unwrap();

        assert_eq!(report.placements, 6);
        assert_eq!(report.maximal_sets, 2);
        assert_eq!(report.distinct_covers, 1);
    }

    // Tests grids without special cells or without cells count one
    // Verified by returning zero for empty placement lists
    #[test]
    fn test_trivial_grids_count_one() {
        assert_eq!(count_distinct_covers(&Grid::new(5, 5)).unwrap(), 1);
        assert_eq!(count_distinct_covers(&Grid::new(0, 0)).unwrap(), 1);
        assert_eq!(count_distinct_covers(&full_grid(2, 2)).unwrap(), 1);
    }

    // Tests small strips against hand-counted answers
    // Verified by skipping the pivot restriction of the branch set
    #[test]
    fn test_strip_answers() {
        let centre = Grid::with_special_cells(1, 5, &[Cell::new(0, 2)]).unwrap();
        assert_eq!(count_distinct_covers(&centre).unwrap(), 2);

        let ends = Grid::with_special_cells(1, 5, &[Cell::new(0, 0), Cell::new(0, 4)]).unwrap();
        assert_eq!(count_distinct_covers(&ends).unwrap(), 2);

        let apart = Grid::with_special_cells(1, 6, &[Cell::new(0, 0), Cell::new(0, 5)]).unwrap();
        assert_eq!(count_distinct_covers(&apart).unwrap(), 1);
    }

    // Tests every representation gives the same answer
    // Verified by building dynamic masks one bit short
    #[test]
    fn test_width_independence() {
        let grid = Grid::with_special_cells(
            5,
            5,
            &[Cell::new(0, 0), Cell::new(2, 2), Cell::new(4, 1), Cell::new(1, 4)],
        )
        .unwrap();

        let word = forced(MaskWidth::Word64).count(&grid).unwrap();
        let wide = forced(MaskWidth::Word128).count(&grid).unwrap();
        let dynamic = forced(MaskWidth::Dynamic).count(&grid).unwrap();

        assert_eq!(word.width, MaskWidth::Word64);
        assert_eq!(wide.width, MaskWidth::Word128);
        assert_eq!(dynamic.width, MaskWidth::Dynamic);
        assert_eq!(word.distinct_covers, wide.distinct_covers);
        assert_eq!(word.distinct_covers, dynamic.distinct_covers);
        assert_eq!(word.maximal_sets, dynamic.maximal_sets);
    }

    // Tests grids wider than a word switch to wider masks
    // Verified by always selecting u64 masks
    #[test]
    fn test_wide_grids_use_wide_masks() {
        let medium = Grid::with_special_cells(1, 70, &[Cell::new(0, 0), Cell::new(0, 69)]).unwrap();
        let report = CoverCounter::default().count(&medium).unwrap();
        assert_eq!(report.width, MaskWidth::Word128);
        assert_eq!(report.distinct_covers, 1);

        let large = Grid::with_special_cells(1, 130, &[Cell::new(0, 64)]).unwrap();
        let report = CoverCounter::default().count(&large).unwrap();
        assert_eq!(report.width, MaskWidth::Dynamic);
        assert_eq!(report.placements, 2);
        assert_eq!(report.distinct_covers, 2);
    }

    // Tests the placement cap fails fast
    // Verified by removing the cap check
    #[test]
    fn test_placement_cap_exceeded() {
        let result = CoverCounter::default().count(&full_grid(10, 10));

        match result {
            Err(CoverError::CapacityExceeded {
                resource,
                required,
                capacity,
            }) => {
                assert_eq!(resource, "placements");
                assert_eq!(required, 160);
                assert_eq!(capacity, 64);
            }
            _ => unreachable!("Expected CapacityExceeded error type"),
        }
    }

    // Tests a forced word too narrow for the cells is rejected
    // Verified by ignoring the cell count when checking a forced width
    #[test]
    fn test_forced_width_too_narrow() {
        let grid = Grid::with_special_cells(1, 70, &[Cell::new(0, 0)]).unwrap();
        let result = forced(MaskWidth::Word64).count(&grid);

        assert!(matches!(
            result,
            Err(CoverError::CapacityExceeded {
                resource: "cells",
                required: 70,
                capacity: 64,
            })
        ));
    }

    // Tests the reference count accompanies small grids only
    // Verified by skipping the exhaustive scan for every grid
    #[test]
    fn test_count_with_reference() {
        let counter = CoverCounter::default();

        let (report, reference) = counter.count_with_reference(&full_grid(3, 3)).unwrap();
        assert_eq!(reference, Some(report.distinct_covers));

        let busy = CoverCounter::new(EngineConfig {
            max_placements: 200,
            width: None,
        });
        let (_, reference) = busy.count_with_reference(&full_grid(5, 5)).unwrap();
        assert_eq!(reference, None);
    }

    // Tests repeated runs give identical reports
    // Verified by carrying the cover set across runs
    #[test]
    fn test_idempotent() {
        let grid = full_grid(4, 3);
        let counter = CoverCounter::default();
        assert_eq!(counter.count(&grid).unwrap(), counter.count(&grid).unwrap());
        assert_eq!(counter.config().max_placements, 64);
    }
}
