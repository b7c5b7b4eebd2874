//! Exhaustive reference counter and set checks
//!
//! Scans the whole power set of placements. Only usable for small placement
//! lists, but shares nothing with the pivoting search, which makes it a
//! reference for cross-checking.

use crate::algorithm::dedup::CoverSet;
use crate::algorithm::mask::Mask;
use crate::io::configuration::BRUTE_FORCE_LIMIT;
use crate::io::error::{CoverError, Result};

/// Test whether the placements selected by `members` are pairwise disjoint
pub fn is_independent<M: Mask>(masks: &[M], members: &M) -> bool {
    let selected: Vec<&M> = members
        .indices()
        .into_iter()
        .filter_map(|index| masks.get(index))
        .collect();

    selected.iter().enumerate().all(|(i, first)| {
        selected
            .iter()
            .skip(i + 1)
            .all(|second| !first.intersects(second))
    })
}

/// Test whether no placement outside `members` fits next to them
///
/// `cover` must be the union of the member masks.
pub fn is_maximal<M: Mask>(masks: &[M], members: &M, cover: &M) -> bool {
    masks
        .iter()
        .enumerate()
        .filter(|(index, _)| !members.has(*index))
        .all(|(_, mask)| mask.intersects(cover))
}

/// Count distinct coverages of maximal sets by scanning every subset
///
/// # Errors
///
/// Returns `BruteForceLimit` when more than `BRUTE_FORCE_LIMIT` placements are given
pub fn count_distinct_covers_exhaustive<M: Mask>(masks: &[M], cell_count: usize) -> Result<usize> {
    if masks.len() > BRUTE_FORCE_LIMIT {
        return Err(CoverError::BruteForceLimit {
            placements: masks.len(),
            limit: BRUTE_FORCE_LIMIT,
        });
    }

    let mut covers = CoverSet::new();

    'subsets: for subset in 0_u32..(1_u32 << masks.len()) {
        let mut cover = M::empty(cell_count);
        for (index, mask) in masks.iter().enumerate() {
            if subset >> index & 1 == 1 {
                if cover.intersects(mask) {
                    continue 'subsets;
                }
                cover.union_with(mask);
            }
        }

        // A disjoint set is maximal when every outsider touches its union
        let maximal = masks
            .iter()
            .enumerate()
            .filter(|(index, _)| subset >> index & 1 == 0)
            .all(|(_, mask)| mask.intersects(&cover));

        if maximal {
            covers.insert(cover);
        }
    }

    Ok(covers.len())
}
