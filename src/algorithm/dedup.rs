//! Deduplication of maximal sets by the cells they cover

use std::collections::HashSet;

use crate::algorithm::mask::Mask;

/// Distinct coverage masks collected from maximal sets
///
/// Keyed by covered cells, not by which placements produced them: two
/// different maximal sets covering the same cells count once.
#[derive(Clone, Debug)]
pub struct CoverSet<M> {
    covers: HashSet<M>,
    observed: usize,
}

impl<M> Default for CoverSet<M> {
    fn default() -> Self {
        Self {
            covers: HashSet::new(),
            observed: 0,
        }
    }
}

impl<M: Mask> CoverSet<M> {
    /// Create an empty cover set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a coverage mask, returning `true` if it was not seen before
    pub fn insert(&mut self, cover: M) -> bool {
        self.observed += 1;
        self.covers.insert(cover)
    }

    /// Test whether a coverage mask was recorded
    pub fn contains(&self, cover: &M) -> bool {
        self.covers.contains(cover)
    }

    /// Number of distinct coverage masks
    pub fn len(&self) -> usize {
        self.covers.len()
    }

    /// Test if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }

    /// Number of insertions, duplicates included
    pub const fn observed(&self) -> usize {
        self.observed
    }

    /// Iterate over the distinct coverage masks in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &M> + '_ {
        self.covers.iter()
    }
}

impl<M: Mask> Extend<M> for CoverSet<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        for cover in iter {
            self.insert(cover);
        }
    }
}

/// Count the distinct values of a stream of coverage masks
pub fn count_distinct<M, I>(covers: I) -> usize
where
    M: Mask,
    I: IntoIterator<Item = M>,
{
    let mut set = CoverSet::new();
    set.extend(covers);
    set.len()
}
