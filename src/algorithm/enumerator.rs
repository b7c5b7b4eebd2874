//! Maximal independent set enumeration by Bron–Kerbosch search with pivoting
//!
//! The search runs over the complement of the conflict graph, where maximal
//! cliques coincide with maximal sets of pairwise non-overlapping placements.
//! Each call receives its own [`SearchState`]; the only state shared between
//! sibling branches is the move of an explored vertex from the candidate set
//! to the excluded set, done after the branch returns.

use crate::algorithm::conflict::ConflictGraph;
use crate::algorithm::mask::Mask;

/// Recursion-local `(R, P, X)` triple plus the cells covered by `R`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState<M> {
    /// Committed placements (`R`)
    pub members: M,
    /// Placements that can still extend `members` (`P`)
    pub candidates: M,
    /// Placements already explored from this prefix (`X`)
    pub excluded: M,
    /// Union of the coverage masks of `members`
    pub cover: M,
}

impl<M: Mask> SearchState<M> {
    /// Root state: nothing committed, every placement a candidate
    pub fn initial(graph: &ConflictGraph<M>, cell_count: usize) -> Self {
        let vertex_count = graph.vertex_count();
        Self {
            members: M::empty(vertex_count),
            candidates: graph.vertices().clone(),
            excluded: M::empty(vertex_count),
            cover: M::empty(cell_count),
        }
    }

    /// True when `members` cannot be extended and was not reached before
    pub fn is_maximal(&self) -> bool {
        self.candidates.is_clear() && self.excluded.is_clear()
    }

    /// State after committing `vertex`
    #[must_use]
    pub fn extend(&self, vertex: usize, neighbours: &M, cells: &M) -> Self {
        let mut members = self.members.clone();
        members.include(vertex);
        Self {
            members,
            candidates: self.candidates.intersection(neighbours),
            excluded: self.excluded.intersection(neighbours),
            cover: self.cover.union(cells),
        }
    }
}

/// Counters describing one enumeration run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Number of recursive calls made
    pub search_calls: usize,
    /// Number of maximal sets reported to the visitor
    pub maximal_sets: usize,
}

/// Choose the vertex of `P ∪ X` with the most complement neighbours in `P`
///
/// Vertices are scanned in ascending order and the first maximum wins.
pub fn select_pivot<M: Mask>(
    graph: &ConflictGraph<M>,
    candidates: &M,
    excluded: &M,
) -> Option<usize> {
    let mut remaining = candidates.union(excluded);
    let mut best: Option<(usize, usize)> = None;

    while let Some(vertex) = remaining.lowest() {
        remaining.exclude(vertex);
        let Some(neighbours) = graph.complement(vertex) else {
            continue;
        };
        let score = candidates.intersection(neighbours).cardinality();
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((vertex, score));
        }
    }

    best.map(|(vertex, _)| vertex)
}

/// Depth-first enumerator reporting every maximal independent set once
pub struct MaximalSetEnumerator<'a, M, F> {
    graph: &'a ConflictGraph<M>,
    masks: &'a [M],
    visitor: F,
    stats: EnumerationStats,
}

impl<'a, M, F> MaximalSetEnumerator<'a, M, F>
where
    M: Mask,
    F: FnMut(&M, &M),
{
    /// Create an enumerator over `graph` whose vertices cover `masks`
    ///
    /// The visitor receives the member mask and the coverage mask of each
    /// maximal set.
    pub fn new(graph: &'a ConflictGraph<M>, masks: &'a [M], visitor: F) -> Self {
        Self {
            graph,
            masks,
            visitor,
            stats: EnumerationStats::default(),
        }
    }

    /// Run the search from `state` and return the accumulated counters
    pub fn run(mut self, state: SearchState<M>) -> EnumerationStats {
        self.expand(state);
        self.stats
    }

    fn expand(&mut self, mut state: SearchState<M>) {
        self.stats.search_calls += 1;

        if state.is_maximal() {
            self.stats.maximal_sets += 1;
            (self.visitor)(&state.members, &state.cover);
            return;
        }

        let graph = self.graph;
        let masks = self.masks;

        let mut branch = state.candidates.clone();
        if let Some(neighbours) = select_pivot(graph, &state.candidates, &state.excluded)
            .and_then(|pivot| graph.complement(pivot))
        {
            branch.difference_with(neighbours);
        }

        while let Some(vertex) = branch.lowest() {
            branch.exclude(vertex);

            let (Some(neighbours), Some(cells)) = (graph.complement(vertex), masks.get(vertex))
            else {
                continue;
            };

            self.expand(state.extend(vertex, neighbours, cells));

            state.candidates.exclude(vertex);
            state.excluded.include(vertex);
        }
    }
}

/// Visit every maximal independent set of the conflict graph
///
/// `masks` holds the coverage mask of each vertex over `cell_count` cells.
/// Sets are reported in a deterministic order for a fixed placement list.
pub fn enumerate_maximal_sets<M, F>(
    graph: &ConflictGraph<M>,
    masks: &[M],
    cell_count: usize,
    visitor: F,
) -> EnumerationStats
where
    M: Mask,
    F: FnMut(&M, &M),
{
    let state = SearchState::initial(graph, cell_count);
    MaximalSetEnumerator::new(graph, masks, visitor).run(state)
}
