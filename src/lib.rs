//! Counting distinct coverages of maximal non-overlapping tromino placements
//!
//! Straight three-cell placements are generated around the special cells of a
//! grid, their overlap graph is built, every maximal set of non-overlapping
//! placements is enumerated with a pivoting Bron–Kerbosch search, and the
//! distinct sets of covered cells are counted.

#![forbid(unsafe_code)]

/// Conflict graph, maximal set enumeration and cover deduplication
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid model and placement generation
pub mod spatial;

pub use algorithm::executor::{CoverCounter, CoverReport, EngineConfig, count_distinct_covers};
pub use io::error::{CoverError, Result};
