/// Exhaustive reference counter and independent-set checks
pub mod brute_force;
/// Overlap graph between placements and its complement
pub mod conflict;
/// Deduplication of coverage masks
pub mod dedup;
/// Bron–Kerbosch enumeration of maximal independent sets
pub mod enumerator;
/// Pipeline orchestration and representation selection
pub mod executor;
/// Fixed-width and dynamic bit-set representations
pub mod mask;
