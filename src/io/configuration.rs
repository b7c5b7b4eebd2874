//! Engine constants and runtime configuration defaults

// Input markers
/// Character marking a special cell in dataset rows
pub const SPECIAL_MARKER: char = '*';
/// Character written for ordinary cells when rendering grids
pub const ORDINARY_MARKER: char = '.';

/// Number of cells covered by one placement
pub const PLACEMENT_LENGTH: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Placements beyond one machine word switch the search to wider masks
/// Default cap on distinct placements per dataset
pub const DEFAULT_MAX_PLACEMENTS: usize = 64;

/// Largest placement count the exhaustive reference counter accepts
pub const BRUTE_FORCE_LIMIT: usize = 20;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Default values for the sample generator
/// Fixed seed for reproducible sample datasets
pub const DEFAULT_SEED: u64 = 42;
/// Default sample grid rows
pub const DEFAULT_SAMPLE_ROWS: usize = 6;
/// Default sample grid columns
pub const DEFAULT_SAMPLE_COLS: usize = 6;
/// Default probability that a sampled cell is special
pub const DEFAULT_SPECIAL_DENSITY: f64 = 0.15;
/// Default number of sampled datasets
pub const DEFAULT_SAMPLE_COUNT: usize = 1;
