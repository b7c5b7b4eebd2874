//! Input/output operations, configuration and error handling

/// Command-line interface and dataset processing
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Dataset parsing
pub mod parser;
/// Progress display for batch runs
pub mod progress;
/// Seeded random dataset generation
pub mod sample;
