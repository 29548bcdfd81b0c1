//! Command-line shell, configuration, output and error handling

/// Command-line parsing and pattern batch orchestration
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Text rendering of pattern grids
pub mod display;
/// Error types
pub mod error;
/// Progress bars for pattern batches
pub mod progress;
