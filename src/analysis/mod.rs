//! Analysis of tilesets and generated patterns

/// Dead-end detection for tilesets
pub mod constraints;
/// Tile usage statistics of generated patterns
pub mod statistics;
