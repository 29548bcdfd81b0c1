//! Aperiodic Wang tile pattern generation
//!
//! Tiles carry a color label on each of their four edges. A pattern is
//! filled column by column, west to east and bottom to top, drawing each
//! tile uniformly among those whose west and south edges match the
//! neighbors already placed.

#![forbid(unsafe_code)]

/// Candidate tracking, uniform selection and the pattern solver
pub mod algorithm;
/// Dead-end detection and usage statistics
pub mod analysis;
/// Command-line shell, configuration, output and error handling
pub mod io;
/// Tiles, tilesets and pattern grids
pub mod spatial;

pub use algorithm::solver::{PatternSolver, fill};
pub use io::error::{Result, TilingError};
pub use spatial::grid::PatternGrid;
pub use spatial::tiles::{Tile, TileColor, TileDefinition, TileId, TileSet};
