//! Tile catalogues and pattern grids
//!
//! This module contains:
//! - Edge-labeled tiles and the immutable tileset
//! - Built-in tilesets
//! - The finished pattern grid and its adjacency checks

/// Pattern grid storage and verification
pub mod grid;
/// Tile model and tileset catalogue
pub mod tiles;
/// Built-in tilesets
pub mod tilesets;

pub use grid::PatternGrid;
pub use tiles::{Tile, TileColor, TileSet};
