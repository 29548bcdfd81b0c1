//! Error types for tileset construction, pattern generation and output

use crate::spatial::tiles::{TileColor, TileId};
use std::fmt;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Tile definitions cannot form a tileset
    ///
    /// Raised for duplicate ids and for definitions missing an edge label.
    InvalidTileSet {
        /// Description of what's wrong with the definitions
        reason: String,
    },

    /// Lookup by tile id failed
    ///
    /// The solver only stores ids drawn from the same tileset, so this
    /// indicates an internal consistency bug or a grid paired with the
    /// wrong tileset.
    TileNotFound {
        /// The id that has no tile
        id: TileId,
    },

    /// Requested grid has a zero dimension
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Pattern generation was asked to draw from a tileset with no tiles
    EmptyTileSet,

    /// Dead-end: no tile satisfies the constraints at a cell
    ///
    /// Terminal for the whole fill. The failure is a deterministic
    /// property of the tileset, dimensions and random draws.
    NoCompatibleTile {
        /// Column of the unsatisfiable cell
        x: usize,
        /// Row of the unsatisfiable cell (0 is the bottom row)
        y: usize,
        /// Required west edge color, if the cell has a west neighbor
        west: Option<TileColor>,
        /// Required south edge color, if the cell has a south neighbor
        south: Option<TileColor>,
    },

    /// Command-line or configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Writing generated output failed
    Output {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

struct Constraint(Option<TileColor>);

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(color) => write!(f, "{color}"),
            None => f.write_str("any"),
        }
    }
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileSet { reason } => {
                write!(f, "Invalid tileset: {reason}")
            }
            Self::TileNotFound { id } => {
                write!(f, "Tile {id} is not part of the tileset")
            }
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid pattern dimensions {width}x{height}: both must be at least 1 and the grid must fit in memory"
                )
            }
            Self::EmptyTileSet => {
                write!(f, "Cannot generate a pattern from an empty tileset")
            }
            Self::NoCompatibleTile { x, y, west, south } => {
                write!(
                    f,
                    "No compatible tile at ({x}, {y}) for west edge {} and south edge {}",
                    Constraint(*west),
                    Constraint(*south)
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid tileset error
pub fn invalid_tileset(reason: &impl ToString) -> TilingError {
    TilingError::InvalidTileSet {
        reason: reason.to_string(),
    }
}
