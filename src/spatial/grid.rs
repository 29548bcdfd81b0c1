//! Finished pattern grids and adjacency verification
//!
//! Cells are addressed as `(x, y)` with `x` growing eastwards and `y`
//! growing northwards, so `(0, 0)` is the bottom-left corner. The backing
//! array is shaped `(width, height)`, which makes its standard layout the
//! column-by-column order the solver places tiles in.

use crate::io::error::{Result, TilingError};
use crate::spatial::tiles::{Edge, TileColor, TileId, TileSet};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

/// Immutable width x height matrix of tile ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    cells: Array2<TileId>,
}

/// Adjacent pair whose touching edges disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeMismatch {
    /// Column of the offending cell
    pub x: usize,
    /// Row of the offending cell
    pub y: usize,
    /// Side of `(x, y)` that disagrees with its neighbor (west or south)
    pub edge: Edge,
    /// Label the neighbor presents across the border
    pub expected: TileColor,
    /// Label the cell carries on `edge`
    pub found: TileColor,
}

impl PatternGrid {
    /// Build a grid from ids listed column by column, bottom to top
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if a dimension is zero or `cells` does not
    /// hold exactly `width * height` ids
    pub fn from_columns(width: usize, height: usize, cells: Vec<TileId>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TilingError::InvalidDimensions { width, height });
        }

        let cells = Array2::from_shape_vec((width, height), cells)
            .map_err(|_shape| TilingError::InvalidDimensions { width, height })?;

        Ok(Self { cells })
    }

    /// Wrap an array indexed `[x, y]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either axis is empty
    pub fn from_array(cells: Array2<TileId>) -> Result<Self> {
        let (width, height) = cells.dim();
        if width == 0 || height == 0 {
            return Err(TilingError::InvalidDimensions { width, height });
        }
        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.len_of(Axis(0))
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.len_of(Axis(1))
    }

    /// Tile id at `(x, y)`
    pub fn get(&self, x: usize, y: usize) -> Option<TileId> {
        self.cells.get((x, y)).copied()
    }

    /// Column `x`, bottom cell first
    pub fn column(&self, x: usize) -> Option<ArrayView1<'_, TileId>> {
        (x < self.width()).then(|| self.cells.index_axis(Axis(0), x))
    }

    /// Row `y`, west cell first
    pub fn row(&self, y: usize) -> Option<ArrayView1<'_, TileId>> {
        (y < self.height()).then(|| self.cells.index_axis(Axis(1), y))
    }

    /// View of the backing array indexed `[x, y]`
    pub fn cells(&self) -> ArrayView2<'_, TileId> {
        self.cells.view()
    }

    /// Consume the grid, returning the backing array indexed `[x, y]`
    pub fn into_array(self) -> Array2<TileId> {
        self.cells
    }

    /// Iterate `((x, y), id)` in placement order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), TileId)> + '_ {
        self.cells.indexed_iter().map(|(position, &id)| (position, id))
    }

    /// Every adjacent pair violating the west/east or south/north rule
    ///
    /// # Errors
    ///
    /// Returns `TileNotFound` if the grid holds an id the tileset lacks
    pub fn mismatches(&self, tileset: &TileSet) -> Result<Vec<EdgeMismatch>> {
        let mut mismatches = Vec::new();

        for ((x, y), id) in self.iter() {
            let tile = tileset.find_by_id(id)?;

            let neighbors = [
                (Edge::West, x.checked_sub(1).map(|west_x| (west_x, y))),
                (Edge::South, y.checked_sub(1).map(|south_y| (x, south_y))),
            ];

            for (edge, neighbor) in neighbors {
                let Some(neighbor_id) = neighbor.and_then(|(nx, ny)| self.get(nx, ny)) else {
                    continue;
                };
                let expected = tileset.find_by_id(neighbor_id)?.edge(edge.opposite());
                let found = tile.edge(edge);
                if expected != found {
                    mismatches.push(EdgeMismatch {
                        x,
                        y,
                        edge,
                        expected,
                        found,
                    });
                }
            }
        }

        Ok(mismatches)
    }
}
