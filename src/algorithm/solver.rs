//! Single-pass Wang pattern fill
//!
//! Cells are visited column by column from west to east and, within a
//! column, from south to north. When `(x, y)` is reached its west neighbor
//! `(x - 1, y)` and south neighbor `(x, y - 1)` are already fixed, so the
//! only constraints are their east and north labels. One candidate is drawn
//! uniformly per cell. There is no backtracking: a cell without candidates
//! ends the fill with `NoCompatibleTile` and the partial grid is dropped.

use crate::algorithm::cache::{CacheStats, CompatibilityCache, ConstraintKey};
use crate::algorithm::selection::select_uniform;
use crate::io::error::{Result, TilingError};
use crate::spatial::grid::PatternGrid;
use crate::spatial::tiles::{Tile, TileId, TileSet};
use rand::Rng;

/// Fill a `width` x `height` grid from `tileset`
///
/// Deterministic for a deterministic `rng`: the same seed yields the same
/// grid.
///
/// # Errors
///
/// Returns:
/// - `InvalidDimensions` if `width` or `height` is zero, or the grid is too
///   large to allocate
/// - `EmptyTileSet` if the tileset has no tiles
/// - `NoCompatibleTile` if a cell has no candidate (dead-end)
pub fn fill<R: Rng>(
    width: usize,
    height: usize,
    tileset: &TileSet,
    rng: &mut R,
) -> Result<PatternGrid> {
    validate_dimensions(width, height)?;
    PatternSolver::new(tileset)?.fill(width, height, rng)
}

/// Pattern generator bound to one tileset
pub struct PatternSolver<'a> {
    tileset: &'a TileSet,
    last_stats: CacheStats,
}

impl<'a> PatternSolver<'a> {
    /// Create a solver drawing from `tileset`
    ///
    /// # Errors
    ///
    /// Returns `EmptyTileSet` if the tileset has no tiles
    pub fn new(tileset: &'a TileSet) -> Result<Self> {
        if tileset.is_empty() {
            return Err(TilingError::EmptyTileSet);
        }

        Ok(Self {
            tileset,
            last_stats: CacheStats::default(),
        })
    }

    /// The tileset tiles are drawn from
    pub const fn tileset(&self) -> &'a TileSet {
        self.tileset
    }

    /// Candidate cache statistics of the most recent fill
    pub const fn cache_stats(&self) -> CacheStats {
        self.last_stats
    }

    /// Fill a `width` x `height` grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a zero or unallocatable size and
    /// `NoCompatibleTile` on a dead-end
    pub fn fill<R: Rng>(
        &mut self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<PatternGrid> {
        self.fill_with_progress(width, height, rng, |_columns| {})
    }

    /// Fill a grid, reporting the number of completed columns after each one
    ///
    /// Draws are identical to `fill`; the callback only observes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a zero or unallocatable size and
    /// `NoCompatibleTile` on a dead-end
    pub fn fill_with_progress<R, F>(
        &mut self,
        width: usize,
        height: usize,
        rng: &mut R,
        mut on_column: F,
    ) -> Result<PatternGrid>
    where
        R: Rng,
        F: FnMut(usize),
    {
        let cell_count = validate_dimensions(width, height)?;

        let mut cache = CompatibilityCache::new();
        let mut cells: Vec<TileId> = Vec::new();
        cells
            .try_reserve_exact(cell_count)
            .map_err(|_allocation| TilingError::InvalidDimensions { width, height })?;

        for x in 0..width {
            for y in 0..height {
                // Column-major storage: the west neighbor is one column back
                let west = x
                    .checked_sub(1)
                    .and_then(|west_x| cells.get(west_x * height + y));
                let south = if y > 0 { cells.last() } else { None };

                let key = ConstraintKey::new(
                    self.neighbor(west)?.map(|tile| tile.east),
                    self.neighbor(south)?.map(|tile| tile.north),
                );

                let candidates = cache.get_or_compute(key, || {
                    self.tileset.candidates(key.west, key.south)
                });

                let tile = select_uniform(candidates, rng)
                    .and_then(|position| self.tileset.tile_at(position))
                    .ok_or(TilingError::NoCompatibleTile {
                        x,
                        y,
                        west: key.west,
                        south: key.south,
                    })?;

                cells.push(tile.id);
            }

            on_column(x + 1);
        }

        self.last_stats = cache.stats;
        PatternGrid::from_columns(width, height, cells)
    }

    fn neighbor(&self, id: Option<&TileId>) -> Result<Option<&'a Tile>> {
        id.map(|&id| self.tileset.find_by_id(id)).transpose()
    }
}

/// Number of cells of a `width` x `height` grid, rejecting empty and
/// unrepresentable sizes
const fn validate_dimensions(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(TilingError::InvalidDimensions { width, height }),
    }
}
