//! Tile usage statistics for finished patterns

use crate::io::error::{Result, TilingError};
use crate::spatial::grid::PatternGrid;
use crate::spatial::tiles::{TileId, TileSet};

/// Number of cells holding one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileUsage {
    /// Tile id
    pub id: TileId,
    /// Cells holding this tile
    pub count: usize,
}

impl TileUsage {
    /// Share of `total` cells held by this tile
    pub const fn fraction(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

/// Count how often each tile appears in `grid`
///
/// One entry per tile in tileset order, unused tiles included with a zero
/// count.
///
/// # Errors
///
/// Returns `TileNotFound` if the grid holds an id the tileset lacks
pub fn usage_counts(grid: &PatternGrid, tileset: &TileSet) -> Result<Vec<TileUsage>> {
    let mut counts = vec![0usize; tileset.len()];

    for (_, id) in grid.iter() {
        let slot = tileset
            .position_of(id)
            .and_then(|position| counts.get_mut(position))
            .ok_or(TilingError::TileNotFound { id })?;
        *slot += 1;
    }

    Ok(tileset
        .iter()
        .zip(counts)
        .map(|(tile, count)| TileUsage { id: tile.id, count })
        .collect())
}

/// Number of distinct tiles appearing at least once
pub fn distinct_tiles(usage: &[TileUsage]) -> usize {
    usage.iter().filter(|entry| entry.count > 0).count()
}
