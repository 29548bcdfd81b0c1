//! Built-in tile catalogues

use crate::io::configuration::ATLAS_COLUMNS;
use crate::io::error::{Result, invalid_tileset};
use crate::spatial::tiles::{Tile, TileColor, TileId, TileSet};

/// The eight-tile set with Red/Green horizontal borders and Yellow/Blue
/// vertical borders
///
/// Every combination of a west and a south requirement has exactly two
/// candidates, so fills from this set never dead-end. Atlas positions
/// follow the 2 x 4 sheet the tiles are usually painted on.
///
/// # Errors
///
/// Never fails in practice; the result type is shared with `TileSet::build`
pub fn classic_tileset() -> Result<TileSet> {
    use TileColor::{Blue, Green, Red, Yellow};

    TileSet::from_tiles(vec![
        Tile::new(0, [Red, Yellow, Green, Blue]).with_atlas(0, 2),
        Tile::new(1, [Green, Blue, Green, Blue]).with_atlas(1, 3),
        Tile::new(2, [Red, Yellow, Red, Yellow]).with_atlas(1, 1),
        Tile::new(3, [Green, Blue, Red, Yellow]).with_atlas(1, 2),
        Tile::new(4, [Red, Blue, Green, Yellow]).with_atlas(0, 0),
        Tile::new(5, [Green, Yellow, Green, Yellow]).with_atlas(0, 3),
        Tile::new(6, [Red, Blue, Red, Blue]).with_atlas(0, 1),
        Tile::new(7, [Green, Yellow, Red, Blue]).with_atlas(1, 0),
    ])
}

/// Every tile that can be labeled from the given colors
///
/// North and south edges take colors from `vertical`, east and west edges
/// from `horizontal`. Ids are dense from 0 in N, E, S, W nesting order and
/// atlas rows hold `ATLAS_COLUMNS` tiles each. Two colors per axis give 16
/// tiles.
///
/// # Errors
///
/// Returns `InvalidTileSet` if the combination count does not fit in a
/// tile id
pub fn complete_tileset(horizontal: &[TileColor], vertical: &[TileColor]) -> Result<TileSet> {
    let mut tiles = Vec::with_capacity(
        vertical
            .len()
            .saturating_mul(vertical.len())
            .saturating_mul(horizontal.len())
            .saturating_mul(horizontal.len()),
    );

    for &north in vertical {
        for &east in horizontal {
            for &south in vertical {
                for &west in horizontal {
                    let index = tiles.len();
                    let id = TileId::try_from(index).map_err(|_overflow| {
                        invalid_tileset(&"too many edge color combinations")
                    })?;
                    tiles.push(
                        Tile::new(id, [north, east, south, west])
                            .with_atlas(index / ATLAS_COLUMNS, index % ATLAS_COLUMNS),
                    );
                }
            }
        }
    }

    TileSet::from_tiles(tiles)
}
