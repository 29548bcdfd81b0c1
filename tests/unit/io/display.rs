//! Tests for text rendering of pattern grids

#[cfg(test)]
mod tests {
    use ndarray::array;
    use wangtile::io::display::{DisplayFormat, render};
    use wangtile::spatial::grid::PatternGrid;
    use wangtile::spatial::tilesets::classic_tileset;
    use wangtile::{TileSet, TilingError};

    fn sample() -> (PatternGrid, TileSet) {
        // Indexed [x, y]: column 0 holds 4 then 6, column 1 holds 6 then 2
        let grid = PatternGrid::from_array(array![[4, 6], [6, 2]]).unwrap();
        (grid, classic_tileset().unwrap())
    }

    // Tests ids print with the top row first
    // Verified by iterating rows bottom to top
    #[test]
    fn test_render_ids_top_row_first() {
        let (grid, tileset) = sample();
        let text = render(&grid, &tileset, DisplayFormat::Ids).unwrap();

        assert_eq!(text, "6 2\n4 6");
    }

    // Tests ids are right-aligned to the widest one
    // Verified by padding to a fixed width of one
    #[test]
    fn test_render_ids_alignment() {
        let tileset = TileSet::build([]).unwrap();
        let grid = PatternGrid::from_array(array![[7], [12]]).unwrap();

        assert_eq!(render(&grid, &tileset, DisplayFormat::Ids).unwrap(), " 7 12");
    }

    // Tests edge labels print in N, E, S, W order
    // Verified by printing labels clockwise from west
    #[test]
    fn test_render_edges() {
        let (grid, tileset) = sample();
        let text = render(&grid, &tileset, DisplayFormat::Edges).unwrap();

        assert_eq!(text, "RBRB RYRY\nRBGY RBRB");
    }

    // Tests edge rendering needs every id in the tileset
    // Verified by skipping unknown ids
    #[test]
    fn test_render_edges_unknown_id() {
        let (_, tileset) = sample();
        let grid = PatternGrid::from_array(array![[99]]).unwrap();

        assert!(matches!(
            render(&grid, &tileset, DisplayFormat::Edges),
            Err(TilingError::TileNotFound { id: 99 })
        ));
    }
}
