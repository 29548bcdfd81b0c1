//! Tests for tile usage counting over generated patterns

#[cfg(test)]
mod tests {
    use ndarray::array;
    use wangtile::algorithm::selection::seeded_rng;
    use wangtile::analysis::statistics::{TileUsage, distinct_tiles, usage_counts};
    use wangtile::spatial::tilesets::classic_tileset;
    use wangtile::{PatternGrid, TilingError, fill};

    // Tests counts follow tileset order and include unused tiles
    // Verified by emitting entries in first-seen order
    #[test]
    fn test_usage_counts_in_tileset_order() {
        let tileset = classic_tileset().unwrap();
        let grid = PatternGrid::from_array(array![[6, 6], [2, 6]]).unwrap();

        let usage = usage_counts(&grid, &tileset).unwrap();

        assert_eq!(usage.len(), 8);
        assert_eq!(usage[2], TileUsage { id: 2, count: 1 });
        assert_eq!(usage[6], TileUsage { id: 6, count: 3 });
        assert_eq!(usage[0].count, 0);
        assert_eq!(distinct_tiles(&usage), 2);
    }

    // Tests counts over a generated pattern add up to its area
    // Verified by skipping the first column
    #[test]
    fn test_usage_totals() {
        let tileset = classic_tileset().unwrap();
        let grid = fill(20, 15, &tileset, &mut seeded_rng(21)).unwrap();

        let usage = usage_counts(&grid, &tileset).unwrap();
        let total: usize = usage.iter().map(|entry| entry.count).sum();

        assert_eq!(total, 300);
        let fractions: f64 = usage.iter().map(|entry| entry.fraction(total)).sum();
        assert!((fractions - 1.0).abs() < 1e-9);
    }

    // Tests ids foreign to the tileset are reported
    // Verified by silently skipping unknown ids
    #[test]
    fn test_unknown_id() {
        let tileset = classic_tileset().unwrap();
        let grid = PatternGrid::from_array(array![[0, 42]]).unwrap();

        assert!(matches!(
            usage_counts(&grid, &tileset),
            Err(TilingError::TileNotFound { id: 42 })
        ));
    }

    // Tests fractions can be computed at compile time
    // Verified by dropping const from fraction
    #[test]
    fn test_fraction_in_const_context() {
        const QUARTER: f64 = TileUsage { id: 3, count: 1 }.fraction(4);
        assert!((QUARTER - 0.25).abs() < f64::EPSILON);
    }

    // Tests fractions of an empty total are zero rather than NaN
    // Verified by dividing unconditionally
    #[test]
    fn test_fraction_of_nothing() {
        let entry = TileUsage { id: 0, count: 0 };
        assert!(entry.fraction(0).abs() < f64::EPSILON);
    }
}
