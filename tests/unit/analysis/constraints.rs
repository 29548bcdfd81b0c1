//! Tests for static dead-end detection over tilesets

#[cfg(test)]
mod tests {
    use wangtile::analysis::constraints::{DeadEnd, analyze};
    use wangtile::spatial::tilesets::{classic_tileset, complete_tileset};
    use wangtile::{Tile, TileColor, TileSet};

    use TileColor::{Blue, Green, Red, Yellow};

    // Tests the classic set is dead-end free with two candidates everywhere
    // Verified by dropping one tile from the classic set
    #[test]
    fn test_classic_is_dead_end_free() {
        let report = analyze(&classic_tileset().unwrap());

        assert!(report.is_dead_end_free());
        assert_eq!(report.west_requirements, vec![Yellow, Blue]);
        assert_eq!(report.south_requirements, vec![Red, Green]);
        assert_eq!(report.min_candidates, 2);
    }

    // Tests the complete set offers four candidates for every requirement pair
    // Verified by generating only matching north/south pairs
    #[test]
    fn test_complete_candidate_floor() {
        let report = analyze(&complete_tileset(&[Yellow, Blue], &[Red, Green]).unwrap());

        assert!(report.is_dead_end_free());
        assert_eq!(report.min_candidates, 4);
    }

    // Tests a missing color pair is reported as a dead-end
    // Verified by only checking single requirements
    #[test]
    fn test_pair_dead_end() {
        let tileset = TileSet::from_tiles(vec![
            Tile::new(0, [Red, Blue, Green, Blue]),
            Tile::new(1, [Red, Blue, Red, Green]),
        ])
        .unwrap();

        let report = analyze(&tileset);

        assert!(!report.is_dead_end_free());
        assert_eq!(
            report.dead_ends,
            vec![DeadEnd {
                west: Some(Blue),
                south: Some(Red)
            }]
        );
        assert_eq!(report.min_candidates, 1);
    }

    // Tests boundary requirements are checked on their own
    // Verified by skipping the west-only and south-only combinations
    #[test]
    fn test_boundary_dead_ends() {
        let tileset = TileSet::from_tiles(vec![Tile::new(0, [Red, Blue, Green, Yellow])]).unwrap();

        let report = analyze(&tileset);

        assert!(report.dead_ends.contains(&DeadEnd {
            west: Some(Blue),
            south: None
        }));
        assert!(report.dead_ends.contains(&DeadEnd {
            west: None,
            south: Some(Red)
        }));
        assert!(report.dead_ends.contains(&DeadEnd {
            west: Some(Blue),
            south: Some(Red)
        }));
        assert_eq!(report.dead_ends.len(), 3);
    }

    // Tests an empty tileset cannot even fill its first cell
    // Verified by starting the combinations at the west-only requirements
    #[test]
    fn test_empty_tileset_report() {
        let report = analyze(&TileSet::build(Vec::new()).unwrap());

        assert_eq!(
            report.dead_ends,
            vec![DeadEnd {
                west: None,
                south: None
            }]
        );
        assert_eq!(report.min_candidates, 0);
    }
}
