//! Static dead-end detection for tilesets
//!
//! A fill can only fail at a cell whose west and south requirements have no
//! candidate. Requirements come from labels actually present in the
//! tileset: a west requirement is some tile's east label and a south
//! requirement is some tile's north label. Checking every such combination
//! tells whether a tileset can ever dead-end without running a fill.

use crate::spatial::tiles::{TileColor, TileSet};
use std::collections::BTreeSet;

/// Requirement combination with no candidate tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadEnd {
    /// Required west label, `None` on the western boundary
    pub west: Option<TileColor>,
    /// Required south label, `None` on the southern boundary
    pub south: Option<TileColor>,
}

/// Result of checking every requirement a fill may encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintReport {
    /// Distinct east labels, i.e. possible west requirements
    pub west_requirements: Vec<TileColor>,
    /// Distinct north labels, i.e. possible south requirements
    pub south_requirements: Vec<TileColor>,
    /// Requirement combinations without any candidate
    pub dead_ends: Vec<DeadEnd>,
    /// Smallest non-zero candidate count over all combinations
    pub min_candidates: usize,
}

impl ConstraintReport {
    /// Whether no reachable requirement is unsatisfiable
    pub const fn is_dead_end_free(&self) -> bool {
        self.dead_ends.is_empty()
    }
}

/// Check every requirement combination a fill from `tileset` may meet
///
/// Combinations are examined in the order boundary cells meet them: the
/// unconstrained corner, then west-only, south-only, and finally both.
pub fn analyze(tileset: &TileSet) -> ConstraintReport {
    let west_requirements: Vec<TileColor> = tileset
        .iter()
        .map(|tile| tile.east)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let south_requirements: Vec<TileColor> = tileset
        .iter()
        .map(|tile| tile.north)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut combinations = vec![(None, None)];
    combinations.extend(west_requirements.iter().map(|&west| (Some(west), None)));
    combinations.extend(south_requirements.iter().map(|&south| (None, Some(south))));
    for &west in &west_requirements {
        for &south in &south_requirements {
            combinations.push((Some(west), Some(south)));
        }
    }

    let mut dead_ends = Vec::new();
    let mut min_candidates = usize::MAX;

    for (west, south) in combinations {
        let count = tileset.candidates(west, south).count();
        if count == 0 {
            dead_ends.push(DeadEnd { west, south });
        } else {
            min_candidates = min_candidates.min(count);
        }
    }

    ConstraintReport {
        west_requirements,
        south_requirements,
        dead_ends,
        min_candidates: if min_candidates == usize::MAX {
            0
        } else {
            min_candidates
        },
    }
}
