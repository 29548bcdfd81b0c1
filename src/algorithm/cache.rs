use crate::algorithm::bitset::TileBitset;
use crate::spatial::tiles::TileColor;
use std::collections::HashMap;

/// Edge requirements at a cell
///
/// `west` is the east label of the west neighbor and `south` the north
/// label of the south neighbor; `None` where the cell has no such neighbor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ConstraintKey {
    /// Required west edge label
    pub west: Option<TileColor>,
    /// Required south edge label
    pub south: Option<TileColor>,
}

impl ConstraintKey {
    /// Create a key from the two optional requirements
    pub const fn new(west: Option<TileColor>, south: Option<TileColor>) -> Self {
        Self { west, south }
    }
}

/// Memoization cache for candidate sets
///
/// A tileset with `c` colors yields at most `(c + 1)^2` distinct
/// constraints, so after the first few cells nearly every lookup is a hit.
#[derive(Default)]
pub struct CompatibilityCache {
    entries: HashMap<ConstraintKey, TileBitset>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl CompatibilityCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve cached candidates or compute and store them
    pub fn get_or_compute<F>(&mut self, key: ConstraintKey, compute_fn: F) -> &TileBitset
    where
        F: FnOnce() -> TileBitset,
    {
        use std::collections::hash_map::Entry;

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(compute_fn())
            }
        }
    }

    /// Number of distinct constraints stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
