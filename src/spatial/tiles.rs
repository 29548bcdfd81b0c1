//! Wang tile definitions and the immutable tileset catalogue
//!
//! A tileset is an ordered list of tiles whose four borders carry symbolic
//! color labels. Tiles may sit next to each other when the touching borders
//! carry the same color. The catalogue precomputes one membership bitset per
//! west color and per south color, so the compatibility query used while
//! filling a grid is a single bitset intersection that preserves tileset
//! order.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, TilingError, invalid_parameter, invalid_tileset};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Identifier stored in pattern grids
pub type TileId = u32;

/// Symbolic edge label
///
/// Not a rendering color; two edges are compatible exactly when their
/// labels are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileColor {
    /// Label 0
    Red,
    /// Label 1
    Green,
    /// Label 2
    Yellow,
    /// Label 3
    Blue,
    /// Additional label beyond the four named ones
    Other(u8),
}

impl TileColor {
    /// Map a numeric label to a color, 0..=3 being the named colors
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Red,
            1 => Self::Green,
            2 => Self::Yellow,
            3 => Self::Blue,
            n => Self::Other(n),
        }
    }

    /// Numeric label of this color
    pub const fn index(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Yellow => 2,
            Self::Blue => 3,
            Self::Other(n) => n,
        }
    }

    /// Parse a single-character label: `R`, `G`, `Y`, `B` or a digit
    pub fn from_char(label: char) -> Option<Self> {
        match label.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'Y' => Some(Self::Yellow),
            'B' => Some(Self::Blue),
            digit => digit
                .to_digit(10)
                .and_then(|value| u8::try_from(value).ok())
                .map(Self::from_index),
        }
    }

    /// Single-character label, `*` for colors without one
    pub fn label(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Blue => 'B',
            Self::Other(n) => char::from_digit(u32::from(n), 10).unwrap_or('*'),
        }
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("Red"),
            Self::Green => f.write_str("Green"),
            Self::Yellow => f.write_str("Yellow"),
            Self::Blue => f.write_str("Blue"),
            Self::Other(n) => write!(f, "Color{n}"),
        }
    }
}

/// Side of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top border
    North,
    /// Right border
    East,
    /// Bottom border
    South,
    /// Left border
    West,
}

impl Edge {
    /// All edges in label order (N, E, S, W)
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The edge facing this one across a shared border
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Cell of the texture atlas holding a tile's artwork
///
/// Only renderers use this; constraint solving ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtlasPosition {
    /// Atlas row
    pub row: usize,
    /// Atlas column
    pub column: usize,
}

/// Wang tile with four labeled edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Unique identifier within its tileset
    pub id: TileId,
    /// Top edge label
    pub north: TileColor,
    /// Right edge label
    pub east: TileColor,
    /// Bottom edge label
    pub south: TileColor,
    /// Left edge label
    pub west: TileColor,
    /// Optional atlas placement for renderers
    pub atlas: Option<AtlasPosition>,
}

impl Tile {
    /// Create a tile from its id and edge labels in N, E, S, W order
    pub const fn new(id: TileId, [north, east, south, west]: [TileColor; 4]) -> Self {
        Self {
            id,
            north,
            east,
            south,
            west,
            atlas: None,
        }
    }

    /// Attach an atlas position
    #[must_use]
    pub const fn with_atlas(mut self, row: usize, column: usize) -> Self {
        self.atlas = Some(AtlasPosition { row, column });
        self
    }

    /// Label on the given side
    pub const fn edge(&self, edge: Edge) -> TileColor {
        match edge {
            Edge::North => self.north,
            Edge::East => self.east,
            Edge::South => self.south,
            Edge::West => self.west,
        }
    }

    /// Edge labels in N, E, S, W order
    pub const fn edges(&self) -> [TileColor; 4] {
        [self.north, self.east, self.south, self.west]
    }

    /// Whether this tile may sit east of `west` and north of `south`
    ///
    /// Absent neighbors impose no constraint.
    pub fn fits(&self, west: Option<&Self>, south: Option<&Self>) -> bool {
        west.is_none_or(|neighbor| self.west == neighbor.east)
            && south.is_none_or(|neighbor| self.south == neighbor.north)
    }
}

/// Tile as supplied by a tileset source, before validation
///
/// Edge labels are optional here so that incomplete definitions can be
/// reported instead of silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDefinition {
    /// Requested tile id
    pub id: TileId,
    /// Edge labels in N, E, S, W order
    pub edges: [Option<TileColor>; 4],
    /// Optional atlas placement
    pub atlas: Option<AtlasPosition>,
}

impl TileDefinition {
    /// Create a fully labeled definition from edges in N, E, S, W order
    pub const fn new(id: TileId, [north, east, south, west]: [TileColor; 4]) -> Self {
        Self {
            id,
            edges: [Some(north), Some(east), Some(south), Some(west)],
            atlas: None,
        }
    }

    /// Attach an atlas position
    #[must_use]
    pub const fn with_atlas(mut self, row: usize, column: usize) -> Self {
        self.atlas = Some(AtlasPosition { row, column });
        self
    }

    fn into_tile(self) -> Result<Tile> {
        let mut labels = [TileColor::Red; 4];
        for ((label, edge), slot) in self.edges.iter().zip(Edge::ALL).zip(labels.iter_mut()) {
            *slot = label.ok_or_else(|| {
                invalid_tileset(&format!("tile {} is missing its {edge} edge label", self.id))
            })?;
        }

        Ok(Tile {
            atlas: self.atlas,
            ..Tile::new(self.id, labels)
        })
    }
}

impl From<Tile> for TileDefinition {
    fn from(tile: Tile) -> Self {
        Self {
            id: tile.id,
            edges: tile.edges().map(Some),
            atlas: tile.atlas,
        }
    }
}

/// Parses `ID:NESW`, e.g. `0:RYGB`; `_` or `?` marks a missing label
impl FromStr for TileDefinition {
    type Err = TilingError;

    fn from_str(text: &str) -> Result<Self> {
        let (id_text, labels) = text
            .split_once(':')
            .ok_or_else(|| invalid_parameter("tile", &text, &"expected ID:NESW"))?;

        let id = id_text
            .trim()
            .parse::<TileId>()
            .map_err(|error| invalid_parameter("tile", &text, &error))?;

        let labels: Vec<char> = labels.trim().chars().collect();
        if labels.len() != 4 {
            return Err(invalid_parameter(
                "tile",
                &text,
                &"expected exactly four edge labels",
            ));
        }

        let mut edges = [None; 4];
        for (&label, slot) in labels.iter().zip(edges.iter_mut()) {
            *slot = match label {
                '_' | '?' => None,
                other => Some(TileColor::from_char(other).ok_or_else(|| {
                    invalid_parameter("tile", &text, &format!("unknown edge label '{other}'"))
                })?),
            };
        }

        Ok(Self {
            id,
            edges,
            atlas: None,
        })
    }
}

/// Immutable, ordered tile catalogue
///
/// Tile ids are unique. Positions (the index of a tile in source order)
/// are what candidate bitsets refer to.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: Vec<Tile>,
    positions: HashMap<TileId, usize>,
    by_west: HashMap<TileColor, TileBitset>,
    by_south: HashMap<TileColor, TileBitset>,
}

impl TileSet {
    /// Validate definitions and build the catalogue
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSet` if a definition lacks an edge label or two
    /// definitions share an id
    pub fn build<I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = TileDefinition>,
    {
        let tiles = definitions
            .into_iter()
            .map(TileDefinition::into_tile)
            .collect::<Result<Vec<_>>>()?;

        Self::from_tiles(tiles)
    }

    /// Build the catalogue from already labeled tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSet` if two tiles share an id
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(tiles.len());
        let mut by_west: HashMap<TileColor, TileBitset> = HashMap::new();
        let mut by_south: HashMap<TileColor, TileBitset> = HashMap::new();
        let tile_count = tiles.len();

        for (position, tile) in tiles.iter().enumerate() {
            if positions.insert(tile.id, position).is_some() {
                return Err(invalid_tileset(&format!("duplicate tile id {}", tile.id)));
            }

            by_west
                .entry(tile.west)
                .or_insert_with(|| TileBitset::new(tile_count))
                .insert(position);
            by_south
                .entry(tile.south)
                .or_insert_with(|| TileBitset::new(tile_count))
                .insert(position);
        }

        Ok(Self {
            tiles,
            positions,
            by_west,
            by_south,
        })
    }

    /// Look up a tile by id
    ///
    /// # Errors
    ///
    /// Returns `TileNotFound` if no tile carries `id`
    pub fn find_by_id(&self, id: TileId) -> Result<&Tile> {
        self.positions
            .get(&id)
            .and_then(|&position| self.tiles.get(position))
            .ok_or(TilingError::TileNotFound { id })
    }

    /// Tiles that may be placed east of `west` and north of `south`
    ///
    /// Returned in tileset order. A missing neighbor imposes no constraint,
    /// so with both absent this is the whole tileset.
    pub fn compatible_with(&self, west: Option<&Tile>, south: Option<&Tile>) -> Vec<&Tile> {
        self.candidates(west.map(|tile| tile.east), south.map(|tile| tile.north))
            .iter()
            .filter_map(|position| self.tiles.get(position))
            .collect()
    }

    /// Positions of tiles whose west edge is `west` and south edge is `south`
    ///
    /// `None` leaves that side unconstrained.
    pub fn candidates(&self, west: Option<TileColor>, south: Option<TileColor>) -> TileBitset {
        let mut result = TileBitset::all(self.tiles.len());

        for (color, index) in [(west, &self.by_west), (south, &self.by_south)] {
            if let Some(color) = color {
                match index.get(&color) {
                    Some(members) => result.intersect_with(members),
                    None => return TileBitset::new(self.tiles.len()),
                }
            }
        }

        result
    }

    /// Tile at a tileset position
    pub fn tile_at(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    /// Position of the tile with `id`
    pub fn position_of(&self, id: TileId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// All tiles in source order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate tiles in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the tileset has no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
