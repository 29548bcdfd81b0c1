//! Text rendering of pattern grids
//!
//! Rows are written top first (highest `y`), so the text reads the same way
//! up as the pattern.

use crate::io::error::Result;
use crate::spatial::grid::PatternGrid;
use crate::spatial::tiles::TileSet;
use clap::ValueEnum;

/// How each cell is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayFormat {
    /// Tile ids, right-aligned to a common width
    Ids,
    /// Edge labels in N, E, S, W order, e.g. `RYGB`
    Edges,
}

/// Render `grid` as text, one line per row, top row first
///
/// # Errors
///
/// Returns `TileNotFound` in `Edges` format if the grid holds an id the
/// tileset lacks
pub fn render(grid: &PatternGrid, tileset: &TileSet, format: DisplayFormat) -> Result<String> {
    let cell_width = match format {
        DisplayFormat::Ids => grid
            .iter()
            .map(|(_, id)| id.to_string().len())
            .max()
            .unwrap_or(1),
        DisplayFormat::Edges => 4,
    };

    let mut lines = Vec::with_capacity(grid.height());
    for y in (0..grid.height()).rev() {
        let mut cells = Vec::with_capacity(grid.width());
        for x in 0..grid.width() {
            let Some(id) = grid.get(x, y) else {
                continue;
            };
            let cell = match format {
                DisplayFormat::Ids => format!("{id:>cell_width$}"),
                DisplayFormat::Edges => tileset
                    .find_by_id(id)?
                    .edges()
                    .iter()
                    .map(|color| color.label())
                    .collect(),
            };
            cells.push(cell);
        }
        lines.push(cells.join(" "));
    }

    Ok(lines.join("\n"))
}
