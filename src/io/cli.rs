//! Command-line interface for generating Wang tile patterns

use crate::algorithm::selection::seeded_rng;
use crate::algorithm::solver::PatternSolver;
use crate::analysis::constraints::{ConstraintReport, analyze};
use crate::analysis::statistics::{distinct_tiles, usage_counts};
use crate::io::configuration::{
    ATTEMPT_SEED_STRIDE, DEFAULT_ATTEMPTS, DEFAULT_PATTERN_COUNT, DEFAULT_PATTERN_HEIGHT,
    DEFAULT_PATTERN_WIDTH, DEFAULT_SEED, MAX_GRID_DIMENSION,
};
use crate::io::display::{DisplayFormat, render};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::PatternGrid;
use crate::spatial::tiles::{TileColor, TileDefinition, TileSet};
use crate::spatial::tilesets::{classic_tileset, complete_tileset};
use clap::{Parser, ValueEnum};
use std::io::Write;

/// Built-in tileset selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TilesetChoice {
    /// Eight tiles, two labels per axis, never dead-ends
    Classic,
    /// All sixteen tiles labelable from two colors per axis
    Complete,
}

#[derive(Parser)]
#[command(name = "wangtile")]
#[command(
    author,
    version,
    about = "Generate aperiodic Wang tile patterns from edge-colored tilesets"
)]
/// Command-line arguments for the pattern generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Pattern width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_PATTERN_WIDTH)]
    pub width: usize,

    /// Pattern height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_PATTERN_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of patterns to generate, seeded consecutively
    #[arg(short = 'n', long, default_value_t = DEFAULT_PATTERN_COUNT)]
    pub count: usize,

    /// Seeds to try per pattern before reporting a dead-end
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Built-in tileset used when no --tile is given
    #[arg(short, long, value_enum, default_value_t = TilesetChoice::Classic)]
    pub tileset: TilesetChoice,

    /// Custom tile as ID:NESW (e.g. 0:RYGB), repeat for each tile
    #[arg(long = "tile", value_name = "ID:NESW")]
    pub tiles: Vec<TileDefinition>,

    /// Cell rendering
    #[arg(short, long, value_enum, default_value_t = DisplayFormat::Ids)]
    pub format: DisplayFormat,

    /// Print per-tile usage after each pattern
    #[arg(long)]
    pub stats: bool,

    /// Report dead-end constraints of the tileset and exit
    #[arg(long)]
    pub check: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the tileset selected by the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSet` if the custom definitions are incomplete or
    /// reuse an id
    pub fn build_tileset(&self) -> Result<TileSet> {
        if !self.tiles.is_empty() {
            return TileSet::build(self.tiles.iter().cloned());
        }

        match self.tileset {
            TilesetChoice::Classic => classic_tileset(),
            TilesetChoice::Complete => complete_tileset(
                &[TileColor::Yellow, TileColor::Blue],
                &[TileColor::Red, TileColor::Green],
            ),
        }
    }

    /// Validate numeric arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for dimensions outside
    /// `1..=MAX_GRID_DIMENSION` or a zero count or attempt limit
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        for (parameter, value) in [("count", self.count), ("attempts", self.attempts)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
        }

        Ok(())
    }
}

/// Seed for `attempt` of pattern `pattern_index`
///
/// First attempts use consecutive seeds starting at `base`; retries are
/// offset by `ATTEMPT_SEED_STRIDE`.
pub const fn derive_seed(base: u64, pattern_index: usize, attempt: usize) -> u64 {
    base.wrapping_add(pattern_index as u64)
        .wrapping_add(ATTEMPT_SEED_STRIDE.wrapping_mul(attempt as u64))
}

/// Runs pattern generation according to the command line
pub struct PatternRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PatternRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and print patterns, or the constraint report with `--check`
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, tileset construction,
    /// generation or writing to stdout fails
    pub fn run(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Same as `run`, writing output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, tileset construction,
    /// generation or writing fails
    pub fn run_to<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.cli.validate()?;
        let tileset = self.cli.build_tileset()?;

        if self.cli.check {
            return write_report(out, &analyze(&tileset));
        }

        let count = self.cli.count;
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(count);
        }

        for index in 0..count {
            let (grid, seed) = self.generate(&tileset, index)?;

            if count > 1 {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "# pattern {index} (seed {seed})")?;
            }
            writeln!(out, "{}", render(&grid, &tileset, self.cli.format)?)?;

            if self.cli.stats {
                write_stats(out, &grid, &tileset)?;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    // Allow print for user feedback on dead-end retries
    #[allow(clippy::print_stderr)]
    fn generate(&mut self, tileset: &TileSet, index: usize) -> Result<(PatternGrid, u64)> {
        let (width, height) = (self.cli.width, self.cli.height);
        let mut solver = PatternSolver::new(tileset)?;
        let mut last_error = None;

        for attempt in 0..self.cli.attempts {
            let seed = derive_seed(self.cli.seed, index, attempt);
            let mut rng = seeded_rng(seed);

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_pattern(index, format!("pattern {index} seed {seed}"), width);
            }

            let result = match self.progress_manager.as_mut() {
                Some(pm) => solver.fill_with_progress(width, height, &mut rng, |columns| {
                    pm.update_columns(index, columns);
                }),
                None => solver.fill(width, height, &mut rng),
            };

            match result {
                Ok(grid) => {
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.complete_pattern(index);
                    }
                    return Ok((grid, seed));
                }
                Err(error @ TilingError::NoCompatibleTile { .. }) => {
                    if !self.cli.quiet {
                        eprintln!("Dead-end with seed {seed}: {error}");
                    }
                    last_error = Some(error);
                }
                Err(error) => return Err(error),
            }
        }

        Err(last_error
            .unwrap_or_else(|| invalid_parameter("attempts", &0, &"must be at least 1")))
    }
}

fn write_report<W: Write>(out: &mut W, report: &ConstraintReport) -> Result<()> {
    writeln!(
        out,
        "west requirements: {}",
        join_colors(&report.west_requirements)
    )?;
    writeln!(
        out,
        "south requirements: {}",
        join_colors(&report.south_requirements)
    )?;
    writeln!(out, "minimum candidates: {}", report.min_candidates)?;

    if report.is_dead_end_free() {
        writeln!(out, "no dead-ends")?;
    } else {
        for dead_end in &report.dead_ends {
            writeln!(
                out,
                "dead-end: west {} south {}",
                describe_requirement(dead_end.west),
                describe_requirement(dead_end.south)
            )?;
        }
    }

    Ok(())
}

fn join_colors(colors: &[TileColor]) -> String {
    colors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_requirement(color: Option<TileColor>) -> String {
    color.map_or_else(|| "any".to_string(), |color| color.to_string())
}

fn write_stats<W: Write>(out: &mut W, grid: &PatternGrid, tileset: &TileSet) -> Result<()> {
    let usage = usage_counts(grid, tileset)?;
    let total = grid.width() * grid.height();

    writeln!(
        out,
        "# {} of {} tiles used",
        distinct_tiles(&usage),
        tileset.len()
    )?;
    for entry in &usage {
        writeln!(
            out,
            "# tile {:>3}: {:>6} ({:.1}%)",
            entry.id,
            entry.count,
            entry.fraction(total) * 100.0
        )?;
    }

    Ok(())
}
