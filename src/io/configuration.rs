//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default pattern width in tiles
pub const DEFAULT_PATTERN_WIDTH: usize = 16;

/// Default pattern height in tiles
pub const DEFAULT_PATTERN_HEIGHT: usize = 16;

/// Default number of patterns per run
pub const DEFAULT_PATTERN_COUNT: usize = 1;

/// Default number of seeds tried per pattern before giving up on a dead-end
pub const DEFAULT_ATTEMPTS: usize = 1;

// Retry seeds jump by a large odd stride so they never collide with the
// consecutive seeds used for successive patterns
/// Seed offset between successive attempts of one pattern
pub const ATTEMPT_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Tiles per row of a texture atlas
pub const ATLAS_COLUMNS: usize = 4;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
