//! Rendering limits and runtime configuration defaults

/// Default pixels per grid cell (icons are three cells wide)
pub const DEFAULT_CELL_SIZE: u32 = 24;

// Keeps the canvas side well inside u32 and the allocation reasonable
/// Maximum allowed pixels per grid cell
pub const MAX_CELL_SIZE: u32 = 4096;

/// Fixed seed for reproducible random batches
pub const DEFAULT_SEED: u64 = 42;

/// Extension of exported files
pub const OUTPUT_EXTENSION: &str = "png";

/// Hex digits in exported file names
pub const FILE_NAME_HEX_WIDTH: usize = 8;

// Progress bar display settings
/// Batches at or below this size render without a progress bar
pub const MIN_CODES_FOR_PROGRESS: usize = 2;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
