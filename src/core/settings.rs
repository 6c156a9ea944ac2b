// Settings ///////////////////////////////////////////////////////////////////
// This module contains all the tunable constants for the toolkit.

// Ink Detection //////////////////////////////////////////////////////////////

/// Samples strictly below this value count as ink. Used as the default by
/// pixel iteration, extents, optimization, packing, layout and exports.
pub const DEFAULT_INK_THRESHOLD: u8 = 128;

/// Pure white; anything else in an imported image is treated as ink
pub const BACKGROUND_INTENSITY: u8 = 255;

// Logging ////////////////////////////////////////////////////////////////////

/// Environment variable that overrides the default log level
pub const LOG_ENV_VAR: &str = "PFTK_LOG";

// Drawing ////////////////////////////////////////////////////////////////////

/// Text drawn by `pftk draw` when none is given
pub const DEFAULT_DRAW_TEXT: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Empty border around the rendered text, in pixels
pub const DRAW_MARGIN: u32 = 10;

/// RGBA marker for the pen position where a glyph starts
pub const GLYPH_START_COLOR: [u8; 4] = [255, 0, 0, 100];

/// RGBA color of ink pixels
pub const INK_COLOR: [u8; 4] = [0, 0, 0, 200];

/// RGBA marker for the pen position after a glyph was advanced
pub const GLYPH_END_COLOR: [u8; 4] = [0, 255, 0, 100];

// Bitfontmaker Export ////////////////////////////////////////////////////////

/// Rows (and usable columns) in a bitfontmaker glyph grid
pub const BITFONTMAKER_GRID_SIZE: usize = 16;

/// Grid row that holds the baseline
pub const BITFONTMAKER_BASELINE_ROW: i32 = 11;

/// Grid column that holds x = 0
pub const BITFONTMAKER_LEFT_COLUMN: i32 = 2;
