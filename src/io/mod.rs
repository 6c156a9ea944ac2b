//! Input/Output Operations
//!
//! This module handles everything that crosses the process boundary:
//! - Font files in the native JSON format
//! - Glyph strip images turned into fonts
//! - Export formats for other tools

pub mod export;
pub mod font_file;
pub mod segment;

pub use export::{export_font, ExportFormat, ExportOptions};
pub use font_file::{load_font, save_font};
pub use segment::{find_glyph_regions, segment, ImportBoundingBox, Raster};
