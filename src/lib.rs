//! Pixel font toolkit
//!
//! Import glyph strips from images, crop and shift glyphs, pack them into
//! one bit per pixel buffers, and lay out single lines of text.

pub mod core;
pub mod data;
pub mod editing;
pub mod io;
pub mod rendering;
pub mod utils;


pub use crate::core::errors::FontError;
pub use crate::data::{BitmapGlyph, FontCatalog, Glyph, PackingOrder};
pub use crate::rendering::{PixelSink, TextExtents, TextLayout};
