//! Font data model
//!
//! This module holds the in-memory representation of pixel fonts:
//! - Glyph rasters, metrics and pixel iteration
//! - One bit per pixel packing of glyphs
//! - The font catalog and its persisted JSON document
//! - Codepoint helpers for glyph lists

pub mod bitmap;
pub mod font;
pub mod glyph;
pub mod serialize;
pub mod unicode;

// Re-export commonly used items
pub use bitmap::{BitmapGlyph, PackingOrder};
pub use font::{FontCatalog, FontMetadata};
pub use glyph::{AsciiStyle, CoordinateMode, Glyph, GlyphExtents};
pub use serialize::FontDocument;
