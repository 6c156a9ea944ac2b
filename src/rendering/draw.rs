//! Drawing text into an RGBA image
//!
//! The canvas is sized from the measured text plus a margin. Ink goes on in
//! [`INK_COLOR`]; the pen position before and after each glyph is marked so
//! spacing problems are easy to spot.

use image::{Rgba, RgbaImage};
use log::{debug, warn};

use crate::core::settings::{DRAW_MARGIN, GLYPH_END_COLOR, GLYPH_START_COLOR, INK_COLOR};
use crate::data::font::FontCatalog;
use crate::rendering::layout::{PixelSink, TextLayout};

/// Pixel sink that paints onto an image, dropping anything off canvas
pub struct CanvasSink<'a> {
    image: &'a mut RgbaImage,
    missing: usize,
}

impl<'a> CanvasSink<'a> {
    pub fn new(image: &'a mut RgbaImage) -> Self {
        Self { image, missing: 0 }
    }

    pub fn missing(&self) -> usize {
        self.missing
    }

    fn put(&mut self, x: i32, y: i32, color: [u8; 4]) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, Rgba(color));
        }
    }
}

impl PixelSink for CanvasSink<'_> {
    fn on_glyph_start(&mut self, x: i32, y: i32) {
        self.put(x, y, GLYPH_START_COLOR);
    }

    fn on_pixel(&mut self, x: i32, y: i32) {
        self.put(x, y, INK_COLOR);
    }

    fn on_glyph_end(&mut self, x: i32, y: i32) {
        self.put(x, y, GLYPH_END_COLOR);
    }

    fn on_missing(&mut self) {
        self.missing += 1;
    }
}

/// Render `text` onto a transparent canvas just large enough to hold it
pub fn draw_text(font: &FontCatalog, text: &str) -> RgbaImage {
    let layout = TextLayout::new(font);
    let extents = layout.measure(text);
    if extents.missing_glyph_count > 0 {
        warn!(
            "{} characters have no glyph: {:?}",
            extents.missing_glyph_count, extents.missing_glyphs
        );
    }

    let margin = DRAW_MARGIN as i32;
    let width = extents.width.max(0).saturating_add(2 * margin) as u32;
    let height = extents.height.max(0).saturating_add(2 * margin) as u32;
    let mut image = RgbaImage::new(width, height);
    debug!("Drawing {:?} onto a {} x {} canvas", text, width, height);

    let baseline = height as i32 - margin - extents.height_below_baseline;
    layout.render(text, margin, baseline, &mut CanvasSink::new(&mut image));
    image
}
