//! Single-line text layout
//!
//! Text is laid out left to right on a fixed baseline. Each glyph is placed
//! at the pen position using its own offsets, then the pen moves by the
//! glyph's advance. Characters without a glyph take no space.

use std::collections::BTreeSet;

use crate::core::settings::DEFAULT_INK_THRESHOLD;
use crate::data::font::FontCatalog;
use crate::data::glyph::CoordinateMode;

/// Size of a laid out string, relative to the baseline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextExtents {
    pub width: i32,
    pub height: i32,
    pub height_above_baseline: i32,
    pub height_below_baseline: i32,
    pub missing_glyphs: BTreeSet<char>,
    pub missing_glyph_count: usize,
}

/// Receiver for rendered output; every notification defaults to a no-op
pub trait PixelSink {
    /// Pen position before a glyph is drawn
    fn on_glyph_start(&mut self, _x: i32, _y: i32) {}

    /// One ink pixel in canvas coordinates
    fn on_pixel(&mut self, _x: i32, _y: i32) {}

    /// Pen position after the glyph's advance
    fn on_glyph_end(&mut self, _x: i32, _y: i32) {}

    /// A character had no glyph in the font
    fn on_missing(&mut self) {}
}

/// Measures and renders strings against a font
#[derive(Debug, Clone, Copy)]
pub struct TextLayout<'a> {
    font: &'a FontCatalog,
    threshold: u8,
}

impl<'a> TextLayout<'a> {
    pub fn new(font: &'a FontCatalog) -> Self {
        Self {
            font,
            threshold: DEFAULT_INK_THRESHOLD,
        }
    }

    pub fn with_threshold(self, threshold: u8) -> Self {
        Self { threshold, ..self }
    }

    pub fn measure(&self, text: &str) -> TextExtents {
        let mut extents = TextExtents::default();
        let mut pen_x: i32 = 0;

        for c in text.chars() {
            let Some(glyph) = self.font.get(c) else {
                extents.missing_glyph_count += 1;
                extents.missing_glyphs.insert(c);
                continue;
            };

            for (_, y) in glyph.iter_set_pixels(self.threshold, CoordinateMode::Virtual, (0, 0)) {
                // The baseline row itself counts as above
                if y <= 0 {
                    extents.height_above_baseline =
                        extents.height_above_baseline.max(y.saturating_neg());
                } else {
                    extents.height_below_baseline = extents.height_below_baseline.max(y);
                }
            }
            pen_x = pen_x.saturating_add(glyph.xadvance());
        }

        extents.width = pen_x;
        extents.height = extents
            .height_above_baseline
            .saturating_add(extents.height_below_baseline);
        extents
    }

    pub fn render<S: PixelSink + ?Sized>(
        &self,
        text: &str,
        start_x: i32,
        start_y: i32,
        sink: &mut S,
    ) {
        let mut pen_x = start_x;
        let pen_y = start_y;

        for c in text.chars() {
            let Some(glyph) = self.font.get(c) else {
                sink.on_missing();
                continue;
            };

            sink.on_glyph_start(pen_x, pen_y);
            for (x, y) in
                glyph.iter_set_pixels(self.threshold, CoordinateMode::Virtual, (pen_x, pen_y))
            {
                sink.on_pixel(x, y);
            }
            pen_x = pen_x.saturating_add(glyph.xadvance());
            sink.on_glyph_end(pen_x, pen_y);
        }
    }
}
