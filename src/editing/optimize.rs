//! Bounding box cropping
//!
//! Cropping removes background rows and columns around the ink and moves the
//! offsets by the same amount, so the glyph still lands on the same pixels
//! when drawn.

use crate::core::errors::FontError;
use crate::core::settings::DEFAULT_INK_THRESHOLD;
use crate::data::glyph::Glyph;

/// Crop `glyph` to the tight box around samples below `threshold`
pub fn optimize_glyph(glyph: &Glyph, threshold: u8) -> Result<Glyph, FontError> {
    let extents = glyph.find_extents(threshold)?;
    let (width, height) = (extents.width(), extents.height());

    let raw_data = glyph
        .iter_area(extents.minx, extents.miny, width, height)?
        .map(|(_, _, sample)| sample)
        .collect();

    let overflow = || FontError::CoordinateOverflow {
        codepoint: glyph.codepoint(),
    };
    let xoffset = i32::try_from(extents.minx)
        .ok()
        .and_then(|dx| glyph.xoffset().checked_add(dx))
        .ok_or_else(overflow)?;
    let yoffset = i32::try_from(extents.miny)
        .ok()
        .and_then(|dy| glyph.yoffset().checked_add(dy))
        .ok_or_else(overflow)?;

    Glyph::new(
        glyph.codepoint(),
        width,
        height,
        xoffset,
        yoffset,
        glyph.xadvance(),
        raw_data,
    )
}

impl Glyph {
    /// Crop to the ink at [`DEFAULT_INK_THRESHOLD`]
    pub fn optimize(&self) -> Result<Glyph, FontError> {
        optimize_glyph(self, DEFAULT_INK_THRESHOLD)
    }
}
