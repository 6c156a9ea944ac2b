//! Glyph rasters and pixel iteration
//!
//! A glyph is an immutable grayscale raster plus the metrics needed to place
//! it on a baseline. Samples are stored row-major; a sample counts as ink when
//! it is darker (lower) than the threshold the caller passes in. Every
//! transform returns a new glyph.

use std::fmt;

use crate::core::errors::FontError;
use crate::core::settings::DEFAULT_INK_THRESHOLD;

/// Which coordinate space pixel iteration reports in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateMode {
    /// Local raster coordinates, shifted only by the reference point
    #[default]
    Real,
    /// Local coordinates plus the glyph's own offsets, for baseline placement
    Virtual,
}

/// Tight bounding box over the ink pixels of a glyph, inclusive on all sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphExtents {
    pub minx: u32,
    pub maxx: u32,
    pub miny: u32,
    pub maxy: u32,
}

impl GlyphExtents {
    pub fn width(&self) -> u32 {
        self.maxx - self.minx + 1
    }

    pub fn height(&self) -> u32 {
        self.maxy - self.miny + 1
    }
}

/// How [`Glyph::render_ascii`] draws each sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsciiStyle {
    /// Every sample as a right-aligned decimal value
    Values,
    /// A dot for fully black samples, blank otherwise
    Dots,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    codepoint: char,
    width: u32,
    height: u32,
    xoffset: i32,
    yoffset: i32,
    xadvance: i32,
    raw_data: Vec<u8>,
}

impl Glyph {
    /// Create a glyph, checking that `raw_data` holds exactly one sample per pixel
    pub fn new(
        codepoint: char,
        width: u32,
        height: u32,
        xoffset: i32,
        yoffset: i32,
        xadvance: i32,
        raw_data: Vec<u8>,
    ) -> Result<Self, FontError> {
        let expected = width as usize * height as usize;
        if raw_data.len() != expected {
            return Err(FontError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: raw_data.len(),
            });
        }

        Ok(Self {
            codepoint,
            width,
            height,
            xoffset,
            yoffset,
            xadvance,
            raw_data,
        })
    }

    pub fn codepoint(&self) -> char {
        self.codepoint
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn xoffset(&self) -> i32 {
        self.xoffset
    }

    pub fn yoffset(&self) -> i32 {
        self.yoffset
    }

    pub fn xadvance(&self) -> i32 {
        self.xadvance
    }

    pub fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    /// Number of distinct sample values in the raster
    pub fn colors(&self) -> usize {
        let mut seen = [false; 256];
        for &sample in &self.raw_data {
            seen[sample as usize] = true;
        }
        seen.iter().filter(|present| **present).count()
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<u8, FontError> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(self.sample(x, y))
    }

    /// Iterate over every ink pixel, rows top to bottom, columns left to right
    pub fn iter_set_pixels(
        &self,
        threshold: u8,
        mode: CoordinateMode,
        reference: (i32, i32),
    ) -> SetPixels<'_> {
        let (dx, dy) = match mode {
            CoordinateMode::Real => (reference.0, reference.1),
            CoordinateMode::Virtual => (
                reference.0.saturating_add(self.xoffset),
                reference.1.saturating_add(self.yoffset),
            ),
        };

        SetPixels {
            glyph: self,
            threshold,
            offset: (dx, dy),
            index: 0,
        }
    }

    /// Ink pixels in local raster coordinates at the default threshold
    pub fn set_pixels(&self) -> SetPixels<'_> {
        self.iter_set_pixels(DEFAULT_INK_THRESHOLD, CoordinateMode::Real, (0, 0))
    }

    /// Iterate `(x, y, sample)` over a sub-rectangle, in raster coordinates
    pub fn iter_area(
        &self,
        x_offset: u32,
        y_offset: u32,
        width: u32,
        height: u32,
    ) -> Result<AreaPixels<'_>, FontError> {
        if width > 0 && height > 0 {
            let right = x_offset as u64 + width as u64;
            let bottom = y_offset as u64 + height as u64;
            if right > self.width as u64 || bottom > self.height as u64 {
                let x = right.min(u32::MAX as u64) as u32 - 1;
                let y = bottom.min(u32::MAX as u64) as u32 - 1;
                return Err(self.out_of_bounds(x, y));
            }
        }

        Ok(AreaPixels {
            glyph: self,
            x_offset,
            y_offset,
            width,
            height,
            index: 0,
        })
    }

    /// Tight bounding box over all samples below `threshold`
    pub fn find_extents(&self, threshold: u8) -> Result<GlyphExtents, FontError> {
        let mut pixels = self.iter_set_pixels(threshold, CoordinateMode::Real, (0, 0));
        let (x, y) = pixels.next().ok_or(FontError::EmptyGlyph {
            codepoint: self.codepoint,
        })?;

        // Real mode with a zero reference never yields negative coordinates
        let mut extents = GlyphExtents {
            minx: x as u32,
            maxx: x as u32,
            miny: y as u32,
            maxy: y as u32,
        };
        for (x, y) in pixels {
            let (x, y) = (x as u32, y as u32);
            extents.minx = extents.minx.min(x);
            extents.maxx = extents.maxx.max(x);
            extents.miny = extents.miny.min(y);
            extents.maxy = extents.maxy.max(y);
        }
        Ok(extents)
    }

    /// Same raster moved by `(dx, dy)` relative to the pen
    pub fn shifted(&self, dx: i32, dy: i32) -> Result<Self, FontError> {
        let overflow = || FontError::CoordinateOverflow {
            codepoint: self.codepoint,
        };
        Ok(Self {
            xoffset: self.xoffset.checked_add(dx).ok_or_else(overflow)?,
            yoffset: self.yoffset.checked_add(dy).ok_or_else(overflow)?,
            ..self.clone()
        })
    }

    /// Same raster with a different pen advance
    pub fn with_xadvance(&self, xadvance: i32) -> Self {
        Self {
            xadvance,
            ..self.clone()
        }
    }

    /// Print the raster one line per row
    pub fn render_ascii(&self, style: AsciiStyle) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            let cells: Vec<String> = (0..self.width)
                .map(|x| {
                    let sample = self.sample(x, y);
                    match style {
                        AsciiStyle::Values => format!("{sample:3}"),
                        AsciiStyle::Dots if sample == 0 => "⬤ ".to_string(),
                        AsciiStyle::Dots => "  ".to_string(),
                    }
                })
                .collect();
            let separator = match style {
                AsciiStyle::Values => " ",
                AsciiStyle::Dots => "",
            };
            out.push_str(&cells.join(separator));
            out.push('\n');
        }
        out
    }

    fn sample(&self, x: u32, y: u32) -> u8 {
        self.raw_data[y as usize * self.width as usize + x as usize]
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> FontError {
        FontError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Glyph<\"{}\", {} x {}, {} bytes>",
            self.codepoint,
            self.width,
            self.height,
            self.raw_data.len()
        )
    }
}

/// Lazy sequence of ink pixel coordinates; clone it to restart
#[derive(Debug, Clone)]
pub struct SetPixels<'a> {
    glyph: &'a Glyph,
    threshold: u8,
    offset: (i32, i32),
    index: usize,
}

impl Iterator for SetPixels<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.glyph.width as usize;
        while self.index < self.glyph.raw_data.len() {
            let index = self.index;
            self.index += 1;
            if self.glyph.raw_data[index] < self.threshold {
                let x = (index % width) as i32;
                let y = (index / width) as i32;
                return Some((
                    x.saturating_add(self.offset.0),
                    y.saturating_add(self.offset.1),
                ));
            }
        }
        None
    }
}

/// Samples of a rectangular window into a glyph
#[derive(Debug, Clone)]
pub struct AreaPixels<'a> {
    glyph: &'a Glyph,
    x_offset: u32,
    y_offset: u32,
    width: u32,
    height: u32,
    index: u64,
}

impl Iterator for AreaPixels<'_> {
    type Item = (u32, u32, u8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.width as u64 * self.height as u64 {
            return None;
        }
        let x = self.x_offset + (self.index % self.width as u64) as u32;
        let y = self.y_offset + (self.index / self.width as u64) as u32;
        self.index += 1;
        Some((x, y, self.glyph.sample(x, y)))
    }
}
