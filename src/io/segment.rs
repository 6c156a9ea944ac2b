//! Glyph strip segmentation
//!
//! A glyph strip is an image with all glyphs side by side on a white
//! background, separated by at least one blank column. Each run of columns
//! containing ink becomes one glyph spanning the full image height, and the
//! runs are matched to the requested characters from left to right.

use log::debug;

use crate::core::errors::FontError;
use crate::core::settings::BACKGROUND_INTENSITY;
use crate::data::font::FontCatalog;
use crate::data::glyph::Glyph;

/// Read access to a source image
pub trait Raster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Single gray value for the pixel
    fn intensity(&self, x: u32, y: u32) -> u8;

    /// True for anything that is not pure background
    fn is_ink(&self, x: u32, y: u32) -> bool;
}

impl Raster for image::RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn intensity(&self, x: u32, y: u32) -> u8 {
        let [r, g, b] = self.get_pixel(x, y).0;
        ((r as u16 + g as u16 + b as u16) / 3) as u8
    }

    fn is_ink(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y).0 != [BACKGROUND_INTENSITY; 3]
    }
}

impl Raster for image::GrayImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn intensity(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).0[0]
    }

    fn is_ink(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y).0[0] != BACKGROUND_INTENSITY
    }
}

/// Region of the source image holding one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportBoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

fn column_empty<R: Raster + ?Sized>(raster: &R, x: u32) -> bool {
    (0..raster.height()).all(|y| !raster.is_ink(x, y))
}

/// Maximal runs of non-empty columns, left to right
pub fn find_glyph_regions<R: Raster + ?Sized>(raster: &R) -> Vec<ImportBoundingBox> {
    let mut regions: Vec<ImportBoundingBox> = Vec::new();
    let mut open = false;

    for x in 0..raster.width() {
        let empty = column_empty(raster, x);
        match (empty, open) {
            (false, false) => {
                regions.push(ImportBoundingBox {
                    x,
                    y: 0,
                    width: 1,
                    height: raster.height(),
                });
                open = true;
            }
            (false, true) => {
                if let Some(region) = regions.last_mut() {
                    region.width += 1;
                }
            }
            (true, _) => open = false,
        }
    }
    regions
}

/// Copy a region out of the raster as a glyph standing on the baseline
pub fn create_glyph<R: Raster + ?Sized>(
    raster: &R,
    codepoint: char,
    region: &ImportBoundingBox,
) -> Result<Glyph, FontError> {
    let raw_data = (region.y..region.y + region.height)
        .flat_map(|y| (region.x..region.x + region.width).map(move |x| (x, y)))
        .map(|(x, y)| raster.intensity(x, y))
        .collect();

    Glyph::new(
        codepoint,
        region.width,
        region.height,
        0,
        -(region.height as i32),
        region.width as i32 + 1,
        raw_data,
    )
}

/// Cut a glyph strip into one glyph per character of `codepoints`
pub fn segment<R: Raster + ?Sized>(
    raster: &R,
    codepoints: &[char],
) -> Result<FontCatalog, FontError> {
    let regions = find_glyph_regions(raster);
    debug!("Found {} glyphs: {:?}", regions.len(), regions);

    if regions.len() != codepoints.len() {
        return Err(FontError::GlyphCountMismatch {
            found: regions.len(),
            expected: codepoints.len(),
        });
    }

    let mut font = FontCatalog::new();
    for (&codepoint, region) in codepoints.iter().zip(&regions) {
        font.add(create_glyph(raster, codepoint, region)?)?;
    }
    Ok(font)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    /// Columns 1-2, 4 and 7-9 carry ink in a 11 x 4 strip
    fn strip() -> GrayImage {
        let mut img = GrayImage::from_pixel(11, 4, Luma([255]));
        for (x, y) in [(1, 0), (2, 3), (4, 1), (7, 2), (8, 2), (9, 0)] {
            img.put_pixel(x, y, Luma([0]));
        }
        img
    }

    #[test]
    fn test_regions_follow_column_runs() {
        let regions = find_glyph_regions(&strip());
        let spans: Vec<_> = regions.iter().map(|r| (r.x, r.width)).collect();
        assert_eq!(spans, vec![(1, 2), (4, 1), (7, 3)]);
        assert!(regions.iter().all(|r| r.y == 0 && r.height == 4));
    }

    #[test]
    fn test_region_reaching_right_edge_is_kept() {
        let mut img = GrayImage::from_pixel(3, 1, Luma([255]));
        img.put_pixel(2, 0, Luma([0]));
        let regions = find_glyph_regions(&img);
        assert_eq!(
            regions,
            vec![ImportBoundingBox {
                x: 2,
                y: 0,
                width: 1,
                height: 1,
            }]
        );
    }

    #[test]
    fn test_segment_assigns_codepoints_in_order() {
        let font = segment(&strip(), &['a', 'b', 'c']).unwrap();
        let order: Vec<_> = font
            .iter()
            .map(|g| (g.codepoint(), g.width(), g.height(), g.yoffset(), g.xadvance()))
            .collect();
        assert_eq!(
            order,
            vec![('a', 2, 4, -4, 3), ('b', 1, 4, -4, 2), ('c', 3, 4, -4, 4)]
        );

        let a = font.get('a').unwrap();
        assert_eq!(a.xoffset(), 0);
        assert_eq!(a.get_pixel(0, 0), Ok(0));
        assert_eq!(a.get_pixel(1, 3), Ok(0));
        assert_eq!(a.get_pixel(1, 0), Ok(255));
    }

    #[test]
    fn test_count_mismatch_is_reported() {
        for codepoints in [&['a', 'b'][..], &['a', 'b', 'c', 'd'][..]] {
            assert_eq!(
                segment(&strip(), codepoints),
                Err(FontError::GlyphCountMismatch {
                    found: 3,
                    expected: codepoints.len(),
                })
            );
        }
    }

    #[test]
    fn test_rgb_pixels_average_and_truncate() {
        let mut img = RgbImage::from_pixel(2, 1, Rgb([255, 255, 255]));
        img.put_pixel(0, 0, Rgb([10, 20, 32]));
        assert_eq!(img.intensity(0, 0), 20);
        assert!(img.is_ink(0, 0));

        // Near-white still counts as ink and keeps its gray value
        img.put_pixel(1, 0, Rgb([255, 255, 254]));
        assert!(img.is_ink(1, 0));
        assert_eq!(img.intensity(1, 0), 254);

        let font = segment(&img, &['x']).unwrap();
        assert_eq!(font.get('x').unwrap().raw_data(), &[20, 254]);
    }

    #[test]
    fn test_duplicate_characters_are_rejected() {
        assert_eq!(
            segment(&strip(), &['a', 'b', 'a']),
            Err(FontError::DuplicateCodepoint { codepoint: 'a' })
        );
    }
}
