//! One bit per pixel packing of glyph rasters
//!
//! `XBit` groups eight horizontally adjacent pixels into a byte, row after
//! row. `YBit` groups eight vertically adjacent pixels, column after column,
//! which is what page-addressed displays expect. In both orders the least
//! significant bit holds the smallest coordinate of its group.

use crate::core::errors::FontError;
use crate::data::glyph::{CoordinateMode, Glyph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackingOrder {
    #[default]
    XBit,
    YBit,
}

impl PackingOrder {
    /// Size in bytes of a packed `width` x `height` raster
    pub fn buffer_len(self, width: u32, height: u32) -> usize {
        let (width, height) = (width as usize, height as usize);
        match self {
            PackingOrder::XBit => width.div_ceil(8) * height,
            PackingOrder::YBit => width * height.div_ceil(8),
        }
    }
}

/// Thresholded 1-bit image of a glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapGlyph {
    order: PackingOrder,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BitmapGlyph {
    /// All-clear bitmap of the given size
    pub fn zeroed(width: u32, height: u32, order: PackingOrder) -> Self {
        Self {
            order,
            width,
            height,
            data: vec![0; order.buffer_len(width, height)],
        }
    }

    /// Pack every sample below `threshold` as a set bit
    pub fn pack(glyph: &Glyph, threshold: u8, order: PackingOrder) -> Self {
        let mut bitmap = Self::zeroed(glyph.width(), glyph.height(), order);
        for (x, y) in glyph.iter_set_pixels(threshold, CoordinateMode::Real, (0, 0)) {
            // Real mode without a reference stays inside the raster
            let (index, mask) = bitmap.address(x as u32, y as u32);
            bitmap.data[index] |= mask;
        }
        bitmap
    }

    pub fn order(&self) -> PackingOrder {
        self.order
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<bool, FontError> {
        let (index, mask) = self.locate(x, y)?;
        Ok(self.data[index] & mask != 0)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32) -> Result<(), FontError> {
        let (index, mask) = self.locate(x, y)?;
        self.data[index] |= mask;
        Ok(())
    }

    pub fn clear_pixel(&mut self, x: u32, y: u32) -> Result<(), FontError> {
        let (index, mask) = self.locate(x, y)?;
        self.data[index] &= !mask;
        Ok(())
    }

    /// Dot matrix preview, one line per row
    pub fn render_dots(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let (index, mask) = self.address(x, y);
                out.push_str(if self.data[index] & mask != 0 { "⬤ " } else { "  " });
            }
            out.push('\n');
        }
        out
    }

    fn locate(&self, x: u32, y: u32) -> Result<(usize, u8), FontError> {
        if x >= self.width || y >= self.height {
            return Err(FontError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.address(x, y))
    }

    fn address(&self, x: u32, y: u32) -> (usize, u8) {
        let (x, y) = (x as usize, y as usize);
        match self.order {
            PackingOrder::XBit => {
                let row_bytes = (self.width as usize).div_ceil(8);
                (x / 8 + y * row_bytes, 1 << (x % 8))
            }
            PackingOrder::YBit => {
                let column_bytes = (self.height as usize).div_ceil(8);
                (y / 8 + x * column_bytes, 1 << (y % 8))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> Glyph {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| if (x + y) % 2 == 0 { 0 } else { 255 }))
            .collect();
        Glyph::new('#', width, height, 0, 0, width as i32, data).unwrap()
    }

    #[test]
    fn test_buffer_sizes() {
        assert_eq!(PackingOrder::XBit.buffer_len(9, 3), 6);
        assert_eq!(PackingOrder::YBit.buffer_len(9, 3), 9);
        assert_eq!(PackingOrder::XBit.buffer_len(8, 8), 8);
        assert_eq!(PackingOrder::YBit.buffer_len(3, 17), 9);
        assert_eq!(PackingOrder::XBit.buffer_len(0, 5), 0);
    }

    #[test]
    fn test_xbit_layout() {
        // Ink at x = 0 and x = 9 of a single row
        let mut data = vec![255; 10];
        data[0] = 0;
        data[9] = 0;
        let glyph = Glyph::new('-', 10, 1, 0, 0, 10, data).unwrap();
        let bitmap = BitmapGlyph::pack(&glyph, 128, PackingOrder::XBit);
        assert_eq!(bitmap.data(), &[0b0000_0001, 0b0000_0010]);
    }

    #[test]
    fn test_ybit_layout() {
        // A 2 x 9 glyph with ink at (0, 0), (0, 8) and (1, 3)
        let mut data = vec![255; 18];
        data[0] = 0;
        data[8 * 2] = 0;
        data[3 * 2 + 1] = 0;
        let glyph = Glyph::new('|', 2, 9, 0, 0, 3, data).unwrap();
        let bitmap = BitmapGlyph::pack(&glyph, 128, PackingOrder::YBit);
        assert_eq!(bitmap.data(), &[0b0000_0001, 0b0000_0001, 0b0000_1000, 0]);
    }

    #[test]
    fn test_pack_matches_threshold_for_both_orders() {
        let glyph = checker(11, 10);
        for order in [PackingOrder::XBit, PackingOrder::YBit] {
            let bitmap = BitmapGlyph::pack(&glyph, 128, order);
            assert_eq!(bitmap.data().len(), order.buffer_len(11, 10));
            for y in 0..10 {
                for x in 0..11 {
                    let expected = glyph.get_pixel(x, y).unwrap() < 128;
                    assert_eq!(
                        bitmap.get_pixel(x, y).unwrap(),
                        expected,
                        "Mismatch at ({x}, {y}) in {order:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_set_pixel_touches_only_its_bit() {
        let (width, height) = (10, 11);
        for order in [PackingOrder::XBit, PackingOrder::YBit] {
            for y in 0..height {
                for x in 0..width {
                    let mut bitmap = BitmapGlyph::zeroed(width, height, order);
                    bitmap.set_pixel(x, y).unwrap();
                    let set: Vec<_> = (0..height)
                        .flat_map(|v| (0..width).map(move |u| (u, v)))
                        .filter(|&(u, v)| bitmap.get_pixel(u, v).unwrap())
                        .collect();
                    assert_eq!(set, vec![(x, y)], "Only ({x}, {y}) should be set in {order:?}");

                    bitmap.clear_pixel(x, y).unwrap();
                    assert!(bitmap.data().iter().all(|b| *b == 0));
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_access_fails() {
        let mut bitmap = BitmapGlyph::zeroed(3, 3, PackingOrder::YBit);
        assert!(matches!(
            bitmap.get_pixel(3, 0),
            Err(FontError::OutOfBounds { .. })
        ));
        assert!(bitmap.set_pixel(0, 3).is_err());
        assert!(bitmap.clear_pixel(7, 7).is_err());
    }

    #[test]
    fn test_render_dots() {
        let bitmap = BitmapGlyph::pack(&checker(2, 2), 128, PackingOrder::XBit);
        assert_eq!(bitmap.render_dots(), "⬤   \n  ⬤ \n");
    }
}
