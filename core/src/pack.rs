use alloc::vec::Vec;
use log::trace;

use crate::bitmap::PixelSource;

/// Number of bytes needed to hold one pixel column of `height` pixels.
pub const fn row_bytes(height: usize) -> usize {
    height.div_ceil(8)
}

/// Thresholded image packed column by column.
///
/// Each column takes [`row_bytes`] bytes. Bit 0 of the first byte is the
/// bottom pixel of the column, higher bits and later bytes move upward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedImage {
    width: usize,
    row_bytes: usize,
    data: Vec<u8>,
}

impl PackedImage {
    pub fn from_source(image: &impl PixelSource) -> Self {
        let width = image.width();
        let height = image.height();
        let row_bytes = row_bytes(height);
        trace!("Packing {width}x{height} image into {row_bytes} bytes per column");

        let mut data = Vec::with_capacity(width * row_bytes);
        for x in 0..width {
            let mut value = 0u8;
            let mut bit = 0;
            for y in (0..height).rev() {
                if image.is_ink(x, y) {
                    value |= 1 << bit;
                }
                bit += 1;
                if bit == 8 || y == 0 {
                    data.push(value);
                    value = 0;
                    bit = 0;
                }
            }
        }
        debug_assert_eq!(data.len(), width * row_bytes);

        Self { width, row_bytes, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// Packed bytes of column `x`, bottom byte first.
    pub fn column(&self, x: usize) -> &[u8] {
        &self.data[x * self.row_bytes..(x + 1) * self.row_bytes]
    }

    /// Packed bytes of the columns in `[start, end)`, column-major.
    pub fn columns(&self, start: usize, end: usize) -> &[u8] {
        &self.data[start * self.row_bytes..end * self.row_bytes]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Rgb8Grid;

    #[test]
    fn row_count() {
        assert_eq!(row_bytes(1), 1);
        assert_eq!(row_bytes(8), 1);
        assert_eq!(row_bytes(9), 2);
        assert_eq!(row_bytes(16), 2);
        assert_eq!(row_bytes(17), 3);
    }

    #[test]
    fn bottom_pixel_is_bit_zero() {
        let mut grid = Rgb8Grid::filled(1, 8, Rgb8Grid::WHITE);
        grid.set(0, 7, Rgb8Grid::BLACK);
        assert_eq!(PackedImage::from_source(&grid).column(0), &[0x01]);
    }

    #[test]
    fn top_pixel_is_bit_seven() {
        let mut grid = Rgb8Grid::filled(1, 8, Rgb8Grid::WHITE);
        grid.set(0, 0, Rgb8Grid::BLACK);
        assert_eq!(PackedImage::from_source(&grid).column(0), &[0x80]);
    }

    #[test]
    fn short_final_byte() {
        let grid = Rgb8Grid::filled(1, 10, Rgb8Grid::BLACK);
        let packed = PackedImage::from_source(&grid);
        assert_eq!(packed.row_bytes(), 2);
        assert_eq!(packed.column(0), &[0xff, 0x03]);
    }

    #[test]
    fn short_byte_covers_top_rows() {
        // rows 0 and 1 are the two pixels left over after the bottom eight
        let mut grid = Rgb8Grid::filled(1, 10, Rgb8Grid::WHITE);
        grid.set(0, 0, Rgb8Grid::BLACK);
        grid.set(0, 2, Rgb8Grid::BLACK);
        assert_eq!(PackedImage::from_source(&grid).column(0), &[0x80, 0x02]);
    }

    #[test]
    fn columns_are_independent() {
        let mut grid = Rgb8Grid::filled(3, 8, Rgb8Grid::WHITE);
        for y in 0..8 {
            grid.set(1, y, Rgb8Grid::BLACK);
        }
        grid.set(2, 4, Rgb8Grid::BLACK);
        let packed = PackedImage::from_source(&grid);
        assert_eq!(packed.width(), 3);
        assert_eq!(packed.columns(0, 3), &[0x00, 0xff, 0x08]);
        assert_eq!(packed.columns(1, 2), &[0xff]);
    }
}
