use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point},
};
use log::{trace, warn};

use crate::glyph::{EncodedFont, GlyphRecord};

/// Read access to an encoded font using the firmware's lookup rules.
pub struct FontView<'a> {
    font: &'a EncodedFont,
}

impl<'a> FontView<'a> {
    pub fn new(font: &'a EncodedFont) -> Self {
        Self { font }
    }

    pub fn row_bytes(&self) -> usize {
        self.font.row_bytes as usize
    }

    /// Height in pixels of a glyph cell, including padding bits above a short final byte.
    pub fn cell_height(&self) -> u32 {
        self.font.row_bytes as u32 * 8
    }

    /// Records are scanned in order and the scan stops at the first `' '`
    /// record, so the space glyph stands in for characters the font lacks.
    pub fn glyph(&self, ch: char) -> Option<&'a GlyphRecord> {
        self.font
            .glyphs
            .iter()
            .find(|glyph| glyph.label == ch || glyph.label == ' ')
    }

    /// Sum of the glyph widths `text` would take.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|glyph| glyph.width as u32)
            .sum()
    }
}

/// Draws `text` with its glyph cells' top left corner at `origin`.
///
/// Returns the horizontal advance in pixels.
pub fn draw_text<D>(target: &mut D, font: &FontView, origin: Point, text: &str) -> Result<u32, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let row_bytes = font.row_bytes();
    let bottom = origin.y + font.cell_height() as i32 - 1;
    let mut x = origin.x;

    for ch in text.chars() {
        let Some(glyph) = font.glyph(ch) else {
            warn!("Font does not have glyph for character: {:?}", ch);
            continue;
        };
        trace!("Drawing {:?} as {:?} at x={}", ch, glyph.label, x);

        for column in 0..glyph.width as usize {
            let bytes = glyph.column(column, row_bytes);
            let pixels = bytes.iter().enumerate().flat_map(|(n, &byte)| {
                (0..8).map(move |bit| {
                    let color = if (byte >> bit) & 1 == 1 {
                        BinaryColor::On
                    } else {
                        BinaryColor::Off
                    };
                    Pixel(Point::new(x, bottom - (n * 8 + bit) as i32), color)
                })
            });
            target.draw_iter(pixels)?;
            x += 1;
        }
    }

    Ok((x - origin.x) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{vec, vec::Vec};
    use embedded_graphics::prelude::{OriginDimensions, Size};

    struct Canvas {
        size: Size,
        pixels: Vec<bool>,
    }

    impl Canvas {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: Size::new(width, height),
                pixels: vec![false; (width * height) as usize],
            }
        }

        fn get(&self, x: u32, y: u32) -> bool {
            self.pixels[(y * self.size.width + x) as usize]
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0 && point.y >= 0 && (point.x as u32) < self.size.width && (point.y as u32) < self.size.height {
                    let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                    self.pixels[index] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn font() -> EncodedFont {
        EncodedFont {
            row_bytes: 1,
            glyphs: vec![
                GlyphRecord { label: 'a', width: 2, data: vec![0x01, 0x80] },
                GlyphRecord { label: ' ', width: 1, data: vec![0x00] },
                GlyphRecord { label: 'b', width: 1, data: vec![0xff] },
            ],
        }
    }

    #[test]
    fn lookup_stops_at_space() {
        let font = font();
        let view = FontView::new(&font);
        assert_eq!(view.glyph('a').map(|g| g.label), Some('a'));
        assert_eq!(view.glyph('z').map(|g| g.label), Some(' '));
        // records after the space are unreachable
        assert_eq!(view.glyph('b').map(|g| g.label), Some(' '));
        assert_eq!(view.text_width("aza"), 5);
    }

    #[test]
    fn missing_glyph_without_space() {
        let font = EncodedFont {
            row_bytes: 1,
            glyphs: vec![GlyphRecord { label: 'a', width: 2, data: vec![0, 0] }],
        };
        let view = FontView::new(&font);
        assert!(view.glyph('?').is_none());
        let mut canvas = Canvas::new(8, 8);
        assert_eq!(draw_text(&mut canvas, &view, Point::zero(), "?a?"), Ok(2));
    }

    #[test]
    fn draws_bottom_up() {
        let font = font();
        let view = FontView::new(&font);
        let mut canvas = Canvas::new(4, 10);
        let advance = draw_text(&mut canvas, &view, Point::new(1, 1), "a").unwrap();
        assert_eq!(advance, 2);
        // bit 0 of column 0 is the bottom row of the cell, bit 7 of column 1 the top
        assert!(canvas.get(1, 8));
        assert!(canvas.get(2, 1));
        let lit = canvas.pixels.iter().filter(|&&on| on).count();
        assert_eq!(lit, 2);
    }

    #[test]
    fn multi_byte_columns() {
        let font = EncodedFont {
            row_bytes: 2,
            glyphs: vec![GlyphRecord { label: 'x', width: 1, data: vec![0x00, 0x01] }],
        };
        let view = FontView::new(&font);
        assert_eq!(view.cell_height(), 16);
        let mut canvas = Canvas::new(1, 16);
        draw_text(&mut canvas, &view, Point::zero(), "x").unwrap();
        // bit 8 counted from the bottom
        assert!(canvas.get(0, 7));
    }
}
