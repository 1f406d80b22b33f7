use std::path::Path;

use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
};
use image::{GrayImage, Luma};
use lcr_font_core::{EncodedFont, view::{FontView, draw_text}};
use log::{info, warn};

const INK: Luma<u8> = Luma([0x00]);
const PAPER: Luma<u8> = Luma([0xff]);

/// Grayscale canvas, `BinaryColor::On` is drawn as black ink.
pub struct PreviewCanvas {
    image: GrayImage,
}

impl PreviewCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: GrayImage::from_pixel(width, height, PAPER),
        }
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }
}

impl OriginDimensions for PreviewCanvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for PreviewCanvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 {
                continue;
            }
            let (x, y) = (coord.x as u32, coord.y as u32);
            if x >= self.image.width() || y >= self.image.height() {
                continue;
            }
            let luma = match color {
                BinaryColor::On => INK,
                BinaryColor::Off => PAPER,
            };
            self.image.put_pixel(x, y, luma);
        }
        Ok(())
    }
}

/// Draws `text` with a one pixel margin the way the firmware would lay it out.
pub fn render(font: &EncodedFont, text: &str) -> Option<GrayImage> {
    let view = FontView::new(font);
    let width = view.text_width(text);
    if width == 0 {
        return None;
    }
    let mut canvas = PreviewCanvas::new(width + 2, view.cell_height() + 2);
    let Ok(_) = draw_text(&mut canvas, &view, Point::new(1, 1), text);
    Some(canvas.into_image())
}

pub fn save(font: &EncodedFont, text: &str, path: &Path) -> image::ImageResult<()> {
    match render(font, text) {
        Some(image) => {
            info!("Saving {}x{} preview to {}", image.width(), image.height(), path.display());
            image.save(path)
        }
        None => {
            warn!("Nothing to preview for {:?}", text);
            Ok(())
        }
    }
}
