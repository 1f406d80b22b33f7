use alloc::vec::Vec;

/// Summed RGB value below which a pixel counts as ink.
pub const INK_THRESHOLD: u16 = 3 * 128;

/// A read-only grid of RGB samples. Alpha, if the source has any, is not seen here.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Red, green and blue of the pixel at column `x`, row `y` (row 0 is the top).
    fn rgb(&self, x: usize, y: usize) -> [u8; 3];

    fn is_ink(&self, x: usize, y: usize) -> bool {
        is_ink(self.rgb(x, y))
    }
}

/// Dark pixels are set: the channel sum must be strictly below [`INK_THRESHOLD`].
pub fn is_ink([r, g, b]: [u8; 3]) -> bool {
    (r as u16 + g as u16 + b as u16) < INK_THRESHOLD
}

/// Owned, tightly packed RGB8 pixel grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rgb8Grid {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl Rgb8Grid {
    pub const WHITE: [u8; 3] = [0xff, 0xff, 0xff];
    pub const BLACK: [u8; 3] = [0x00, 0x00, 0x00];

    /// Grid filled with a single color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            data: alloc::vec![rgb; width * height],
        }
    }

    /// Wraps row-major samples; returns `None` when `data` does not hold `width * height` pixels.
    pub fn from_pixels(width: usize, height: usize, data: Vec<[u8; 3]>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self { width, height, data })
    }

    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = rgb;
        }
    }
}

impl PixelSource for Rgb8Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.width + x]
    }
}
