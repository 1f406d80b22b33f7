use alloc::vec::Vec;
use log::{info, trace};

use crate::{
    bitmap::PixelSource,
    error::{EncodeError, Result},
    pack::{self, PackedImage},
};

/// Fixed bytes following the row count in the header record. The firmware
/// font loader expects exactly these values.
pub const FONT_TRAILER: [u8; 4] = [0xff, 0xff, 0xff, 0x00];

/// One glyph: its label, pixel width and packed columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRecord {
    pub label: char,
    pub width: u8,
    /// `width * row_bytes` bytes, column-major.
    pub data: Vec<u8>,
}

impl GlyphRecord {
    pub fn column(&self, x: usize, row_bytes: usize) -> &[u8] {
        &self.data[x * row_bytes..(x + 1) * row_bytes]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedFont {
    pub row_bytes: u8,
    pub glyphs: Vec<GlyphRecord>,
}

impl EncodedFont {
    /// The leading record: row count followed by [`FONT_TRAILER`].
    pub fn header(&self) -> [u8; 5] {
        let [a, b, c, d] = FONT_TRAILER;
        [self.row_bytes, a, b, c, d]
    }
}

/// Splits `image` into one glyph per character of `characters` and packs each of them.
///
/// All validation happens here, so callers can encode before touching any output.
pub fn encode(characters: &str, image: &impl PixelSource) -> Result<EncodedFont> {
    let labels: Vec<char> = characters.chars().collect();
    if labels.is_empty() {
        return Err(EncodeError::NoCharacters);
    }
    if let Some(&ch) = labels.iter().find(|ch| !ch.is_ascii()) {
        return Err(EncodeError::UnsupportedCharacter(ch));
    }

    let width = image.width();
    let height = image.height();
    if width == 0 || height == 0 {
        return Err(EncodeError::EmptyImage);
    }
    if width % labels.len() != 0 {
        return Err(EncodeError::GeometryMismatch { width, glyphs: labels.len() });
    }

    let glyph_width = width / labels.len();
    let row_bytes = pack::row_bytes(height);
    let (Ok(glyph_width_u8), Ok(row_bytes_u8)) = (u8::try_from(glyph_width), u8::try_from(row_bytes))
    else {
        return Err(EncodeError::GlyphTooLarge { glyph_width, row_bytes });
    };
    info!(
        "Encoding {} glyphs of {glyph_width}x{height} pixels ({row_bytes} bytes per column)",
        labels.len()
    );

    let packed = PackedImage::from_source(image);
    let glyphs = labels
        .iter()
        .enumerate()
        .map(|(n, &label)| {
            let data = packed.columns(glyph_width * n, glyph_width * (n + 1)).to_vec();
            trace!("Glyph {n}: {label:?}, {} bytes", data.len());
            GlyphRecord { label, width: glyph_width_u8, data }
        })
        .collect();

    Ok(EncodedFont { row_bytes: row_bytes_u8, glyphs })
}
