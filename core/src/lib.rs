#![no_std]

pub mod bitmap;
pub mod emit;
pub mod error;
pub mod glyph;
pub mod pack;
pub mod view;

extern crate alloc;

pub use bitmap::{PixelSource, Rgb8Grid};
pub use error::EncodeError;
pub use glyph::{EncodedFont, FONT_TRAILER, GlyphRecord, encode};
