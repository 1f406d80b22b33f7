//! C source generation for encoded fonts.
//!
//! The output is a single array of pointers to anonymous `__flash` byte
//! arrays, the layout the LCR meter's text renderer walks:
//!
//! ```c
//! const __flash uint8_t * const __flash font8x5[] =
//! {
//!    (const __flash uint8_t []){ 1, 0xff, 0xff, 0xff, 0x00},
//!    (const __flash uint8_t []){ '0', 1, 0xff},
//! };
//! ```

use alloc::string::String;
use core::fmt::Write as _;

use crate::{
    error::{EncodeError, Result},
    glyph::EncodedFont,
};

const RECORD_PREFIX: &str = "   (const __flash uint8_t []){ ";

/// Renders the complete source file for `font` under the array name `name`.
pub fn render_source(name: &str, font: &EncodedFont) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_records(&mut out, name, font);
    out
}

/// Renders the source and writes it to `out` in one go.
pub fn write_source(out: &mut impl embedded_io::Write, name: &str, font: &EncodedFont) -> Result<()> {
    let source = render_source(name, font);
    out.write_all(source.as_bytes())
        .map_err(EncodeError::from_io_error)?;
    out.flush().map_err(EncodeError::from_io_error)
}

fn write_records(out: &mut String, name: &str, font: &EncodedFont) -> core::fmt::Result {
    out.push_str("// Auto-generated font file\n");
    writeln!(out, "const __flash uint8_t * const __flash {name}[] =")?;
    out.push_str("{\n");

    let [rows, trailer @ ..] = font.header();
    write!(out, "{RECORD_PREFIX}{rows}")?;
    for byte in trailer {
        write!(out, ", 0x{byte:02x}")?;
    }
    out.push_str("},\n");

    for glyph in &font.glyphs {
        write!(out, "{RECORD_PREFIX}{}, {}", char_literal(glyph.label), glyph.width)?;
        for byte in &glyph.data {
            write!(out, ", 0x{byte:02x}")?;
        }
        out.push_str("},\n");
    }

    out.push_str("};\n");
    Ok(())
}

/// C character literal for an ASCII label.
pub fn char_literal(ch: char) -> String {
    match ch {
        '\'' => String::from("'\\''"),
        '\\' => String::from("'\\\\'"),
        ' '..='~' => alloc::format!("'{ch}'"),
        _ => alloc::format!("'\\x{:02x}'", ch as u32),
    }
}

/// Array name for an image path: directory and extension dropped, anything
/// that is not valid in a C identifier replaced by `_`.
pub fn identifier_from_path(path: &str) -> String {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(dot) => &file_name[..dot],
    };

    let mut name: String = stem
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect();
    if name.is_empty() || name.starts_with(|ch: char| ch.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// True for names usable as a C array identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
