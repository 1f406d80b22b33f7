/// Error type for glyph encoding and source emission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    NoCharacters,
    EmptyImage,
    UnsupportedCharacter(char),
    GeometryMismatch { width: usize, glyphs: usize },
    GlyphTooLarge { glyph_width: usize, row_bytes: usize },
    Io(embedded_io::ErrorKind),
}

impl EncodeError {
    pub(crate) fn from_io_error(error: impl embedded_io::Error) -> Self {
        EncodeError::Io(error.kind())
    }
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EncodeError::NoCharacters => write!(f, "need at least 1 character in character string"),
            EncodeError::EmptyImage => write!(f, "image has no pixels"),
            EncodeError::UnsupportedCharacter(ch) => {
                write!(f, "character {ch:?} does not fit in a single byte label")
            }
            EncodeError::GeometryMismatch { width, glyphs } => write!(
                f,
                "the width of {width} pixels does not match the number of characters ({glyphs})"
            ),
            EncodeError::GlyphTooLarge { glyph_width, row_bytes } => write!(
                f,
                "glyph of {glyph_width} columns x {row_bytes} bytes does not fit the font table (max 255)"
            ),
            EncodeError::Io(kind) => write!(f, "I/O error while writing font source: {kind:?}"),
        }
    }
}

impl embedded_io::Error for EncodeError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            EncodeError::Io(kind) => *kind,
            EncodeError::NoCharacters
            | EncodeError::EmptyImage
            | EncodeError::UnsupportedCharacter(_) => embedded_io::ErrorKind::InvalidInput,
            EncodeError::GeometryMismatch { .. } | EncodeError::GlyphTooLarge { .. } => {
                embedded_io::ErrorKind::InvalidData
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, EncodeError>;
