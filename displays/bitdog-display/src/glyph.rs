//! Glyph lookup
//!
//! Glyphs are fixed-width column bitmaps. A [`GlyphTable`] maps a character
//! to its bitmap, or to nothing when the character has no glyph; the
//! driver treats a missing glyph as "draw nothing".

use crate::font::{DIGITS, LOWERCASE, UPPERCASE};

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 5;

/// Pixel rows one line of text occupies
pub const GLYPH_HEIGHT: usize = 8;

/// Horizontal cursor advance: one glyph plus one blank spacing column
pub const GLYPH_ADVANCE: usize = GLYPH_WIDTH + 1;

/// One column byte per glyph column
pub type Glyph = [u8; GLYPH_WIDTH];

/// Character to bitmap lookup
pub trait GlyphTable {
    /// Bitmap for `c`, or `None` if the table has no glyph for it
    fn lookup(&self, c: char) -> Option<Glyph>;
}

/// Built-in 5x8 font covering `A-Z`, `a-z` and `0-9`
///
/// Lookup is case-sensitive and ASCII only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Font5x8;

impl GlyphTable for Font5x8 {
    fn lookup(&self, c: char) -> Option<Glyph> {
        match c {
            'A'..='Z' => Some(UPPERCASE[c as usize - 'A' as usize]),
            'a'..='z' => Some(LOWERCASE[c as usize - 'a' as usize]),
            '0'..='9' => Some(DIGITS[c as usize - '0' as usize]),
            _ => None,
        }
    }
}
