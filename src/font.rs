use crate::{FontStyle, Pt, TextFlowError};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed font object. Fonts can be TTF or OTF fonts and are only used for their
/// metrics here: the horizontal advance of each glyph is what text widths are measured
/// with.
///
/// Typically, fonts are registered on a [`Canvas`](crate::Canvas) and referred to by
/// their family name and [`FontStyle`] afterwards
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, TextFlowError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The style this face was designed as, according to its OS/2 flags
    pub fn style(&self) -> FontStyle {
        let face = self.face.as_face_ref();
        FontStyle::from_flags(face.is_bold(), face.is_italic())
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// The glyph used to draw `ch`: its own glyph, else the replacement character, else `?`.
    /// Falls back to the `.notdef` glyph when the font has none of those.
    pub fn resolve_glyph(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .or_else(|| self.glyph_id('?'))
            .unwrap_or_default()
    }

    /// Calculate the horizontal advance of a single character at the given font size
    pub fn advance(&self, ch: char, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let scaling: Pt = size / face.units_per_em() as f32;
        scaling
            * face
                .glyph_hor_advance(GlyphId(self.resolve_glyph(ch)))
                .unwrap_or_default() as f32
    }

    /// Calculate the width of a given string of text at the given font size. Line breaks
    /// have no width.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        text.chars()
            .filter(|&ch| ch != '\n' && ch != '\r')
            .map(|ch| self.advance(ch, size))
            .sum()
    }
}
