//! Legacy single-byte codepages.
//!
//! Some font families are only ever encoded with a single-byte codepage. Before such text
//! can be measured it has to be folded into the codepage's repertoire: code points the
//! codepage can represent are kept as-is, anything else is replaced with [`UNMAPPED`].

use crate::TextFlowError;
use encoding_rs::WINDOWS_1252;

/// Replacement for code points a codepage cannot represent
pub const UNMAPPED: char = '.';

/// A single-byte encoding that text can be translated into
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Codepage {
    /// Windows-1252 (Western European), the default legacy encoding
    #[default]
    Cp1252,
    /// ISO-8859-1 (Latin-1)
    Iso8859_1,
}

impl Codepage {
    /// Look up a codepage from its descriptor. An empty descriptor selects the default
    /// codepage.
    pub fn from_descriptor(descriptor: &str) -> Result<Codepage, TextFlowError> {
        match descriptor.trim().to_ascii_lowercase().as_str() {
            "" | "cp1252" | "windows-1252" => Ok(Codepage::Cp1252),
            "iso-8859-1" | "iso8859-1" | "latin1" => Ok(Codepage::Iso8859_1),
            other => Err(TextFlowError::UnknownCodepage(other.to_string())),
        }
    }

    /// Encode a single character, returning [None] if the codepage can't represent it
    pub fn encode(&self, ch: char) -> Option<u8> {
        let cp = ch as u32;
        if cp < 0x80 {
            return Some(cp as u8);
        }
        match self {
            Codepage::Iso8859_1 => u8::try_from(cp).ok(),
            Codepage::Cp1252 => {
                let mut buf = [0u8; 4];
                let (bytes, _, had_errors) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
                match (had_errors, bytes.as_ref()) {
                    (false, [byte]) => Some(*byte),
                    _ => None,
                }
            }
        }
    }

    /// Fold the text into this codepage's repertoire
    pub fn translate(&self, text: &str) -> String {
        text.chars()
            .map(|ch| match self.encode(ch) {
                Some(_) => ch,
                None => UNMAPPED,
            })
            .collect()
    }
}
