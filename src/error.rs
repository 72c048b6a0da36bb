use crate::FontStyle;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum TextFlowError {
    #[error(transparent)]
    /// An I/O error occurred while writing a content stream
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("no font registered for family `{family}` with style {style:?}")]
    /// The font metrics provider was asked to select a font it doesn't know about
    UnknownFont { family: String, style: FontStyle },

    #[error("unknown codepage descriptor `{0}`")]
    /// No translation table exists for the requested codepage
    UnknownCodepage(String),
}
