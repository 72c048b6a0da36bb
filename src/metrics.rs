use crate::codepage::Codepage;
use crate::layout::Margins;
use crate::{Colour, Pt, TextFlowError};

/// The style variant of a font family
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn from_flags(bold: bool, italic: bool) -> FontStyle {
        match (bold, italic) {
            (false, false) => FontStyle::Normal,
            (true, false) => FontStyle::Bold,
            (false, true) => FontStyle::Italic,
            (true, true) => FontStyle::BoldItalic,
        }
    }
}

/// The font currently selected on a [`FontMetrics`] provider
#[derive(Debug, Clone, PartialEq)]
pub struct FontSelection {
    pub family: String,
    pub style: FontStyle,
    pub size: Pt,
}

/// The active font together with the scale factor of the surface it is measured on
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetricsSnapshot {
    pub family: String,
    pub style: FontStyle,
    pub size: Pt,
    /// Points per user unit
    pub scale_factor: f32,
}

impl FontMetricsSnapshot {
    /// Vertical distance between two stacked lines, in user units
    pub fn line_height(&self) -> f32 {
        self.size.0 / self.scale_factor
    }
}

/// The font state that text is measured against.
///
/// Implementations hold a single "current" font and colour which callers mutate before
/// measuring or drawing. Widths and margins are in the provider's user unit; font sizes are
/// in points.
pub trait FontMetrics {
    /// Make `family` in `style` at `size` the active font
    fn set_font(&mut self, family: &str, style: FontStyle, size: Pt) -> Result<(), TextFlowError>;

    /// The active font
    fn font(&self) -> FontSelection;

    fn colour(&self) -> Colour;

    fn set_colour(&mut self, colour: Colour);

    /// Points per user unit, always > 0
    fn scale_factor(&self) -> f32;

    /// The rendered width of `text` in the active font, in user units
    fn string_width(&self, text: &str) -> f32;

    /// Obtain the translator for the codepage named by `descriptor`. The empty descriptor
    /// selects the provider's default codepage.
    fn unicode_translator(&self, descriptor: &str) -> Result<Codepage, TextFlowError> {
        Codepage::from_descriptor(descriptor)
    }

    /// Page margins as (left, top, right, bottom)
    fn margins(&self) -> Margins;

    fn snapshot(&self) -> FontMetricsSnapshot {
        let FontSelection {
            family,
            style,
            size,
        } = self.font();
        FontMetricsSnapshot {
            family,
            style,
            size,
            scale_factor: self.scale_factor(),
        }
    }
}

/// Somewhere lines of text get painted
pub trait TextSink {
    /// Paint `text` with its baseline starting at the absolute coordinates `(x, y)`
    fn draw_text(&mut self, x: f32, y: f32, text: &str);
}
