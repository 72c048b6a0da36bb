use crate::{Colour, FontStyle, Pt};

/// Horizontal alignment of each line within its cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Horizontal offset of a line of width `line_width` inside a cell of width
    /// `cell_width`. Lines wider than the cell get a negative offset when centred or right
    /// aligned.
    pub fn offset(self, cell_width: f32, line_width: f32) -> f32 {
        match self {
            Align::Left => 0.0,
            Align::Center => (cell_width - line_width) / 2.0,
            Align::Right => cell_width - line_width,
        }
    }
}

/// The rectangle text is flowed into. `x` and `y` locate its top-left corner; only the
/// width bounds the text, the cell grows downwards as far as the text needs.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Cell {
    pub x: f32,
    pub y: f32,
    /// Must be > 0
    pub width: f32,
}

impl Cell {
    pub fn new(x: f32, y: f32, width: f32) -> Cell {
        Cell { x, y, width }
    }
}

/// How a block of text should be set
#[derive(Debug, Clone, PartialEq)]
pub struct TextProperties {
    pub family: String,
    pub style: FontStyle,
    pub size: Pt,
    pub colour: Colour,
    pub align: Align,
    /// Extra space inserted below every line, in user units
    pub vertical_padding: f32,
    /// Let the text run past the right edge of the cell instead of wrapping it
    pub extrapolate: bool,
}

impl Default for TextProperties {
    fn default() -> Self {
        TextProperties {
            family: "arial".to_string(),
            style: FontStyle::Normal,
            size: Pt(10.0),
            colour: Colour::default(),
            align: Align::Left,
            vertical_padding: 0.0,
            extrapolate: false,
        }
    }
}

impl TextProperties {
    pub fn with_family<S: Into<String>>(mut self, family: S) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_size<P: Into<Pt>>(mut self, size: P) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Negative padding is clamped to zero
    pub fn with_vertical_padding(mut self, padding: f32) -> Self {
        self.vertical_padding = padding.max(0.0);
        self
    }

    pub fn with_extrapolate(mut self, extrapolate: bool) -> Self {
        self.extrapolate = extrapolate;
        self
    }
}
