use pdf_textflow::layout::Margins;
use pdf_textflow::{Colour, FontMetrics, FontSelection, FontStyle, Pt, TextFlowError, TextSink};

/// Advances in ems for a few glyph classes. All of them are exact binary fractions so
/// widths add up without rounding.
fn advance(ch: char) -> f32 {
    match ch {
        'i' | 'l' | 'j' | '.' | ',' | '\'' => 0.25,
        ' ' => 0.375,
        'm' | 'w' | 'M' | 'W' => 0.875,
        c if c.is_uppercase() => 0.75,
        '\n' | '\r' => 0.0,
        _ => 0.5,
    }
}

/// A fake font provider: widths scale with the selected size and it records everything
/// drawn on it
pub struct Proportional {
    pub selection: FontSelection,
    pub colour: Colour,
    pub scale_factor: f32,
    pub margins: Margins,
    pub drawn: Vec<(f32, f32, String)>,
}

impl Proportional {
    pub fn new() -> Proportional {
        let _ = env_logger::builder().is_test(true).try_init();
        Proportional {
            selection: FontSelection {
                family: "courier".into(),
                style: FontStyle::Normal,
                size: Pt(10.0),
            },
            colour: Colour::default(),
            scale_factor: 1.0,
            margins: Margins::default(),
            drawn: Vec::new(),
        }
    }
}

impl FontMetrics for Proportional {
    fn set_font(&mut self, family: &str, style: FontStyle, size: Pt) -> Result<(), TextFlowError> {
        self.selection = FontSelection {
            family: family.to_string(),
            style,
            size,
        };
        Ok(())
    }

    fn font(&self) -> FontSelection {
        self.selection.clone()
    }

    fn colour(&self) -> Colour {
        self.colour
    }

    fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn string_width(&self, text: &str) -> f32 {
        let em: f32 = text.chars().map(advance).sum();
        em * self.selection.size.0 / self.scale_factor
    }

    fn margins(&self) -> Margins {
        self.margins
    }
}

impl TextSink for Proportional {
    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        self.drawn.push((x, y, text.to_string()));
    }
}
