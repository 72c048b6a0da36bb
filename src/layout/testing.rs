use std::collections::HashMap;

use super::Margins;
use crate::{Colour, FontMetrics, FontSelection, FontStyle, Pt, TextFlowError, TextSink};

/// A font provider where every character is `default_width` wide unless overridden
pub(crate) struct FixedMetrics {
    pub default_width: f32,
    pub widths: HashMap<char, f32>,
    pub selection: FontSelection,
    pub colour: Colour,
    pub scale_factor: f32,
    pub margins: Margins,
    pub drawn: Vec<(f32, f32, String, Colour)>,
}

impl FixedMetrics {
    pub fn new(default_width: f32) -> FixedMetrics {
        FixedMetrics {
            default_width,
            widths: HashMap::new(),
            selection: FontSelection {
                family: String::new(),
                style: FontStyle::Normal,
                size: Pt(10.0),
            },
            colour: Colour::default(),
            scale_factor: 1.0,
            margins: Margins::default(),
            drawn: Vec::new(),
        }
    }

    pub fn with_width(mut self, ch: char, width: f32) -> FixedMetrics {
        self.widths.insert(ch, width);
        self
    }
}

impl FontMetrics for FixedMetrics {
    fn set_font(&mut self, family: &str, style: FontStyle, size: Pt) -> Result<(), TextFlowError> {
        if family == "missing" {
            return Err(TextFlowError::UnknownFont {
                family: family.to_string(),
                style,
            });
        }
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
        text.chars()
            .filter(|&ch| ch != '\n' && ch != '\r')
            .map(|ch| self.widths.get(&ch).copied().unwrap_or(self.default_width))
            .sum()
    }

    fn margins(&self) -> Margins {
        self.margins
    }
}

impl TextSink for FixedMetrics {
    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        self.drawn.push((x, y, text.to_string(), self.colour));
    }
}
