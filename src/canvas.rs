use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::{
    Colour, Font, FontMetrics, FontSelection, FontStyle, Pt, TextFlowError, TextSink, Unit,
};
use id_arena::{Arena, Id};
use std::collections::HashMap;
use std::io::Write;

/// The font a span was drawn with
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text drawn on a canvas, with its baseline starting at `coords` (user units,
/// measured from the top-left corner of the page)
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (f32, f32),
}

/// A single page-sized drawing surface.
///
/// The canvas owns the fonts that can be drawn with and tracks the "current" font and
/// colour, which makes it a [`FontMetrics`] provider. Drawing text onto it records a
/// [`SpanLayout`] using whatever font and colour are current at the time, and the recorded
/// spans can be rendered into a PDF content stream with [`Canvas::render_contents`].
///
/// Coordinates and margins are in the canvas' [`Unit`], with the origin at the top-left
/// corner of the page and y growing downwards.
pub struct Canvas {
    pub fonts: Arena<Font>,
    families: HashMap<(String, FontStyle), Id<Font>>,
    selection: FontSelection,
    active: Option<Id<Font>>,
    colour: Colour,
    unit: Unit,
    /// The size of the page
    pub size: PageSize,
    pub margins: Margins,
    /// Everything drawn so far, in drawing order
    pub spans: Vec<SpanLayout>,
}

impl Canvas {
    pub fn new(size: PageSize, unit: Unit) -> Canvas {
        Canvas {
            fonts: Arena::new(),
            families: HashMap::new(),
            selection: FontSelection {
                family: String::new(),
                style: FontStyle::Normal,
                size: Pt(12.0),
            },
            active: None,
            colour: Colour::default(),
            unit,
            size,
            margins: Margins::default(),
            spans: Vec::new(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Canvas {
        self.margins = margins;
        self
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Register a font under an explicit family name and style. Family names are matched
    /// case-insensitively. Registering the same family and style twice replaces the
    /// earlier font for future lookups.
    pub fn add_font(&mut self, family: &str, style: FontStyle, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        self.families.insert((family.to_lowercase(), style), id);
        id
    }

    /// Register a font under the family name and style recorded in the font itself.
    /// Returns [None] (and doesn't register the font) if the font has no family name.
    pub fn register(&mut self, font: Font) -> Option<Id<Font>> {
        let family = font.family()?;
        let style = font.style();
        log::debug!("registering font family `{family}` ({style:?})");
        Some(self.add_font(&family, style, font))
    }

    /// The font that [`FontMetrics::set_font`] last selected
    pub fn active_font(&self) -> Option<&Font> {
        self.active.map(|id| &self.fonts[id])
    }

    /// Convert user-space coordinates (origin at the top-left, y growing downwards) into
    /// PDF points with the origin at the bottom-left of the page
    pub fn pdf_coords(&self, coords: (f32, f32)) -> (Pt, Pt) {
        (
            self.unit.to_pt(coords.0),
            self.size.1 - self.unit.to_pt(coords.1),
        )
    }

    /// Render all recorded spans into a PDF content stream. Fonts are referred to as `/F<n>`
    /// where `n` is the font's index on this canvas.
    pub fn render_contents(&self) -> Result<Vec<u8>, TextFlowError> {
        let runs: Vec<TextRun> = self
            .spans
            .iter()
            .map(|span| {
                let font = &self.fonts[span.font.id];
                TextRun {
                    font: span.font.id.index(),
                    size: span.font.size,
                    colour: span.colour,
                    origin: self.pdf_coords(span.coords),
                    glyphs: span.text.chars().map(|ch| font.resolve_glyph(ch)).collect(),
                }
            })
            .collect();

        let mut content: Vec<u8> = Vec::default();
        write_runs(&mut content, &runs)?;
        Ok(content)
    }
}

/// A span resolved down to what the content stream needs
struct TextRun {
    font: usize,
    size: Pt,
    colour: Colour,
    origin: (Pt, Pt),
    glyphs: Vec<u16>,
}

#[allow(clippy::write_with_newline)]
fn write_runs<W: Write>(content: &mut W, runs: &[TextRun]) -> Result<(), std::io::Error> {
    let Some(first) = runs.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font = (first.font, first.size);
    let mut current_colour: Colour = first.colour;
    write!(content, "/F{} {} Tf\n", current_font.0, current_font.1 .0)?;
    current_colour.write_fill(content)?;

    for run in runs.iter() {
        if (run.font, run.size) != current_font {
            current_font = (run.font, run.size);
            write!(content, "/F{} {} Tf\n", current_font.0, current_font.1 .0)?;
        }
        if run.colour != current_colour {
            current_colour = run.colour;
            current_colour.write_fill(content)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", run.origin.0 .0, run.origin.1 .0)?;
        write!(content, "<")?;
        for gid in run.glyphs.iter() {
            write!(content, "{gid:04x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

impl FontMetrics for Canvas {
    fn set_font(&mut self, family: &str, style: FontStyle, size: Pt) -> Result<(), TextFlowError> {
        let id = self
            .families
            .get(&(family.to_lowercase(), style))
            .copied()
            .ok_or_else(|| TextFlowError::UnknownFont {
                family: family.to_string(),
                style,
            })?;

        self.active = Some(id);
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
        self.unit.scale_factor()
    }

    fn string_width(&self, text: &str) -> f32 {
        match self.active_font() {
            Some(font) => self
                .unit
                .from_pt(font.width_of_text(text, self.selection.size)),
            None => {
                log::warn!("measuring {text:?} without an active font");
                0.0
            }
        }
    }

    fn margins(&self) -> Margins {
        self.margins
    }
}

impl TextSink for Canvas {
    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        let Some(id) = self.active else {
            log::warn!("dropping {text:?}: no active font to draw with");
            return;
        };

        self.spans.push(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id,
                size: self.selection.size,
            },
            colour: self.colour,
            coords: (x, y),
        });
    }
}
