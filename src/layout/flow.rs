use std::ops::{Deref, DerefMut};

use super::breaker::words;
use super::{break_lines, Cell, LegacyFamilies, TextProperties};
use crate::{Colour, FontMetrics, TextFlowError, TextSink};

/// Selects the font and colour of a [`TextProperties`] on a [`FontMetrics`] provider for as
/// long as the scope lives.
///
/// Dropping the scope puts the provider's previous colour back. The font family, style and
/// size are left as the scope set them.
pub struct FontScope<'a, M: FontMetrics + ?Sized> {
    metrics: &'a mut M,
    prior_colour: Colour,
}

impl<'a, M: FontMetrics + ?Sized> FontScope<'a, M> {
    pub fn acquire(metrics: &'a mut M, props: &TextProperties) -> Result<Self, TextFlowError> {
        metrics.set_font(&props.family, props.style, props.size)?;
        let prior_colour = metrics.colour();
        metrics.set_colour(props.colour);
        Ok(FontScope {
            metrics,
            prior_colour,
        })
    }
}

impl<M: FontMetrics + ?Sized> Deref for FontScope<'_, M> {
    type Target = M;

    fn deref(&self) -> &M {
        self.metrics
    }
}

impl<M: FontMetrics + ?Sized> DerefMut for FontScope<'_, M> {
    fn deref_mut(&mut self) -> &mut M {
        self.metrics
    }
}

impl<M: FontMetrics + ?Sized> Drop for FontScope<'_, M> {
    fn drop(&mut self) {
        self.metrics.set_colour(self.prior_colour);
    }
}

/// Where a single line of text should be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// The lines of a block of text, positioned
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Placement {
    pub instructions: Vec<DrawInstruction>,
    /// The y coordinate (without the top margin) of the last line's baseline, for stacking
    /// more content below the block. Zero when nothing was placed.
    pub last_y: f32,
}

/// Flows text into cells.
///
/// Text set in one of the [`LegacyFamilies`] is folded into the provider's default
/// codepage before it is measured, since those fonts are only ever drawn through that
/// codepage.
#[derive(Debug, Default, Clone)]
pub struct TextFlow {
    legacy: LegacyFamilies,
}

impl TextFlow {
    pub fn new(legacy: LegacyFamilies) -> TextFlow {
        TextFlow { legacy }
    }

    pub fn legacy_families(&self) -> &LegacyFamilies {
        &self.legacy
    }

    /// Translate `text` for measuring and drawing in `family`. Text in families that aren't
    /// legacy encoded is returned unchanged.
    pub fn normalize<M: FontMetrics + ?Sized>(
        &self,
        metrics: &M,
        text: &str,
        family: &str,
    ) -> Result<String, TextFlowError> {
        if !self.legacy.contains(family) {
            return Ok(text.to_string());
        }
        let translator = metrics.unicode_translator("")?;
        Ok(translator.translate(text))
    }

    /// Estimate how many lines `text` will occupy in a column `col_width` wide.
    ///
    /// This doesn't lay the text out when it can avoid it: text that fits on one line,
    /// extrapolated text, and text holding at most one word all count as a single line
    /// (empty text included). Note that this means a single word wider than the column counts as one line
    /// even though it will be broken up when the text is placed.
    ///
    /// Selects the font from `props` on the provider and leaves it selected.
    pub fn count_lines<M: FontMetrics + ?Sized>(
        &self,
        metrics: &mut M,
        text: &str,
        props: &TextProperties,
        col_width: f32,
    ) -> Result<usize, TextFlowError> {
        metrics.set_font(&props.family, props.style, props.size)?;
        let metrics = &*metrics;
        let text = self.normalize(metrics, text, &props.family)?;

        let width = metrics.string_width(&text);
        let single_word = text.lines().flat_map(words).nth(1).is_none();
        if width < col_width || props.extrapolate || single_word {
            log::debug!("counted 1 line without wrapping (width {width}, column {col_width})");
            return Ok(1);
        }

        let count = break_lines(metrics, &text, col_width).len();
        log::debug!("counted {count} lines (width {width}, column {col_width})");
        Ok(count)
    }

    /// Break `text` into lines fitting `cell` and work out where each line is drawn.
    ///
    /// The first baseline sits one line height below `cell.y`. Every following line is one
    /// line height plus `props.vertical_padding` further down. Lines are aligned within the
    /// cell's width and offset by the provider's left and top margins.
    ///
    /// The provider's colour is restored before returning; the font stays selected.
    pub fn place<M: FontMetrics + ?Sized>(
        &self,
        metrics: &mut M,
        text: &str,
        cell: Cell,
        props: &TextProperties,
    ) -> Result<Placement, TextFlowError> {
        let scope = FontScope::acquire(metrics, props)?;
        self.position(&*scope, text, cell, props)
    }

    /// Place `text` like [`TextFlow::place`] and draw every line onto the canvas in the
    /// requested font and colour. Returns the y coordinate of the last line drawn, or zero
    /// if the text produced no lines.
    pub fn add<C: FontMetrics + TextSink + ?Sized>(
        &self,
        canvas: &mut C,
        text: &str,
        cell: Cell,
        props: &TextProperties,
    ) -> Result<f32, TextFlowError> {
        let mut scope = FontScope::acquire(canvas, props)?;
        let placement = self.position(&*scope, text, cell, props)?;
        for line in placement.instructions.iter() {
            scope.draw_text(line.x, line.y, &line.text);
        }
        Ok(placement.last_y)
    }

    fn position<M: FontMetrics + ?Sized>(
        &self,
        metrics: &M,
        text: &str,
        mut cell: Cell,
        props: &TextProperties,
    ) -> Result<Placement, TextFlowError> {
        let line_height = metrics.snapshot().line_height();
        cell.y += line_height;

        let text = self.normalize(metrics, text, &props.family)?;
        let (left, top, _, _) = metrics.margins().ltrb();

        let mut placement = Placement::default();
        let mut padding = 0.0;
        for (i, line) in break_lines(metrics, &text, cell.width).into_iter().enumerate() {
            let y = cell.y + i as f32 * line_height + padding;
            let dx = props.align.offset(cell.width, metrics.string_width(&line));

            placement.instructions.push(DrawInstruction {
                x: cell.x + dx + left,
                y: y + top,
                text: line,
            });
            placement.last_y = y;
            padding += props.vertical_padding;
        }

        log::debug!(
            "placed {} lines in a {} wide cell, last baseline at {}",
            placement.instructions.len(),
            cell.width,
            placement.last_y
        );
        Ok(placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::FixedMetrics;
    use crate::layout::{Align, Margins};
    use crate::{colours, FontStyle, Pt};

    fn props() -> TextProperties {
        TextProperties::default()
            .with_family("fira")
            .with_size(Pt(10.0))
    }

    #[test]
    fn right_alignment_uses_full_residual_width() {
        let mut metrics = FixedMetrics::new(1.0);
        metrics.margins = Margins::trbl(0.0, 0.0, 0.0, 5.0);
        let text = "x".repeat(40);

        let placement = TextFlow::default()
            .place(
                &mut metrics,
                &text,
                Cell::new(0.0, 0.0, 100.0),
                &props().with_align(Align::Right),
            )
            .unwrap();
        assert_eq!(placement.instructions.len(), 1);
        assert_eq!(placement.instructions[0].x, 65.0);

        let placement = TextFlow::default()
            .place(
                &mut metrics,
                &text,
                Cell::new(0.0, 0.0, 100.0),
                &props().with_align(Align::Center),
            )
            .unwrap();
        assert_eq!(placement.instructions[0].x, 35.0);
    }

    #[test]
    fn padding_accumulates_between_lines() {
        let mut metrics = FixedMetrics::new(1.0);
        let placement = TextFlow::default()
            .place(
                &mut metrics,
                "one\ntwo\nthree",
                Cell::new(0.0, 0.0, 100.0),
                &props().with_vertical_padding(5.0),
            )
            .unwrap();

        let ys: Vec<f32> = placement.instructions.iter().map(|i| i.y).collect();
        // the first baseline is pushed down by one line height
        assert_eq!(ys, vec![10.0, 25.0, 40.0]);
        assert_eq!(placement.last_y, 40.0);
    }

    #[test]
    fn top_margin_offsets_drawing_but_not_last_y() {
        let mut metrics = FixedMetrics::new(1.0);
        metrics.margins = Margins::trbl(7.0, 0.0, 0.0, 3.0);
        let placement = TextFlow::default()
            .place(&mut metrics, "hi", Cell::new(10.0, 20.0, 100.0), &props())
            .unwrap();
        assert_eq!(
            placement.instructions,
            vec![DrawInstruction {
                x: 13.0,
                y: 37.0,
                text: "hi".to_string()
            }]
        );
        assert_eq!(placement.last_y, 30.0);
    }

    #[test]
    fn line_height_follows_scale_factor() {
        let mut metrics = FixedMetrics::new(1.0);
        metrics.scale_factor = 2.0;
        let placement = TextFlow::default()
            .place(
                &mut metrics,
                "a\nb",
                Cell::new(0.0, 0.0, 50.0),
                &props().with_size(Pt(12.0)),
            )
            .unwrap();
        let ys: Vec<f32> = placement.instructions.iter().map(|i| i.y).collect();
        assert_eq!(ys, vec![6.0, 12.0]);
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut metrics = FixedMetrics::new(1.0);
        let y = TextFlow::default()
            .add(&mut metrics, "", Cell::new(0.0, 4.0, 100.0), &props())
            .unwrap();
        assert!(metrics.drawn.is_empty());
        assert_eq!(y, 0.0);
    }

    #[test]
    fn colour_is_restored_and_font_kept() {
        let mut metrics = FixedMetrics::new(1.0);
        metrics.colour = colours::RED;

        let props = props()
            .with_colour(colours::BLUE)
            .with_style(FontStyle::Bold)
            .with_size(Pt(14.0));
        TextFlow::default()
            .add(&mut metrics, "aa bb cc", Cell::new(0.0, 0.0, 6.0), &props)
            .unwrap();

        assert_eq!(metrics.colour, colours::RED);
        assert_eq!(metrics.selection.style, FontStyle::Bold);
        assert_eq!(metrics.selection.size, Pt(14.0));
        assert_eq!(metrics.drawn.len(), 2);
        assert!(metrics
            .drawn
            .iter()
            .all(|(_, _, _, colour)| *colour == colours::BLUE));
    }

    #[test]
    fn unknown_font_leaves_colour_alone() {
        let mut metrics = FixedMetrics::new(1.0);
        metrics.colour = colours::RED;
        let props = props().with_family("missing").with_colour(colours::BLUE);

        let result = TextFlow::default().add(&mut metrics, "text", Cell::new(0.0, 0.0, 10.0), &props);
        assert!(matches!(result, Err(TextFlowError::UnknownFont { .. })));
        assert_eq!(metrics.colour, colours::RED);
        assert!(metrics.drawn.is_empty());
    }

    #[test]
    fn scope_restores_colour_on_drop() {
        let mut metrics = FixedMetrics::new(1.0);
        {
            let scope =
                FontScope::acquire(&mut metrics, &props().with_colour(colours::WHITE)).unwrap();
            assert_eq!(scope.colour(), colours::WHITE);
        }
        assert_eq!(metrics.colour, Colour::default());
    }

    #[test]
    fn legacy_families_are_translated() {
        let metrics = FixedMetrics::new(1.0);
        let flow = TextFlow::default();
        assert_eq!(flow.normalize(&metrics, "日本 €", "Arial").unwrap(), ".. €");
        assert_eq!(flow.normalize(&metrics, "日本 €", "Fira").unwrap(), "日本 €");

        let flow = TextFlow::new(LegacyFamilies::none());
        assert_eq!(flow.normalize(&metrics, "日本", "arial").unwrap(), "日本");
    }

    #[test]
    fn counting_takes_the_fast_path() {
        let mut metrics = FixedMetrics::new(1.0);
        let flow = TextFlow::default();

        assert_eq!(flow.count_lines(&mut metrics, "Hello world", &props(), 20.0).unwrap(), 1);
        assert_eq!(
            flow.count_lines(&mut metrics, "Supercalifragilisticexpialidocious", &props(), 10.0)
                .unwrap(),
            1
        );
        assert_eq!(
            flow.count_lines(&mut metrics, "aa bb cc dd", &props().with_extrapolate(true), 6.0)
                .unwrap(),
            1
        );
        assert_eq!(flow.count_lines(&mut metrics, "", &props(), 6.0).unwrap(), 1);
        assert_eq!(
            flow.count_lines(&mut metrics, "10\u{a0}km\u{a0}stretch", &props(), 6.0)
                .unwrap(),
            1
        );
    }

    #[test]
    fn counting_matches_breaking() {
        let mut metrics = FixedMetrics::new(1.0);
        let flow = TextFlow::default();
        let text = "aa bb cc dd\nee ff gg";
        let count = flow.count_lines(&mut metrics, text, &props(), 6.0).unwrap();
        assert_eq!(count, break_lines(&metrics, text, 6.0).len());
        assert_eq!(count, 4);
        assert_eq!(metrics.selection.family, "fira");

        // words on separate lines are still separate words
        assert_eq!(
            flow.count_lines(&mut metrics, "Line1\nLine2", &props(), 6.0).unwrap(),
            2
        );
    }
}
