//! Text flow: wrapping text to the width of a cell and positioning every line.
//!
//! The pieces fit together as follows:
//!
//! - [`TextFlow::normalize`] folds text set in a [`LegacyFamilies`] font into the
//!   provider's codepage, so that it is measured the way it will be drawn
//! - [`break_lines`] wraps text into lines narrower than a column, honouring explicit line
//!   breaks and breaking oversize words character by character
//! - [`TextFlow::count_lines`] estimates the number of lines cheaply, for sizing rows
//! - [`TextFlow::place`] / [`TextFlow::add`] stack the lines below each other and align them
//!   within the cell, selecting the font and colour for the duration of the call through a
//!   [`FontScope`]
//!
//! All measurements go through a [`FontMetrics`](crate::FontMetrics) provider, such as a
//! [`Canvas`](crate::Canvas).

mod breaker;
mod flow;
mod margins;
mod normalize;
mod props;

pub use breaker::*;
pub use flow::*;
pub use margins::*;
pub use normalize::*;
pub use props::*;

#[cfg(test)]
pub(crate) mod testing;
