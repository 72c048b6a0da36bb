//! Flow text into fixed-width cells for PDF documents: wrap it to the cell's width using
//! real font metrics, then work out where every line has to be drawn.

mod canvas;
pub use canvas::*;

/// Legacy single-byte codepages used to translate text for core font families
pub mod codepage;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Utility functions and structures to wrap and position text within cells
pub mod layout;

mod metrics;
pub use metrics::*;

pub mod pagesize;

mod units;
pub use units::*;
