//! Common paper sizes, in portrait orientation as (width, height).

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Swap a portrait page size into landscape orientation (width ≥ height)
pub fn landscape(size: PageSize) -> PageSize {
    if size.0 >= size.1 {
        size
    } else {
        (size.1, size.0)
    }
}
