use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// A length in PDF points (1/72 of an inch). Font sizes are always expressed in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
#[display("{_0}in")]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

/// The user unit of a drawing surface. Cell coordinates, margins and measured string
/// widths are all expressed in this unit, while font sizes stay in points.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Pt,
    Mm,
    In,
}

impl Unit {
    /// How many points make up one user unit
    pub fn scale_factor(self) -> f32 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => 72.0 / 25.4,
            Unit::In => 72.0,
        }
    }

    /// Convert a length in points into this unit
    pub fn from_pt(self, value: Pt) -> f32 {
        value.0 / self.scale_factor()
    }

    /// Convert a length in this unit into points
    pub fn to_pt(self, value: f32) -> Pt {
        Pt(value * self.scale_factor())
    }
}
