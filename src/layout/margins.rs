/// Page margins in the user unit of the surface they belong to. Text placement offsets
/// every line by the left and top margins; nothing prevents text from running into the
/// right or bottom margins.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all(value: f32) -> Margins {
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: f32, horizontal: f32) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Margins in the order text engines traditionally report them: left, top, right, bottom
    pub fn ltrb(&self) -> (f32, f32, f32, f32) {
        (self.left, self.top, self.right, self.bottom)
    }
}
