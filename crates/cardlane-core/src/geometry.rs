#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }

    /// Extent of this size along the given axis (width for horizontal,
    /// height for vertical).
    pub fn extent_on(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Per-edge insets, in the same logical units as cell sizes and spacing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        EdgeInsets {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same inset on all four edges.
    pub fn all(v: f32) -> Self {
        EdgeInsets::new(v, v, v, v)
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Scroll axis of a section. Fixed at bind time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_extent_follows_axis() {
        let s = Size::new(320.0, 48.0);
        assert_eq!(s.extent_on(Axis::Horizontal), 320.0);
        assert_eq!(s.extent_on(Axis::Vertical), 48.0);
    }

    #[test]
    fn insets_sums() {
        let i = EdgeInsets::new(4.0, 6.0, 1.0, 2.0);
        assert_eq!(i.horizontal_sum(), 10.0);
        assert_eq!(i.vertical_sum(), 3.0);
        assert_eq!(EdgeInsets::all(4.0).horizontal_sum(), 8.0);
    }

    #[test]
    fn axis_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }
}
