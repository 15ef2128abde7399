use crate::{Color, EdgeInsets, Font, Gradient, Size};

/// Vertical alignment of header content within the header's bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Appearance record of one section.
///
/// A plain value: replacing it wholesale on a [`Section`](crate::Section) is
/// the only supported update path — there is no partial merge. Nothing is
/// validated; a negative corner radius or a zero cell size yields a
/// degenerate rendering, not an error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionAppearance {
    /// Section title. A non-empty title implies the section wants a header.
    pub title: String,
    pub title_color: Color,
    pub title_font: Font,
    /// When set and non-empty, the header shows a tappable detail affordance
    /// with this label.
    pub detail_title: Option<String>,
    pub detail_title_color: Color,
    pub detail_title_font: Font,
    /// Uniform preferred size for every cell in the section.
    pub preferred_cell_size: Size,
    /// Corner radius applied to cells; clamped to zero at bind time.
    pub cell_corner_radius: f32,
    /// Spacing between items within one line.
    pub inter_item_spacing: f32,
    /// Spacing between lines; on the horizontal axis this also feeds the
    /// leading/trailing section insets.
    pub line_spacing: f32,
    /// Extra insets combined with axis-dependent spacing, per edge.
    pub additional_insets: EdgeInsets,
    /// Optional gradient chrome applied to every cell.
    pub gradient: Option<Gradient>,
    pub header_alignment: HeaderAlignment,
}

impl Default for SectionAppearance {
    fn default() -> Self {
        SectionAppearance {
            title: String::new(),
            title_color: Color::BLACK,
            title_font: Font::system(18.0),
            detail_title: None,
            detail_title_color: Color::BLACK,
            detail_title_font: Font::system(14.0),
            preferred_cell_size: Size::ZERO,
            cell_corner_radius: 0.0,
            inter_item_spacing: 20.0,
            line_spacing: 20.0,
            additional_insets: EdgeInsets::ZERO,
            gradient: None,
            header_alignment: HeaderAlignment::Top,
        }
    }
}

impl SectionAppearance {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the section's surface should install a header.
    pub fn needs_header(&self) -> bool {
        !self.title.is_empty()
    }

    /// True when the header must expose the tappable detail affordance.
    pub fn has_detail(&self) -> bool {
        self.detail_title.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    pub fn title_font(mut self, font: Font) -> Self {
        self.title_font = font;
        self
    }

    pub fn detail_title(mut self, title: impl Into<String>) -> Self {
        self.detail_title = Some(title.into());
        self
    }

    pub fn detail_title_color(mut self, color: Color) -> Self {
        self.detail_title_color = color;
        self
    }

    pub fn detail_title_font(mut self, font: Font) -> Self {
        self.detail_title_font = font;
        self
    }

    pub fn preferred_cell_size(mut self, width: f32, height: f32) -> Self {
        self.preferred_cell_size = Size::new(width, height);
        self
    }

    pub fn cell_corner_radius(mut self, radius: f32) -> Self {
        self.cell_corner_radius = radius;
        self
    }

    /// Sets inter-item and line spacing to the same value. This is how the
    /// single-field `item_spacing` configurations map onto the canonical
    /// two-field record.
    pub fn item_spacing(mut self, spacing: f32) -> Self {
        self.inter_item_spacing = spacing;
        self.line_spacing = spacing;
        self
    }

    pub fn inter_item_spacing(mut self, spacing: f32) -> Self {
        self.inter_item_spacing = spacing;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn additional_insets(mut self, insets: EdgeInsets) -> Self {
        self.additional_insets = insets;
        self
    }

    pub fn gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn header_alignment(mut self, alignment: HeaderAlignment) -> Self {
        self.header_alignment = alignment;
        self
    }
}
