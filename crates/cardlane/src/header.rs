//! Reusable section header: a title, an optional tappable detail
//! affordance, and the padding that frames them. The header is a
//! view-model — the surface reads the presentation out and draws it.

use cardlane_core::{Color, EdgeInsets, Font, HeaderAlignment, SectionAppearance, SectionId};

/// Reuse identifier headers are registered under on a surface.
pub const HEADER_REUSE_IDENT: &str = "cardlane.section-header";

pub type DetailTapHandler = Box<dyn Fn(SectionId)>;

/// The detail affordance shown at the header's trailing edge when the
/// appearance record carries a non-empty `detail_title`.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailAffordance {
    pub title: String,
    pub color: Color,
    /// Title color while pressed; the detail color at 20% alpha.
    pub highlight_color: Color,
    pub font: Font,
}

pub struct SectionHeader {
    ident: SectionId,
    appearance: SectionAppearance,
    padding: EdgeInsets,
    revision: u64,
    on_detail_tap: Option<DetailTapHandler>,
}

impl SectionHeader {
    /// Default padding around header content.
    pub fn default_padding() -> EdgeInsets {
        EdgeInsets::all(4.0)
    }

    pub fn new(ident: SectionId) -> Self {
        SectionHeader {
            ident,
            appearance: SectionAppearance::default(),
            padding: Self::default_padding(),
            revision: 0,
            on_detail_tap: None,
        }
    }

    pub fn ident(&self) -> SectionId {
        self.ident
    }

    /// Replaces the appearance and padding wholesale and bumps the revision
    /// so hosts can cheap-check whether a redraw is due.
    pub fn set_appearance(&mut self, appearance: SectionAppearance, padding: EdgeInsets) {
        self.appearance = appearance;
        self.padding = padding;
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub fn title(&self) -> &str {
        &self.appearance.title
    }

    pub fn title_color(&self) -> Color {
        self.appearance.title_color
    }

    pub fn title_font(&self) -> Font {
        self.appearance.title_font
    }

    pub fn alignment(&self) -> HeaderAlignment {
        self.appearance.header_alignment
    }

    /// The detail affordance, present iff `detail_title` is non-empty.
    pub fn detail(&self) -> Option<DetailAffordance> {
        if !self.appearance.has_detail() {
            return None;
        }
        let title = self.appearance.detail_title.clone().unwrap_or_default();
        let color = self.appearance.detail_title_color;
        Some(DetailAffordance {
            title,
            color,
            highlight_color: color.with_alpha_fraction(0.2),
            font: self.appearance.detail_title_font,
        })
    }

    pub fn on_detail_tap(&mut self, cb: impl Fn(SectionId) + 'static) -> &mut Self {
        self.on_detail_tap = Some(Box::new(cb));
        self
    }

    /// The detail affordance was tapped. Routed with the section id; a tap
    /// without a configured affordance is ignored.
    pub fn detail_tapped(&self) {
        if !self.appearance.has_detail() {
            return;
        }
        if let Some(cb) = &self.on_detail_tap {
            cb(self.ident);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn detail_affordance_exists_iff_title_is_non_empty() {
        let mut header = SectionHeader::new(3);
        assert!(header.detail().is_none());

        header.set_appearance(
            SectionAppearance::new()
                .title("Featured")
                .detail_title("See all")
                .detail_title_color(Color::from_rgb(200, 0, 0)),
            SectionHeader::default_padding(),
        );
        let detail = header.detail().unwrap();
        assert_eq!(detail.title, "See all");
        assert_eq!(detail.color, Color::from_rgb(200, 0, 0));
        assert_eq!(detail.highlight_color, Color::from_rgba(200, 0, 0, 51));

        header.set_appearance(
            SectionAppearance::new().detail_title(""),
            SectionHeader::default_padding(),
        );
        assert!(header.detail().is_none());
    }

    #[test]
    fn detail_tap_routes_section_ident() {
        let mut header = SectionHeader::new(5);
        let seen: Rc<RefCell<Vec<SectionId>>> = Rc::default();
        let sink = seen.clone();
        header.on_detail_tap(move |ident| sink.borrow_mut().push(ident));

        // no affordance configured: tap is ignored
        header.detail_tapped();
        assert!(seen.borrow().is_empty());

        header.set_appearance(
            SectionAppearance::new().detail_title("More"),
            SectionHeader::default_padding(),
        );
        header.detail_tapped();
        assert_eq!(&*seen.borrow(), &[5]);
    }

    #[test]
    fn set_appearance_bumps_revision_and_replaces_padding() {
        let mut header = SectionHeader::new(0);
        let r0 = header.revision();
        header.set_appearance(
            SectionAppearance::new().title("T"),
            EdgeInsets::new(8.0, 8.0, 2.0, 2.0),
        );
        assert!(header.revision() > r0);
        assert_eq!(header.padding(), EdgeInsets::new(8.0, 8.0, 2.0, 2.0));
        assert_eq!(header.title(), "T");
    }
}
