//! Contracts between the renderer and the external grid widget.
//!
//! The surface is whatever actually lays out and draws cells — a native
//! collection view, a TUI grid, the fixture used in tests. The renderer
//! drives it through [`RenderSurface`] and fills the cells it hosts through
//! [`GridCell`]. The surface never stores the renderer; during a layout
//! pass it calls the renderer's data-source methods and hands results back.

use cardlane_core::{Axis, BindError, Gradient, SectionAppearance, Size, Vec2};

slotmap::new_key_type! {
    /// Key for a visible cell position, allocated by the surface. Slots
    /// outlive index shuffles: event routing re-resolves a slot to its
    /// current index at fire time instead of trusting the bind-time index.
    pub struct CellSlot;
}

/// The non-data visual treatment a renderer applies to every cell of a
/// section, derived from the appearance record at bind time.
#[derive(Clone, Debug, PartialEq)]
pub struct CellChrome {
    /// Effective corner radius, already clamped to zero.
    pub corner_radius: f32,
    /// Whether cell content is clipped to the rounded bounds.
    pub clips: bool,
    pub gradient: Option<Gradient>,
}

impl CellChrome {
    pub fn from_appearance(appearance: &SectionAppearance) -> Self {
        let corner_radius = appearance.cell_corner_radius.max(0.0);
        CellChrome {
            corner_radius,
            clips: corner_radius > 0.0,
            gradient: appearance.gradient.clone(),
        }
    }
}

/// A reusable cell hosted by the surface.
///
/// Cells are recycled: [`prepare_for_reuse`](GridCell::prepare_for_reuse)
/// runs before every rebind, then [`bind`](GridCell::bind) assigns the
/// item's data, then [`apply_chrome`](GridCell::apply_chrome) the section's
/// visual treatment. The data type is checked by the compiler; there is no
/// string-keyed downcast anywhere.
pub trait GridCell {
    /// Item data this cell renders. Must match the bound section's item type.
    type Data;

    /// Reuse identifier, unique per cell type within one surface.
    const REUSE_IDENT: &'static str;

    fn prepare_for_reuse(&mut self);

    fn bind(&mut self, data: &Self::Data);

    fn apply_chrome(&mut self, chrome: &CellChrome);

    /// Toggles long-press recognition. Only enabled while the renderer has
    /// an `on_long_press` handler registered.
    fn set_long_press_enabled(&mut self, _enabled: bool) {}
}

/// Capabilities the renderer consumes from the grid widget.
///
/// Exactly one surface instance is bound to a renderer for its whole
/// lifetime; the renderer owns it and is its sole data source.
pub trait RenderSurface {
    type Cell: GridCell;

    /// Registers a reusable cell type under its identifier. A second
    /// registration of the same identifier is an error: the renderer is the
    /// surface's only data source.
    fn register_cell(&mut self, ident: &'static str) -> Result<(), BindError>;

    fn set_axis(&mut self, axis: Axis);

    fn set_scroll_enabled(&mut self, enabled: bool);

    /// Current measured content size.
    fn content_size(&self) -> Size;

    /// Current scroll position.
    fn scroll_offset(&self) -> Vec2;

    /// Resolves a slot to the index it currently displays, or `None` when
    /// the slot is no longer on screen.
    fn index_of_cell(&self, slot: CellSlot) -> Option<usize>;

    /// Pins the surface's extent along `axis` to a fixed value, replacing
    /// whatever flexible sizing was in place. Used for non-scrollable
    /// sections that must size themselves to content.
    fn pin_axis_extent(&mut self, axis: Axis, extent: f32);

    /// Asks the surface to re-run its layout pass at the next opportunity.
    fn request_refresh(&mut self);
}
