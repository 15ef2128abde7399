//! The data-source/delegate half of the binding: one renderer per section,
//! owning the surface it drives.

use std::thread::{self, ThreadId};

use cardlane_core::{Axis, BindError, EdgeInsets, GridError, SectionId, SharedSection, Size, Vec2};

use crate::pool::CellPool;
use crate::surface::{CellChrome, CellSlot, GridCell, RenderSurface};

pub type CellIndex = usize;

pub type TapHandler<T> = Box<dyn Fn(SectionId, CellIndex, &T)>;
pub type LongPressHandler<T> = Box<dyn Fn(SectionId, CellIndex, &T)>;
pub type ShouldSelectHandler = Box<dyn Fn(SectionId, CellIndex) -> bool>;
pub type SizeChangedHandler = Box<dyn Fn(Size, SectionId)>;
pub type ScrollOffsetHandler = Box<dyn Fn(Vec2, SectionId)>;
pub type CellBoundHandler<C> = Box<dyn Fn(&mut C, CellIndex)>;

/// Binds a [`Section`](cardlane_core::Section) to a rendering surface.
///
/// The renderer implements the surface's data-source contract (item count,
/// cell binding, sizing, spacing, insets) and translates the surface's
/// delegate events into the registered callbacks. It owns the surface; the
/// section stays owned by the application and is observed by reference.
///
/// All surface-mutating entry points must run on the thread that created
/// the renderer. The caller schedules; the renderer only verifies — there
/// is no hidden hop onto another thread, so effects land in call order.
pub struct SectionRenderer<C, S>
where
    C: GridCell,
    S: RenderSurface<Cell = C>,
{
    section: SharedSection<C::Data>,
    surface: S,
    axis: Axis,
    scrollable: bool,
    pool: CellPool<C>,
    owner: ThreadId,
    served_revision: u64,
    pending_scroll: Option<Vec2>,
    on_tap: Option<TapHandler<C::Data>>,
    on_long_press: Option<LongPressHandler<C::Data>>,
    on_should_select: Option<ShouldSelectHandler>,
    on_size_changed: Option<SizeChangedHandler>,
    on_scroll_offset_changed: Option<ScrollOffsetHandler>,
    on_cell_bound: Option<CellBoundHandler<C>>,
}

impl<C, S> SectionRenderer<C, S>
where
    C: GridCell,
    S: RenderSurface<Cell = C>,
{
    /// Claims `section`, registers the cell type on `surface`, and wires the
    /// renderer up as the surface's sole data source.
    ///
    /// Fails when the section is already displayed by another renderer or
    /// when the cell identifier is already registered on this surface.
    pub fn bind(
        section: SharedSection<C::Data>,
        axis: Axis,
        scrollable: bool,
        mut surface: S,
        cell_factory: impl Fn() -> C + 'static,
    ) -> Result<Self, BindError> {
        let ident = {
            let mut model = section.borrow_mut();
            model.mark_bound()?;
            model.ident()
        };
        if let Err(e) = surface.register_cell(C::REUSE_IDENT) {
            section.borrow_mut().release_binding();
            return Err(e);
        }
        surface.set_axis(axis);
        surface.set_scroll_enabled(scrollable);

        let mut pool = CellPool::new();
        pool.register(cell_factory);

        let served_revision = section.borrow().revision();
        log::debug!(
            "bound section {ident} ({} items, {axis:?}, scrollable={scrollable}) to surface",
            section.borrow().item_count(),
        );

        Ok(SectionRenderer {
            section,
            surface,
            axis,
            scrollable,
            pool,
            owner: thread::current().id(),
            served_revision,
            pending_scroll: None,
            on_tap: None,
            on_long_press: None,
            on_should_select: None,
            on_size_changed: None,
            on_scroll_offset_changed: None,
            on_cell_bound: None,
        })
    }

    pub fn ident(&self) -> SectionId {
        self.section.borrow().ident()
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The shared section this renderer displays. The application keeps its
    /// own handle; this one is for callers that only hold the renderer.
    pub fn section_handle(&self) -> &SharedSection<C::Data> {
        &self.section
    }

    pub fn content_size(&self) -> Size {
        self.surface.content_size()
    }

    // --- data-source contract, called by the surface each layout pass ---

    /// Number of items to lay out. Entry point of a pass: also where a
    /// model revision change is noticed and turned into a refresh request.
    ///
    /// Unguarded like the pure reads: the refresh request cannot originate
    /// off the owner thread because the renderer is not `Send`.
    pub fn item_count(&mut self) -> usize {
        self.refresh_if_stale();
        self.section.borrow().item_count()
    }

    /// Dequeues a cell, binds `items[index]` into it, and applies the
    /// section's chrome. `on_cell_bound` fires last, before the surface
    /// ever shows the cell.
    pub fn cell_for_item(&mut self, index: CellIndex) -> Result<C, GridError> {
        self.check_thread()?;
        let model = self.section.borrow();
        let len = model.item_count();
        let data = model
            .item(index)
            .ok_or(GridError::IndexOutOfBounds { index, len })?;
        let mut cell = self.pool.dequeue()?;
        cell.prepare_for_reuse();
        cell.bind(data);
        cell.apply_chrome(&CellChrome::from_appearance(model.appearance()));
        cell.set_long_press_enabled(self.on_long_press.is_some());
        drop(model);
        if let Some(cb) = &self.on_cell_bound {
            cb(&mut cell, index);
        }
        Ok(cell)
    }

    /// Takes back a cell the surface evicted.
    pub fn recycle(&mut self, cell: C) -> Result<(), GridError> {
        self.check_thread()?;
        self.pool.recycle(cell);
        Ok(())
    }

    /// Uniform preferred cell size; there is no per-item sizing.
    pub fn preferred_size(&self, _index: CellIndex) -> Size {
        self.section.borrow().appearance().preferred_cell_size
    }

    pub fn inter_item_spacing(&self) -> f32 {
        self.section.borrow().appearance().inter_item_spacing
    }

    pub fn line_spacing(&self) -> f32 {
        self.section.borrow().appearance().line_spacing
    }

    /// Section insets, asymmetric per edge. On the horizontal axis the
    /// line spacing pads the leading/trailing edges; on the vertical axis
    /// the inter-item spacing pads top/bottom. The roles swap with the
    /// axis, and `additional_insets` is added on top either way.
    pub fn section_insets(&self) -> EdgeInsets {
        let model = self.section.borrow();
        let a = model.appearance();
        match self.axis {
            Axis::Horizontal => EdgeInsets {
                left: a.line_spacing + a.additional_insets.left,
                right: a.line_spacing + a.additional_insets.right,
                top: 0.0,
                bottom: 0.0,
            },
            Axis::Vertical => EdgeInsets {
                left: 0.0,
                right: 0.0,
                top: a.inter_item_spacing + a.additional_insets.top,
                bottom: a.inter_item_spacing + a.additional_insets.bottom,
            },
        }
    }

    // --- delegate events, pushed in by the surface ---

    /// Synchronous selection veto. True unless a registered handler says no.
    pub fn should_select(&self, index: CellIndex) -> bool {
        match &self.on_should_select {
            Some(cb) => {
                // copy out before dispatch; handlers may mutate the section
                let ident = self.section.borrow().ident();
                cb(ident, index)
            }
            None => true,
        }
    }

    /// A cell was selected. Invokes `on_tap` with the section id, index and
    /// item. An index the section no longer covers is ignored: the surface
    /// may race a model mutation. The item is cloned out of the section
    /// before the handler runs, so the handler is free to mutate the
    /// section in place.
    pub fn did_select(&mut self, index: CellIndex) -> Result<(), GridError>
    where
        C::Data: Clone,
    {
        self.check_thread()?;
        let Some(cb) = &self.on_tap else {
            return Ok(());
        };
        let dispatch = {
            let model = self.section.borrow();
            model.item(index).map(|item| (model.ident(), item.clone()))
        };
        if let Some((ident, item)) = dispatch {
            cb(ident, index, &item);
        }
        Ok(())
    }

    /// A visible cell was long-pressed. The slot is re-resolved to its
    /// current index through the surface at fire time; the index the cell
    /// was bound with may be stale by now. Slots the surface no longer
    /// shows are dropped. As with [`did_select`](SectionRenderer::did_select),
    /// the item is cloned out before dispatch and the handler may mutate
    /// the section.
    pub fn long_pressed(&mut self, slot: CellSlot) -> Result<(), GridError>
    where
        C::Data: Clone,
    {
        self.check_thread()?;
        let Some(cb) = &self.on_long_press else {
            return Ok(());
        };
        let Some(index) = self.surface.index_of_cell(slot) else {
            return Ok(());
        };
        let dispatch = {
            let model = self.section.borrow();
            model.item(index).map(|item| (model.ident(), item.clone()))
        };
        if let Some((ident, item)) = dispatch {
            cb(ident, index, &item);
        }
        Ok(())
    }

    /// Records a scroll-position update. Deliberately does not dispatch:
    /// scroll updates arrive per pixel and subscribers get at most one
    /// notification per frame, with the latest offset, from
    /// [`frame_complete`](SectionRenderer::frame_complete).
    pub fn scroll_offset_changed(&mut self, offset: Vec2) {
        self.pending_scroll = Some(offset);
    }

    /// End of a rendering frame: flushes the coalesced scroll notification,
    /// if any.
    pub fn frame_complete(&mut self) -> Result<(), GridError> {
        self.check_thread()?;
        self.flush_scroll();
        Ok(())
    }

    /// A layout pass finished with the given content size. For a
    /// non-scrollable renderer this pins the surface's extent along the
    /// scroll axis to the measured content, replacing the flexible sizing,
    /// on every pass. Fires `on_size_changed` afterwards, never before the
    /// pass completes.
    pub fn layout_pass_complete(&mut self, content_size: Size) -> Result<(), GridError> {
        self.check_thread()?;
        if !self.scrollable {
            self.surface
                .pin_axis_extent(self.axis, content_size.extent_on(self.axis));
        }
        if let Some(cb) = &self.on_size_changed {
            let ident = self.section.borrow().ident();
            cb(content_size, ident);
        }
        self.flush_scroll();
        Ok(())
    }

    // --- callback registration; one handler per slot, last wins ---

    pub fn on_tap(&mut self, cb: impl Fn(SectionId, CellIndex, &C::Data) + 'static) -> &mut Self {
        self.on_tap = Some(Box::new(cb));
        self
    }

    pub fn on_long_press(
        &mut self,
        cb: impl Fn(SectionId, CellIndex, &C::Data) + 'static,
    ) -> &mut Self {
        self.on_long_press = Some(Box::new(cb));
        self
    }

    pub fn on_should_select(
        &mut self,
        cb: impl Fn(SectionId, CellIndex) -> bool + 'static,
    ) -> &mut Self {
        self.on_should_select = Some(Box::new(cb));
        self
    }

    pub fn on_size_changed(&mut self, cb: impl Fn(Size, SectionId) + 'static) -> &mut Self {
        self.on_size_changed = Some(Box::new(cb));
        self
    }

    pub fn on_scroll_offset_changed(
        &mut self,
        cb: impl Fn(Vec2, SectionId) + 'static,
    ) -> &mut Self {
        self.on_scroll_offset_changed = Some(Box::new(cb));
        self
    }

    pub fn on_cell_bound(&mut self, cb: impl Fn(&mut C, CellIndex) + 'static) -> &mut Self {
        self.on_cell_bound = Some(Box::new(cb));
        self
    }

    // --- internals ---

    fn check_thread(&self) -> Result<(), GridError> {
        if thread::current().id() == self.owner {
            Ok(())
        } else {
            Err(GridError::WrongThread)
        }
    }

    fn refresh_if_stale(&mut self) {
        let revision = self.section.borrow().revision();
        if revision != self.served_revision {
            log::trace!(
                "section {} changed (rev {} -> {revision}), requesting refresh",
                self.section.borrow().ident(),
                self.served_revision,
            );
            self.served_revision = revision;
            self.surface.request_refresh();
        }
    }

    fn flush_scroll(&mut self) {
        let Some(offset) = self.pending_scroll.take() else {
            return;
        };
        if let Some(cb) = &self.on_scroll_offset_changed {
            let ident = self.section.borrow().ident();
            cb(offset, ident);
        }
    }
}

impl<C, S> Drop for SectionRenderer<C, S>
where
    C: GridCell,
    S: RenderSurface<Cell = C>,
{
    fn drop(&mut self) {
        self.section.borrow_mut().release_binding();
    }
}
