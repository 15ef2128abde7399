use std::cell::RefCell;
use std::rc::Rc;

use crate::{BindError, SectionAppearance};

/// Stable key of a section within a parent grid; every event a renderer
/// emits carries the originating section's id.
pub type SectionId = u64;

/// How sections are shared between the owning application component and the
/// renderer: by reference, never by copy.
pub type SharedSection<T> = Rc<RefCell<Section<T>>>;

/// One section of a grid: an ordered list of cell data plus the appearance
/// record governing its presentation.
///
/// The section is created and owned by application code and mutated in
/// place; a bound renderer observes mutations through [`Section::revision`]
/// and refreshes its surface on the next layout pass.
#[derive(Debug)]
pub struct Section<T> {
    ident: SectionId,
    items: Vec<T>,
    appearance: SectionAppearance,
    /// Secondary sort key for composing multiple sections into one grid.
    pub order: i32,
    revision: u64,
    bound: bool,
}

impl<T> Section<T> {
    pub fn new(ident: SectionId) -> Self {
        Section {
            ident,
            items: Vec::new(),
            appearance: SectionAppearance::default(),
            order: 0,
            revision: 0,
            bound: false,
        }
    }

    /// Convenience constructor producing the shared form a renderer binds to.
    pub fn shared(ident: SectionId) -> SharedSection<T> {
        Rc::new(RefCell::new(Section::new(ident)))
    }

    pub fn ident(&self) -> SectionId {
        self.ident
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of items. O(1), never touches the surface.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn appearance(&self) -> &SectionAppearance {
        &self.appearance
    }

    /// Monotonic change counter; bumped by every [`set_items`] /
    /// [`set_appearance`]. Renderers compare it against the last revision
    /// they served to decide whether the surface needs a refresh.
    ///
    /// [`set_items`]: Section::set_items
    /// [`set_appearance`]: Section::set_appearance
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.revision += 1;
    }

    pub fn items_mut(&mut self) -> &mut Vec<T> {
        self.revision += 1;
        &mut self.items
    }

    /// Replaces the appearance record wholesale. No partial merge, no
    /// validation; the bound renderer picks the change up on its next pass.
    pub fn set_appearance(&mut self, appearance: SectionAppearance) {
        self.appearance = appearance;
        self.revision += 1;
    }

    /// Claims this section for a renderer. At most one renderer may display
    /// a section at a time.
    pub fn mark_bound(&mut self) -> Result<(), BindError> {
        if self.bound {
            return Err(BindError::ModelAlreadyBound { ident: self.ident });
        }
        self.bound = true;
        Ok(())
    }

    /// Releases the binding; called when the renderer is torn down.
    pub fn release_binding(&mut self) {
        self.bound = false;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }
}
