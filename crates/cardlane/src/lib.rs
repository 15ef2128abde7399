//! # Declarative sectioned grids over an abstract rendering surface
//!
//! `cardlane` binds a [`Section`] — an ordered list of cell data plus an
//! appearance record — to whatever widget actually lays out and draws the
//! grid. Application code never implements the widget's data-source or
//! delegate protocols; it builds a section, registers it through a
//! [`GridBuilder`], and attaches callbacks to the resulting
//! [`SectionRenderer`].
//!
//! The three seams:
//!
//! - [`RenderSurface`] — what the library consumes from the grid widget:
//!   cell registration, measured content size, scroll position, slot/index
//!   resolution, extent pinning, refresh requests.
//! - [`GridCell`] — a reusable, typed cell the surface hosts. The item data
//!   type is fixed by the trait; there is no string-keyed downcast.
//! - [`SectionRenderer`] — the data-source/delegate: item counts, cell
//!   binding and chrome, spacing and insets, selection, long-press and
//!   scroll routing.
//!
//! The surface calls the renderer's data-source methods during its layout
//! pass and pushes delegate events (selection, long-press by slot, scroll
//! offsets, pass completion) back in. Scroll offsets are coalesced to at
//! most one callback per frame. Everything runs on the thread that bound
//! the renderer; the renderer verifies this instead of rescheduling behind
//! the caller's back.

pub mod builder;
pub mod header;
pub mod pool;
pub mod renderer;
pub mod surface;

pub use builder::GridBuilder;
pub use header::{DetailAffordance, HEADER_REUSE_IDENT, SectionHeader};
pub use pool::CellPool;
pub use renderer::{CellIndex, SectionRenderer};
pub use surface::{CellChrome, CellSlot, GridCell, RenderSurface};

pub use cardlane_core::*;
