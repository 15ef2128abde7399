//! # Sections, appearance records, and the values that travel with them
//!
//! `cardlane-core` holds the plain data the binding layer in `cardlane`
//! moves between an application and a grid-rendering surface:
//!
//! - [`Section<T>`] — an ordered list of cell data plus an appearance
//!   record, owned by the application and shared by reference with at most
//!   one renderer.
//! - [`SectionAppearance`] — the full visual configuration of a section
//!   (title, cell size, spacing, insets, gradient, header alignment), built
//!   fluently and replaced wholesale.
//! - Geometry ([`Size`], [`EdgeInsets`], [`Axis`]) and paint
//!   ([`Color`], [`Gradient`]) value types.
//! - The error taxonomy ([`GridError`], [`BindError`]): everything the
//!   legacy contract treated as a fatal precondition is a typed error here.
//!
//! ```rust
//! use cardlane_core::*;
//!
//! let section = Section::shared(0);
//! section.borrow_mut().set_items(vec!["A", "B", "C"]);
//! section.borrow_mut().set_appearance(
//!     SectionAppearance::new()
//!         .title("Featured")
//!         .preferred_cell_size(140.0, 90.0)
//!         .item_spacing(20.0)
//!         .cell_corner_radius(8.0),
//! );
//! assert_eq!(section.borrow().item_count(), 3);
//! ```

pub mod appearance;
pub mod color;
pub mod error;
pub mod font;
pub mod geometry;
pub mod section;

pub use appearance::*;
pub use color::*;
pub use error::*;
pub use font::*;
pub use geometry::*;
pub use section::*;
