use thiserror::Error;

use crate::SectionId;

/// Errors raised while servicing a rendering surface. The legacy library
/// treated all of these as fatal preconditions; here the host decides
/// whether to degrade (render the section empty) or bail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("no cell factory registered under reuse identifier `{ident}`")]
    CellNotRegistered { ident: &'static str },

    #[error("item index {index} out of bounds for section of {len} items")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("surface-mutating call from a thread that does not own the surface")]
    WrongThread,
}

/// Errors raised while binding a section to a renderer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// A section may be displayed by at most one renderer at a time;
    /// multiple renderers over one mutable model have undefined results.
    #[error("section {ident} is already bound to a renderer")]
    ModelAlreadyBound { ident: SectionId },

    #[error("cell reuse identifier `{ident}` is already registered on this surface")]
    CellAlreadyRegistered { ident: &'static str },
}
