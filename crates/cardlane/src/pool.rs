use cardlane_core::GridError;

use crate::surface::GridCell;

/// Typed reuse pool for one cell type.
///
/// Replaces the legacy dequeue-by-string-and-downcast: the factory is
/// registered once per binding, dequeuing without one is a recoverable
/// error, and the data type is fixed by `C`.
pub struct CellPool<C: GridCell> {
    factory: Option<Box<dyn Fn() -> C>>,
    free: Vec<C>,
}

impl<C: GridCell> CellPool<C> {
    pub fn new() -> Self {
        CellPool {
            factory: None,
            free: Vec::new(),
        }
    }

    pub fn register(&mut self, factory: impl Fn() -> C + 'static) {
        self.factory = Some(Box::new(factory));
    }

    /// Pops a recycled cell or constructs a fresh one.
    pub fn dequeue(&mut self) -> Result<C, GridError> {
        if let Some(cell) = self.free.pop() {
            return Ok(cell);
        }
        match &self.factory {
            Some(factory) => Ok(factory()),
            None => Err(GridError::CellNotRegistered {
                ident: C::REUSE_IDENT,
            }),
        }
    }

    pub fn recycle(&mut self, cell: C) {
        self.free.push(cell);
    }

    #[cfg(test)]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

impl<C: GridCell> Default for CellPool<C> {
    fn default() -> Self {
        Self::new()
    }
}
