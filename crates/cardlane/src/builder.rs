use cardlane_core::{Axis, BindError, SharedSection};

use crate::renderer::SectionRenderer;
use crate::surface::{GridCell, RenderSurface};

/// Explicit factory for section renderers. Carries the defaults one screen
/// worth of sections usually shares; there is no hidden process-wide
/// instance — construct one and pass it through application wiring.
#[derive(Clone, Copy, Debug)]
pub struct GridBuilder {
    axis: Axis,
    scrollable: bool,
}

impl Default for GridBuilder {
    fn default() -> Self {
        GridBuilder {
            axis: Axis::Horizontal,
            scrollable: true,
        }
    }
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    /// Binds `section` to `surface` with this builder's defaults, yielding
    /// the renderer whose callbacks the caller then registers.
    pub fn register_section<C, S>(
        &self,
        section: SharedSection<C::Data>,
        surface: S,
        cell_factory: impl Fn() -> C + 'static,
    ) -> Result<SectionRenderer<C, S>, BindError>
    where
        C: GridCell,
        S: RenderSurface<Cell = C>,
    {
        SectionRenderer::bind(section, self.axis, self.scrollable, surface, cell_factory)
    }
}
