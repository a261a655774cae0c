use smallvec::SmallVec;
use tracing::trace;

use super::Renderable;

/// Items shown on the surface. A table redraw shows one item, a chart redraw
/// shows the control panel followed by the chart.
pub type SurfaceItems = SmallVec<[Renderable; 2]>;

/// The single output region a widget draws into.
///
/// Content is never patched: `replace` swaps in a fully built item list, so no
/// caller can observe a cleared-but-not-yet-drawn surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputSurface {
    items: SurfaceItems,
    generation: u64,
}

impl OutputSurface {
    #[must_use]
    pub fn items(&self) -> &[Renderable] {
        &self.items
    }

    /// Number of completed replacements since the surface was created.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn replace(&mut self, items: SurfaceItems) {
        self.items = items;
        self.generation += 1;
        trace!(
            generation = self.generation,
            items = self.items.len(),
            "output surface replaced"
        );
    }
}
