//! Mounted windowed-list state.
//!
//! A [`MountedWindow`] ties one list to one [`ScrollContainer`]. Mounting
//! registers a scroll and a resize listener and computes the initial
//! [`VisibleRange`]; every signal afterwards re-samples the container and
//! recomputes the range synchronously. Dropping (or [`MountedWindow::unmount`])
//! releases both listeners before returning.

use super::container::{ContainerSignal, ScrollContainer, Subscription};
use super::types::ItemHeight;
use super::visible_range::{VisibleRange, WindowLayout, DEFAULT_OVERSCAN};
use std::cell::Cell;
use std::rc::Rc;
use tracing::trace;

/// Inputs of the window computation that come from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    /// Number of items in the sequence.
    pub item_count: usize,
    /// Uniform row height of every item.
    pub item_height: ItemHeight,
    /// Extra items materialized beyond each viewport edge.
    pub overscan: usize,
}

impl WindowParams {
    /// Params with the default overscan.
    pub fn new(item_count: usize, item_height: ItemHeight) -> Self {
        Self {
            item_count,
            item_height,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Override the overscan.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Full virtual content height of the list.
    pub fn spacer_height(&self) -> usize {
        self.item_count.saturating_mul(self.item_height.get())
    }
}

/// State shared between the mounted window and its listeners.
#[derive(Debug)]
struct WindowShared {
    params: Cell<WindowParams>,
    range: Cell<VisibleRange>,
    recomputations: Cell<u64>,
}

impl WindowShared {
    /// Re-sample `container` and recompute the range.
    ///
    /// A detached container leaves the previous range untouched.
    fn recompute(&self, container: &ScrollContainer) {
        let Some(viewport) = container.measure() else {
            trace!("container detached; skipping recompute");
            return;
        };
        let params = self.params.get();
        let range = VisibleRange::compute(
            params.item_count,
            params.item_height,
            params.overscan,
            viewport,
        );
        self.range.set(range);
        self.recomputations.set(self.recomputations.get() + 1);
        trace!(
            start = range.start(),
            end = range.end(),
            scroll_offset = viewport.scroll_offset,
            visible_height = viewport.visible_height,
            "visible range recomputed"
        );
    }
}

/// A list mounted on a scroll container.
#[derive(Debug)]
pub struct MountedWindow {
    container: ScrollContainer,
    shared: Rc<WindowShared>,
    _on_scroll: Subscription,
    _on_resize: Subscription,
}

impl MountedWindow {
    /// Mount a list on `container`.
    ///
    /// Sizes the container's content to the spacer height, registers the
    /// listeners, then computes the initial range.
    pub fn mount(container: &ScrollContainer, params: WindowParams) -> Self {
        let shared = Rc::new(WindowShared {
            params: Cell::new(params),
            range: Cell::new(VisibleRange::EMPTY),
            recomputations: Cell::new(0),
        });

        let on_scroll = {
            let shared = Rc::clone(&shared);
            container.listen(ContainerSignal::Scroll, move |c, _| shared.recompute(c))
        };
        let on_resize = {
            let shared = Rc::clone(&shared);
            container.listen(ContainerSignal::Resize, move |c, _| shared.recompute(c))
        };

        container.set_content_height(params.spacer_height());
        shared.recompute(container);

        Self {
            container: container.clone(),
            shared,
            _on_scroll: on_scroll,
            _on_resize: on_resize,
        }
    }

    /// Replace the item sequence parameters and recompute against the
    /// container's current metrics.
    pub fn set_params(&self, params: WindowParams) {
        if self.shared.params.get() == params {
            return;
        }
        self.shared.params.set(params);
        self.container.set_content_height(params.spacer_height());
        self.shared.recompute(&self.container);
    }

    /// Convenience for a sequence replacement that only changes the length.
    pub fn set_item_count(&self, item_count: usize) {
        let params = WindowParams {
            item_count,
            ..self.shared.params.get()
        };
        self.set_params(params);
    }

    /// Current parameters.
    pub fn params(&self) -> WindowParams {
        self.shared.params.get()
    }

    /// Range computed at the last signal.
    pub fn range(&self) -> VisibleRange {
        self.shared.range.get()
    }

    /// Spacer, offset and range for rendering.
    pub fn layout(&self) -> WindowLayout {
        let params = self.shared.params.get();
        WindowLayout::new(params.item_count, params.item_height, self.range())
    }

    /// The container this list is mounted on.
    pub fn container(&self) -> &ScrollContainer {
        &self.container
    }

    /// Read-only handle that stays valid after unmount.
    pub fn stats(&self) -> WindowStats {
        WindowStats {
            shared: Rc::clone(&self.shared),
        }
    }

    /// Unmount the list, releasing both listeners.
    pub fn unmount(self) {}
}

/// Read-only view of a mounted window's computed state.
///
/// Holding one does not keep the listeners registered.
#[derive(Debug, Clone)]
pub struct WindowStats {
    shared: Rc<WindowShared>,
}

impl WindowStats {
    /// Last computed range.
    pub fn range(&self) -> VisibleRange {
        self.shared.range.get()
    }

    /// How many times the range has been recomputed.
    pub fn recomputations(&self) -> u64 {
        self.shared.recomputations.get()
    }
}
