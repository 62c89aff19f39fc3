//! Host scroll container with scoped scroll/resize listeners.
//!
//! The container owns the scroll metrics of one list pane: the scroll
//! offset, the visible height and the content height established by the
//! list's spacer. It dispatches [`ContainerSignal`]s synchronously to
//! registered listeners. Listeners are held through [`Subscription`] guards
//! which deregister on drop, so a listener never outlives the component that
//! registered it.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); a container and its
//! listeners live on the UI thread.

use super::types::ViewportState;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::trace;

/// Change notification emitted by a [`ScrollContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerSignal {
    /// Scroll offset changed.
    Scroll,
    /// Visible height changed.
    Resize,
}

/// Handler invoked with the emitting container and the signal kind.
type Listener = Rc<dyn Fn(&ScrollContainer, ContainerSignal)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    signal: ContainerSignal,
    handler: Listener,
}

struct ContainerInner {
    scroll_offset: usize,
    visible_height: usize,
    content_height: usize,
    attached: bool,
    listeners: Vec<Registration>,
    next_id: u64,
}

impl ContainerInner {
    fn max_scroll_offset(&self) -> usize {
        self.content_height.saturating_sub(self.visible_height)
    }
}

/// Shared handle to a scrollable pane.
///
/// Cloning the handle shares the same container.
#[derive(Clone)]
pub struct ScrollContainer {
    inner: Rc<RefCell<ContainerInner>>,
}

impl ScrollContainer {
    /// Create an attached container showing `visible_height` rows.
    pub fn new(visible_height: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ContainerInner {
                scroll_offset: 0,
                visible_height,
                content_height: 0,
                attached: true,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Create a container that is not yet attached to a screen area.
    ///
    /// A detached container cannot be measured.
    pub fn detached() -> Self {
        let container = Self::new(0);
        container.inner.borrow_mut().attached = false;
        container
    }

    /// Sample the current metrics. `None` while detached.
    pub fn measure(&self) -> Option<ViewportState> {
        let inner = self.inner.borrow();
        inner
            .attached
            .then(|| ViewportState::new(inner.scroll_offset, inner.visible_height))
    }

    /// Whether the container is attached.
    pub fn is_attached(&self) -> bool {
        self.inner.borrow().attached
    }

    /// Current scroll offset in rows.
    pub fn scroll_offset(&self) -> usize {
        self.inner.borrow().scroll_offset
    }

    /// Rows visible inside the container.
    pub fn visible_height(&self) -> usize {
        self.inner.borrow().visible_height
    }

    /// Height of the scrollable content (the list's spacer).
    pub fn content_height(&self) -> usize {
        self.inner.borrow().content_height
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll_offset(&self) -> usize {
        self.inner.borrow().max_scroll_offset()
    }

    /// Attach the container; the next signal will measure it.
    pub fn attach(&self) {
        self.inner.borrow_mut().attached = true;
    }

    /// Detach the container from the screen.
    pub fn detach(&self) {
        self.inner.borrow_mut().attached = false;
    }

    /// Scroll to an absolute offset, clamped to `[0, max_scroll_offset]`.
    ///
    /// Emits [`ContainerSignal::Scroll`] only when the offset changes.
    pub fn scroll_to(&self, offset: usize) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let clamped = offset.min(inner.max_scroll_offset());
            let changed = clamped != inner.scroll_offset;
            inner.scroll_offset = clamped;
            changed
        };
        if changed {
            self.emit(ContainerSignal::Scroll);
        }
    }

    /// Scroll by a signed number of rows.
    pub fn scroll_by(&self, delta: isize) {
        let current = self.scroll_offset();
        let target = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(target);
    }

    /// Scroll to the very top.
    pub fn scroll_to_top(&self) {
        self.scroll_to(0);
    }

    /// Scroll so the last row of content is at the bottom of the viewport.
    pub fn scroll_to_bottom(&self) {
        self.scroll_to(usize::MAX);
    }

    /// Change the visible height.
    ///
    /// Emits [`ContainerSignal::Resize`] when the height changes. The scroll
    /// offset is re-clamped first, as a browser would.
    pub fn resize(&self, visible_height: usize) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.visible_height != visible_height;
            inner.visible_height = visible_height;
            inner.scroll_offset = inner.scroll_offset.min(inner.max_scroll_offset());
            changed
        };
        if changed {
            self.emit(ContainerSignal::Resize);
        }
    }

    /// Set the scrollable content height.
    ///
    /// If the current offset no longer fits, it is clamped and
    /// [`ContainerSignal::Scroll`] is emitted.
    pub fn set_content_height(&self, content_height: usize) {
        let clamped = {
            let mut inner = self.inner.borrow_mut();
            inner.content_height = content_height;
            let max = inner.max_scroll_offset();
            if inner.scroll_offset > max {
                inner.scroll_offset = max;
                true
            } else {
                false
            }
        };
        if clamped {
            self.emit(ContainerSignal::Scroll);
        }
    }

    /// Register a handler for `signal`.
    ///
    /// The handler stays registered for as long as the returned
    /// [`Subscription`] is alive.
    #[must_use = "dropping the subscription removes the listener immediately"]
    pub fn listen<F>(&self, signal: ContainerSignal, handler: F) -> Subscription
    where
        F: Fn(&ScrollContainer, ContainerSignal) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push(Registration {
            id,
            signal,
            handler: Rc::new(handler),
        });
        trace!(listener = id.0, ?signal, "listener registered");
        Subscription {
            container: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Dispatch `signal` to every listener registered for it.
    ///
    /// Handlers run after the internal borrow is released, so they may read
    /// the container or drop subscriptions. A listener removed by an earlier
    /// handler in the same dispatch is skipped.
    pub fn emit(&self, signal: ContainerSignal) {
        let targets: Vec<(ListenerId, Listener)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.signal == signal)
            .map(|r| (r.id, Rc::clone(&r.handler)))
            .collect();

        for (id, handler) in targets {
            if self.is_registered(id) {
                handler(self, signal);
            }
        }
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.inner.borrow().listeners.iter().any(|r| r.id == id)
    }
}

impl fmt::Debug for ScrollContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollContainer")
            .field("scroll_offset", &inner.scroll_offset)
            .field("visible_height", &inner.visible_height)
            .field("content_height", &inner.content_height)
            .field("attached", &inner.attached)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Registration guard returned by [`ScrollContainer::listen`].
///
/// Dropping it removes the listener. Outliving the container is harmless.
pub struct Subscription {
    container: Weak<RefCell<ContainerInner>>,
    id: ListenerId,
}

impl Subscription {
    /// Remove the listener now.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.container.upgrade() {
            inner.borrow_mut().listeners.retain(|r| r.id != self.id);
            trace!(listener = self.id.0, "listener removed");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id.0)
            .field("live", &(self.container.strong_count() > 0))
            .finish()
    }
}
