//! Visible range calculation for uniform-height lists

use super::types::{ItemHeight, ViewportState};
use std::ops::Range;

/// Items rendered beyond each edge of the viewport when no overscan is given.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Half-open range `[start, end)` of item indices materialized in the window.
///
/// # Invariants
/// - `start <= end`
/// - `end <= item_count` when produced by [`VisibleRange::compute`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct VisibleRange {
    start: usize,
    end: usize,
}

impl VisibleRange {
    /// Create new visible range.
    ///
    /// # Panics
    /// In debug builds, panics if start > end.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "VisibleRange start {start} > end {end}");
        Self { start, end }
    }

    /// The range covering no items.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Rows of the viewport mapped to item indices, without overscan or clamping.
    ///
    /// `start = floor(offset / h)`, `end = ceil((offset + visible) / h)`.
    pub fn raw(item_height: ItemHeight, viewport: ViewportState) -> Self {
        let h = item_height.get();
        Self {
            start: viewport.scroll_offset / h,
            end: viewport.bottom().div_ceil(h),
        }
    }

    /// Compute the window for a list of `item_count` items.
    ///
    /// Expands the raw range by `overscan` on both sides and clamps it to
    /// `[0, item_count]`. When the list has shrunk below the scroll position,
    /// `start` is pulled down to `end` so the range never inverts.
    pub fn compute(
        item_count: usize,
        item_height: ItemHeight,
        overscan: usize,
        viewport: ViewportState,
    ) -> Self {
        let raw = Self::raw(item_height, viewport);
        let end = raw.end.saturating_add(overscan).min(item_count);
        let start = raw.start.saturating_sub(overscan).min(end);
        Self { start, end }
    }

    /// Index of the first item (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index one past the last item (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of items in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if range is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterate over item indices in the range.
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if a specific item index is in the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

/// Geometry of a windowed list: spacer, slice offset and materialized range.
///
/// The spacer keeps the scrollbar sized for the whole list; the slice sits
/// at `offset` rows from the top of the spacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowLayout {
    /// Items to render.
    pub range: VisibleRange,
    /// Full virtual content height (`item_count * item_height`).
    pub spacer_height: usize,
    /// Row at which the first rendered item starts (`start * item_height`).
    pub offset: usize,
}

impl WindowLayout {
    /// Lay out `range` inside a list of `item_count` items.
    pub fn new(item_count: usize, item_height: ItemHeight, range: VisibleRange) -> Self {
        let h = item_height.get();
        Self {
            range,
            spacer_height: item_count.saturating_mul(h),
            offset: range.start.saturating_mul(h),
        }
    }
}
