//! Windowed list widget.
//!
//! Only items inside the mounted window's range are rendered. Each one is
//! drawn into a scratch buffer at its absolute position in the spacer
//! (`index * item_height`), and the rows that fall inside the viewport are
//! copied to the frame. Items outside the range cost nothing.

use crate::view_state::{ItemHeight, MountedWindow, WindowLayout};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

/// Widget that renders the visible slice of `items`.
///
/// `render_item` receives the item, its index in `items`, and a buffer
/// exactly one item tall.
pub struct WindowedList<'a, T, F> {
    items: &'a [T],
    layout: WindowLayout,
    item_height: ItemHeight,
    scroll_offset: usize,
    render_item: F,
    scrollbar: Option<Style>,
}

impl<'a, T, F> WindowedList<'a, T, F>
where
    F: Fn(&T, usize, Rect, &mut Buffer),
{
    /// Snapshot `window`'s range and its container's scroll offset.
    ///
    /// `items` must be the sequence the window was sized for.
    pub fn new(items: &'a [T], window: &MountedWindow, render_item: F) -> Self {
        Self {
            items,
            layout: window.layout(),
            item_height: window.params().item_height,
            scroll_offset: window.container().scroll_offset(),
            render_item,
            scrollbar: None,
        }
    }

    /// Draw a scrollbar in the rightmost column.
    pub fn scrollbar(mut self, style: Style) -> Self {
        self.scrollbar = Some(style);
        self
    }
}

impl<T, F> Widget for WindowedList<'_, T, F>
where
    F: Fn(&T, usize, Rect, &mut Buffer),
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let list_area = match self.scrollbar {
            Some(_) if area.width > 1 => Rect {
                width: area.width - 1,
                ..area
            },
            _ => area,
        };

        let height = self.item_height.get();
        let view_top = self.scroll_offset;
        let view_bottom = view_top + usize::from(list_area.height);
        let scratch_area = Rect::new(0, 0, list_area.width, self.item_height.as_u16());

        for index in self.layout.range.indices() {
            let Some(item) = self.items.get(index) else {
                break;
            };
            let mut scratch = Buffer::empty(scratch_area);
            (self.render_item)(item, index, scratch_area, &mut scratch);

            let item_top = index * height;
            for row in 0..height {
                let absolute = item_top + row;
                if absolute < view_top || absolute >= view_bottom {
                    continue;
                }
                // Both values fit in u16: `row < height <= u16::MAX` and the
                // viewport row is below `list_area.height`.
                let src_y = u16::try_from(row).unwrap_or(u16::MAX);
                let dst_y = list_area.y + u16::try_from(absolute - view_top).unwrap_or(u16::MAX);
                for x in 0..list_area.width {
                    if let (Some(src), Some(dst)) =
                        (scratch.cell((x, src_y)), buf.cell_mut((list_area.x + x, dst_y)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }

        if let Some(style) = self.scrollbar {
            let visible = usize::from(list_area.height);
            let mut state = ScrollbarState::new(self.layout.spacer_height.saturating_sub(visible))
                .position(self.scroll_offset)
                .viewport_content_length(visible);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(style)
                .render(area, buf, &mut state);
        }
    }
}
