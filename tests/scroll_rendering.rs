//! Integration tests: windowed rendering through the public widget API.

use mealdesk::view::WindowedList;
use mealdesk::view_state::{ItemHeight, MountedWindow, ScrollContainer, WindowParams};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::cell::RefCell;

fn three_row(label: &String, _index: usize, area: Rect, buf: &mut Buffer) {
    buf.set_string(area.x, area.y, format!("┌ {label}"), Style::default());
    buf.set_string(area.x, area.y + 1, "│ body", Style::default());
    buf.set_string(area.x, area.y + 2, "└", Style::default());
}

fn rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item {i}")).collect()
}

fn render(items: &[String], window: &MountedWindow, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    WindowedList::new(items, window, three_row).render(area, &mut buf);
    rows(&buf)
}

#[test]
fn scrolling_shifts_rows_one_at_a_time() {
    let items = labels(50);
    let container = ScrollContainer::new(6);
    let window = MountedWindow::mount(
        &container,
        WindowParams::new(items.len(), ItemHeight::new(3).unwrap()),
    );

    assert_eq!(
        render(&items, &window, 20, 6),
        vec!["┌ item 0", "│ body", "└", "┌ item 1", "│ body", "└"]
    );

    container.scroll_by(1);
    assert_eq!(
        render(&items, &window, 20, 6),
        vec!["│ body", "└", "┌ item 1", "│ body", "└", "┌ item 2"]
    );
}

#[test]
fn last_item_sits_on_the_bottom_row() {
    let items = labels(50);
    let container = ScrollContainer::new(6);
    let window = MountedWindow::mount(
        &container,
        WindowParams::new(items.len(), ItemHeight::new(3).unwrap()),
    );

    container.scroll_to_bottom();

    let rows = render(&items, &window, 20, 6);
    assert_eq!(rows[3], "┌ item 49");
    assert_eq!(rows[5], "└");
}

#[test]
fn only_the_window_is_drawn() {
    let items = labels(10_000);
    let container = ScrollContainer::new(9);
    let window = MountedWindow::mount(
        &container,
        WindowParams::new(items.len(), ItemHeight::new(3).unwrap()).with_overscan(2),
    );
    container.scroll_to(15_000);

    let drawn = RefCell::new(Vec::new());
    let area = Rect::new(0, 0, 20, 9);
    let mut buf = Buffer::empty(area);
    WindowedList::new(&items, &window, |item: &String, index, area, buf: &mut Buffer| {
        drawn.borrow_mut().push(index);
        three_row(item, index, area, buf);
    })
    .render(area, &mut buf);

    // raw [5000, 5003), two extra on each side
    assert_eq!(*drawn.borrow(), (4998..5005).collect::<Vec<_>>());
    assert_eq!(rows(&buf)[0], "┌ item 5000");
}

#[test]
fn resize_renders_more_items() {
    let items = labels(20);
    let container = ScrollContainer::new(3);
    let window = MountedWindow::mount(
        &container,
        WindowParams::new(items.len(), ItemHeight::new(3).unwrap()).with_overscan(0),
    );
    assert_eq!(render(&items, &window, 20, 3)[0], "┌ item 0");

    container.resize(9);

    let rows = render(&items, &window, 20, 9);
    assert_eq!(rows[6], "┌ item 2");
}

#[test]
fn scrollbar_reserves_the_right_column() {
    let items = labels(50);
    let container = ScrollContainer::new(6);
    let window = MountedWindow::mount(
        &container,
        WindowParams::new(items.len(), ItemHeight::new(3).unwrap()),
    );
    let area = Rect::new(0, 0, 10, 6);
    let mut buf = Buffer::empty(area);
    WindowedList::new(&items, &window, three_row)
        .scrollbar(Style::default())
        .render(area, &mut buf);

    // "┌ item 0" fits in the 9 list columns; column 9 belongs to the bar
    assert_eq!(buf[(0, 0)].symbol(), "┌");
    assert_ne!(buf[(9, 0)].symbol(), " ");
}
