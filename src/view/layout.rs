//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into header, optional search bar,
//! list and footer, then renders the active screen's windowed list.

use super::cards::{EventCard, MenuItemCard, MenuSetCard};
use super::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, SEARCH_INPUT_HEIGHT};
use super::pages::{page_hint, render_page};
use super::search_input::SearchInput;
use super::styles::Theme;
use super::tabs::{render_tab_bar, user_summary};
use super::windowed_list::WindowedList;
use crate::state::{AppState, Screen, SearchState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Tab bar with the user summary.
    pub header: Rect,
    /// Search line, when shown.
    pub search: Option<Rect>,
    /// The active list or page.
    pub list: Rect,
    /// Notice or status line.
    pub footer: Rect,
}

/// Split `area` into header, optional search bar, list and footer.
pub fn calculate_areas(area: Rect, search_visible: bool) -> ScreenAreas {
    let search_height = if search_visible { SEARCH_INPUT_HEIGHT } else { 0 };
    let [header, search, list, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(search_height),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    ScreenAreas {
        header,
        search: search_visible.then_some(search),
        list,
        footer,
    }
}

/// Whether the search bar takes space on the active screen.
///
/// Pages hide it.
pub fn search_visible(state: &AppState) -> bool {
    state.page().is_none() && !matches!(state.search(), SearchState::Inactive)
}

/// Render the whole screen for `state`.
///
/// List containers must already be sized to `areas.list.height`.
pub fn render_layout(frame: &mut Frame, state: &AppState, areas: ScreenAreas, theme: Theme) {
    let summary = user_summary(state.session().view(), state.unread_count());
    render_tab_bar(frame, areas.header, state.screen(), &summary, theme);

    if let Some(search_area) = areas.search {
        frame.render_widget(SearchInput::new(state.search(), theme), search_area);
    }

    match state.page() {
        Some(page) => render_page(frame.buffer_mut(), areas.list, state, page, theme),
        None => render_list(frame.buffer_mut(), areas.list, state, theme),
    }
    render_footer(frame, areas.footer, state, theme);
}

fn render_list(buf: &mut Buffer, area: Rect, state: &AppState, theme: Theme) {
    let screen = state.screen();
    let pane = state.active_pane();
    if pane.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            screen.empty_message(),
            theme.muted(),
        )))
        .alignment(Alignment::Center)
        .render(area, buf);
        return;
    }

    let scrollbar = theme.border();
    match screen {
        Screen::MealEvents => {
            let events = state.listed_events();
            let (today, zone) = (state.today(), state.zone());
            let selected = state.selected_event();
            WindowedList::new(&events, pane.window(), |event, index, area, buf: &mut Buffer| {
                EventCard::new(event, today, zone, theme)
                    .selected(index == selected)
                    .render(area, buf)
            })
            .scrollbar(scrollbar)
            .render(area, buf);
        }
        Screen::MenuItems => {
            let items = state.listed_menu_items();
            WindowedList::new(&items, pane.window(), |item, _, area, buf: &mut Buffer| {
                MenuItemCard::new(item, theme).render(area, buf)
            })
            .scrollbar(scrollbar)
            .render(area, buf);
        }
        Screen::MenuSets => {
            let sets = state.listed_menu_sets();
            let zone = state.zone();
            WindowedList::new(&sets, pane.window(), |set, _, area, buf: &mut Buffer| {
                MenuSetCard::new(set, zone, theme).render(area, buf)
            })
            .scrollbar(scrollbar)
            .render(area, buf);
        }
    }
}

/// Filter state and count for the footer, e.g.
/// "Sort: Name (A-Z) · Past: hidden · 4 events".
pub fn footer_status(state: &AppState) -> String {
    if let Some(page) = state.page() {
        return page_hint(page).to_string();
    }
    let count = state.active_pane().len();
    match state.screen() {
        Screen::MealEvents => format!(
            "Sort: {} · Past: {} · {count} events",
            state.sort().label(),
            if state.hide_past() { "hidden" } else { "shown" },
        ),
        Screen::MenuItems => format!("{count} menu items"),
        Screen::MenuSets => format!("{count} menu sets"),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let left = match state.notices.current() {
        Some(notice) => Line::from(Span::styled(
            format!(" {}", notice.message),
            theme.notice(notice.severity),
        )),
        None => Line::from(Span::styled(format!(" {}", footer_status(state)), theme.muted())),
    };
    frame.render_widget(Paragraph::new(left), area);

    let hint = Line::from(vec![
        Span::styled("?", theme.key()),
        Span::styled(" help ", theme.muted()),
    ]);
    let hint_width = u16::try_from(hint.width()).unwrap_or(area.width);
    let hint_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        width: hint_width.min(area.width),
        ..area
    };
    frame.render_widget(Paragraph::new(hint), hint_area);
}
