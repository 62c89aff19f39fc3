//! Screen tab header.
//!
//! Displays the three screens using ratatui's Tabs widget, with the signed-in
//! user and unread notification count in the block title.

use super::styles::Theme;
use crate::state::{Screen, SessionView};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Text for the right side of the header, e.g. "Ada (admin) · 2 unread".
pub fn user_summary(session: SessionView<'_>, unread: usize) -> String {
    let mut summary = match session.user() {
        Some(user) => format!("{} ({})", user.name, user.role),
        None => session.display_name().to_string(),
    };
    if unread > 0 {
        summary.push_str(&format!(" · {unread} unread"));
    }
    summary
}

/// Render the screen tabs with `selected` highlighted.
pub fn render_tab_bar(
    frame: &mut Frame,
    area: Rect,
    selected: Screen,
    summary: &str,
    theme: Theme,
) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| Line::from(format!("{} {}", i + 1, screen.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" mealdesk ")
                .title(Line::from(format!(" {summary} ")).right_aligned()),
        )
        .highlight_style(theme.tab_selected())
        .select(selected.index());

    frame.render_widget(tabs, area);
}
