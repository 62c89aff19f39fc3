//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups shown in the overlay: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓", "Scroll down"),
            ("k/↑", "Scroll up"),
            ("Ctrl+d/PgDn", "Page down"),
            ("Ctrl+u/PgUp", "Page up"),
            ("g/Home", "Go to top"),
            ("G/End", "Go to bottom"),
        ],
    ),
    (
        "Screens",
        &[
            ("Tab/]", "Next screen"),
            ("Shift+Tab/[", "Previous screen"),
            ("1-3", "Meal Events, Menu Items, Menu Sets"),
        ],
    ),
    (
        "Pages",
        &[
            ("J/K", "Select next or previous event"),
            ("Enter", "Open the selected event"),
            ("d", "Dashboard of upcoming events"),
            ("m", "Show more on the dashboard"),
            ("u", "Your profile"),
            ("a", "Admin dashboard"),
            ("Esc/Backspace", "Back"),
        ],
    ),
    (
        "Search & Filters",
        &[
            ("//Ctrl+f", "Search the current screen"),
            ("Enter", "Apply search now"),
            ("Esc", "Clear search"),
            ("o", "Cycle event sort order"),
            ("p", "Hide or show past events"),
        ],
    ),
    (
        "Application",
        &[
            ("r", "Reload snapshot file"),
            ("x", "Dismiss notice"),
            ("?", "Toggle this help"),
            ("q/Ctrl+c", "Quit"),
        ],
    ),
];

const KEY_COLUMN_WIDTH: usize = 14;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, theme: Theme) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(theme.section_header()),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        theme.muted().add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(theme: Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, theme.section_header())));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<KEY_COLUMN_WIDTH$}"), theme.key()),
                Span::styled(*description, Style::default()),
            ]));
        }
    }
    lines
}
