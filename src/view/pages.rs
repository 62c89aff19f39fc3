//! Pages drawn in place of the list: dashboard, event detail, profile and
//! the admin overview.

use super::cards::{format_cutoff, format_day, rating_stars, truncate};
use super::styles::Theme;
use crate::model::{DayZone, MealEvent, MealEventId};
use crate::state::page::{event_comments, DASHBOARD_BATCH};
use crate::state::{AppState, Page, RequestTally};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const SELECTED_MARKER: &str = "▶ ";
const UNSELECTED_MARKER: &str = "  ";

/// Footer hint while `page` is open.
pub fn page_hint(page: Page) -> &'static str {
    match page {
        Page::Dashboard { .. } => "J/K select · Enter details · m more · Esc back",
        _ => "Esc back",
    }
}

/// Render `page` into `area`.
pub fn render_page(buf: &mut Buffer, area: Rect, state: &AppState, page: Page, theme: Theme) {
    let lines = match page {
        Page::Dashboard { shown, selected } => {
            let rows = usize::from(area.height.saturating_sub(2));
            dashboard_lines(state, shown, selected, rows, theme)
        }
        Page::EventDetail(id) => detail_lines(state, id, theme),
        Page::Profile => profile_lines(state, theme),
        Page::Admin => admin_lines(state, theme),
    };
    let block = Block::bordered()
        .border_style(theme.border())
        .title(Span::styled(format!(" {} ", page.title()), theme.title()));
    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn heading(text: impl Into<String>, theme: Theme) -> Line<'static> {
    Line::from(Span::styled(text.into(), theme.section_header()))
}

fn field(label: &'static str, value: impl Into<String>, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, theme.label()),
        Span::raw(value.into()),
    ])
}

fn muted(text: impl Into<String>, theme: Theme) -> Line<'static> {
    Line::from(Span::styled(text.into(), theme.muted()))
}

// ===== Dashboard =====

fn dashboard_lines(
    state: &AppState,
    shown: usize,
    selected: usize,
    rows: usize,
    theme: Theme,
) -> Vec<Line<'static>> {
    let upcoming = state.upcoming_events();
    let mut lines = vec![heading("Upcoming Events", theme), Line::default()];
    if upcoming.is_empty() {
        lines.push(muted("No upcoming meal events.", theme));
        return lines;
    }

    let listed = &upcoming[..upcoming.len().min(shown)];
    let more = upcoming.len() > shown;
    // heading, blank line and the "more" hint take rows too
    let room = rows.saturating_sub(2 + usize::from(more)).max(1);
    let first = selected.saturating_sub(room - 1);
    for (position, event) in listed.iter().enumerate().skip(first).take(room) {
        lines.push(dashboard_row(event, position == selected, state.zone(), theme));
    }
    if more {
        lines.push(muted(
            format!(
                "m: show {} more ({} of {})",
                DASHBOARD_BATCH.min(upcoming.len() - shown),
                shown,
                upcoming.len()
            ),
            theme,
        ));
    }
    lines
}

fn dashboard_row(event: &MealEvent, selected: bool, zone: DayZone, theme: Theme) -> Line<'static> {
    let (marker, marker_style) = if selected {
        (SELECTED_MARKER, theme.selected_border())
    } else {
        (UNSELECTED_MARKER, theme.muted())
    };
    let mut spans = vec![
        Span::styled(marker, marker_style),
        Span::styled(format_day(zone.localize(event.event_date)), theme.label()),
        Span::raw("  "),
        Span::styled(event.name.clone(), theme.title()),
    ];
    if let Some(address) = event.primary_address() {
        spans.push(Span::styled(format!(" · {}", address.name), theme.muted()));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("[Cutoff: {}]", format_cutoff(zone.localize(event.cutoff_time))),
        theme.chip(),
    ));
    Line::from(spans)
}

// ===== Event detail =====

fn detail_lines(state: &AppState, id: MealEventId, theme: Theme) -> Vec<Line<'static>> {
    let Some(event) = state.detail_event(id) else {
        return vec![muted("Meal event not found.", theme)];
    };
    let zone = state.zone();
    let catalog = state.catalog();

    let mut lines = vec![Line::from(Span::styled(event.name.clone(), theme.title()))];
    if !event.description.is_empty() {
        lines.push(muted(event.description.clone(), theme));
    }
    lines.push(Line::default());
    lines.push(field(
        "When: ",
        format!(
            "{} · {} min",
            format_day(zone.localize(event.event_date)),
            event.event_duration
        ),
        theme,
    ));
    let status = if event.accepts_requests_at(state.clock()) {
        "Requests open"
    } else {
        "Requests closed"
    };
    lines.push(field(
        "Cutoff: ",
        format!("{} · {status}", format_cutoff(zone.localize(event.cutoff_time))),
        theme,
    ));

    lines.push(heading("Where", theme));
    if event.addresses.is_empty() {
        lines.push(muted("  No address", theme));
    }
    for link in &event.addresses {
        let address = &link.address;
        let text = if address.address_line.is_empty() {
            format!("  {}", address.name)
        } else {
            format!("  {}, {}", address.name, address.address_line)
        };
        lines.push(Line::raw(text));
    }

    lines.push(heading("Menu Sets", theme));
    if event.menu_sets.is_empty() {
        lines.push(muted("  None", theme));
    }
    for offered in &event.menu_sets {
        let set = &offered.menu_set;
        let items = set.item_names().collect::<Vec<_>>().join(", ");
        let name = if offered.label.is_empty() {
            set.menu_set_name.clone()
        } else {
            format!("{}: {}", offered.label, set.menu_set_name)
        };
        lines.push(Line::raw(format!("  {name} ({items})")));
    }

    let tally = RequestTally::for_event(&catalog.meal_requests, event.id);
    lines.push(field(
        "Requests: ",
        format!(
            "{} ({} confirmed) · {} items selected",
            tally.requests, tally.confirmed, tally.quantity
        ),
        theme,
    ));

    lines.push(heading("Comments", theme));
    let comments = event_comments(&catalog.comments, event.id);
    if comments.is_empty() {
        lines.push(muted("  No comments yet.", theme));
    }
    for comment in comments {
        let line = if comment.is_reply() {
            Line::raw(format!("    ↳ {}", comment.comment))
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(rating_stars(f64::from(comment.rating)), theme.rating()),
                Span::raw(format!(" {}", comment.comment)),
            ])
        };
        lines.push(line);
    }
    lines
}

// ===== Profile =====

fn profile_lines(state: &AppState, theme: Theme) -> Vec<Line<'static>> {
    let Some(user) = state.session().view().user() else {
        return vec![muted("Not signed in.", theme)];
    };
    let created = user.created_at.map_or_else(
        || "N/A".to_string(),
        |at| format_day(state.zone().localize(at)),
    );
    let notifications = if user.notification_enabled {
        "Enabled"
    } else {
        "Disabled"
    };
    vec![
        heading("Personal Information", theme),
        field("Name: ", user.name.clone(), theme),
        field("Email: ", user.email.clone(), theme),
        field("Department: ", user.department.clone(), theme),
        field("Notifications: ", notifications, theme),
        Line::default(),
        heading("Account Information", theme),
        field("Employee ID: ", user.employee_id.clone(), theme),
        field("Role: ", user.role.to_string(), theme),
        field("Account Created: ", created, theme),
    ]
}

// ===== Admin =====

fn admin_lines(state: &AppState, theme: Theme) -> Vec<Line<'static>> {
    let summary = state.admin_summary();
    let zone = state.zone();
    let mut lines = vec![
        field(
            "Upcoming Events (next 30 days): ",
            summary.upcoming.len().to_string(),
            theme,
        ),
        field("Menu Items: ", summary.menu_items.to_string(), theme),
        field("Menu Sets: ", summary.menu_sets.to_string(), theme),
        Line::default(),
        heading("Recent Events", theme),
    ];
    if summary.recent_events().is_empty() {
        lines.push(muted("  No upcoming events", theme));
    }
    for event in summary.recent_events() {
        lines.push(Line::from(vec![
            Span::raw(format!("  {}", truncate(&event.name, 40))),
            Span::styled(
                format!(" · {}", format_day(zone.localize(event.event_date))),
                theme.muted(),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(heading("Recent Menu Sets", theme));
    if summary.recent_sets.is_empty() {
        lines.push(muted("  No menu sets", theme));
    }
    for set in &summary.recent_sets {
        lines.push(Line::from(vec![
            Span::raw(format!("  {}", truncate(&set.menu_set_name, 40))),
            Span::styled(format!(" · {} items", set.menu_set_items.len()), theme.muted()),
        ]));
    }
    lines
}
