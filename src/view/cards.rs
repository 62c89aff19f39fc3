//! Card widgets for list items.
//!
//! Each card fills exactly one item slot: a bordered block whose interior
//! lines are cut to the card width with an ellipsis.

use super::styles::Theme;
use crate::model::{DayZone, MealEvent, MenuItem, MenuSet};
use chrono::{DateTime, FixedOffset, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

const ELLIPSIS: char = '…';
const MAX_STARS: usize = 5;

/// Date shown on event cards, e.g. "Mar 11, 2025".
pub fn format_day(at: DateTime<FixedOffset>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Cutoff chip text, e.g. "Mar 10, 12:00 PM".
pub fn format_cutoff(at: DateTime<FixedOffset>) -> String {
    at.format("%b %-d, %-I:%M %p").to_string()
}

/// Cut `text` to at most `width` display columns, ending with `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Star string for an average rating in `0.0..=5.0`, rounded to whole stars.
pub fn rating_stars(average: f64) -> String {
    let filled = (average.clamp(0.0, MAX_STARS as f64).round()) as usize;
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(MAX_STARS - filled));
    stars
}

/// Fit a line of spans into `width` columns.
///
/// Spans are kept whole while they fit; the first one that does not is
/// truncated and the rest are dropped.
fn fit_line(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let mut remaining = width;
    let mut fitted = Vec::with_capacity(spans.len());
    for span in spans {
        let w = span.width();
        if w <= remaining {
            remaining -= w;
            fitted.push(span);
        } else {
            let cut = truncate(&span.content, remaining);
            fitted.push(Span::styled(cut, span.style));
            break;
        }
    }
    Line::from(fitted)
}

fn render_card(
    title: &str,
    lines: Vec<Vec<Span<'static>>>,
    theme: Theme,
    selected: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let title_width = inner_width.saturating_sub(2);
    let block = if selected {
        Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(theme.selected_border())
    } else {
        Block::bordered().border_style(theme.border())
    };
    let block =
        block.title(Span::styled(format!(" {} ", truncate(title, title_width)), theme.title()));
    let lines: Vec<Line> = lines
        .into_iter()
        .map(|spans| fit_line(spans, inner_width))
        .collect();
    Paragraph::new(lines).block(block).render(area, buf);
}

fn label(theme: Theme, text: &'static str) -> Span<'static> {
    Span::styled(text, theme.label())
}

fn chip(text: String, style: Style) -> Span<'static> {
    Span::styled(format!("[{text}]"), style)
}

// ===== Meal events =====

/// Card for one meal event.
///
/// Dates are shown and judged past on the calendar of `zone`.
pub struct EventCard<'a> {
    event: &'a MealEvent,
    today: NaiveDate,
    zone: DayZone,
    theme: Theme,
    selected: bool,
}

impl<'a> EventCard<'a> {
    /// Card for `event` as seen on `today`.
    pub fn new(event: &'a MealEvent, today: NaiveDate, zone: DayZone, theme: Theme) -> Self {
        Self {
            event,
            today,
            zone,
            theme,
            selected: false,
        }
    }

    /// Draw the card with the selection border.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn lines(&self) -> Vec<Vec<Span<'static>>> {
        let theme = self.theme;
        let event = self.event;
        let place = event
            .primary_address()
            .map_or_else(|| "No address".to_string(), |a| a.name.clone());
        let sets = if event.menu_sets.is_empty() {
            "None".to_string()
        } else {
            event
                .menu_sets
                .iter()
                .map(|s| s.menu_set.menu_set_name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut chips = vec![chip(
            format!("Cutoff: {}", format_cutoff(self.zone.localize(event.cutoff_time))),
            theme.chip(),
        )];
        if event.is_past_on(self.today, self.zone) {
            chips.push(Span::raw(" "));
            chips.push(chip("Past Event".to_string(), theme.past_chip()));
        }

        vec![
            vec![Span::styled(event.description.clone(), theme.muted())],
            vec![
                label(theme, "When: "),
                Span::raw(format!(
                    "{} · {} min",
                    format_day(self.zone.localize(event.event_date)),
                    event.event_duration
                )),
            ],
            vec![label(theme, "Where: "), Span::raw(place)],
            vec![label(theme, "Sets: "), Span::raw(sets)],
            chips,
        ]
    }
}

impl Widget for EventCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        render_card(&self.event.name, lines, self.theme, self.selected, area, buf);
    }
}

// ===== Menu items =====

/// Card for one menu item.
pub struct MenuItemCard<'a> {
    item: &'a MenuItem,
    theme: Theme,
}

impl<'a> MenuItemCard<'a> {
    /// Card for `item`.
    pub fn new(item: &'a MenuItem, theme: Theme) -> Self {
        Self { item, theme }
    }
}

impl Widget for MenuItemCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let rating = if self.item.average_rating > 0.0 {
            vec![
                Span::styled(rating_stars(self.item.average_rating), theme.rating()),
                Span::raw(format!(" ({:.1})", self.item.average_rating)),
            ]
        } else {
            vec![Span::styled("No ratings yet", theme.muted())]
        };
        let lines = vec![
            vec![Span::styled(self.item.description.clone(), theme.muted())],
            rating,
        ];
        render_card(&self.item.name, lines, theme, false, area, buf);
    }
}

// ===== Menu sets =====

/// Card for one menu set.
pub struct MenuSetCard<'a> {
    set: &'a MenuSet,
    zone: DayZone,
    theme: Theme,
}

impl<'a> MenuSetCard<'a> {
    /// Card for `set`, dated on the calendar of `zone`.
    pub fn new(set: &'a MenuSet, zone: DayZone, theme: Theme) -> Self {
        Self { set, zone, theme }
    }
}

impl Widget for MenuSetCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let names: Vec<&str> = self.set.item_names().collect();
        let mut chips = Vec::new();
        if let Some(created) = self.set.created_at {
            chips.push(chip(
                format!("Created: {}", format_day(self.zone.localize(created))),
                theme.chip(),
            ));
        }
        if let Some(updated) = self.set.updated_at {
            if !chips.is_empty() {
                chips.push(Span::raw(" "));
            }
            chips.push(chip(
                format!("Updated: {}", format_day(self.zone.localize(updated))),
                theme.chip(),
            ));
        }
        let lines = vec![
            vec![Span::styled(self.set.menu_set_description.clone(), theme.muted())],
            vec![
                label(theme, "Menu Items "),
                Span::raw(format!("({}): {}", names.len(), names.join(", "))),
            ],
            chips,
        ];
        render_card(&self.set.menu_set_name, lines, theme, false, area, buf);
    }
}
