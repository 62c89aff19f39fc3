//! Search input widget for rendering the search bar.

use super::styles::Theme;
use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
///
/// Renders an editable line with a cursor while typing and the applied
/// query otherwise. Nothing is drawn when no search is set.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    theme: Theme,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, theme: Theme) -> Self {
        Self {
            search_state,
            theme,
        }
    }
}

/// Split `query` at char position `cursor` into before, cursor cell, after.
///
/// At the end of the query the cursor cell is a blank.
fn split_at_cursor(query: &str, cursor: usize) -> (String, String, String) {
    let before: String = query.chars().take(cursor).collect();
    let mut rest = query.chars().skip(cursor);
    let at = rest.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = rest.collect();
    (before, at, after)
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.search_state {
            SearchState::Typing { query, cursor } => {
                let (before, at, after) = split_at_cursor(query, *cursor);
                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(at, self.theme.cursor()),
                    Span::raw(after),
                ]);
                Paragraph::new(line)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Search")
                            .style(self.theme.search_typing()),
                    )
                    .render(area, buf);
            }
            SearchState::Active { query } => {
                Paragraph::new(Line::from(query.as_str()))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Search (active)")
                            .style(Style::default()),
                    )
                    .render(area, buf);
            }
            SearchState::Inactive => {}
        }
    }
}
