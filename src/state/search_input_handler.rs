//! Search input handling (pure state transitions).
//!
//! Edits apply only in the `Typing` variant; every other variant passes
//! through unchanged.

use crate::state::{SearchQuery, SearchState};

/// Byte offset of the `cursor`-th char in `query`.
fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(i, _)| i)
}

/// Insert `ch` at the cursor and advance it.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the char before the cursor.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor left, saturating at 0.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move the cursor right, saturating at the end of the query.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Open the input line.
///
/// From `Active`, the committed query becomes the edit buffer so it can be
/// refined.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchState::Active { query } => {
            let query = query.as_str().to_string();
            let cursor = query.chars().count();
            SearchState::Typing { query, cursor }
        }
        typing @ SearchState::Typing { .. } => typing,
    }
}

/// Close the input line and drop the query.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

/// Commit the query. A blank query leaves search inactive.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, .. } => match SearchQuery::new(query) {
            Some(query) => SearchState::Active { query },
            None => SearchState::Inactive,
        },
        other => other,
    }
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
