//! Screen navigation keyboard action handler.

use crate::model::KeyAction;
use crate::state::{AppState, Screen};

/// Handle a screen navigation action.
///
/// `SelectScreen` is 1-based, matching the number keys. Out-of-range
/// numbers and non-navigation actions are ignored.
pub fn handle_tab_action(state: &mut AppState, action: KeyAction) {
    let target = match action {
        KeyAction::NextScreen => Some(state.screen().next()),
        KeyAction::PrevScreen => Some(state.screen().prev()),
        KeyAction::SelectScreen(n) => n.checked_sub(1).and_then(Screen::from_index),
        _ => None,
    };
    if let Some(screen) = target {
        state.set_screen(screen);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "tab_handler_tests.rs"]
mod tests;
