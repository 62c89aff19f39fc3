//! Vertical scrolling keyboard action handler.
//!
//! Scrolling moves the active pane's container; the mounted window
//! recomputes its range from the container's scroll signal.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a scroll action on the active screen's list.
///
/// Page actions move by the container's visible height. Non-scroll
/// actions are ignored.
pub fn handle_scroll_action(state: &AppState, action: KeyAction) {
    let container = state.active_pane().container();
    let page = isize::try_from(container.visible_height().max(1)).unwrap_or(isize::MAX);

    match action {
        KeyAction::ScrollUp => container.scroll_by(-1),
        KeyAction::ScrollDown => container.scroll_by(1),
        KeyAction::PageUp => container.scroll_by(-page),
        KeyAction::PageDown => container.scroll_by(page),
        KeyAction::ScrollToTop => container.scroll_to_top(),
        KeyAction::ScrollToBottom => container.scroll_to_bottom(),
        _ => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
