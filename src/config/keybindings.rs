//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only consulted while the search line is closed; typing goes to the
/// search input handler.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let shift = KeyModifiers::SHIFT;

        // Vim-style scrolling
        keys.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Up, none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), shift, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::Char('G'), none, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Page navigation
        keys.bind(KeyCode::Char('d'), ctrl, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), ctrl, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, none, KeyAction::PageUp);

        // Screens
        keys.bind(KeyCode::Tab, none, KeyAction::NextScreen);
        keys.bind(KeyCode::Char(']'), none, KeyAction::NextScreen);
        keys.bind(KeyCode::Char('['), none, KeyAction::PrevScreen);
        keys.bind(KeyCode::BackTab, shift, KeyAction::PrevScreen);
        keys.bind(KeyCode::Char('1'), none, KeyAction::SelectScreen(1));
        keys.bind(KeyCode::Char('2'), none, KeyAction::SelectScreen(2));
        keys.bind(KeyCode::Char('3'), none, KeyAction::SelectScreen(3));

        // Search and filters
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), ctrl, KeyAction::StartSearch);
        keys.bind(KeyCode::Esc, none, KeyAction::CancelSearch);
        keys.bind(KeyCode::Char('o'), none, KeyAction::CycleSort);
        keys.bind(KeyCode::Char('p'), none, KeyAction::TogglePastEvents);

        // Pages
        keys.bind(KeyCode::Char('J'), shift, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('J'), none, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('K'), shift, KeyAction::SelectPrev);
        keys.bind(KeyCode::Char('K'), none, KeyAction::SelectPrev);
        keys.bind(KeyCode::Enter, none, KeyAction::OpenSelected);
        keys.bind(KeyCode::Char('d'), none, KeyAction::Dashboard);
        keys.bind(KeyCode::Char('m'), none, KeyAction::ShowMore);
        keys.bind(KeyCode::Char('u'), none, KeyAction::Profile);
        keys.bind(KeyCode::Char('a'), none, KeyAction::AdminDashboard);
        keys.bind(KeyCode::Backspace, none, KeyAction::ClosePage);

        // Application controls
        keys.bind(KeyCode::Char('r'), none, KeyAction::Reload);
        keys.bind(KeyCode::Char('x'), none, KeyAction::DismissNotice);
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('?'), shift, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), ctrl, KeyAction::Quit);

        keys
    }
}
