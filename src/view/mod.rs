//! TUI rendering and terminal management (impure shell)

pub mod cards;
pub mod constants;
mod help;
pub mod layout;
pub mod pages;
mod search_input;
pub mod styles;
pub mod tabs;
pub mod windowed_list;

pub use help::render_help_overlay;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Theme};
pub use windowed_list::WindowedList;

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::source::InputSource;
use crate::state::{
    handle_scroll_action, handle_tab_action, search_input_handler, AppState, ListSettings,
    SearchState,
};
use chrono::{DateTime, Utc};
use constants::IDLE_POLL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    input_source: InputSource,
    key_bindings: KeyBindings,
    theme: Theme,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        input_source: InputSource,
        app_state: AppState,
        theme: Theme,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, input_source, theme))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Waits for input until the
    /// next debounce or notice deadline, so an idle screen does not spin.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let now = Instant::now();
            let idle = Duration::from_millis(IDLE_POLL_MS);
            let timeout = self
                .app_state
                .next_deadline()
                .map_or(idle, |deadline| deadline.saturating_duration_since(now).min(idle));

            let handled = if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        true
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        true
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        true
                    }
                    _ => false,
                }
            } else {
                false
            };

            // Timers run after input as well as on timeout.
            let ticked = self.tick(Instant::now());
            if handled || ticked {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal.
    ///
    /// Used by [`TuiApp::new`] and by tests with a `TestBackend`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        input_source: InputSource,
        theme: Theme,
    ) -> Self {
        Self {
            terminal,
            app_state,
            input_source,
            key_bindings: KeyBindings::default(),
            theme,
        }
    }

    /// State behind the screen.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The terminal drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Timer work: due searches, expired notices, day rollover.
    ///
    /// Returns true when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.tick_at(now, Utc::now())
    }

    /// [`TuiApp::tick`] with an explicit wall clock.
    pub fn tick_at(&mut self, now: Instant, clock: DateTime<Utc>) -> bool {
        let rolled_over = self.app_state.set_clock(clock);
        self.app_state.tick(now) | rolled_over
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            return self.handle_help_key(key);
        }

        if self.app_state.search().is_typing() && self.handle_search_key(key, now) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");

        if self.app_state.page().is_some() {
            return self.handle_page_action(action, now);
        }

        match action {
            KeyAction::Quit => return true,

            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => handle_scroll_action(&self.app_state, action),

            KeyAction::SelectNext => self.app_state.move_selection(1),
            KeyAction::SelectPrev => self.app_state.move_selection(-1),
            KeyAction::OpenSelected => {
                self.app_state.open_selected();
            }
            KeyAction::Dashboard | KeyAction::Profile | KeyAction::AdminDashboard => {
                self.open_page(action, now)
            }
            // page-only actions
            KeyAction::ShowMore | KeyAction::ClosePage => {}

            KeyAction::NextScreen | KeyAction::PrevScreen | KeyAction::SelectScreen(_) => {
                handle_tab_action(&mut self.app_state, action)
            }

            KeyAction::StartSearch => self.app_state.start_search(),
            KeyAction::CancelSearch => {
                if !matches!(self.app_state.search(), SearchState::Inactive) {
                    self.app_state.cancel_search();
                }
            }
            KeyAction::CycleSort => self.app_state.cycle_sort(),
            KeyAction::TogglePastEvents => self.app_state.toggle_hide_past(),

            KeyAction::Reload => self.reload(now),
            KeyAction::DismissNotice => self.app_state.notices.dismiss(),
            KeyAction::Help => self.app_state.help_visible = true,
        }
        false
    }

    /// Keys while a page is open. Scrolling moves the dashboard selection;
    /// list and search actions do nothing. Returns true if app should quit.
    fn handle_page_action(&mut self, action: KeyAction, now: Instant) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::CancelSearch | KeyAction::ClosePage => {
                self.app_state.close_page();
            }
            KeyAction::ScrollDown | KeyAction::SelectNext => self.app_state.move_selection(1),
            KeyAction::ScrollUp | KeyAction::SelectPrev => self.app_state.move_selection(-1),
            KeyAction::OpenSelected => {
                self.app_state.open_selected();
            }
            KeyAction::ShowMore => {
                self.app_state.show_more();
            }
            KeyAction::Dashboard | KeyAction::Profile | KeyAction::AdminDashboard => {
                self.open_page(action, now)
            }
            KeyAction::NextScreen | KeyAction::PrevScreen | KeyAction::SelectScreen(_) => {
                handle_tab_action(&mut self.app_state, action)
            }
            KeyAction::Reload => self.reload(now),
            KeyAction::DismissNotice => self.app_state.notices.dismiss(),
            KeyAction::Help => self.app_state.help_visible = true,
            _ => {}
        }
        false
    }

    /// Open the page behind `action`; a refused page becomes a warning notice.
    fn open_page(&mut self, action: KeyAction, now: Instant) {
        let opened = match action {
            KeyAction::Dashboard => {
                self.app_state.open_dashboard();
                Ok(())
            }
            KeyAction::Profile => self.app_state.open_profile(),
            KeyAction::AdminDashboard => self.app_state.open_admin(),
            _ => Ok(()),
        };
        if let Err(denied) = opened {
            info!(%denied, "page refused");
            self.app_state.notices.show_warning(denied.to_string(), now);
        }
    }

    /// Keys while the help overlay is open: close it or quit, nothing else.
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc {
            self.app_state.help_visible = false;
            return false;
        }
        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(KeyAction::Help) => {
                self.app_state.help_visible = false;
                false
            }
            _ => false,
        }
    }

    /// Edit the search line. Returns false for keys it does not consume.
    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_state
                    .edit_search(|s| search_input_handler::handle_char_input(s, ch), now);
            }
            KeyCode::Backspace => {
                self.app_state
                    .edit_search(search_input_handler::handle_backspace, now);
            }
            KeyCode::Left => {
                self.app_state
                    .edit_search(search_input_handler::handle_cursor_left, now);
            }
            KeyCode::Right => {
                self.app_state
                    .edit_search(search_input_handler::handle_cursor_right, now);
            }
            KeyCode::Enter => self.app_state.submit_search(),
            KeyCode::Esc => self.app_state.cancel_search(),
            _ => return false,
        }
        true
    }

    /// Mouse wheel scrolls the active list.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible || self.app_state.page().is_some() {
            return;
        }
        let container = self.app_state.active_pane().container();
        match mouse.kind {
            MouseEventKind::ScrollDown => container.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => container.scroll_by(-WHEEL_STEP),
            _ => {}
        }
    }

    /// Re-read the snapshot file and report the outcome as a notice raised at `now`.
    fn reload(&mut self, now: Instant) {
        if !self.input_source.is_reloadable() {
            self.app_state
                .notices
                .show_warning("Input from stdin cannot be reloaded", now);
            return;
        }
        match self.input_source.load() {
            Ok(Some(catalog)) => {
                let events = catalog.meal_events.len();
                self.app_state.replace_catalog(catalog);
                self.app_state
                    .notices
                    .show_success(format!("Reloaded {events} meal events"), now);
            }
            Ok(None) => self.app_state.notices.show_info("Nothing new to load", now),
            Err(err) => self.app_state.notices.report_error(&err, now),
        }
    }

    /// Size every list to the current list area and render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let areas = layout::calculate_areas(
            Rect::new(0, 0, size.width, size.height),
            layout::search_visible(&self.app_state),
        );
        self.app_state.resize_lists(usize::from(areas.list.height));

        let state = &self.app_state;
        let theme = self.theme;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, areas, theme);
            if state.help_visible {
                render_help_overlay(frame, theme);
            }
        })?;
        Ok(())
    }
}

/// Startup options gathered by `main`.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Resolved list settings.
    pub settings: ListSettings,
    /// Colors for the whole UI.
    pub theme: Theme,
    /// Search applied to the meal event list at startup.
    pub initial_search: Option<String>,
}

/// Apply `text` as the current screen's search, skipping the debounce.
pub fn apply_initial_search(state: &mut AppState, text: &str) {
    state.start_search();
    state.edit_search(
        |search| text.chars().fold(search, search_input_handler::handle_char_input),
        Instant::now(),
    );
    state.submit_search();
}

/// Load the snapshot, then run the TUI until the user quits.
///
/// The snapshot is read before the terminal enters raw mode so a bad file
/// is reported on a normal screen. Logging must be initialized by the caller.
pub fn run_with_source(
    mut input_source: InputSource,
    options: LaunchOptions,
) -> Result<(), TuiError> {
    let catalog = input_source.load()?.unwrap_or_default();
    info!(
        source = %input_source.name(),
        records = catalog.record_count(),
        "snapshot loaded"
    );

    let mut state = AppState::new(catalog, &options.settings, Utc::now());
    if let Some(text) = options.initial_search.as_deref() {
        apply_initial_search(&mut state, text);
    }

    let mut app = TuiApp::new(input_source, state, options.theme)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
