//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user
//! interactions. Time is simulated: nothing waits on the wall clock.

use crate::model::meal_event::fixtures::event;
use crate::model::{
    AddressId, AuthResponse, CatalogSnapshot, CommentId, DayZone, MealEventId, MealRequest,
    MealRequestId, MealRequestItem, MenuItem, MenuItemComment, MenuItemId, MenuSet, MenuSetId,
    MenuSetItem, Notification, NotificationId, NotificationKind, Role, User, UserId,
};
use crate::source::{FileSource, InputSource};
use crate::state::{AppState, ListSettings};
use crate::view::{ColorConfig, Theme, TuiApp, TuiError};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

static FIXTURE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Wall clock every harness starts at: 09:00 UTC on [`harness_today`].
pub fn harness_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 9, 0, 0).unwrap()
}

/// Calendar day every harness runs on.
pub fn harness_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

/// List settings used by harnesses: defaults on a UTC calendar.
pub fn harness_settings() -> ListSettings {
    ListSettings {
        zone: DayZone::utc(),
        ..ListSettings::default()
    }
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

// ===== Fixtures =====

/// Menu item without timestamps.
pub fn menu_item(id: u64, name: &str, description: &str, rating: f64) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        image_url: String::new(),
        average_rating: rating,
        created_at: None,
        updated_at: None,
    }
}

/// Menu set of `items`, without timestamps.
pub fn menu_set(id: u64, name: &str, items: Vec<MenuItem>) -> MenuSet {
    MenuSet {
        id: MenuSetId::new(id),
        menu_set_name: name.to_string(),
        menu_set_description: String::new(),
        menu_set_items: items
            .into_iter()
            .enumerate()
            .map(|(i, item)| MenuSetItem {
                id: i as u64 + 1,
                menu_item_id: item.id,
                menu_set_id: MenuSetId::new(id),
                menu_item: item,
            })
            .collect(),
        created_at: None,
        updated_at: None,
    }
}

/// Sign-in response for an administrator called `name`.
pub fn admin_auth(name: &str) -> AuthResponse {
    AuthResponse {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        user: User {
            id: UserId::new(1),
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            username: name.to_lowercase(),
            department: "Kitchen".to_string(),
            employee_id: "E-1".to_string(),
            role: Role::Admin,
            notification_enabled: true,
            is_active: true,
            created_at: None,
            updated_at: None,
        },
    }
}

/// Request for `event` with one selected line of `quantity` soups.
pub fn meal_request(id: u64, event: u64, confirmed: bool, quantity: u32) -> MealRequest {
    MealRequest {
        id: MealRequestId::new(id),
        user_id: UserId::new(1),
        meal_event_id: MealEventId::new(event),
        menu_set_id: MenuSetId::new(1),
        event_address_id: AddressId::new(1),
        request_items: vec![MealRequestItem {
            id,
            meal_request_id: MealRequestId::new(id),
            menu_item_id: MenuItemId::new(1),
            menu_set_id: MenuSetId::new(1),
            quantity,
            is_selected: true,
            notes: String::new(),
            menu_item: menu_item(1, "Tomato soup", "Slow-cooked", 4.5),
        }],
        confirmed_at: confirmed.then(harness_clock),
        created_at: None,
        updated_at: None,
    }
}

/// Comment on the soup during `event`.
pub fn comment(
    id: u64,
    event: u64,
    text: &str,
    rating: u8,
    parent: Option<u64>,
) -> MenuItemComment {
    MenuItemComment {
        id: CommentId::new(id),
        menu_item_id: MenuItemId::new(1),
        meal_event_id: MealEventId::new(event),
        user_id: UserId::new(1),
        comment: text.to_string(),
        rating,
        parent_id: parent.map(CommentId::new),
        created_at: None,
        updated_at: None,
    }
}

/// Unread reminder.
pub fn unread_notification(id: u64) -> Notification {
    Notification {
        id: NotificationId::new(id),
        user_id: UserId::new(1),
        kind: NotificationKind::Reminder,
        message: "Order by noon".to_string(),
        payload: String::new(),
        read: false,
        delivered: true,
        read_at: None,
        delivered_at: None,
        created_at: None,
        updated_at: None,
    }
}

/// Small catalog: three events around [`harness_today`], two items, one set.
pub fn sample_catalog() -> CatalogSnapshot {
    let soup = menu_item(1, "Tomato soup", "Slow-cooked", 4.5);
    let bagel = menu_item(2, "Bagel", "Sesame", 0.0);
    CatalogSnapshot {
        auth: Some(admin_auth("Ada")),
        meal_events: vec![
            event(1, "Soup day", "Warm lunch", (2025, 3, 11)),
            event(2, "Pizza night", "Friday treat", (2025, 3, 20)),
            event(3, "Breakfast", "Fresh soup too", (2025, 3, 15)),
        ],
        menu_sets: vec![menu_set(1, "Continental", vec![bagel.clone()])],
        menu_items: vec![soup, bagel],
        notifications: vec![unread_notification(1), unread_notification(2)],
        ..CatalogSnapshot::default()
    }
}

/// `count` events named "Event 0000".., one per day from 2025-01-01.
pub fn many_events(count: usize) -> CatalogSnapshot {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let meal_events = (0..count)
        .map(|i| {
            let day = start + chrono::Days::new(i as u64);
            event(
                i as u64 + 1,
                &format!("Event {i:04}"),
                "Catered lunch",
                (day.year(), day.month(), day.day()),
            )
        })
        .collect();
    CatalogSnapshot {
        meal_events,
        ..CatalogSnapshot::default()
    }
}

// ===== Harness =====

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> backed by a snapshot file in the temp
/// directory, so reloads can be exercised by rewriting the file.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    fixture: PathBuf,
    now: Instant,
    clock: DateTime<Utc>,
}

impl AcceptanceTestHarness {
    /// Harness over `catalog` with an 80x24 terminal.
    pub fn new(catalog: CatalogSnapshot) -> Result<Self, TuiError> {
        Self::with_size(catalog, 80, 24)
    }

    /// Harness over `catalog` with a custom terminal size.
    pub fn with_size(catalog: CatalogSnapshot, width: u16, height: u16) -> Result<Self, TuiError> {
        let id = FIXTURE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let fixture = std::env::temp_dir().join(format!(
            "mealdesk_harness_{}_{id}.json",
            std::process::id()
        ));
        write_snapshot(&fixture, &catalog);

        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let mut input_source = InputSource::File(FileSource::new(&fixture)?);
        let loaded = input_source.load()?.unwrap_or_default();
        let app_state = AppState::new(loaded, &harness_settings(), harness_clock());
        let mut app = TuiApp::with_terminal(
            terminal,
            app_state,
            input_source,
            Theme::new(ColorConfig::disabled()),
        );
        // The first frame sizes the list containers.
        app.draw()?;

        Ok(Self {
            app,
            fixture,
            now: Instant::now(),
            clock: harness_clock(),
        })
    }

    /// Send a key without modifiers. Returns true if the app quit.
    pub fn send_key(&mut self, code: KeyCode) -> bool {
        self.send_key_with_mods(code, KeyModifiers::NONE)
    }

    /// Send a key with modifiers. Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let quit = self.app.handle_key(KeyEvent::new(code, modifiers), self.now);
        self.redraw();
        quit
    }

    /// Send a fully built key event. Returns true if the app quit.
    pub fn handle_raw_key(&mut self, key: KeyEvent) -> bool {
        let quit = self.app.handle_key(key, self.now);
        self.redraw();
        quit
    }

    /// Move simulated time forward and set the wall clock to `clock`.
    ///
    /// Returns whether the app asked for a redraw.
    pub fn tick_on(&mut self, by: Duration, clock: DateTime<Utc>) -> bool {
        self.now += by;
        self.clock = clock;
        let changed = self.app.tick_at(self.now, clock);
        self.redraw();
        changed
    }

    /// Type each character of `text`.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_key(KeyCode::Char(ch));
        }
    }

    /// Move simulated time and the wall clock forward, then run timers.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
        self.clock += chrono::Duration::from_std(by).unwrap();
        self.app.tick_at(self.now, self.clock);
        self.redraw();
    }

    /// Replace the snapshot file contents (for reload tests).
    pub fn rewrite_snapshot(&self, catalog: &CatalogSnapshot) {
        write_snapshot(&self.fixture, catalog);
    }

    /// Overwrite the snapshot file with raw text.
    pub fn rewrite_snapshot_raw(&self, contents: &str) {
        std::fs::write(&self.fixture, contents).unwrap();
    }

    /// State of the app under test.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Current screen contents, blank lines dropped.
    pub fn screen(&self) -> String {
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Current screen rows, including blank ones.
    pub fn rows(&self) -> Vec<String> {
        let buffer = self.app.terminal().backend().buffer();
        let area = buffer.area();
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn redraw(&mut self) {
        self.app.draw().unwrap();
    }
}

impl Drop for AcceptanceTestHarness {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.fixture);
    }
}

fn write_snapshot(path: &PathBuf, catalog: &CatalogSnapshot) {
    let json = serde_json::to_string_pretty(catalog).unwrap();
    std::fs::write(path, json).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harness_renders_first_frame() {
        let harness = AcceptanceTestHarness::new(sample_catalog()).unwrap();
        let screen = harness.screen();
        assert!(screen.contains("1 Meal Events"), "{screen}");
        assert!(screen.contains("Soup day"));
    }

    #[test]
    fn quit_key_reports_quit() {
        let mut harness = AcceptanceTestHarness::new(sample_catalog()).unwrap();
        assert!(!harness.send_key(KeyCode::Char('j')));
        assert!(harness.send_key(KeyCode::Char('q')));
    }

    #[test]
    fn many_events_are_dated_consecutively() {
        let catalog = many_events(40);
        assert_eq!(catalog.meal_events.len(), 40);
        let day = catalog.meal_events[31].event_day_in(DayZone::utc());
        assert_eq!(day.to_string(), "2025-02-01");
    }
}
