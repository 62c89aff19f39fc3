//! Application state: the loaded catalog, the session and notice contexts,
//! and one windowed list pane per screen.

use crate::model::{
    unread_count, CatalogSnapshot, DayZone, MealEvent, MealEventId, MenuItem, MenuSet,
};
use crate::state::debounce::{Debouncer, DEFAULT_SEARCH_DEBOUNCE};
use crate::state::event_query::{filter_menu_items, filter_menu_sets, EventQuery, SortOrder};
use crate::state::notice::{Notices, DEFAULT_NOTICE_TIMEOUT};
use crate::state::page::{upcoming_events, AdminSummary, Page, PageDenied, DASHBOARD_BATCH};
use crate::state::search_input_handler;
use crate::state::{SearchQuery, SearchState, Session};
use crate::view_state::{ItemHeight, MountedWindow, ScrollContainer, WindowParams, DEFAULT_OVERSCAN};
use chrono::{DateTime, NaiveDate, Utc};
use std::time::{Duration, Instant};
use tracing::{debug, info};

// ===== Screen =====

/// The three list screens, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Meal events with search, sort and past filter.
    #[default]
    MealEvents,
    /// Menu items with ratings.
    MenuItems,
    /// Menu sets with their items.
    MenuSets,
}

impl Screen {
    /// Every screen, in tab order.
    pub const ALL: [Screen; 3] = [Screen::MealEvents, Screen::MenuItems, Screen::MenuSets];

    /// Position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Screen::MealEvents => 0,
            Screen::MenuItems => 1,
            Screen::MenuSets => 2,
        }
    }

    /// Screen at tab position `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            Screen::MealEvents => "Meal Events",
            Screen::MenuItems => "Menu Items",
            Screen::MenuSets => "Menu Sets",
        }
    }

    /// Shown in place of the list when the filter matches nothing.
    pub fn empty_message(self) -> &'static str {
        match self {
            Screen::MealEvents => "No meal events found matching your search.",
            Screen::MenuItems => "No menu items found matching your search.",
            Screen::MenuSets => "No menu sets found matching your search.",
        }
    }
}

// ===== ListSettings =====

/// Card heights, overscan and timings for the list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSettings {
    /// Items rendered beyond each edge of the viewport.
    pub overscan: usize,
    /// Rows per meal event card.
    pub event_card_height: ItemHeight,
    /// Rows per menu item card.
    pub menu_item_height: ItemHeight,
    /// Rows per menu set card.
    pub menu_set_height: ItemHeight,
    /// Quiet period before a typed search is applied.
    pub search_debounce: Duration,
    /// How long a notice stays visible.
    pub notice_timeout: Duration,
    /// Start with past events hidden.
    pub hide_past_events: bool,
    /// Initial meal event order.
    pub default_sort: SortOrder,
    /// Calendar that decides "today" and which events are past.
    pub zone: DayZone,
}

/// Rows of an event card: borders, name, description, date, address, chips.
pub const DEFAULT_EVENT_CARD_HEIGHT: usize = 7;
/// Rows of a menu item card: borders, name with rating, description.
pub const MENU_ITEM_CARD_HEIGHT: usize = 4;
/// Rows of a menu set card: borders, name, description, item names.
pub const MENU_SET_CARD_HEIGHT: usize = 5;

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            overscan: DEFAULT_OVERSCAN,
            event_card_height: ItemHeight::new(DEFAULT_EVENT_CARD_HEIGHT)
                .unwrap_or(ItemHeight::ONE),
            menu_item_height: ItemHeight::new(MENU_ITEM_CARD_HEIGHT).unwrap_or(ItemHeight::ONE),
            menu_set_height: ItemHeight::new(MENU_SET_CARD_HEIGHT).unwrap_or(ItemHeight::ONE),
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            notice_timeout: DEFAULT_NOTICE_TIMEOUT,
            hide_past_events: false,
            default_sort: SortOrder::default(),
            zone: DayZone::default(),
        }
    }
}

impl ListSettings {
    fn item_height(&self, screen: Screen) -> ItemHeight {
        match screen {
            Screen::MealEvents => self.event_card_height,
            Screen::MenuItems => self.menu_item_height,
            Screen::MenuSets => self.menu_set_height,
        }
    }
}

// ===== ListPane =====

/// A windowed list mounted on its own scroll container.
///
/// `indices` maps list positions to records in the catalog.
#[derive(Debug)]
pub struct ListPane {
    window: MountedWindow,
    indices: Vec<usize>,
}

impl ListPane {
    /// Mount an empty list on a fresh container.
    ///
    /// The container has no height until the first frame sizes it.
    pub fn new(item_height: ItemHeight, overscan: usize) -> Self {
        let container = ScrollContainer::new(0);
        let params = WindowParams::new(0, item_height).with_overscan(overscan);
        Self {
            window: MountedWindow::mount(&container, params),
            indices: Vec::new(),
        }
    }

    /// Scroll container the list is mounted on.
    pub fn container(&self) -> &ScrollContainer {
        self.window.container()
    }

    /// The mounted window.
    pub fn window(&self) -> &MountedWindow {
        &self.window
    }

    /// Catalog indices in display order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of listed records.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing is listed.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn set_indices(&mut self, indices: Vec<usize>) {
        self.window.set_item_count(indices.len());
        self.indices = indices;
    }

    /// Scroll the least distance that shows item `position` whole.
    fn reveal(&self, position: usize) {
        let container = self.container();
        let height = self.window.params().item_height.get();
        let top = position * height;
        let bottom = top + height;
        let offset = container.scroll_offset();
        let visible = container.visible_height();
        if top < offset {
            container.scroll_to(top);
        } else if bottom > offset + visible {
            container.scroll_to(bottom.saturating_sub(visible));
        }
    }
}

// ===== AppState =====

/// Root application state.
#[derive(Debug)]
pub struct AppState {
    catalog: CatalogSnapshot,
    session: Session,
    /// Footer notices.
    pub notices: Notices,
    screen: Screen,
    search: SearchState,
    terms: [Option<SearchQuery>; 3],
    debounce: Debouncer<(Screen, Option<SearchQuery>)>,
    sort: SortOrder,
    hide_past: bool,
    clock: DateTime<Utc>,
    zone: DayZone,
    panes: [ListPane; 3],
    selected_event: usize,
    pages: Vec<Page>,
    /// Whether the help overlay is open.
    pub help_visible: bool,
}

impl AppState {
    /// Build the state for `catalog` as seen at wall-clock time `clock`.
    pub fn new(catalog: CatalogSnapshot, settings: &ListSettings, clock: DateTime<Utc>) -> Self {
        let session = catalog
            .auth
            .clone()
            .map_or_else(Session::anonymous, Session::from_auth);
        let panes = Screen::ALL.map(|s| ListPane::new(settings.item_height(s), settings.overscan));
        let mut state = Self {
            catalog,
            session,
            notices: Notices::new(settings.notice_timeout),
            screen: Screen::default(),
            search: SearchState::Inactive,
            terms: [None, None, None],
            debounce: Debouncer::new(settings.search_debounce),
            sort: settings.default_sort,
            hide_past: settings.hide_past_events,
            clock,
            zone: settings.zone,
            panes,
            selected_event: 0,
            pages: Vec::new(),
            help_visible: false,
        };
        state.refresh_all();
        state
    }

    // ===== Accessors =====

    /// The loaded catalog.
    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    /// Who is signed in.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Search line of the active screen.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Search applied to `screen`'s list.
    pub fn search_term(&self, screen: Screen) -> Option<&SearchQuery> {
        self.terms[screen.index()].as_ref()
    }

    /// Meal event order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Whether past events are hidden.
    pub fn hide_past(&self) -> bool {
        self.hide_past
    }

    /// Wall-clock time the state was last ticked at.
    pub fn clock(&self) -> DateTime<Utc> {
        self.clock
    }

    /// Calendar that days are judged on.
    pub fn zone(&self) -> DayZone {
        self.zone
    }

    /// Current calendar day in [`AppState::zone`].
    pub fn today(&self) -> NaiveDate {
        self.zone.day_of(self.clock)
    }

    /// List pane of `screen`.
    pub fn pane(&self, screen: Screen) -> &ListPane {
        &self.panes[screen.index()]
    }

    /// List pane of the active screen.
    pub fn active_pane(&self) -> &ListPane {
        self.pane(self.screen)
    }

    /// Give every list the same viewport height.
    ///
    /// Containers only signal when the height actually changes.
    pub fn resize_lists(&self, visible_height: usize) {
        for pane in &self.panes {
            pane.container().resize(visible_height);
        }
    }

    /// Unread notifications for the header badge.
    pub fn unread_count(&self) -> usize {
        unread_count(&self.catalog.notifications)
    }

    /// Query currently applied to the meal event list.
    pub fn event_query(&self) -> EventQuery {
        EventQuery {
            search: self.search_term(Screen::MealEvents).cloned(),
            sort: self.sort,
            hide_past: self.hide_past,
            zone: self.zone,
        }
    }

    /// Meal events in display order.
    pub fn listed_events(&self) -> Vec<&MealEvent> {
        self.pane(Screen::MealEvents)
            .indices()
            .iter()
            .filter_map(|&i| self.catalog.meal_events.get(i))
            .collect()
    }

    /// Menu items in display order.
    pub fn listed_menu_items(&self) -> Vec<&MenuItem> {
        self.pane(Screen::MenuItems)
            .indices()
            .iter()
            .filter_map(|&i| self.catalog.menu_items.get(i))
            .collect()
    }

    /// Menu sets in display order.
    pub fn listed_menu_sets(&self) -> Vec<&MenuSet> {
        self.pane(Screen::MenuSets)
            .indices()
            .iter()
            .filter_map(|&i| self.catalog.menu_sets.get(i))
            .collect()
    }

    // ===== Screens =====

    /// Switch screens.
    ///
    /// A pending search is applied first. The input line then shows the
    /// target screen's search.
    pub fn set_screen(&mut self, screen: Screen) {
        self.pages.clear();
        if screen == self.screen {
            return;
        }
        if let Some((target, term)) = self.debounce.flush() {
            self.apply_term(target, term);
        }
        self.screen = screen;
        self.search = match self.search_term(screen) {
            Some(query) => SearchState::Active {
                query: query.clone(),
            },
            None => SearchState::Inactive,
        };
        debug!(screen = screen.title(), "screen selected");
    }

    // ===== Search =====

    /// Open the search input on the current screen.
    pub fn start_search(&mut self) {
        self.search = search_input_handler::activate_search_input(std::mem::take(&mut self.search));
    }

    /// Apply an input-line edit and schedule the debounced search.
    pub fn edit_search<F>(&mut self, edit: F, now: Instant)
    where
        F: FnOnce(SearchState) -> SearchState,
    {
        let before = self.search.text().to_string();
        self.search = edit(std::mem::take(&mut self.search));
        if self.search.is_typing() && self.search.text() != before {
            let term = SearchQuery::new(self.search.text());
            self.debounce.schedule((self.screen, term), now);
        }
    }

    /// Commit the typed query immediately.
    pub fn submit_search(&mut self) {
        self.debounce.cancel();
        self.search = search_input_handler::submit_search(std::mem::take(&mut self.search));
        let term = match &self.search {
            SearchState::Active { query } => Some(query.clone()),
            _ => None,
        };
        self.apply_term(self.screen, term);
    }

    /// Clear the search on the current screen.
    pub fn cancel_search(&mut self) {
        self.debounce.cancel();
        self.search = search_input_handler::cancel_search(std::mem::take(&mut self.search));
        self.apply_term(self.screen, None);
    }

    fn apply_term(&mut self, screen: Screen, term: Option<SearchQuery>) {
        if self.terms[screen.index()] == term {
            return;
        }
        debug!(
            screen = screen.title(),
            term = term.as_ref().map(SearchQuery::as_str),
            "search applied"
        );
        self.terms[screen.index()] = term;
        self.refresh(screen);
    }

    // ===== Filters =====

    /// Advance the meal event sort order.
    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.refresh(Screen::MealEvents);
    }

    /// Show or hide events dated before today.
    pub fn toggle_hide_past(&mut self) {
        self.hide_past = !self.hide_past;
        self.refresh(Screen::MealEvents);
    }

    /// Move the wall clock.
    ///
    /// Returns true when the calendar day changed, which re-runs the
    /// past-event filter.
    pub fn set_clock(&mut self, clock: DateTime<Utc>) -> bool {
        let before = self.today();
        self.clock = clock;
        let rolled_over = self.today() != before;
        if rolled_over {
            self.refresh(Screen::MealEvents);
        }
        rolled_over
    }

    // ===== Time =====

    /// Release a due search and hide an expired notice.
    ///
    /// Returns true when anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some((screen, term)) = self.debounce.poll(now) {
            self.apply_term(screen, term);
            changed = true;
        }
        changed | self.notices.expire(now)
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debounce.deadline(), self.notices.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ===== Catalog =====

    /// Replace the catalog after a reload.
    ///
    /// The session follows the snapshot's credentials. Scroll positions
    /// are kept and clamped to the new lists.
    pub fn replace_catalog(&mut self, catalog: CatalogSnapshot) {
        match &catalog.auth {
            Some(auth) if !self.session.holds(auth) => self.session.sign_in(auth.clone()),
            Some(_) => {}
            None => self.session.sign_out(),
        }
        self.catalog = catalog;
        self.refresh_all();
        let session = self.session.view();
        self.pages.retain(|page| match page {
            Page::Profile => session.is_signed_in(),
            Page::Admin => session.is_admin(),
            _ => true,
        });
        info!(records = self.catalog.record_count(), "catalog replaced");
    }

    // ===== Selection =====

    /// Position of the selected meal event in the listed events.
    pub fn selected_event(&self) -> usize {
        self.selected_event
    }

    /// Move the selection by `delta`: on the dashboard when it is open,
    /// otherwise on the meal event list, scrolling it into view.
    pub fn move_selection(&mut self, delta: isize) {
        if let Some(Page::Dashboard { shown, selected }) = self.pages.last_mut() {
            let listed = (*shown).min(upcoming_events(&self.catalog.meal_events, self.clock).len());
            *selected = step(*selected, delta, listed);
            return;
        }
        if self.page().is_some() || self.screen != Screen::MealEvents {
            return;
        }
        let pane = &self.panes[Screen::MealEvents.index()];
        self.selected_event = step(self.selected_event, delta, pane.len());
        pane.reveal(self.selected_event);
    }

    // ===== Pages =====

    /// The page drawn in place of the list, if any.
    pub fn page(&self) -> Option<Page> {
        self.pages.last().copied()
    }

    /// Open the dashboard of upcoming events.
    pub fn open_dashboard(&mut self) {
        self.push_page(Page::dashboard());
    }

    /// Open the signed-in user's profile.
    pub fn open_profile(&mut self) -> Result<(), PageDenied> {
        if !self.session.view().is_signed_in() {
            return Err(PageDenied::SignedOut);
        }
        self.push_page(Page::Profile);
        Ok(())
    }

    /// Open the admin overview. Only administrators may.
    pub fn open_admin(&mut self) -> Result<(), PageDenied> {
        let session = self.session.view();
        if !session.is_signed_in() {
            return Err(PageDenied::SignedOut);
        }
        if !session.is_admin() {
            return Err(PageDenied::NotAdmin);
        }
        self.push_page(Page::Admin);
        Ok(())
    }

    /// Open the detail page of the selected event.
    ///
    /// The dashboard's selection wins while it is open; otherwise the meal
    /// event list's. Returns false when nothing is selected.
    pub fn open_selected(&mut self) -> bool {
        let id = match self.page() {
            Some(Page::Dashboard { shown, selected }) if selected < shown => {
                upcoming_events(&self.catalog.meal_events, self.clock)
                    .get(selected)
                    .map(|e| e.id)
            }
            None if self.screen == Screen::MealEvents => self
                .listed_events()
                .get(self.selected_event)
                .map(|e| e.id),
            _ => None,
        };
        match id {
            Some(id) => {
                self.push_page(Page::EventDetail(id));
                true
            }
            None => false,
        }
    }

    /// List one more batch of upcoming events on the dashboard.
    ///
    /// Returns false when every upcoming event is already listed.
    pub fn show_more(&mut self) -> bool {
        let upcoming = upcoming_events(&self.catalog.meal_events, self.clock).len();
        match self.pages.last_mut() {
            Some(Page::Dashboard { shown, .. }) if *shown < upcoming => {
                *shown += DASHBOARD_BATCH;
                true
            }
            _ => false,
        }
    }

    /// Return to the page or list below. Returns false when no page was open.
    pub fn close_page(&mut self) -> bool {
        self.pages.pop().is_some()
    }

    /// The event of an open detail page, if it still exists.
    pub fn detail_event(&self, id: MealEventId) -> Option<&MealEvent> {
        self.catalog.meal_events.iter().find(|e| e.id == id)
    }

    /// Upcoming events as listed on the dashboard.
    pub fn upcoming_events(&self) -> Vec<&MealEvent> {
        upcoming_events(&self.catalog.meal_events, self.clock)
    }

    /// Figures for the admin overview.
    pub fn admin_summary(&self) -> AdminSummary<'_> {
        AdminSummary::compute(&self.catalog, self.today(), self.zone)
    }

    fn push_page(&mut self, page: Page) {
        debug!(page = page.title(), "page opened");
        // reopening the page on top is a no-op
        if self.page() != Some(page) {
            self.pages.push(page);
        }
    }

    fn refresh_all(&mut self) {
        for screen in Screen::ALL {
            self.refresh(screen);
        }
    }

    fn refresh(&mut self, screen: Screen) {
        let term = self.terms[screen.index()].as_ref();
        let indices = match screen {
            Screen::MealEvents => self.event_query().apply(&self.catalog.meal_events, self.today()),
            Screen::MenuItems => filter_menu_items(&self.catalog.menu_items, term),
            Screen::MenuSets => filter_menu_sets(&self.catalog.menu_sets, term),
        };
        debug!(screen = screen.title(), listed = indices.len(), "list refreshed");
        if screen == Screen::MealEvents {
            self.selected_event = self.selected_event.min(indices.len().saturating_sub(1));
        }
        self.panes[screen.index()].set_indices(indices);
    }
}

/// `current + delta`, clamped to `0..len`.
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
