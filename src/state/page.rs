//! Pages opened over the list screens: the dashboard, one event's detail,
//! the user's profile and the admin overview.
//!
//! Pages stack: opening one pushes it, `Esc` returns to the one below.

use crate::model::{
    CatalogSnapshot, DayZone, MealEvent, MealEventId, MealRequest, MenuItemComment, MenuSet,
};
use chrono::{DateTime, Days, NaiveDate, Utc};
use thiserror::Error;

/// Upcoming events shown on the dashboard at first and added per "show more".
pub const DASHBOARD_BATCH: usize = 3;
/// Rows in each "recent" list of the admin overview.
pub const RECENT_LIMIT: usize = 5;
/// Days ahead counted as upcoming on the admin overview.
pub const ADMIN_WINDOW_DAYS: u64 = 30;

/// A page drawn in place of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Upcoming events, `shown` at a time, with one of them selected.
    Dashboard {
        /// How many upcoming events are listed.
        shown: usize,
        /// Position of the highlighted event.
        selected: usize,
    },
    /// Everything known about one meal event.
    EventDetail(MealEventId),
    /// The signed-in user's account.
    Profile,
    /// Catalog figures for administrators.
    Admin,
}

impl Page {
    /// Dashboard with the first batch shown.
    pub fn dashboard() -> Self {
        Page::Dashboard {
            shown: DASHBOARD_BATCH,
            selected: 0,
        }
    }

    /// Block title.
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard { .. } => "Dashboard",
            Page::EventDetail(_) => "Meal Event",
            Page::Profile => "Profile",
            Page::Admin => "Admin Dashboard",
        }
    }
}

/// Why a page was not opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageDenied {
    /// The page needs a signed-in user.
    #[error("Sign in to view this page")]
    SignedOut,
    /// The page needs the admin role.
    #[error("Admin access required")]
    NotAdmin,
}

/// Events dated after `now`, soonest first.
pub fn upcoming_events(events: &[MealEvent], now: DateTime<Utc>) -> Vec<&MealEvent> {
    let mut upcoming: Vec<&MealEvent> = events.iter().filter(|e| e.event_date > now).collect();
    upcoming.sort_by_key(|e| e.event_date);
    upcoming
}

/// Request totals for one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTally {
    /// Requests placed.
    pub requests: usize,
    /// Requests the caterer confirmed.
    pub confirmed: usize,
    /// Selected item quantity over all requests.
    pub quantity: u32,
}

impl RequestTally {
    /// Tally the requests placed for `event`.
    pub fn for_event(requests: &[MealRequest], event: MealEventId) -> Self {
        requests
            .iter()
            .filter(|r| r.meal_event_id == event)
            .fold(Self::default(), |tally, r| Self {
                requests: tally.requests + 1,
                confirmed: tally.confirmed + usize::from(r.is_confirmed()),
                quantity: tally.quantity + r.selected_quantity(),
            })
    }
}

/// Comments left during `event`, each followed by its replies.
pub fn event_comments(comments: &[MenuItemComment], event: MealEventId) -> Vec<&MenuItemComment> {
    let of_event: Vec<&MenuItemComment> =
        comments.iter().filter(|c| c.meal_event_id == event).collect();
    let mut threaded = Vec::with_capacity(of_event.len());
    for root in of_event.iter().filter(|c| !c.is_reply()) {
        threaded.push(*root);
        threaded.extend(of_event.iter().filter(|c| c.parent_id == Some(root.id)));
    }
    // replies whose parent is missing still show up, at the end
    threaded.extend(
        of_event
            .iter()
            .filter(|c| c.parent_id.is_some_and(|p| !of_event.iter().any(|o| o.id == p))),
    );
    threaded
}

/// Figures on the admin overview.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSummary<'a> {
    /// Events from today through the next [`ADMIN_WINDOW_DAYS`] days, in catalog order.
    pub upcoming: Vec<&'a MealEvent>,
    /// Menu items in the catalog.
    pub menu_items: usize,
    /// Menu sets in the catalog.
    pub menu_sets: usize,
    /// First menu sets of the catalog.
    pub recent_sets: Vec<&'a MenuSet>,
}

impl<'a> AdminSummary<'a> {
    /// Summarize `catalog` as seen on `today` in `zone`.
    pub fn compute(catalog: &'a CatalogSnapshot, today: NaiveDate, zone: DayZone) -> Self {
        let last = today
            .checked_add_days(Days::new(ADMIN_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);
        let upcoming = catalog
            .meal_events
            .iter()
            .filter(|e| (today..=last).contains(&e.event_day_in(zone)))
            .collect();
        Self {
            upcoming,
            menu_items: catalog.menu_items.len(),
            menu_sets: catalog.menu_sets.len(),
            recent_sets: catalog.menu_sets.iter().take(RECENT_LIMIT).collect(),
        }
    }

    /// First upcoming events.
    pub fn recent_events(&self) -> &[&'a MealEvent] {
        &self.upcoming[..self.upcoming.len().min(RECENT_LIMIT)]
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
