//! Filter and sort pipelines for the three list screens.
//!
//! Pipelines return indices into the catalog slices so the lists never
//! clone records.

use crate::model::{DayZone, MealEvent, MenuItem, MenuSet};
use crate::state::SearchQuery;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ===== SortOrder =====

/// Ordering of the meal event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Earliest event first.
    #[default]
    DateAsc,
    /// Latest event first.
    DateDesc,
    /// Name, A to Z.
    NameAsc,
    /// Name, Z to A.
    NameDesc,
}

impl SortOrder {
    /// Next order in the cycle used by the sort key.
    pub fn next(self) -> Self {
        match self {
            SortOrder::DateAsc => SortOrder::DateDesc,
            SortOrder::DateDesc => SortOrder::NameAsc,
            SortOrder::NameAsc => SortOrder::NameDesc,
            SortOrder::NameDesc => SortOrder::DateAsc,
        }
    }

    /// Label shown in the footer.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::DateAsc => "Date (Earliest First)",
            SortOrder::DateDesc => "Date (Latest First)",
            SortOrder::NameAsc => "Name (A-Z)",
            SortOrder::NameDesc => "Name (Z-A)",
        }
    }

    fn compare(self, a: &MealEvent, b: &MealEvent) -> Ordering {
        match self {
            SortOrder::DateAsc => a.event_date.cmp(&b.event_date),
            SortOrder::DateDesc => b.event_date.cmp(&a.event_date),
            SortOrder::NameAsc => compare_names(&a.name, &b.name),
            SortOrder::NameDesc => compare_names(&b.name, &a.name),
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::DateAsc => "date-asc",
            SortOrder::DateDesc => "date-desc",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
        };
        f.write_str(s)
    }
}

/// Unrecognized sort order name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order '{0}' (expected date-asc, date-desc, name-asc or name-desc)")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date-asc" => Ok(SortOrder::DateAsc),
            "date-desc" => Ok(SortOrder::DateDesc),
            "name-asc" => Ok(SortOrder::NameAsc),
            "name-desc" => Ok(SortOrder::NameDesc),
            _ => Err(UnknownSortOrder(s.to_string())),
        }
    }
}

// ===== EventQuery =====

/// Search, past-event filter and sort order for the meal event list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    /// Applied search, if any.
    pub search: Option<SearchQuery>,
    /// Display order.
    pub sort: SortOrder,
    /// Drop events whose day is before today.
    pub hide_past: bool,
    /// Calendar the past filter judges days on.
    pub zone: DayZone,
}

impl EventQuery {
    /// Whether `event` passes the search and past filters.
    pub fn accepts(&self, event: &MealEvent, today: NaiveDate) -> bool {
        let matches_search = self
            .search
            .as_ref()
            .is_none_or(|q| q.matches_any(&[event.name.as_str(), event.description.as_str()]));
        matches_search && !(self.hide_past && event.is_past_on(today, self.zone))
    }

    /// Indices of the events to list, in display order.
    ///
    /// The sort is stable: events that compare equal keep catalog order.
    pub fn apply(&self, events: &[MealEvent], today: NaiveDate) -> Vec<usize> {
        let mut indices: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| self.accepts(e, today))
            .map(|(i, _)| i)
            .collect();
        indices.sort_by(|&a, &b| self.sort.compare(&events[a], &events[b]));
        indices
    }
}

/// Indices of the menu items whose name or description match `search`.
pub fn filter_menu_items(items: &[MenuItem], search: Option<&SearchQuery>) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            search.is_none_or(|q| q.matches_any(&[item.name.as_str(), item.description.as_str()]))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the menu sets whose name or description match `search`.
pub fn filter_menu_sets(sets: &[MenuSet], search: Option<&SearchQuery>) -> Vec<usize> {
    sets.iter()
        .enumerate()
        .filter(|(_, set)| {
            search.is_none_or(|q| {
                q.matches_any(&[set.menu_set_name.as_str(), set.menu_set_description.as_str()])
            })
        })
        .map(|(i, _)| i)
        .collect()
}
