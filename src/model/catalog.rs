//! Snapshot of everything the client displays.
//!
//! A snapshot is the JSON document assembled from the service's list
//! endpoints (`/meals`, `/menu-items`, `/menu-sets`, `/meal-requests`,
//! `/notifications`) plus the sign-in response. Every section is optional.

use super::meal_event::MealEvent;
use super::menu::{MenuItem, MenuSet};
use super::notification::Notification;
use super::request::{MealRequest, MenuItemComment};
use super::user::AuthResponse;
use serde::{Deserialize, Serialize};

/// Data loaded from a snapshot file or stdin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSnapshot {
    /// Sign-in response; absent for anonymous browsing.
    #[serde(default)]
    pub auth: Option<AuthResponse>,
    /// Meal events, in service order.
    #[serde(default)]
    pub meal_events: Vec<MealEvent>,
    /// All menu items.
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    /// All menu sets.
    #[serde(default)]
    pub menu_sets: Vec<MenuSet>,
    /// Requests visible to the user.
    #[serde(default)]
    pub meal_requests: Vec<MealRequest>,
    /// Comments on menu items.
    #[serde(default)]
    pub comments: Vec<MenuItemComment>,
    /// The user's notifications.
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl CatalogSnapshot {
    /// Total number of records across all sections.
    pub fn record_count(&self) -> usize {
        self.meal_events.len()
            + self.menu_items.len()
            + self.menu_sets.len()
            + self.meal_requests.len()
            + self.comments.len()
            + self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_empty_snapshot() {
        let snap: CatalogSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snap, CatalogSnapshot::default());
        assert_eq!(snap.record_count(), 0);
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = serde_json::from_str::<CatalogSnapshot>(r#"{"orders": []}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }
}
