//! Menu items and the sets that group them.

use super::identifiers::{MenuItemId, MenuSetId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item id.
    pub id: MenuItemId,
    /// Dish name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Picture, if the service has one.
    #[serde(default)]
    pub image_url: String,
    /// Mean of all comment ratings, 0.0 when unrated.
    #[serde(default)]
    pub average_rating: f64,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Membership of a menu item in a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSetItem {
    /// Membership id.
    pub id: u64,
    /// The item.
    pub menu_item_id: MenuItemId,
    /// The set.
    pub menu_set_id: MenuSetId,
    /// The item itself.
    pub menu_item: MenuItem,
}

/// A named group of menu items offered together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSet {
    /// Set id.
    pub id: MenuSetId,
    /// Set name.
    pub menu_set_name: String,
    /// Short description.
    #[serde(default)]
    pub menu_set_description: String,
    /// Items in listed order.
    #[serde(default)]
    pub menu_set_items: Vec<MenuSetItem>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MenuSet {
    /// Names of the items in this set, in listed order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.menu_set_items.iter().map(|i| i.menu_item.name.as_str())
    }
}
