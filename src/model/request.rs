//! Meal requests placed by users and comments left on menu items.

use super::identifiers::{
    AddressId, CommentId, MealEventId, MealRequestId, MenuItemId, MenuSetId, UserId,
};
use super::menu::MenuItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of a meal request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRequestItem {
    /// Line id.
    pub id: u64,
    /// Owning request.
    pub meal_request_id: MealRequestId,
    /// Ordered item.
    pub menu_item_id: MenuItemId,
    /// Set the item was ordered from.
    pub menu_set_id: MenuSetId,
    /// Portions.
    pub quantity: u32,
    /// Unselected lines are kept but not served.
    #[serde(default)]
    pub is_selected: bool,
    /// Dietary notes.
    #[serde(default)]
    pub notes: String,
    /// The ordered item.
    pub menu_item: MenuItem,
}

/// A user's order for one meal event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRequest {
    /// Request id.
    pub id: MealRequestId,
    /// Who ordered.
    pub user_id: UserId,
    /// Event ordered for.
    pub meal_event_id: MealEventId,
    /// Chosen set.
    pub menu_set_id: MenuSetId,
    /// Delivery location.
    pub event_address_id: AddressId,
    /// Ordered lines.
    #[serde(default)]
    pub request_items: Vec<MealRequestItem>,
    /// Set once the caterer confirms.
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MealRequest {
    /// Whether the caterer has confirmed the request.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }

    /// Total quantity across selected items.
    pub fn selected_quantity(&self) -> u32 {
        self.request_items
            .iter()
            .filter(|i| i.is_selected)
            .map(|i| i.quantity)
            .sum()
    }
}

/// A rating and comment on a menu item, optionally replying to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemComment {
    /// Comment id.
    pub id: CommentId,
    /// Item commented on.
    pub menu_item_id: MenuItemId,
    /// Event the item was served at.
    pub meal_event_id: MealEventId,
    /// Author.
    pub user_id: UserId,
    /// Text.
    pub comment: String,
    /// 1..=5
    #[serde(default)]
    pub rating: u8,
    /// Comment this one replies to.
    #[serde(default)]
    pub parent_id: Option<CommentId>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MenuItemComment {
    /// Whether this comment replies to another.
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}
