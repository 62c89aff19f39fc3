//! Domain model types (pure).
//!
//! Serde types mirroring the catering service's payloads, plus the
//! application's error and key-action enums.

pub mod calendar;
pub mod catalog;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod meal_event;
pub mod menu;
pub mod notification;
pub mod request;
pub mod user;

// Re-export for convenience
pub use calendar::{DayZone, UnknownDayZone};
pub use catalog::CatalogSnapshot;
pub use error::{AppError, InputError};
pub use identifiers::{
    AddressId, CommentId, MealEventId, MealRequestId, MenuItemId, MenuSetId, NotificationId,
    UserId,
};
pub use key_action::KeyAction;
pub use meal_event::{EventAddress, MealEvent, MealEventAddress, MealEventSet};
pub use menu::{MenuItem, MenuSet, MenuSetItem};
pub use notification::{unread_count, Notification, NotificationKind};
pub use request::{MealRequest, MealRequestItem, MenuItemComment};
pub use user::{AuthResponse, ErrorResponse, Role, User};
