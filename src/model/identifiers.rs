//! Numeric identifier newtypes.
//!
//! The service hands out integer ids for every resource. Wrapping them keeps a
//! menu item id from being passed where a meal event id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw id.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// User account id.
    UserId
);
numeric_id!(
    /// Menu item id.
    MenuItemId
);
numeric_id!(
    /// Menu set id.
    MenuSetId
);
numeric_id!(
    /// Meal event id.
    MealEventId
);
numeric_id!(
    /// Delivery address id.
    AddressId
);
numeric_id!(
    /// Meal request id.
    MealRequestId
);
numeric_id!(
    /// Comment id.
    CommentId
);
numeric_id!(
    /// Notification id.
    NotificationId
);
