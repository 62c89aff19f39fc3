//! Notifications delivered to a user.

use super::identifiers::{NotificationId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    /// Upcoming cutoff or event.
    Reminder,
    /// A request was confirmed.
    Confirmation,
    /// Message from an administrator.
    AdminMessage,
    /// Change to an event.
    EventInfo,
}

/// A notification addressed to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification id.
    pub id: NotificationId,
    /// Recipient.
    pub user_id: UserId,
    /// Kind, sent as `type`.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
    /// Opaque data for the kind.
    #[serde(default)]
    pub payload: String,
    /// Whether the user has read it.
    #[serde(default)]
    pub read: bool,
    /// Whether it reached the user.
    #[serde(default)]
    pub delivered: bool,
    /// When it was read.
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
    /// When it was delivered.
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Number of notifications not yet read.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
