//! User accounts and authentication payloads.

use super::identifiers::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages events, menus and users.
    Admin,
    /// Orders meals for themselves.
    #[default]
    Employee,
    /// Oversees a department's requests.
    Manager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::Manager => "manager",
        };
        f.write_str(label)
    }
}

/// A user account as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Account id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Sign-in name.
    pub username: String,
    /// Department the user belongs to.
    #[serde(default)]
    pub department: String,
    /// Employee number.
    #[serde(default)]
    pub employee_id: String,
    /// Access level.
    #[serde(default)]
    pub role: Role,
    /// Whether notifications are sent.
    #[serde(default)]
    pub notification_enabled: bool,
    /// Disabled accounts cannot sign in.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Response of a successful sign-in.
///
/// `Debug` is implemented by hand so tokens never reach the log file.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for API calls.
    pub access_token: String,
    /// Token used to obtain a new access token.
    pub refresh_token: String,
    /// The signed-in account.
    pub user: User,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Error body returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable code, e.g. `UNAUTHORIZED`.
    #[serde(default)]
    pub code: String,
    /// Extra context.
    #[serde(default)]
    pub details: String,
    /// Id for support requests.
    #[serde(default)]
    pub request_id: String,
}

impl ErrorResponse {
    /// `error`, prefixed with `code` when the service sent one.
    pub fn summary(&self) -> String {
        if self.code.is_empty() {
            self.error.clone()
        } else {
            format!("{} ({})", self.error, self.code)
        }
    }
}
