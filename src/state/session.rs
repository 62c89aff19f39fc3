//! Signed-in session context.
//!
//! The application root owns the one [`Session`]. Everything below it reads
//! through a [`SessionView`], a `Copy` borrow that cannot change who is
//! signed in. Tokens stay in memory and never reach the log.

use crate::model::{AuthResponse, Role, User};
use tracing::info;

/// Name shown when nobody is signed in.
pub const GUEST_NAME: &str = "Guest";

/// Authentication state of the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    auth: Option<AuthResponse>,
}

impl Session {
    /// Anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session signed in with `auth`.
    pub fn from_auth(auth: AuthResponse) -> Self {
        let mut session = Self::anonymous();
        session.sign_in(auth);
        session
    }

    /// Replace the current credentials.
    pub fn sign_in(&mut self, auth: AuthResponse) {
        info!(
            user = %auth.user.username,
            role = %auth.user.role,
            "signed in"
        );
        self.auth = Some(auth);
    }

    /// Drop credentials and user.
    pub fn sign_out(&mut self) {
        if let Some(auth) = self.auth.take() {
            info!(user = %auth.user.username, "signed out");
        }
    }

    /// Whether the session already holds exactly `auth`, tokens included.
    pub fn holds(&self, auth: &AuthResponse) -> bool {
        self.auth.as_ref() == Some(auth)
    }

    /// Read-only view for subordinate components.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            user: self.auth.as_ref().map(|a| &a.user),
        }
    }
}

/// Read-only view of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionView<'a> {
    user: Option<&'a User>,
}

impl<'a> SessionView<'a> {
    /// Signed-in user.
    pub fn user(&self) -> Option<&'a User> {
        self.user
    }

    /// Whether someone is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.user.is_some_and(|u| u.role == Role::Admin)
    }

    /// Name for the header.
    pub fn display_name(&self) -> &'a str {
        self.user.map_or(GUEST_NAME, |u| u.name.as_str())
    }
}
