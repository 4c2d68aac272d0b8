//! Session types mirrored from the auth backend
//!
//! The application only needs to know whether a session exists and who owns
//! it; token handling stays in the infra adapter.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_label_conversions;

/// Authenticated user as reported by the auth backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Proof that the current user is authenticated
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AuthUser,
}

impl Session {
    /// True when the session expires within `margin_secs` from now.
    pub fn expires_within(&self, margin_secs: i64) -> bool {
        self.expires_at
            .map(|expires_at| Utc::now() + chrono::Duration::seconds(margin_secs) >= expires_at)
            .unwrap_or(false)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[redacted]")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[redacted]"))
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

/// Kind of auth state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

impl_domain_label_conversions!(AuthEvent {
    SignedIn => "signed_in",
    SignedOut => "signed_out",
    TokenRefreshed => "token_refreshed",
});

/// Notification delivered to auth subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthChange {
    pub event: AuthEvent,
    pub session: Option<Session>,
}

impl AuthChange {
    pub fn signed_in(session: Session) -> Self {
        Self { event: AuthEvent::SignedIn, session: Some(session) }
    }

    pub fn signed_out() -> Self {
        Self { event: AuthEvent::SignedOut, session: None }
    }

    pub fn token_refreshed(session: Session) -> Self {
        Self { event: AuthEvent::TokenRefreshed, session: Some(session) }
    }
}
