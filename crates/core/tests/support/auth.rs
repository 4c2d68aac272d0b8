//! Fake `AuthProvider` backed by a broadcast channel

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use profilemap_core::{AuthProvider, AuthSubscription};
use profilemap_domain::{AuthChange, AuthUser, ProfileMapError, Result as DomainResult, Session};
use tokio::sync::broadcast;

pub const PASSWORD: &str = "correct horse battery staple";

/// In-memory auth backend.
///
/// Accepts [`PASSWORD`] for any email. Sign-in/out publish the same
/// notifications a real backend would.
#[derive(Clone)]
pub struct FakeAuthProvider {
    session: Arc<Mutex<Option<Session>>>,
    changes: broadcast::Sender<AuthChange>,
    fail_sign_out: Arc<Mutex<bool>>,
}

impl Default for FakeAuthProvider {
    fn default() -> Self {
        let (changes, _) = broadcast::channel(16);
        Self { session: Arc::default(), changes, fail_sign_out: Arc::default() }
    }
}

impl FakeAuthProvider {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: &str) -> Self {
        let provider = Self::default();
        *provider.session.lock().unwrap() = Some(session(user_id));
        provider
    }

    /// Publish a change as if it came from another tab or a token refresh.
    pub fn emit(&self, change: AuthChange) {
        *self.session.lock().unwrap() = change.session.clone();
        let _ = self.changes.send(change);
    }

    pub fn fail_sign_out(&self) {
        *self.fail_sign_out.lock().unwrap() = true;
    }

    pub fn subscriber_count(&self) -> usize {
        self.changes.receiver_count()
    }
}

pub fn session(user_id: &str) -> Session {
    Session {
        access_token: format!("token-{user_id}"),
        refresh_token: None,
        expires_at: None,
        user: AuthUser { id: user_id.to_string(), email: Some(format!("{user_id}@example.com")) },
    }
}

#[async_trait]
impl AuthProvider for FakeAuthProvider {
    async fn get_session(&self) -> DomainResult<Option<Session>> {
        Ok(self.session.lock().unwrap().clone())
    }

    fn subscribe(&self) -> AuthSubscription {
        AuthSubscription::new(self.changes.subscribe())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> DomainResult<Session> {
        if password != PASSWORD {
            return Err(ProfileMapError::RemoteOperation("Invalid login credentials".into()));
        }
        let session = session(email.split('@').next().unwrap_or(email));
        self.emit(AuthChange::signed_in(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> DomainResult<()> {
        self.emit(AuthChange::signed_out());
        if *self.fail_sign_out.lock().unwrap() {
            return Err(ProfileMapError::Network("connection reset".into()));
        }
        Ok(())
    }

    async fn get_user(&self) -> DomainResult<AuthUser> {
        self.session
            .lock()
            .unwrap()
            .as_ref()
            .map(|session| session.user.clone())
            .ok_or_else(|| ProfileMapError::RemoteOperation("invalid JWT".into()))
    }
}
