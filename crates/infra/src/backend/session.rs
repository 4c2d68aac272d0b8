//! Session shared between the backend adapters

use std::sync::Arc;

use profilemap_domain::{AuthChange, Session};
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

/// Capacity of the auth-change channel; slow subscribers skip to the newest
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Current session plus the auth-change broadcast
#[derive(Clone)]
pub struct SessionState {
    current: Arc<RwLock<Option<Session>>>,
    changes: broadcast::Sender<AuthChange>,
}

impl Default for SessionState {
    fn default() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { current: Arc::new(RwLock::new(None)), changes }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|session| session.access_token.clone())
    }

    /// Store the session carried by `change` and notify subscribers.
    pub async fn apply(&self, change: AuthChange) {
        *self.current.write().await = change.session.clone();
        debug!(event = %change.event, subscribers = self.changes.receiver_count(), "auth change");
        // No subscribers is fine.
        let _ = self.changes.send(change);
    }

    pub async fn clear(&self) {
        self.apply(AuthChange::signed_out()).await;
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.changes.subscribe()
    }
}
