//! Scoped auth-change subscription

use profilemap_domain::AuthChange;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::{debug, warn};

/// Receives auth changes until dropped
///
/// Dropping the subscription (or the owner being torn down on any path)
/// unregisters it from the provider.
pub struct AuthSubscription {
    receiver: broadcast::Receiver<AuthChange>,
}

impl AuthSubscription {
    pub fn new(receiver: broadcast::Receiver<AuthChange>) -> Self {
        debug!("auth subscription registered");
        Self { receiver }
    }

    /// Next pending change without waiting.
    ///
    /// Skipped notifications after a lag are logged; only the newest state
    /// matters to subscribers.
    pub fn try_next(&mut self) -> Option<AuthChange> {
        loop {
            match self.receiver.try_recv() {
                Ok(change) => return Some(change),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "auth subscription lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Wait for the next change; `None` once the provider is gone.
    pub async fn next(&mut self) -> Option<AuthChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) => return Some(change),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "auth subscription lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        debug!("auth subscription released");
    }
}
