//! Port interfaces for the auth backend

use async_trait::async_trait;
use profilemap_domain::{AuthUser, Result, Session};

use super::subscription::AuthSubscription;

/// Session-issuing authentication backend
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Current session, or `None` when signed out
    async fn get_session(&self) -> Result<Option<Session>>;

    /// Register for auth state changes; dropping the subscription releases it
    fn subscribe(&self) -> AuthSubscription;

    /// Password sign-in
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session>;

    /// End the session
    async fn sign_out(&self) -> Result<()>;

    /// The user the backend currently accepts, verified remotely
    async fn get_user(&self) -> Result<AuthUser>;
}
