//! REST adapter for the auth service

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use profilemap_core::{AuthProvider, AuthSubscription};
use profilemap_domain::constants::SESSION_REFRESH_MARGIN_SECS;
use profilemap_domain::{AuthChange, AuthUser, ProfileMapError, Result, Session};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::client::BackendClient;
use super::response::{decode, ensure_success};

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

/// Token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    /// Unix seconds
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| self.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Auth service over the backend's REST interface
///
/// Sessions live in the shared [`super::SessionState`], so the table adapter
/// built from the same client sends the signed-in user's token.
#[derive(Clone)]
pub struct RestAuthProvider {
    client: BackendClient,
}

impl RestAuthProvider {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn request_token<B: Serialize + Sync>(&self, grant_type: &str, body: &B) -> Result<Session> {
        let url = self.client.auth_url("token")?;
        let request =
            self.client.anonymous(Method::POST, url).query(&[("grant_type", grant_type)]).json(body);
        let token: TokenResponse = decode(self.client.http().send(request).await?).await?;
        Ok(token.into_session())
    }

    async fn revoke(&self, token: &str) -> Result<()> {
        let url = self.client.auth_url("logout")?;
        let request = self.client.with_bearer(Method::POST, url, token);
        ensure_success(self.client.http().send(request).await?).await?;
        Ok(())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session> {
        let session = self.request_token("refresh_token", &RefreshGrant { refresh_token }).await?;
        self.client.session().apply(AuthChange::token_refreshed(session.clone())).await;
        info!(user_id = %session.user.id, "session refreshed");
        Ok(session)
    }
}

#[async_trait]
impl AuthProvider for RestAuthProvider {
    /// Current session, refreshed first when it is about to expire.
    ///
    /// A refresh the backend rejects ends the session; a refresh that fails
    /// to reach the backend is reported and the session kept.
    #[instrument(skip(self))]
    async fn get_session(&self) -> Result<Option<Session>> {
        let Some(session) = self.client.session().current().await else {
            return Ok(None);
        };
        if !session.expires_within(SESSION_REFRESH_MARGIN_SECS) {
            return Ok(Some(session));
        }
        let Some(refresh_token) = session.refresh_token.clone() else {
            return Ok(Some(session));
        };

        match self.refresh(&refresh_token).await {
            Ok(refreshed) => Ok(Some(refreshed)),
            Err(err @ (ProfileMapError::RemoteOperation(_) | ProfileMapError::AuthRequired(_))) => {
                warn!(error = %err, "session refresh rejected, signing out");
                self.client.session().clear().await;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn subscribe(&self) -> AuthSubscription {
        AuthSubscription::new(self.client.session().subscribe())
    }

    #[instrument(skip(self, password))]
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let session = self.request_token("password", &PasswordGrant { email, password }).await?;
        self.client.session().apply(AuthChange::signed_in(session.clone())).await;
        info!(user_id = %session.user.id, "signed in");
        Ok(session)
    }

    /// The local session is cleared even when the backend call fails.
    #[instrument(skip(self))]
    async fn sign_out(&self) -> Result<()> {
        let Some(token) = self.client.session().access_token().await else {
            self.client.session().clear().await;
            return Ok(());
        };

        let remote = self.revoke(&token).await;
        self.client.session().clear().await;
        match &remote {
            Ok(()) => info!("signed out"),
            Err(err) => warn!(error = %err, "remote sign-out failed, local session cleared"),
        }
        remote
    }

    #[instrument(skip(self))]
    async fn get_user(&self) -> Result<AuthUser> {
        let token = self
            .client
            .session()
            .access_token()
            .await
            .ok_or_else(|| ProfileMapError::AuthRequired("no active session".to_string()))?;
        let url = self.client.auth_url("user")?;
        let request = self.client.with_bearer(Method::GET, url, &token);
        decode(self.client.http().send(request).await?).await
    }
}
