//! Application shell: tabs, session mirror and the admin gate

use profilemap_domain::{impl_domain_label_conversions, AuthChange, AuthEvent, Result, Session};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::ports::AuthProvider;
use super::subscription::AuthSubscription;

/// Navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Profiles,
    Admin,
}

impl_domain_label_conversions!(Tab {
    Profiles => "profiles",
    Admin => "admin",
});

/// What the shell currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Profiles,
    Admin,
    /// Admin tab selected without a session
    AuthGate,
}

/// Session-gated two-tab shell
///
/// Mirrors whether a session exists through a scoped subscription; the
/// subscription is released by [`AppShell::stop`] or when the shell drops.
#[derive(Default)]
pub struct AppShell {
    tab: Tab,
    authenticated: bool,
    subscription: Option<AuthSubscription>,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to auth changes, then read the current session.
    ///
    /// Subscribing first means a sign-in that lands between the two calls is
    /// still seen.
    ///
    /// # Errors
    /// The provider's session error; the subscription stays registered and
    /// the shell starts signed out.
    pub async fn start(&mut self, auth: &dyn AuthProvider) -> Result<bool> {
        self.subscription = Some(auth.subscribe());
        let session = auth.get_session().await.inspect_err(|err| {
            warn!(error = %err, "could not read session at startup");
            self.authenticated = false;
        })?;
        self.authenticated = session.is_some();
        info!(authenticated = self.authenticated, "shell started");
        Ok(self.authenticated)
    }

    pub fn handle_auth_change(&mut self, change: &AuthChange) {
        self.authenticated = match change.event {
            AuthEvent::SignedOut => false,
            AuthEvent::SignedIn | AuthEvent::TokenRefreshed => change.session.is_some(),
        };
        info!(event = %change.event, authenticated = self.authenticated, "auth state changed");
    }

    /// Apply every pending notification without waiting.
    ///
    /// Returns how many were applied.
    pub fn pump_auth_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(change) = self.subscription.as_mut().and_then(AuthSubscription::try_next) {
            self.handle_auth_change(&change);
            applied += 1;
        }
        applied
    }

    /// Wait for one notification and apply it.
    ///
    /// `None` when not started or when the provider has gone away.
    pub async fn next_auth_change(&mut self) -> Option<AuthChange> {
        let change = self.subscription.as_mut()?.next().await?;
        self.handle_auth_change(&change);
        Some(change)
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn screen(&self) -> Screen {
        match (self.tab, self.authenticated) {
            (Tab::Profiles, _) => Screen::Profiles,
            (Tab::Admin, true) => Screen::Admin,
            (Tab::Admin, false) => Screen::AuthGate,
        }
    }

    /// Password sign-in from the auth gate.
    ///
    /// # Errors
    /// The provider's error; the shell stays signed out.
    pub async fn sign_in(
        &mut self,
        auth: &dyn AuthProvider,
        email: &str,
        password: &str,
    ) -> Result<Session> {
        let session = auth.sign_in_with_password(email, password).await?;
        self.authenticated = true;
        Ok(session)
    }

    /// Sign out and go back to the profiles tab.
    ///
    /// The local view is signed out even if the provider reports an error.
    /// The profile store is not touched.
    ///
    /// # Errors
    /// The provider's error, after the local state has been reset.
    pub async fn sign_out(&mut self, auth: &dyn AuthProvider) -> Result<()> {
        let result = auth.sign_out().await;
        self.authenticated = false;
        self.tab = Tab::Profiles;
        if let Err(err) = &result {
            warn!(error = %err, "remote sign-out failed");
        }
        result
    }

    /// Release the auth subscription.
    pub fn stop(&mut self) {
        self.subscription = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}
