//! Session and navigation commands

use profilemap_core::{Screen, Tab};
use profilemap_domain::{AuthUser, ProfileMapError};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Screen to render, after applying any auth changes received since the last
/// call.
pub async fn current_screen(ctx: &AppContext) -> Result<Screen, String> {
    execute_command("session::current_screen", || async {
        let mut shell = ctx.shell.lock().await;
        shell.pump_auth_events();
        Ok(shell.screen())
    })
    .await
}

/// Switch tabs by label (`"profiles"` or `"admin"`).
pub async fn select_tab(ctx: &AppContext, tab: String) -> Result<Screen, String> {
    execute_command("session::select_tab", || async {
        let tab: Tab = tab.parse().map_err(ProfileMapError::Validation)?;
        let mut shell = ctx.shell.lock().await;
        shell.pump_auth_events();
        shell.select_tab(tab);
        Ok(shell.screen())
    })
    .await
}

/// Password sign-in from the auth gate.
pub async fn sign_in(ctx: &AppContext, email: String, password: String) -> Result<AuthUser, String> {
    execute_command("session::sign_in", || async {
        let session = ctx.shell.lock().await.sign_in(ctx.auth.as_ref(), &email, &password).await?;
        Ok(session.user)
    })
    .await
}

/// Sign out and return to the profiles tab.
///
/// The view is signed out locally even when the backend call fails.
pub async fn sign_out(ctx: &AppContext) -> Result<Screen, String> {
    execute_command("session::sign_out", || async {
        let mut shell = ctx.shell.lock().await;
        shell.sign_out(ctx.auth.as_ref()).await?;
        Ok(shell.screen())
    })
    .await
}
