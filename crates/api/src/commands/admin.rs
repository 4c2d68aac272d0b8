//! Admin panel commands

use profilemap_core::{AdminModal, AdminRow};
use profilemap_domain::{Profile, ProfileForm, ProfileId, ProfileMapError, Result as DomainResult};
use serde::{Deserialize, Serialize};

use crate::context::{AdminSnapshot, AppContext};
use crate::utils::command_helpers::execute_command;

/// Raw form fields as typed by the user
///
/// Coordinates arrive as text and are only validated on submit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileFormInput {
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl ProfileFormInput {
    fn apply_to(self, form: &mut ProfileForm) {
        form.name = self.name;
        form.description = self.description;
        form.photo_url = self.photo_url;
        form.set_latitude_text(&self.latitude);
        form.set_longitude_text(&self.longitude);
        form.address = self.address;
        form.email = self.email;
        form.phone = self.phone;
    }
}

/// Everything the admin tab renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminState {
    pub rows: Vec<AdminRow>,
    pub modal: AdminModal,
    pub error: Option<String>,
    pub confirmation_prompt: Option<String>,
    /// Submit and delete controls are disabled while set
    pub busy: bool,
}

impl AdminState {
    fn capture(ctx: &AppContext, snapshot: AdminSnapshot) -> Self {
        Self {
            rows: ctx.store.profiles().iter().map(AdminRow::from).collect(),
            modal: snapshot.modal,
            error: snapshot.error,
            confirmation_prompt: snapshot.confirmation_prompt,
            busy: snapshot.busy,
        }
    }
}

/// Render the admin tab; available while a submit or delete is running.
pub async fn admin_state(ctx: &AppContext) -> Result<AdminState, String> {
    execute_command("admin::admin_state", || async {
        Ok(AdminState::capture(ctx, ctx.admin_snapshot()))
    })
    .await
}

pub async fn open_create_form(ctx: &AppContext) -> Result<AdminState, String> {
    execute_command("admin::open_create_form", || async {
        let mut panel = ctx.admin_panel()?;
        panel.open_create();
        Ok(AdminState::capture(ctx, panel.snapshot()))
    })
    .await
}

/// Open the editor pre-filled from the stored profile.
pub async fn open_edit_form(ctx: &AppContext, profile_id: String) -> Result<AdminState, String> {
    execute_command("admin::open_edit_form", || async {
        let profile = find_profile(ctx, &profile_id)?;
        let mut panel = ctx.admin_panel()?;
        panel.open_edit(&profile);
        Ok(AdminState::capture(ctx, panel.snapshot()))
    })
    .await
}

/// Replace the open form's fields with what the user typed.
pub async fn update_form(ctx: &AppContext, input: ProfileFormInput) -> Result<AdminState, String> {
    execute_command("admin::update_form", || async {
        let mut panel = ctx.admin_panel()?;
        let form = panel
            .form_mut()
            .ok_or_else(|| ProfileMapError::Validation("No profile form is open".to_string()))?;
        input.apply_to(form);
        Ok(AdminState::capture(ctx, panel.snapshot()))
    })
    .await
}

/// Validate and save the open form; the dialog closes on success.
pub async fn submit_profile_form(ctx: &AppContext) -> Result<Profile, String> {
    execute_command("admin::submit_profile_form", || async {
        let mut panel = ctx.admin_panel()?;
        panel.submit(&ctx.store, ctx.profile_table.as_ref(), ctx.auth.as_ref()).await
    })
    .await
}

/// Ask for confirmation before deleting; returns the prompt to show.
pub async fn request_delete(ctx: &AppContext, profile_id: String) -> Result<String, String> {
    execute_command("admin::request_delete", || async {
        let profile = find_profile(ctx, &profile_id)?;
        let mut panel = ctx.admin_panel()?;
        panel.request_delete(&profile);
        panel
            .confirmation_prompt()
            .ok_or_else(|| ProfileMapError::Internal("confirmation dialog did not open".to_string()))
    })
    .await
}

pub async fn confirm_delete(ctx: &AppContext) -> Result<ProfileId, String> {
    execute_command("admin::confirm_delete", || async {
        let mut panel = ctx.admin_panel()?;
        panel.confirm_delete(&ctx.store, ctx.profile_table.as_ref()).await
    })
    .await
}

pub async fn cancel_admin(ctx: &AppContext) -> Result<AdminState, String> {
    execute_command("admin::cancel_admin", || async {
        let mut panel = ctx.admin_panel()?;
        panel.cancel();
        Ok(AdminState::capture(ctx, panel.snapshot()))
    })
    .await
}

fn find_profile(ctx: &AppContext, profile_id: &str) -> DomainResult<Profile> {
    ctx.store
        .find(profile_id)
        .ok_or_else(|| ProfileMapError::NotFound(format!("profile {profile_id}")))
}
