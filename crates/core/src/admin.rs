//! Admin CRUD panel
//!
//! Create, edit and delete profiles through the remote table, then merge the
//! server-confirmed row into the store. The panel is single-flight: every
//! mutating call takes `&mut self`, so no second action can start on the same
//! panel while one is awaiting the backend.

use profilemap_domain::constants::SIGN_IN_REQUIRED_MESSAGE;
use profilemap_domain::{Profile, ProfileForm, ProfileId, ProfileMapError, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::profiles::{ProfileStore, ProfileTable};
use crate::session::AuthProvider;

/// Which dialog is open
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdminModal {
    #[default]
    Closed,
    /// Create (`target == None`) or edit form
    Editing { target: Option<ProfileId>, form: ProfileForm },
    ConfirmingDelete { profile_id: ProfileId, profile_name: String },
}

/// One row of the admin table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRow {
    pub id: ProfileId,
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub address: String,
    pub email: String,
}

impl From<&Profile> for AdminRow {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            description: profile.description.clone(),
            photo_url: profile.photo_url.clone(),
            address: profile.location.address.clone(),
            email: profile.contact_info.email.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AdminPanel {
    modal: AdminModal,
    error: Option<String>,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> &AdminModal {
        &self.modal
    }

    /// Inline error from the last failed action
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn rows(&self, store: &ProfileStore) -> Vec<AdminRow> {
        store.profiles().iter().map(AdminRow::from).collect()
    }

    pub fn open_create(&mut self) {
        self.error = None;
        self.modal = AdminModal::Editing { target: None, form: ProfileForm::empty() };
    }

    pub fn open_edit(&mut self, profile: &Profile) {
        self.error = None;
        self.modal = AdminModal::Editing {
            target: Some(profile.id.clone()),
            form: ProfileForm::from_profile(profile),
        };
    }

    /// The open form, if the editor is showing
    pub fn form_mut(&mut self) -> Option<&mut ProfileForm> {
        match &mut self.modal {
            AdminModal::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Submit the open form.
    ///
    /// On success the modal closes and the stored profile is returned. On
    /// failure the message is kept inline and the form stays open.
    ///
    /// # Errors
    /// - [`ProfileMapError::Validation`] when no form is open or a field is
    ///   invalid
    /// - [`ProfileMapError::AuthRequired`] without a verified user
    /// - the table's error when the backend rejects the write
    pub async fn submit(
        &mut self,
        store: &ProfileStore,
        table: &dyn ProfileTable,
        auth: &dyn AuthProvider,
    ) -> Result<Profile> {
        let result = self.try_submit(store, table, auth).await;
        match &result {
            Ok(profile) => {
                info!(profile_id = %profile.id, "profile saved");
                self.modal = AdminModal::Closed;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, error_type = err.label(), "profile save failed");
                self.error = Some(err.user_message());
            }
        }
        result
    }

    async fn try_submit(
        &self,
        store: &ProfileStore,
        table: &dyn ProfileTable,
        auth: &dyn AuthProvider,
    ) -> Result<Profile> {
        let AdminModal::Editing { target, form } = &self.modal else {
            return Err(ProfileMapError::Validation("No profile form is open".to_string()));
        };

        let user = auth
            .get_user()
            .await
            .map_err(|_| ProfileMapError::AuthRequired(SIGN_IN_REQUIRED_MESSAGE.to_string()))?;

        match target {
            None => {
                let row = form.to_insert_row(&user.id)?;
                let profile = Profile::from(table.insert(row).await?);
                store.append_profile(profile.clone());
                Ok(profile)
            }
            Some(id) => {
                let changes = form.to_changes(&user.id)?;
                let profile = Profile::from(table.update(id, changes).await?);
                if store.replace_profile(profile.clone()).is_err() {
                    // A reload in between dropped the row locally.
                    store.append_profile(profile.clone());
                }
                Ok(profile)
            }
        }
    }

    /// Open the confirmation dialog for `profile`.
    pub fn request_delete(&mut self, profile: &Profile) {
        self.error = None;
        self.modal = AdminModal::ConfirmingDelete {
            profile_id: profile.id.clone(),
            profile_name: profile.name.clone(),
        };
    }

    pub fn confirmation_prompt(&self) -> Option<String> {
        match &self.modal {
            AdminModal::ConfirmingDelete { profile_name, .. } => Some(format!(
                "Are you sure you want to delete the profile {profile_name}? This action cannot be undone."
            )),
            _ => None,
        }
    }

    /// Delete the profile named in the open confirmation dialog.
    ///
    /// Without an open dialog nothing is sent to the backend.
    ///
    /// # Errors
    /// [`ProfileMapError::Validation`] without a confirmation dialog, or the
    /// table's error (the dialog stays open).
    pub async fn confirm_delete(
        &mut self,
        store: &ProfileStore,
        table: &dyn ProfileTable,
    ) -> Result<ProfileId> {
        let AdminModal::ConfirmingDelete { profile_id, .. } = &self.modal else {
            return Err(ProfileMapError::Validation("Deletion was not confirmed".to_string()));
        };
        let profile_id = profile_id.clone();

        match table.delete(&profile_id).await {
            Ok(()) => {
                store.remove_profile(&profile_id);
                info!(profile_id = %profile_id, "profile deleted");
                self.modal = AdminModal::Closed;
                self.error = None;
                Ok(profile_id)
            }
            Err(err) => {
                warn!(error = %err, profile_id = %profile_id, "profile delete failed");
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Close any dialog and clear the inline error.
    pub fn cancel(&mut self) {
        self.modal = AdminModal::Closed;
        self.error = None;
    }
}
