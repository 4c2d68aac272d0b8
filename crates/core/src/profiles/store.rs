//! Shared profile store
//!
//! One store per application. Every component holds a clone of the same
//! handle; setters are the only mutation path. Locks are taken for the
//! duration of a single read or write and never across an `.await`.

use std::sync::Arc;

use parking_lot::RwLock;
use profilemap_domain::{Profile, ProfileMapError, Result};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::ports::ProfileTable;

#[derive(Debug, Default)]
struct StoreState {
    profiles: Vec<Profile>,
    loading: bool,
    error: Option<String>,
}

/// Point-in-time copy of the store, for views and commands
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub profiles: Vec<Profile>,
    pub selected_profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Cloneable handle to the profile collection and the current selection
#[derive(Clone)]
pub struct ProfileStore {
    state: Arc<RwLock<StoreState>>,
    selection: Arc<watch::Sender<Option<Profile>>>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    pub fn new() -> Self {
        let (selection, _) = watch::channel(None);
        Self { state: Arc::new(RwLock::new(StoreState::default())), selection: Arc::new(selection) }
    }

    /// Load the whole collection from the table.
    ///
    /// The collection is replaced only on success; on failure the previous
    /// profiles are kept and the error message is stored. Concurrent calls
    /// are not de-duplicated, the last one to resolve wins.
    ///
    /// # Errors
    /// Returns the table error after recording its user message.
    pub async fn fetch_profiles(&self, table: &dyn ProfileTable) -> Result<usize> {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        match table.select_all().await {
            Ok(rows) => {
                let profiles: Vec<Profile> = rows.into_iter().map(Profile::from).collect();
                let count = profiles.len();
                let mut state = self.state.write();
                state.profiles = profiles;
                state.loading = false;
                info!(count, "profiles loaded");
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, error_type = err.label(), "failed to load profiles");
                let mut state = self.state.write();
                state.error = Some(err.user_message());
                state.loading = false;
                Err(err)
            }
        }
    }

    pub fn set_profiles(&self, profiles: Vec<Profile>) {
        self.state.write().profiles = profiles;
    }

    pub fn set_selected_profile(&self, profile: Option<Profile>) {
        debug!(profile_id = profile.as_ref().map(|p| p.id.as_str()), "selection changed");
        self.selection.send_replace(profile);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.write().loading = loading;
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.write().error = error;
    }

    /// Append a server-confirmed profile at the end of the collection.
    pub fn append_profile(&self, profile: Profile) {
        self.state.write().profiles.push(profile);
    }

    /// Replace the profile with the same id, keeping its position.
    ///
    /// If that profile is selected, the selection is refreshed too.
    ///
    /// # Errors
    /// [`ProfileMapError::NotFound`] when no profile has that id.
    pub fn replace_profile(&self, profile: Profile) -> Result<()> {
        {
            let mut state = self.state.write();
            let slot = state
                .profiles
                .iter_mut()
                .find(|existing| existing.id == profile.id)
                .ok_or_else(|| ProfileMapError::NotFound(format!("profile {}", profile.id)))?;
            *slot = profile.clone();
        }

        self.selection.send_if_modified(|selected| match selected {
            Some(current) if current.id == profile.id => {
                *current = profile;
                true
            }
            _ => false,
        });
        Ok(())
    }

    /// Remove the profile with `id`; clears the selection if it pointed there.
    ///
    /// Returns the removed profile, if any.
    pub fn remove_profile(&self, id: &str) -> Option<Profile> {
        let removed = {
            let mut state = self.state.write();
            let index = state.profiles.iter().position(|profile| profile.id == id)?;
            state.profiles.remove(index)
        };

        self.selection.send_if_modified(|selected| {
            if selected.as_ref().is_some_and(|current| current.id == id) {
                *selected = None;
                true
            } else {
                false
            }
        });
        Some(removed)
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.state.read().profiles.clone()
    }

    pub fn find(&self, id: &str) -> Option<Profile> {
        self.state.read().profiles.iter().find(|profile| profile.id == id).cloned()
    }

    pub fn selected_profile(&self) -> Option<Profile> {
        self.selection.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read();
        StoreSnapshot {
            profiles: state.profiles.clone(),
            selected_profile: self.selected_profile(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    /// Observe selection writes.
    ///
    /// Every call to a selection setter marks the receiver changed, even
    /// when the same profile is selected again.
    pub fn subscribe_selection(&self) -> watch::Receiver<Option<Profile>> {
        self.selection.subscribe()
    }
}
