//! Profile list/grid presentation
//!
//! Holds the search query and whether the map popup is shown. Cards are
//! derived from the store on every call to [`ProfileList::view`].

use profilemap_domain::constants::{
    NO_ADDRESS, NO_DESCRIPTION, NO_EMAIL, PLACEHOLDER_PHOTO_URL, UNKNOWN_NAME,
};
use profilemap_domain::{Profile, ProfileId, ProfileMapError, Result};
use serde::Serialize;
use tracing::debug;

use crate::profiles::{ProfileStore, ProfileTable};
use crate::search::filter_profiles;

/// One card of the list, with display fallbacks applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    pub id: ProfileId,
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub address: String,
    pub email: String,
    /// Only present when the profile has a phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: or_fallback(&profile.name, UNKNOWN_NAME),
            description: or_fallback(&profile.description, NO_DESCRIPTION),
            photo_url: or_fallback(&profile.photo_url, PLACEHOLDER_PHOTO_URL),
            address: or_fallback(&profile.location.address, NO_ADDRESS),
            email: or_fallback(&profile.contact_info.email, NO_EMAIL),
            phone: profile.contact_info.phone.clone(),
        }
    }
}

/// What the list renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileListView {
    pub loading: bool,
    pub error: Option<String>,
    pub cards: Vec<ProfileCard>,
    pub map_visible: bool,
}

/// List component state
pub struct ProfileList {
    store: ProfileStore,
    query: String,
    map_visible: bool,
}

impl ProfileList {
    pub fn new(store: ProfileStore) -> Self {
        Self { store, query: String::new(), map_visible: false }
    }

    /// Fetch on mount.
    ///
    /// # Errors
    /// The table error; it is also recorded in the store.
    pub async fn load(&self, table: &dyn ProfileTable) -> Result<usize> {
        self.store.fetch_profiles(table).await
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_map_visible(&self) -> bool {
        self.map_visible
    }

    pub fn view(&self) -> ProfileListView {
        let snapshot = self.store.snapshot();
        let cards = filter_profiles(&snapshot.profiles, &self.query)
            .into_iter()
            .map(ProfileCard::from)
            .collect();
        ProfileListView {
            loading: snapshot.loading,
            error: snapshot.error,
            cards,
            map_visible: self.map_visible,
        }
    }

    /// Select the profile and open the map popup.
    ///
    /// # Errors
    /// [`ProfileMapError::NotFound`] when the id is not in the store.
    pub fn view_on_map(&mut self, id: &str) -> Result<Profile> {
        let profile = self
            .store
            .find(id)
            .ok_or_else(|| ProfileMapError::NotFound(format!("profile {id}")))?;
        self.store.set_selected_profile(Some(profile.clone()));
        self.map_visible = true;
        debug!(profile_id = %profile.id, "map popup opened");
        Ok(profile)
    }

    pub fn close_map(&mut self) {
        self.map_visible = false;
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
