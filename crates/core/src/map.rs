//! Map overlay view state
//!
//! The overlay does not draw anything. It keeps the view (center and zoom)
//! in step with the store's selection and produces the marker set a map
//! renderer consumes.

use profilemap_domain::constants::{NO_ADDRESS, PLACEHOLDER_PHOTO_URL, UNKNOWN_NAME};
use profilemap_domain::{Coordinates, MapConfig, Profile, ProfileId, ProfileMapError, Result};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::profiles::ProfileStore;

/// Map center and zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
}

/// Popup content shown on the selected marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub name: String,
    pub photo_url: String,
    pub description: String,
    pub address: String,
}

impl From<&Profile> for Popup {
    fn from(profile: &Profile) -> Self {
        let name = if profile.name.trim().is_empty() { UNKNOWN_NAME } else { &profile.name };
        let photo_url =
            if profile.photo_url.trim().is_empty() { PLACEHOLDER_PHOTO_URL } else { &profile.photo_url };
        let address = if profile.location.address.trim().is_empty() {
            NO_ADDRESS
        } else {
            &profile.location.address
        };
        Self {
            name: name.to_string(),
            photo_url: photo_url.to_string(),
            description: profile.description.clone(),
            address: address.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub profile_id: ProfileId,
    pub position: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<Popup>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub view: MapView,
    pub markers: Vec<Marker>,
}

/// Map component state
pub struct MapOverlay {
    store: ProfileStore,
    selection: watch::Receiver<Option<Profile>>,
    config: MapConfig,
    view: MapView,
}

impl MapOverlay {
    /// Create the overlay, centred on the current selection if there is one.
    pub fn new(store: ProfileStore, config: MapConfig) -> Self {
        let selection = store.subscribe_selection();
        let mut overlay = Self { store, selection, config, view: default_view(&config) };
        overlay.apply_current_selection();
        overlay
    }

    pub fn view(&self) -> MapView {
        self.view
    }

    /// Re-centre if the selection was written since the last sync.
    ///
    /// Returns whether a selection write was consumed.
    pub fn sync_selection(&mut self) -> bool {
        if !self.selection.has_changed().unwrap_or(false) {
            return false;
        }
        self.apply_current_selection();
        true
    }

    /// Wait for the next selection write and re-centre on it.
    ///
    /// # Errors
    /// [`ProfileMapError::Internal`] if the store has been dropped.
    pub async fn next_selection(&mut self) -> Result<()> {
        self.selection
            .changed()
            .await
            .map_err(|_| ProfileMapError::Internal("profile store closed".to_string()))?;
        self.apply_current_selection();
        Ok(())
    }

    /// Marker click.
    ///
    /// # Errors
    /// [`ProfileMapError::NotFound`] when the id is not in the store.
    pub fn select_marker(&self, id: &str) -> Result<Profile> {
        let profile = self
            .store
            .find(id)
            .ok_or_else(|| ProfileMapError::NotFound(format!("profile {id}")))?;
        self.store.set_selected_profile(Some(profile.clone()));
        Ok(profile)
    }

    /// One marker per profile with usable coordinates; only the selected
    /// profile's marker carries a popup.
    pub fn render(&self, profiles: &[Profile]) -> MapScene {
        let selected_id = self.selection.borrow().as_ref().map(|profile| profile.id.clone());

        let markers = profiles
            .iter()
            .filter_map(|profile| {
                let Some(position) = profile.location.coordinates() else {
                    warn!(
                        profile_id = %profile.id,
                        latitude = ?profile.location.latitude,
                        longitude = ?profile.location.longitude,
                        "skipping marker for profile without valid coordinates"
                    );
                    return None;
                };
                let popup =
                    (selected_id.as_deref() == Some(profile.id.as_str())).then(|| Popup::from(profile));
                Some(Marker { profile_id: profile.id.clone(), position, popup })
            })
            .collect();

        MapScene { view: self.view, markers }
    }

    fn apply_current_selection(&mut self) {
        let selected = self.selection.borrow_and_update().clone();
        let Some(profile) = selected else {
            return;
        };
        match profile.location.coordinates() {
            Some(center) => {
                self.view = MapView { center, zoom: self.config.focus_zoom };
                debug!(profile_id = %profile.id, ?center, "map centred on selection");
            }
            None => {
                warn!(profile_id = %profile.id, "selected profile has no valid coordinates");
            }
        }
    }
}

fn default_view(config: &MapConfig) -> MapView {
    let center = Coordinates::new(config.default_latitude, config.default_longitude)
        .unwrap_or(Coordinates { latitude: 0.0, longitude: 0.0 });
    MapView { center, zoom: config.default_zoom }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use profilemap_domain::{ContactInfo, Location};

    use super::*;

    fn profile(id: &str, latitude: Option<f64>, longitude: Option<f64>) -> Profile {
        Profile {
            id: id.into(),
            name: format!("Profile {id}"),
            description: String::new(),
            photo_url: String::new(),
            location: Location { latitude, longitude, address: String::new() },
            contact_info: ContactInfo::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn starts_at_configured_default() {
        let overlay = MapOverlay::new(ProfileStore::new(), MapConfig::default());
        let view = overlay.view();
        assert_eq!(view.center, Coordinates { latitude: 40.0, longitude: -100.0 });
        assert_eq!(view.zoom, 4);
    }

    #[test]
    fn starts_on_existing_selection() {
        let store = ProfileStore::new();
        store.set_selected_profile(Some(profile("a", Some(48.85), Some(2.35))));
        let overlay = MapOverlay::new(store, MapConfig::default());
        assert_eq!(overlay.view().center, Coordinates { latitude: 48.85, longitude: 2.35 });
        assert_eq!(overlay.view().zoom, 12);
    }

    #[test]
    fn popup_only_on_selected_marker() {
        let store = ProfileStore::new();
        let profiles = vec![profile("a", Some(1.0), Some(1.0)), profile("b", Some(2.0), Some(2.0))];
        store.set_profiles(profiles.clone());
        let overlay = MapOverlay::new(store, MapConfig::default());

        overlay.select_marker("b").unwrap();
        let scene = overlay.render(&profiles);

        assert_eq!(scene.markers.len(), 2);
        assert!(scene.markers[0].popup.is_none());
        let popup = scene.markers[1].popup.as_ref().unwrap();
        assert_eq!(popup.name, "Profile b");
        assert_eq!(popup.address, NO_ADDRESS);
        assert_eq!(popup.photo_url, PLACEHOLDER_PHOTO_URL);
    }

    #[test]
    fn selection_without_coordinates_keeps_view() {
        let store = ProfileStore::new();
        let mut overlay = MapOverlay::new(store.clone(), MapConfig::default());
        let before = overlay.view();

        store.set_selected_profile(Some(profile("x", Some(10.0), None)));
        assert!(overlay.sync_selection());
        assert_eq!(overlay.view(), before);
        assert!(!overlay.sync_selection());
    }

    #[test]
    fn select_unknown_marker() {
        let overlay = MapOverlay::new(ProfileStore::new(), MapConfig::default());
        assert!(matches!(overlay.select_marker("nope"), Err(ProfileMapError::NotFound(_))));
    }
}
