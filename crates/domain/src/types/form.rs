//! Admin form model
//!
//! The form keeps what the operator typed. Coordinates are tracked as
//! [`CoordinateInput`] so an empty field stays distinguishable from `0`, and
//! nothing is rejected until submit.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use super::profile::{Coordinates, Profile};
use super::row::{normalize_phone, NewProfileRow, ProfileChanges};
use crate::constants::INVALID_COORDINATES_MESSAGE;
use crate::errors::{ProfileMapError, Result};

/// One latitude or longitude text field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum CoordinateInput {
    /// The field is empty
    #[default]
    Unset,
    Parsed(f64),
    /// Text that does not parse as a number, kept as typed
    Invalid(String),
}

impl CoordinateInput {
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::Parsed(value),
            Err(_) => Self::Invalid(text.to_string()),
        }
    }

    /// Finite parsed value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Parsed(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    /// Text to show back in the input.
    pub fn as_text(&self) -> String {
        match self {
            Self::Unset => String::new(),
            Self::Parsed(value) => value.to_string(),
            Self::Invalid(text) => text.clone(),
        }
    }
}

impl From<Option<f64>> for CoordinateInput {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unset, Self::Parsed)
    }
}

/// Create/edit form state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub latitude: CoordinateInput,
    pub longitude: CoordinateInput,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// Form contents after submit-time validation
struct ValidatedForm {
    coordinates: Coordinates,
    phone: Option<String>,
}

impl ProfileForm {
    /// Empty form for the create flow.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pre-filled form for the edit flow.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            photo_url: profile.photo_url.clone(),
            latitude: profile.location.latitude.into(),
            longitude: profile.location.longitude.into(),
            address: profile.location.address.clone(),
            email: profile.contact_info.email.clone(),
            phone: profile.contact_info.phone.clone().unwrap_or_default(),
        }
    }

    pub fn set_latitude_text(&mut self, text: &str) {
        self.latitude = CoordinateInput::from_text(text);
    }

    pub fn set_longitude_text(&mut self, text: &str) {
        self.longitude = CoordinateInput::from_text(text);
    }

    /// Build the insert payload owned by `user_id`.
    ///
    /// # Errors
    /// Returns [`ProfileMapError::Validation`] when a required field is
    /// missing or malformed.
    pub fn to_insert_row(&self, user_id: &str) -> Result<NewProfileRow> {
        let validated = self.validate()?;
        Ok(NewProfileRow {
            name: self.name.clone(),
            description: self.description.clone(),
            photo_url: self.photo_url.clone(),
            latitude: validated.coordinates.latitude,
            longitude: validated.coordinates.longitude,
            address: self.address.clone(),
            email: self.email.clone(),
            phone: validated.phone,
            user_id: user_id.to_string(),
        })
    }

    /// Build the update payload; every form field is sent.
    ///
    /// # Errors
    /// Same rules as [`ProfileForm::to_insert_row`].
    pub fn to_changes(&self, user_id: &str) -> Result<ProfileChanges> {
        let validated = self.validate()?;
        Ok(ProfileChanges {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            photo_url: Some(self.photo_url.clone()),
            latitude: Some(validated.coordinates.latitude),
            longitude: Some(validated.coordinates.longitude),
            address: Some(self.address.clone()),
            email: Some(self.email.clone()),
            phone: Some(validated.phone),
            user_id: Some(user_id.to_string()),
        })
    }

    fn validate(&self) -> Result<ValidatedForm> {
        let (Some(latitude), Some(longitude)) = (self.latitude.value(), self.longitude.value()) else {
            return Err(ProfileMapError::Validation(INVALID_COORDINATES_MESSAGE.to_string()));
        };
        let coordinates = Coordinates::new(latitude, longitude).ok_or_else(|| {
            ProfileMapError::Validation(
                "Latitude must be between -90 and 90 and longitude between -180 and 180".to_string(),
            )
        })?;

        require("Name", &self.name)?;
        require("Description", &self.description)?;
        require("Photo URL", &self.photo_url)?;
        require("Address", &self.address)?;
        require("Email", &self.email)?;

        if Url::parse(self.photo_url.trim()).is_err() {
            return Err(ProfileMapError::Validation("Please enter a valid photo URL".to_string()));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ProfileMapError::Validation("Please enter a valid email address".to_string()));
        }

        Ok(ValidatedForm { coordinates, phone: normalize_phone(Some(self.phone.clone())) })
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProfileMapError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Email pattern compiled once at first use
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

fn looks_like_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
