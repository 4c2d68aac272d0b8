//! Wire rows for the `profiles` table
//!
//! The backend speaks flat snake_case rows. Reading a row into a [`Profile`]
//! nests location and contact fields; writing goes through
//! [`crate::ProfileForm`] which produces [`NewProfileRow`] or
//! [`ProfileChanges`].

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::profile::{ContactInfo, Location, Profile, ProfileId};

/// A row as returned by `select` and by `insert`/`update` with representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: ProfileId,
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub photo_url: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "nullable_text")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Insert payload; id and timestamps are assigned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProfileRow {
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub email: String,
    /// Always serialized; an empty phone is sent as `null`
    pub phone: Option<String>,
    pub user_id: String,
}

/// Update payload; only the fields that are set are sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProfileChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `Some(None)` clears the phone (`null` on the wire)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            photo_url: row.photo_url,
            location: Location { latitude: row.latitude, longitude: row.longitude, address: row.address },
            contact_info: ContactInfo { email: row.email, phone: normalize_phone(row.phone) },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Null, absent and blank phones all mean "not present".
pub(crate) fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone.filter(|value| !value.trim().is_empty())
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339 (`timestamptz`) and offset-less (`timestamp`) values;
/// the latter are taken as UTC.
fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|err| serde::de::Error::custom(format!("invalid timestamp '{raw}': {err}")))
}
