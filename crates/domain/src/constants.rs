//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Backend
pub const PROFILES_TABLE: &str = "profiles";
pub const SESSION_REFRESH_MARGIN_SECS: i64 = 60;

// Map view
pub const DEFAULT_MAP_LATITUDE: f64 = 40.0;
pub const DEFAULT_MAP_LONGITUDE: f64 = -100.0;
pub const DEFAULT_MAP_ZOOM: u8 = 4;
pub const FOCUS_MAP_ZOOM: u8 = 12;

// Card fallbacks
pub const PLACEHOLDER_PHOTO_URL: &str = "/placeholder-image.png";
pub const UNKNOWN_NAME: &str = "Unknown Name";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_ADDRESS: &str = "Address not available";
pub const NO_EMAIL: &str = "Email not available";

// Inline messages
pub const SIGN_IN_REQUIRED_MESSAGE: &str = "Please sign in to add profiles";
pub const INVALID_COORDINATES_MESSAGE: &str = "Please enter valid latitude and longitude values";
