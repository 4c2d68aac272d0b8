//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAP_LATITUDE, DEFAULT_MAP_LONGITUDE, DEFAULT_MAP_ZOOM, FOCUS_MAP_ZOOM};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hosted backend endpoint and project key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.example.co`
    pub url: String,
    /// Public (anon) API key sent with every request
    #[serde(skip_serializing)]
    pub anon_key: String,
    /// Per-request timeout; requests wait indefinitely when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { url: "http://localhost:54321".to_string(), anon_key: String::new(), request_timeout_secs: None }
    }
}

/// Map view defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,
    /// Zoom used when centering on the selected profile
    #[serde(default = "focus_zoom")]
    pub focus_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_latitude: DEFAULT_MAP_LATITUDE,
            default_longitude: DEFAULT_MAP_LONGITUDE,
            default_zoom: DEFAULT_MAP_ZOOM,
            focus_zoom: FOCUS_MAP_ZOOM,
        }
    }
}

/// Logging output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter(), json: false }
    }
}

fn default_latitude() -> f64 {
    DEFAULT_MAP_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_MAP_LONGITUDE
}

fn default_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}

fn focus_zoom() -> u8 {
    FOCUS_MAP_ZOOM
}

fn default_filter() -> String {
    "info".to_string()
}
