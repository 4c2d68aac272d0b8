//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use profilemap_infra::config;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "backend": {
            "url": "https://project.example.co",
            "anon_key": "integration-anon-key",
            "request_timeout_secs": 20
        },
        "map": {
            "default_latitude": 51.5,
            "default_longitude": -0.12,
            "default_zoom": 6
        },
        "logging": {
            "filter": "profilemap=trace",
            "json": true
        }
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();

    let config = result.expect("Failed to load config from JSON file");

    assert_eq!(config.backend.url, "https://project.example.co");
    assert_eq!(config.backend.anon_key, "integration-anon-key");
    assert_eq!(config.backend.request_timeout_secs, Some(20));

    assert_eq!(config.map.default_latitude, 51.5);
    assert_eq!(config.map.default_zoom, 6);
    assert_eq!(config.map.focus_zoom, 12);

    assert_eq!(config.logging.filter, "profilemap=trace");
    assert!(config.logging.json);
}

#[test]
fn test_load_config_from_toml_file_with_defaults() {
    let toml_content = r#"
[backend]
url = "http://localhost:54321"
anon_key = "local-anon-key"
"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();

    let config = result.expect("Failed to load config from TOML file");
    assert_eq!(config.backend.request_timeout_secs, None);
    assert_eq!(config.map.default_latitude, 40.0);
    assert_eq!(config.map.default_longitude, -100.0);
    assert_eq!(config.map.default_zoom, 4);
    assert_eq!(config.logging.filter, "info");
    assert!(!config.logging.json);
}

#[test]
fn test_loaded_key_is_not_written_back_out() {
    let toml_content = r#"
[backend]
url = "http://localhost:54321"
anon_key = "do-not-leak"
"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");
    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();

    let rendered = serde_json::to_string(&result.expect("config")).expect("serialize");
    assert!(!rendered.contains("do-not-leak"));
}
