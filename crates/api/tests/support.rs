//! Shared fixtures for the command tests.

#![allow(dead_code)]

use profilemap_domain::{BackendConfig, Config};
use profilemap_lib::{AppContext, ProfileFormInput};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ANON_KEY: &str = "anon-test-key";
pub const EMAIL: &str = "ops@example.com";
pub const PASSWORD: &str = "secret";

/// Context wired to the mock backend.
pub fn context_for(server: &MockServer) -> AppContext {
    let config = Config {
        backend: BackendConfig {
            url: server.uri(),
            anon_key: ANON_KEY.to_string(),
            request_timeout_secs: Some(5),
        },
        ..Config::default()
    };
    AppContext::new(config).expect("app context")
}

/// A `profiles` row as the backend returns it.
pub fn row_json(id: &str, name: &str, latitude: Value, longitude: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "photo_url": format!("https://img.example.com/{id}.png"),
        "latitude": latitude,
        "longitude": longitude,
        "address": "1 Market Street",
        "email": format!("{id}@example.com"),
        "phone": null,
        "created_at": "2024-05-01T10:00:00+00:00",
        "updated_at": "2024-05-01T10:00:00+00:00",
        "user_id": "user-1"
    })
}

pub async fn mount_profiles(server: &MockServer, rows: Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("select", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}

/// Password grant plus user lookup for the signed-in operator.
pub async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "user-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-user-token",
            "user": { "id": "user-1", "email": EMAIL }
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "user-1", "email": EMAIL })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}

/// Form fields for a valid profile.
pub fn form_input(name: &str) -> ProfileFormInput {
    ProfileFormInput {
        name: name.to_string(),
        description: "Analyst".to_string(),
        photo_url: "https://img.example.com/ada.png".to_string(),
        latitude: "51.5".to_string(),
        longitude: "-0.12".to_string(),
        address: "1 Market Street".to_string(),
        email: "ada@example.com".to_string(),
        phone: String::new(),
    }
}
