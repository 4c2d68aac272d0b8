//! Shared fixtures for the backend adapter tests.

#![allow(dead_code)]

use profilemap_domain::BackendConfig;
use profilemap_infra::BackendClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const ANON_KEY: &str = "anon-test-key";

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> BackendClient {
    let config = BackendConfig {
        url: server.uri(),
        anon_key: ANON_KEY.to_string(),
        request_timeout_secs: Some(5),
    };
    BackendClient::new(&config).expect("backend client")
}

/// A `profiles` row as the backend returns it.
pub fn row_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "photo_url": format!("https://img.example.com/{id}.png"),
        "latitude": 51.5,
        "longitude": -0.12,
        "address": "1 Market Street",
        "email": format!("{id}@example.com"),
        "phone": null,
        "created_at": "2024-05-01T10:00:00+00:00",
        "updated_at": "2024-05-01T10:00:00+00:00",
        "user_id": "user-1"
    })
}

/// Token endpoint body.
pub fn token_json(access_token: &str, expires_in: i64) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": expires_in,
        "refresh_token": format!("refresh-{access_token}"),
        "user": { "id": "user-1", "email": "ops@example.com" }
    })
}
