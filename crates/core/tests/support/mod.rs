//! Shared test helpers for `profilemap-core` integration tests.
//!
//! In-memory fakes for the table and auth ports, plus row/profile builders,
//! so the component tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod auth;
pub mod repositories;

use chrono::Utc;
use profilemap_domain::{ProfileForm, ProfileRow};

/// Stored row with the given name and optional coordinates.
pub fn row(id: &str, name: &str, latitude: Option<f64>, longitude: Option<f64>) -> ProfileRow {
    ProfileRow {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        photo_url: format!("https://img.example.com/{id}.png"),
        latitude,
        longitude,
        address: format!("{name} Street 1"),
        email: format!("{id}@example.com"),
        phone: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        user_id: Some("owner-1".to_string()),
    }
}

/// Form that passes validation.
pub fn valid_form(name: &str) -> ProfileForm {
    let mut form = ProfileForm {
        name: name.to_string(),
        description: "Cartographer".to_string(),
        photo_url: "https://img.example.com/new.png".to_string(),
        address: "1 Market Street".to_string(),
        email: "new@example.com".to_string(),
        ..ProfileForm::empty()
    };
    form.set_latitude_text("51.5");
    form.set_longitude_text("-0.12");
    form
}
