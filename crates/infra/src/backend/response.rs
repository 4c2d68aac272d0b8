//! Backend response handling

use profilemap_domain::{ProfileMapError, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::InfraError;

/// Fields the table and auth services use for a human-readable error, in
/// order of preference
const MESSAGE_FIELDS: [&str; 4] = ["message", "msg", "error_description", "error"];

/// Pass a successful response through, or turn an error response into
/// [`ProfileMapError::RemoteOperation`] carrying the backend's message.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProfileMapError::RemoteOperation(error_message(status, &body)))
}

/// Decode a successful JSON body.
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = ensure_success(response).await?.text().await.map_err(InfraError::from)?;
    serde_json::from_str(&body).map_err(|err| InfraError::from(err).into())
}

/// First message-like field of a JSON error body, or `HTTP {status}`.
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            MESSAGE_FIELDS.iter().find_map(|field| {
                value.get(*field).and_then(Value::as_str).filter(|text| !text.is_empty()).map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
