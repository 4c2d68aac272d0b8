//! Conversions from external infrastructure errors into domain errors.

use profilemap_domain::ProfileMapError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ProfileMapError);

impl From<InfraError> for ProfileMapError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ProfileMapError> for InfraError {
    fn from(value: ProfileMapError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoProfileMapError {
    fn into_profilemap(self) -> ProfileMapError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ProfileMapError */
/* -------------------------------------------------------------------------- */

impl IntoProfileMapError for HttpError {
    fn into_profilemap(self) -> ProfileMapError {
        if self.is_timeout() {
            return ProfileMapError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ProfileMapError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return ProfileMapError::RemoteOperation(format!("unexpected response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => ProfileMapError::AuthRequired(message),
                404 => ProfileMapError::NotFound(message),
                400..=499 => ProfileMapError::RemoteOperation(message),
                _ => ProfileMapError::Network(message),
            };
        }

        if self.is_builder() {
            return ProfileMapError::Config(format!("invalid HTTP request: {self}"));
        }

        ProfileMapError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_profilemap())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ProfileMapError */
/* -------------------------------------------------------------------------- */

impl IntoProfileMapError for JsonError {
    fn into_profilemap(self) -> ProfileMapError {
        ProfileMapError::RemoteOperation(format!("malformed backend payload: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_profilemap())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
