//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown for failures that have no user-facing explanation.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Main error type for ProfileMap
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ProfileMapError {
    /// No active session at mutation time.
    #[error("Authentication required: {0}")]
    AuthRequired(String),

    /// A required field is missing or invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend rejected a select/insert/update/delete or a sign-in.
    #[error("Remote operation failed: {0}")]
    RemoteOperation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Another action is already running on the same component.
    #[error("Operation in progress: {0}")]
    InProgress(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileMapError {
    /// Message suitable for inline display next to the control that failed.
    ///
    /// Internal failures are coerced to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthRequired(message)
            | Self::Validation(message)
            | Self::RemoteOperation(message)
            | Self::NotFound(message)
            | Self::InProgress(message)
            | Self::Network(message)
            | Self::Config(message) => message.clone(),
            Self::Internal(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    /// Stable label for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AuthRequired(_) => "auth_required",
            Self::Validation(_) => "validation",
            Self::RemoteOperation(_) => "remote_operation",
            Self::NotFound(_) => "not_found",
            Self::InProgress(_) => "in_progress",
            Self::Network(_) => "network",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for ProfileMap operations
pub type Result<T> = std::result::Result<T, ProfileMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_are_coerced_to_generic_message() {
        let err = ProfileMapError::Internal("join handle panicked".into());
        assert_eq!(err.user_message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn user_facing_errors_keep_their_message() {
        let err = ProfileMapError::Validation("Please enter valid latitude and longitude values".into());
        assert_eq!(err.user_message(), "Please enter valid latitude and longitude values");
        assert_eq!(err.label(), "validation");
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = ProfileMapError::RemoteOperation("duplicate key".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "RemoteOperation");
        assert_eq!(json["message"], "duplicate key");
    }
}
