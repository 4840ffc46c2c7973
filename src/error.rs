//! Error types for the Modrinth SDK

use std::time::Duration;
use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, ModrinthError>;

/// Main error type for the Modrinth SDK
#[derive(Error, Debug)]
pub enum ModrinthError {
    /// HTTP transport failed (connection, DNS, TLS, interrupted body)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The request did not complete within its deadline
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// The API answered with a non-success status and an error envelope
    #[error("API call failed with status {status}: {error}: {description}")]
    Api {
        status: u16,
        error: String,
        description: String,
    },

    /// The API answered with a non-success status and a body that is not an error envelope
    #[error("Unexpected response with status {status}: {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// JSON serialization/deserialization failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ModrinthError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::ValidationError(message.into())
    }

    /// Check if this error is recoverable (i.e., worth retrying by the caller)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout(),
            Self::Timeout(_) => true,
            Self::Api { status, .. } | Self::UnexpectedResponse { status, .. } => {
                *status == 429 || (500..=599).contains(status)
            }
            _ => false,
        }
    }

    /// Get the HTTP status code if this error came from an HTTP response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::UnexpectedResponse { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the API reported that the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { description, .. } if !description.is_empty() => description.clone(),
            Self::Timeout(_) => {
                "The Modrinth API did not answer in time. Please try again later.".to_string()
            }
            Self::HttpError(e) if e.is_connect() => {
                "Network connection failed. Please check your internet connection.".to_string()
            }
            Self::UnexpectedResponse { status, .. } if (500..=599).contains(status) => {
                "The Modrinth service is temporarily unavailable. Please try again later."
                    .to_string()
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_contains_code_and_description() {
        let err = ModrinthError::Api {
            status: 404,
            error: "not_found".to_string(),
            description: "the requested route does not exist".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("not_found"));
        assert!(message.contains("the requested route does not exist"));
        assert!(err.is_not_found());
        assert!(!err.is_recoverable());
        assert_eq!(err.user_message(), "the requested route does not exist");
    }

    #[test]
    fn test_status_code() {
        let err = ModrinthError::UnexpectedResponse {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(err.status_code(), Some(502));
        assert!(err.is_recoverable());

        assert_eq!(ModrinthError::validation("nope").status_code(), None);
        assert!(ModrinthError::Timeout(Duration::from_secs(1)).is_recoverable());
    }
}
