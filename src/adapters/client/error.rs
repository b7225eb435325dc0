//! Client error types.

use thiserror::Error;

use crate::adapters::http::{ErrorResponse, FieldViolation};
use crate::domain::foundation::ValidationErrors;

/// Errors returned by [`super::ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected locally; no request was sent.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        details: Option<Vec<FieldViolation>>,
    },
}

impl ClientError {
    /// Builds an `Api` error from a failed response body.
    ///
    /// Uses the server's `error` field when the body carries one.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(response) if !response.error.is_empty() => ClientError::Api {
                status,
                message: response.error,
                details: response.details,
            },
            _ => ClientError::Api {
                status,
                message: format!("API request failed with status {}", status),
                details: None,
            },
        }
    }

    /// HTTP status for server-side rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Validation(_) => None,
        }
    }
}
