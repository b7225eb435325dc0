//! Response envelopes shared by every resource.
//!
//! Success bodies are `{ "data": ... }`; failures are `{ "error": "..." }`
//! with an optional itemized `details` list for validation rejections.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, ValidationError, ValidationErrors};

/// Message returned for every validation rejection.
pub const INVALID_INPUT: &str = "Invalid input";

/// Successful response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn into_response_with(data: T, status: StatusCode) -> Response {
        (status, Json(DataResponse { data })).into_response()
    }
}

/// One violated rule, as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldViolation {
    fn from(error: &ValidationError) -> Self {
        Self {
            field: error.field().to_string(),
            message: error.to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn invalid_input(errors: &ValidationErrors, include_details: bool) -> Self {
        Self {
            error: INVALID_INPUT.to_string(),
            details: include_details.then(|| errors.iter().map(FieldViolation::from).collect()),
        }
    }
}

/// 400 with the stable `Invalid input` message.
pub fn bad_request(code: ErrorCode, errors: &ValidationErrors, include_details: bool) -> Response {
    tracing::debug!(%code, violations = %errors, "request rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::invalid_input(errors, include_details)),
    )
        .into_response()
}

/// 500 with a resource-specific message. `fault` is logged, never sent.
pub fn internal_error(code: ErrorCode, message: &'static str, fault: &str) -> Response {
    tracing::error!(%code, error = %fault, "{}", message);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_input_without_details_omits_field() {
        let errors = ValidationErrors::from(ValidationError::missing("value"));
        let body = serde_json::to_value(ErrorResponse::invalid_input(&errors, false)).unwrap();
        assert_eq!(body, json!({ "error": "Invalid input" }));
    }

    #[test]
    fn invalid_input_with_details_lists_violations() {
        let errors = ValidationErrors::from(ValidationError::out_of_range("value", 0, 100, 150));
        let body = serde_json::to_value(ErrorResponse::invalid_input(&errors, true)).unwrap();
        assert_eq!(
            body,
            json!({
                "error": "Invalid input",
                "details": [
                    { "field": "value", "message": "Field 'value' must be between 0 and 100, got 150" }
                ]
            })
        );
    }

    #[test]
    fn internal_error_hides_fault() {
        let response = internal_error(
            ErrorCode::DatabaseError,
            "Failed to add number",
            "password authentication failed",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn data_response_wraps_payload() {
        let body = serde_json::to_value(DataResponse { data: vec![1, 2] }).unwrap();
        assert_eq!(body, json!({ "data": [1, 2] }));
    }
}
