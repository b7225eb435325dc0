//! Lenient JSON body extraction.
//!
//! axum's `Json` rejects bad bodies with its own plain-text 400/415/422
//! responses. Create endpoints instead treat every unreadable body as a
//! validation failure so clients always see `{ "error": "Invalid input" }`.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::domain::foundation::ValidationErrors;

/// Turns the extractor result into the raw body or a validation failure.
pub fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ValidationErrors> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ValidationErrors::malformed_body(rejection.body_text())),
    }
}
