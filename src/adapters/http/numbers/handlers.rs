//! HTTP handlers for number endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde_json::Value;

use crate::adapters::http::extract::json_body;
use crate::adapters::http::response::{bad_request, internal_error, DataResponse};
use crate::application::handlers::number::{
    AddNumberCommand, AddNumberHandler, ListNumberPairsHandler, ListNumberPairsQuery,
};
use crate::domain::number::NumberError;

use super::dto::{NumberPairResponse, NumberResponse};

pub const FETCH_FAILED: &str = "Failed to fetch number pairs";
pub const ADD_FAILED: &str = "Failed to add number";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct NumberHandlers {
    add_handler: Arc<AddNumberHandler>,
    list_handler: Arc<ListNumberPairsHandler>,
    validation_details: bool,
}

impl NumberHandlers {
    pub fn new(
        add_handler: Arc<AddNumberHandler>,
        list_handler: Arc<ListNumberPairsHandler>,
        validation_details: bool,
    ) -> Self {
        Self {
            add_handler,
            list_handler,
            validation_details,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/numbers - Adjacent pairs in ascending id order
pub async fn list_number_pairs(State(handlers): State<NumberHandlers>) -> Response {
    match handlers.list_handler.handle(ListNumberPairsQuery).await {
        Ok(pairs) => {
            let data: Vec<NumberPairResponse> = pairs.into_iter().map(Into::into).collect();
            DataResponse::into_response_with(data, StatusCode::OK)
        }
        Err(e) => handle_number_error(e, FETCH_FAILED, handlers.validation_details),
    }
}

/// POST /api/numbers - Store a number
pub async fn add_number(
    State(handlers): State<NumberHandlers>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let payload = match json_body(payload) {
        Ok(payload) => payload,
        Err(errors) => {
            return handle_number_error(errors.into(), ADD_FAILED, handlers.validation_details)
        }
    };

    match handlers.add_handler.handle(AddNumberCommand { payload }).await {
        Ok(number) => DataResponse::into_response_with(NumberResponse::from(number), StatusCode::CREATED),
        Err(e) => handle_number_error(e, ADD_FAILED, handlers.validation_details),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_number_error(error: NumberError, failure_message: &'static str, details: bool) -> Response {
    let code = error.code();
    match error {
        NumberError::Validation(errors) => bad_request(code, &errors, details),
        NumberError::Infrastructure(fault) => internal_error(code, failure_message, &fault),
    }
}
