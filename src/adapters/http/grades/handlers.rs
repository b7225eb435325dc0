//! HTTP handlers for grade endpoints.

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
use crate::application::handlers::grade::{
    AddGradeCommand, AddGradeHandler, ListGradeStandingsHandler, ListGradeStandingsQuery,
};
use crate::domain::grade::GradeError;

use super::dto::{GradeResponse, GradeStandingResponse};

pub const FETCH_FAILED: &str = "Failed to fetch grades";
pub const ADD_FAILED: &str = "Failed to add grade";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GradeHandlers {
    add_handler: Arc<AddGradeHandler>,
    list_handler: Arc<ListGradeStandingsHandler>,
    validation_details: bool,
}

impl GradeHandlers {
    pub fn new(
        add_handler: Arc<AddGradeHandler>,
        list_handler: Arc<ListGradeStandingsHandler>,
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

/// GET /api/grades - Grades with per-class statistics and rank
pub async fn list_grades(State(handlers): State<GradeHandlers>) -> Response {
    match handlers.list_handler.handle(ListGradeStandingsQuery).await {
        Ok(rows) => {
            let data: Vec<GradeStandingResponse> = rows.into_iter().map(Into::into).collect();
            DataResponse::into_response_with(data, StatusCode::OK)
        }
        Err(e) => handle_grade_error(e, FETCH_FAILED, handlers.validation_details),
    }
}

/// POST /api/grades - Store a grade
pub async fn add_grade(
    State(handlers): State<GradeHandlers>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let payload = match json_body(payload) {
        Ok(payload) => payload,
        Err(errors) => {
            return handle_grade_error(errors.into(), ADD_FAILED, handlers.validation_details)
        }
    };

    match handlers.add_handler.handle(AddGradeCommand { payload }).await {
        Ok(grade) => DataResponse::into_response_with(GradeResponse::from(grade), StatusCode::CREATED),
        Err(e) => handle_grade_error(e, ADD_FAILED, handlers.validation_details),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_grade_error(error: GradeError, failure_message: &'static str, details: bool) -> Response {
    let code = error.code();
    match error {
        GradeError::Validation(errors) => bad_request(code, &errors, details),
        GradeError::Infrastructure(fault) => internal_error(code, failure_message, &fault),
    }
}
