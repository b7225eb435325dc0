//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use scoreboard::adapters::http::{api_router, ApiPorts, RouterSettings};
use scoreboard::domain::foundation::{DomainError, ErrorCode};
use scoreboard::domain::grade::{Grade, GradeStanding, NewGrade};
use scoreboard::domain::number::{NewNumber, Number, NumberPair};
use scoreboard::ports::{GradeReader, GradeRepository, NumberReader, NumberRepository};

/// Fault text every failing port reports. Must never reach a client.
pub const FAULT_TEXT: &str = "connection to server at 10.0.0.5 refused: password authentication failed";

pub fn memory_app() -> Router {
    api_router(ApiPorts::in_memory(), &RouterSettings::default())
}

pub fn app_with(ports: ApiPorts, settings: RouterSettings) -> Router {
    api_router(ports, &settings)
}

/// In-memory ports with every port replaced by one that always fails.
pub fn failing_ports() -> ApiPorts {
    let failing = Arc::new(FailingStore);
    ApiPorts {
        number_reader: failing.clone(),
        number_repository: failing.clone(),
        grade_reader: failing.clone(),
        grade_repository: failing,
    }
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let raw = String::from_utf8_lossy(&bytes).to_string();
    assert!(!raw.contains(FAULT_TEXT), "fault text leaked: {}", raw);
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

struct FailingStore;

fn fault() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, FAULT_TEXT)
}

#[async_trait]
impl NumberReader for FailingStore {
    async fn list_adjacent_pairs(&self) -> Result<Vec<NumberPair>, DomainError> {
        Err(fault())
    }
}

#[async_trait]
impl NumberRepository for FailingStore {
    async fn insert(&self, _number: NewNumber) -> Result<Number, DomainError> {
        Err(fault())
    }
}

#[async_trait]
impl GradeReader for FailingStore {
    async fn list_standings(&self) -> Result<Vec<GradeStanding>, DomainError> {
        Err(fault())
    }
}

#[async_trait]
impl GradeRepository for FailingStore {
    async fn insert(&self, _grade: NewGrade) -> Result<Grade, DomainError> {
        Err(fault())
    }
}
