//! HTTP routes for grade endpoints.

use axum::{routing::get, Router};

use super::handlers::{add_grade, list_grades, GradeHandlers};

/// Creates the grade router, mounted at `/api/grades`.
pub fn grade_routes(handlers: GradeHandlers) -> Router {
    Router::new()
        .route("/", get(list_grades).post(add_grade))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::memory::InMemoryGradeStore;
    use crate::application::handlers::grade::{AddGradeHandler, ListGradeStandingsHandler};
    use crate::domain::grade::ClassPolicy;

    fn router(store: &InMemoryGradeStore, details: bool) -> Router {
        let handlers = GradeHandlers::new(
            Arc::new(AddGradeHandler::new(Arc::new(store.clone()), ClassPolicy::standard())),
            Arc::new(ListGradeStandingsHandler::new(Arc::new(store.clone()))),
            details,
        );
        grade_routes(handlers)
    }

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn post_returns_created_grade() {
        let app = router(&InMemoryGradeStore::new(), true);

        let response = app.oneshot(post(json!({ "class": "Math", "value": 95 }))).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({ "data": { "id": 1, "class": "Math", "value": 95 } })
        );
    }

    #[tokio::test]
    async fn details_can_be_disabled() {
        let app = router(&InMemoryGradeStore::new(), false);

        let response = app.oneshot(post(json!({ "class": "Geography", "value": 80 }))).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid input" }));
    }

    #[tokio::test]
    async fn get_on_empty_store_returns_empty_list() {
        let app = router(&InMemoryGradeStore::new(), true);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "data": [] }));
    }
}
