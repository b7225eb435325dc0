//! HTTP routes for number endpoints.

use axum::{routing::get, Router};

use super::handlers::{add_number, list_number_pairs, NumberHandlers};

/// Creates the number router, mounted at `/api/numbers`.
pub fn number_routes(handlers: NumberHandlers) -> Router {
    Router::new()
        .route("/", get(list_number_pairs).post(add_number))
        .with_state(handlers)
}
