//! HTTP adapter for number endpoints.
//!
//! - `GET /api/numbers` - Adjacent pairs with their sums
//! - `POST /api/numbers` - Store a number

mod dto;
mod handlers;
mod routes;

pub use dto::{NumberPairResponse, NumberResponse};
pub use handlers::{NumberHandlers, ADD_FAILED, FETCH_FAILED};
pub use routes::number_routes;
