//! HTTP adapter for grade endpoints.
//!
//! - `GET /api/grades` - Grades with per-class statistics and rank
//! - `POST /api/grades` - Store a grade

mod dto;
mod handlers;
mod routes;

pub use dto::{GradeResponse, GradeStandingResponse};
pub use handlers::{GradeHandlers, ADD_FAILED, FETCH_FAILED};
pub use routes::grade_routes;
