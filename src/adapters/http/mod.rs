//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own HTTP adapter for endpoint exposure; `router`
//! combines them with the shared middleware stack.

mod extract;
pub mod grades;
pub mod numbers;
pub mod response;
mod router;

pub use grades::{grade_routes, GradeHandlers};
pub use numbers::{number_routes, NumberHandlers};
pub use response::{DataResponse, ErrorResponse, FieldViolation, INVALID_INPUT};
pub use router::{api_router, ApiPorts, RouterSettings};
