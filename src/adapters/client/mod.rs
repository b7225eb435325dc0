//! Typed HTTP client for the numbers and grades API.
//!
//! Request bodies are checked against the same validation contract the
//! server applies, so invalid input never leaves the process.

mod api_client;
mod error;

pub use api_client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ClientError;
