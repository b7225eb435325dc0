//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and the JSON coercion rules that every
//! resource's validation contract is built from.

mod coercion;
mod errors;

pub use coercion::{integer_field, string_field};
pub use errors::{DomainError, ErrorCode, ValidationError, ValidationErrors};
