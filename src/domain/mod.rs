//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error vocabulary and JSON coercion rules
//! - `number` - Stored numbers and adjacent-pair sums
//! - `grade` - Class-tagged grades, per-class statistics and ranks
//!
//! The `NewNumber` / `NewGrade` constructors are the single validation
//! contract: the HTTP handlers and the API client both go through them.

pub mod foundation;
pub mod grade;
pub mod number;
