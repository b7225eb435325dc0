//! Application handlers.
//!
//! Command and query handlers that orchestrate validation and port calls.

pub mod grade;
pub mod number;

pub use grade::{AddGradeCommand, AddGradeHandler, ListGradeStandingsHandler, ListGradeStandingsQuery};
pub use number::{AddNumberCommand, AddNumberHandler, ListNumberPairsHandler, ListNumberPairsQuery};
