//! In-memory adapters - Process-local implementations of the resource ports.
//!
//! Used for tests and for running the service without a database
//! (`SCOREBOARD__STORAGE=memory`). Derived listings reuse the domain's
//! pairing and ranking rules so results match the SQL adapters.

mod grade_store;
mod number_store;

pub use grade_store::InMemoryGradeStore;
pub use number_store::InMemoryNumberStore;
