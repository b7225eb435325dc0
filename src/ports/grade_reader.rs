//! Grade reader port (read side).
//!
//! Statistics are recomputed on every read; no aggregate is persisted.

use crate::domain::foundation::DomainError;
use crate::domain::grade::GradeStanding;
use async_trait::async_trait;

/// Reader port for grade queries.
#[async_trait]
pub trait GradeReader: Send + Sync {
    /// Every grade with its class average, min, max, count and rank.
    ///
    /// Ordered by class ascending, then rank ascending. Ranks follow SQL
    /// `RANK()`: ties share a rank and the following rank skips ahead.
    async fn list_standings(&self) -> Result<Vec<GradeStanding>, DomainError>;
}
