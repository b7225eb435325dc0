//! Number reader port (read side).
//!
//! The adjacent-pair listing is derived on every read; implementations must
//! not cache it across inserts.

use crate::domain::foundation::DomainError;
use crate::domain::number::NumberPair;
use async_trait::async_trait;

/// Reader port for number queries.
#[async_trait]
pub trait NumberReader: Send + Sync {
    /// Pairs every number with its successor in ascending id order.
    ///
    /// Returns `max(0, n - 1)` pairs ordered by `id1` ascending.
    async fn list_adjacent_pairs(&self) -> Result<Vec<NumberPair>, DomainError>;
}
