//! In-Memory Number Store
//!
//! Ids are assigned from 1 upward in insertion order, like a SERIAL column.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::number::{adjacent_pairs, NewNumber, Number, NumberPair};
use crate::ports::{NumberReader, NumberRepository};

/// In-memory storage for numbers
#[derive(Debug, Clone, Default)]
pub struct InMemoryNumberStore {
    rows: Arc<RwLock<Vec<Number>>>,
}

impl InMemoryNumberStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl NumberRepository for InMemoryNumberStore {
    async fn insert(&self, number: NewNumber) -> Result<Number, DomainError> {
        let mut rows = self.rows.write().await;
        let id = rows.last().map(|n| n.id + 1).unwrap_or(1);
        let stored = Number {
            id,
            value: number.value,
        };
        rows.push(stored);
        Ok(stored)
    }
}

#[async_trait]
impl NumberReader for InMemoryNumberStore {
    async fn list_adjacent_pairs(&self) -> Result<Vec<NumberPair>, DomainError> {
        let rows = self.rows.read().await;
        Ok(adjacent_pairs(&rows))
    }
}
