//! In-Memory Grade Store

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::grade::{standings, Grade, GradeStanding, NewGrade};
use crate::ports::{GradeReader, GradeRepository};

/// In-memory storage for grades
#[derive(Debug, Clone, Default)]
pub struct InMemoryGradeStore {
    rows: Arc<RwLock<Vec<Grade>>>,
}

impl InMemoryGradeStore {
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
impl GradeRepository for InMemoryGradeStore {
    async fn insert(&self, grade: NewGrade) -> Result<Grade, DomainError> {
        let mut rows = self.rows.write().await;
        let id = rows.last().map(|g| g.id + 1).unwrap_or(1);
        let stored = Grade {
            id,
            class: grade.class,
            value: grade.value,
        };
        rows.push(stored);
        Ok(stored)
    }
}

#[async_trait]
impl GradeReader for InMemoryGradeStore {
    async fn list_standings(&self) -> Result<Vec<GradeStanding>, DomainError> {
        let rows = self.rows.read().await;
        Ok(standings(&rows))
    }
}
