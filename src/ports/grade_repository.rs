//! Grade repository port (write side).

use crate::domain::foundation::DomainError;
use crate::domain::grade::{Grade, NewGrade};
use async_trait::async_trait;

/// Repository port for grade persistence.
#[async_trait]
pub trait GradeRepository: Send + Sync {
    /// Inserts a grade and returns the stored row with its generated id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, grade: NewGrade) -> Result<Grade, DomainError>;
}
