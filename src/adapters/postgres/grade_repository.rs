//! PostgreSQL implementation of GradeRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::grade::{Grade, NewGrade};
use crate::ports::GradeRepository;

use super::rows::row_to_grade;

/// PostgreSQL implementation of GradeRepository.
#[derive(Clone)]
pub struct PostgresGradeRepository {
    pool: PgPool,
}

impl PostgresGradeRepository {
    /// Creates a new PostgresGradeRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GradeRepository for PostgresGradeRepository {
    async fn insert(&self, grade: NewGrade) -> Result<Grade, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO grades (class, value)
            VALUES ($1, $2)
            RETURNING id, class, value
            "#,
        )
        .bind(grade.class.as_str())
        .bind(grade.value.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert grade", e))?;

        row_to_grade(&row)
    }
}
