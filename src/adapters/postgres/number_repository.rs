//! PostgreSQL implementation of NumberRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::number::{NewNumber, Number};
use crate::ports::NumberRepository;

use super::rows::row_to_number;

/// PostgreSQL implementation of NumberRepository.
#[derive(Clone)]
pub struct PostgresNumberRepository {
    pool: PgPool,
}

impl PostgresNumberRepository {
    /// Creates a new PostgresNumberRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NumberRepository for PostgresNumberRepository {
    async fn insert(&self, number: NewNumber) -> Result<Number, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO numbers (value)
            VALUES ($1)
            RETURNING id, value
            "#,
        )
        .bind(number.value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert number", e))?;

        row_to_number(&row)
    }
}
