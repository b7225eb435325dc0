//! PostgreSQL implementation of NumberReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::number::NumberPair;
use crate::ports::NumberReader;

use super::rows::row_to_number_pair;

/// Numbers each row by ascending id and joins row k to row k + 1.
const ADJACENT_PAIRS_SQL: &str = r#"
    WITH numbered_rows AS (
        SELECT id, value, ROW_NUMBER() OVER (ORDER BY id) AS row_num
        FROM numbers
    )
    SELECT
        a.id AS id1,
        a.value AS value1,
        b.id AS id2,
        b.value AS value2,
        a.value::BIGINT + b.value::BIGINT AS sum
    FROM numbered_rows a
    JOIN numbered_rows b ON a.row_num + 1 = b.row_num
    ORDER BY a.id ASC
"#;

/// PostgreSQL implementation of NumberReader.
#[derive(Clone)]
pub struct PostgresNumberReader {
    pool: PgPool,
}

impl PostgresNumberReader {
    /// Creates a new PostgresNumberReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NumberReader for PostgresNumberReader {
    async fn list_adjacent_pairs(&self) -> Result<Vec<NumberPair>, DomainError> {
        let rows = sqlx::query(ADJACENT_PAIRS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch number pairs", e))?;

        rows.iter().map(row_to_number_pair).collect()
    }
}
