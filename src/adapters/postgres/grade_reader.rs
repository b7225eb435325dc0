//! PostgreSQL implementation of GradeReader.
//!
//! Every statistic is a window function partitioned by class, so one
//! statement sees one consistent snapshot of the table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::grade::GradeStanding;
use crate::ports::GradeReader;

use super::rows::row_to_grade_standing;

const GRADE_STANDINGS_SQL: &str = r#"
    WITH grade_stats AS (
        SELECT
            id,
            class,
            value,
            CAST(AVG(value) OVER (PARTITION BY class) AS DOUBLE PRECISION) AS avg_grade,
            MIN(value) OVER (PARTITION BY class) AS min_grade,
            MAX(value) OVER (PARTITION BY class) AS max_grade,
            COUNT(*) OVER (PARTITION BY class) AS total_entries,
            RANK() OVER (PARTITION BY class ORDER BY value DESC) AS rank_in_class
        FROM grades
    )
    SELECT id, class, value, avg_grade, min_grade, max_grade, total_entries, rank_in_class
    FROM grade_stats
    ORDER BY class, rank_in_class, id
"#;

/// PostgreSQL implementation of GradeReader.
#[derive(Clone)]
pub struct PostgresGradeReader {
    pool: PgPool,
}

impl PostgresGradeReader {
    /// Creates a new PostgresGradeReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GradeReader for PostgresGradeReader {
    async fn list_standings(&self) -> Result<Vec<GradeStanding>, DomainError> {
        let rows = sqlx::query(GRADE_STANDINGS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch grades", e))?;

        rows.iter().map(row_to_grade_standing).collect()
    }
}
