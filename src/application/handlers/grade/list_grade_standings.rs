//! ListGradeStandingsHandler - Query handler for grades with class statistics.

use std::sync::Arc;

use crate::domain::grade::{GradeError, GradeStanding};
use crate::ports::GradeReader;

/// Query for every grade's standing. Takes no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListGradeStandingsQuery;

/// Handler for listing grade standings.
pub struct ListGradeStandingsHandler {
    reader: Arc<dyn GradeReader>,
}

impl ListGradeStandingsHandler {
    pub fn new(reader: Arc<dyn GradeReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: ListGradeStandingsQuery) -> Result<Vec<GradeStanding>, GradeError> {
        let standings = self.reader.list_standings().await?;
        Ok(standings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::grade::{standings, Grade, GradeClass, GradeValue};
    use async_trait::async_trait;

    struct MockGradeReader {
        grades: Vec<Grade>,
        fail: bool,
    }

    #[async_trait]
    impl GradeReader for MockGradeReader {
        async fn list_standings(&self) -> Result<Vec<GradeStanding>, DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "relation \"grades\" does not exist"));
            }
            Ok(standings(&self.grades))
        }
    }

    #[tokio::test]
    async fn returns_standings_from_reader() {
        let reader = Arc::new(MockGradeReader {
            grades: vec![Grade {
                id: 1,
                class: GradeClass::Science,
                value: GradeValue::try_new(90).unwrap(),
            }],
            fail: false,
        });
        let handler = ListGradeStandingsHandler::new(reader);

        let rows = handler.handle(ListGradeStandingsQuery).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank_in_class, 1);
    }

    #[tokio::test]
    async fn reader_failure_maps_to_infrastructure() {
        let handler = ListGradeStandingsHandler::new(Arc::new(MockGradeReader {
            grades: vec![],
            fail: true,
        }));

        let result = handler.handle(ListGradeStandingsQuery).await;

        assert!(matches!(result, Err(GradeError::Infrastructure(_))));
    }
}
