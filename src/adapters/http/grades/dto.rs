//! HTTP DTOs for grade endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::grade::{Grade, GradeClass, GradeStanding};

/// A stored grade as returned by `POST /api/grades`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResponse {
    pub id: i32,
    pub class: GradeClass,
    pub value: i32,
}

impl From<Grade> for GradeResponse {
    fn from(grade: Grade) -> Self {
        Self {
            id: grade.id,
            class: grade.class,
            value: grade.value.value(),
        }
    }
}

/// A grade with its class statistics as returned by `GET /api/grades`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeStandingResponse {
    pub id: i32,
    pub class: GradeClass,
    pub value: i32,
    pub avg_grade: f64,
    pub min_grade: i32,
    pub max_grade: i32,
    pub total_entries: i64,
    pub rank_in_class: i64,
}

impl From<GradeStanding> for GradeStandingResponse {
    fn from(standing: GradeStanding) -> Self {
        Self {
            id: standing.id,
            class: standing.class,
            value: standing.value,
            avg_grade: standing.avg_grade,
            min_grade: standing.min_grade,
            max_grade: standing.max_grade,
            total_entries: standing.total_entries,
            rank_in_class: standing.rank_in_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grade::GradeValue;
    use serde_json::json;

    #[test]
    fn grade_serializes_class_by_name() {
        let grade = GradeResponse::from(Grade {
            id: 4,
            class: GradeClass::History,
            value: GradeValue::try_new(77).unwrap(),
        });
        assert_eq!(
            serde_json::to_value(grade).unwrap(),
            json!({ "id": 4, "class": "History", "value": 77 })
        );
    }

    #[test]
    fn standing_serializes_all_statistics() {
        let standing = GradeStandingResponse::from(GradeStanding {
            id: 1,
            class: GradeClass::Math,
            value: 95,
            avg_grade: 90.0,
            min_grade: 85,
            max_grade: 95,
            total_entries: 2,
            rank_in_class: 1,
        });
        assert_eq!(
            serde_json::to_value(standing).unwrap(),
            json!({
                "id": 1,
                "class": "Math",
                "value": 95,
                "avg_grade": 90.0,
                "min_grade": 85,
                "max_grade": 95,
                "total_entries": 2,
                "rank_in_class": 1
            })
        );
    }
}
