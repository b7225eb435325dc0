//! Grade records, standings, and the create-request contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{integer_field, string_field, ValidationErrors};

use super::{ClassPolicy, GradeClass, GradeValue};

/// A stored grade. Immutable once inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i32,
    pub class: GradeClass,
    pub value: GradeValue,
}

/// A validated request to store a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewGrade {
    pub class: GradeClass,
    pub value: GradeValue,
}

impl NewGrade {
    /// Validates typed input against `policy`.
    pub fn new(class: GradeClass, value: i32, policy: &ClassPolicy) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let class = policy.check(class).map_err(|e| errors.push(e)).ok();
        let value = GradeValue::try_new(value).map_err(|e| errors.push(e)).ok();

        match (class, value) {
            (Some(class), Some(value)) => Ok(Self { class, value }),
            _ => Err(errors),
        }
    }

    /// Validates a raw request body, reporting every violated field.
    pub fn from_json(body: &Value, policy: &ClassPolicy) -> Result<Self, ValidationErrors> {
        let Value::Object(map) = body else {
            return Err(ValidationErrors::malformed_body("expected a JSON object"));
        };

        let mut errors = ValidationErrors::new();

        let class = string_field(map, "class")
            .and_then(|raw| policy.parse(raw))
            .map_err(|e| errors.push(e))
            .ok();

        let value = integer_field(map, "value")
            .and_then(GradeValue::try_new)
            .map_err(|e| errors.push(e))
            .ok();

        match (class, value) {
            (Some(class), Some(value)) => Ok(Self { class, value }),
            _ => Err(errors),
        }
    }
}

/// A grade annotated with statistics over its class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeStanding {
    pub id: i32,
    pub class: GradeClass,
    pub value: i32,
    pub avg_grade: f64,
    pub min_grade: i32,
    pub max_grade: i32,
    pub total_entries: i64,
    /// 1-based, descending by value, ties share a rank and leave a gap.
    pub rank_in_class: i64,
}
