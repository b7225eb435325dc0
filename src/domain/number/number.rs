//! Number records and the create-request contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{integer_field, ValidationErrors};

/// A stored number. Immutable once inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Number {
    pub id: i32,
    pub value: i32,
}

/// A validated request to store a number.
///
/// Any `i32` is acceptable; construction from JSON applies the shared
/// coercion rules so form input (`"42"`) and API input (`42`) agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewNumber {
    pub value: i32,
}

impl NewNumber {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// Validates a raw request body.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let Value::Object(map) = body else {
            return Err(ValidationErrors::malformed_body("expected a JSON object"));
        };

        let value = integer_field(map, "value")?;
        Ok(Self { value })
    }
}

/// Two numbers consecutive in ascending `id` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPair {
    pub id1: i32,
    pub value1: i32,
    pub id2: i32,
    pub value2: i32,
    /// Widened so two extreme values cannot overflow.
    pub sum: i64,
}

impl NumberPair {
    pub fn between(first: &Number, second: &Number) -> Self {
        Self {
            id1: first.id,
            value1: first.value,
            id2: second.id,
            value2: second.value,
            sum: i64::from(first.value) + i64::from(second.value),
        }
    }
}
