//! HTTP DTOs for number endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::number::{Number, NumberPair};

/// A stored number as returned by `POST /api/numbers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberResponse {
    pub id: i32,
    pub value: i32,
}

impl From<Number> for NumberResponse {
    fn from(number: Number) -> Self {
        Self {
            id: number.id,
            value: number.value,
        }
    }
}

/// One adjacent pair as returned by `GET /api/numbers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPairResponse {
    pub id1: i32,
    pub value1: i32,
    pub id2: i32,
    pub value2: i32,
    pub sum: i64,
}

impl From<NumberPair> for NumberPairResponse {
    fn from(pair: NumberPair) -> Self {
        Self {
            id1: pair.id1,
            value1: pair.value1,
            id2: pair.id2,
            value2: pair.value2,
            sum: pair.sum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pair_serializes_with_wire_names() {
        let pair = NumberPairResponse::from(NumberPair {
            id1: 1,
            value1: 2,
            id2: 3,
            value2: 4,
            sum: 6,
        });
        assert_eq!(
            serde_json::to_value(pair).unwrap(),
            json!({ "id1": 1, "value1": 2, "id2": 3, "value2": 4, "sum": 6 })
        );
    }
}
