//! Grade value object (0-100 inclusive).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A grade between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct GradeValue(u8);

impl GradeValue {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    /// Creates a GradeValue, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "value",
                Self::MIN.into(),
                Self::MAX.into(),
                value.into(),
            ));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> i32 {
        i32::from(self.0)
    }
}

impl TryFrom<i32> for GradeValue {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<GradeValue> for i32 {
    fn from(value: GradeValue) -> Self {
        value.value()
    }
}

impl fmt::Display for GradeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(GradeValue::try_new(0).unwrap().value(), 0);
        assert_eq!(GradeValue::try_new(100).unwrap().value(), 100);
    }

    #[test]
    fn rejects_just_outside_bounds() {
        assert!(GradeValue::try_new(-1).is_err());
        assert!(GradeValue::try_new(101).is_err());
    }

    #[test]
    fn deserialization_enforces_range() {
        assert!(serde_json::from_str::<GradeValue>("150").is_err());
        assert_eq!(serde_json::from_str::<GradeValue>("42").unwrap().value(), 42);
    }

    proptest! {
        #[test]
        fn accepts_exactly_zero_to_hundred(v in any::<i32>()) {
            prop_assert_eq!(GradeValue::try_new(v).is_ok(), (0..=100).contains(&v));
        }
    }
}
