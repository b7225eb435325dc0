//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// A single rule violated while validating request input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    Missing { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' must be one of [{}], got '{actual}'", .allowed.join(", "))]
    NotAllowed {
        field: String,
        allowed: Vec<String>,
        actual: String,
    },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::Missing { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an error for a value outside an enumerated allow-list.
    pub fn not_allowed<I, S>(field: impl Into<String>, allowed: I, actual: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationError::NotAllowed {
            field: field.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
            actual: actual.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

/// Every violation found in one request body, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A body that could not be read as a JSON object at all.
    pub fn malformed_body(reason: impl Into<String>) -> Self {
        Self(vec![ValidationError::invalid_format("body", reason)])
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl Error for ValidationErrors {}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Infrastructure errors
    DatabaseError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Wraps a database driver failure.
    pub fn database(context: &str, source: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, source))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_missing_displays_correctly() {
        let err = ValidationError::missing("value");
        assert_eq!(format!("{}", err), "Field 'value' is required");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("value", 0, 100, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'value' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_not_allowed_lists_choices() {
        let err = ValidationError::not_allowed("class", ["Math", "Science"], "Geography");
        assert_eq!(
            format!("{}", err),
            "Field 'class' must be one of [Math, Science], got 'Geography'"
        );
        assert_eq!(err.field(), "class");
    }

    #[test]
    fn validation_errors_display_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::missing("class"));
        errors.push(ValidationError::missing("value"));
        assert_eq!(
            errors.to_string(),
            "Field 'class' is required; Field 'value' is required"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::database("Failed to insert number", "connection refused");
        assert_eq!(
            format!("{}", err),
            "[DATABASE_ERROR] Failed to insert number: connection refused"
        );
    }
}
