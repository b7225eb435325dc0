//! Grade-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationErrors};

/// Errors surfaced by the grade handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// Request body failed the validation contract.
    Validation(ValidationErrors),
    /// Storage failed; message is for logs only.
    Infrastructure(String),
}

impl GradeError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        GradeError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GradeError::Validation(_) => ErrorCode::ValidationFailed,
            GradeError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl std::fmt::Display for GradeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeError::Validation(errors) => write!(f, "Invalid grade: {}", errors),
            GradeError::Infrastructure(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GradeError {}

impl From<ValidationErrors> for GradeError {
    fn from(errors: ValidationErrors) -> Self {
        GradeError::Validation(errors)
    }
}

impl From<DomainError> for GradeError {
    fn from(err: DomainError) -> Self {
        GradeError::Infrastructure(err.to_string())
    }
}
