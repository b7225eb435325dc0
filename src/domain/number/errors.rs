//! Number-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationErrors};

/// Errors surfaced by the number handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// Request body failed the validation contract.
    Validation(ValidationErrors),
    /// Storage failed; message is for logs only.
    Infrastructure(String),
}

impl NumberError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        NumberError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            NumberError::Validation(_) => ErrorCode::ValidationFailed,
            NumberError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl std::fmt::Display for NumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberError::Validation(errors) => write!(f, "Invalid number: {}", errors),
            NumberError::Infrastructure(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for NumberError {}

impl From<ValidationErrors> for NumberError {
    fn from(errors: ValidationErrors) -> Self {
        NumberError::Validation(errors)
    }
}

impl From<DomainError> for NumberError {
    fn from(err: DomainError) -> Self {
        NumberError::Infrastructure(err.to_string())
    }
}
