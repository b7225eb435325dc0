//! Number repository port (write side).

use crate::domain::foundation::DomainError;
use crate::domain::number::{NewNumber, Number};
use async_trait::async_trait;

/// Repository port for number persistence.
#[async_trait]
pub trait NumberRepository: Send + Sync {
    /// Inserts a number and returns the stored row with its generated id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, number: NewNumber) -> Result<Number, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn NumberRepository) {}
    }
}
