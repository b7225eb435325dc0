//! AddNumberHandler - Command handler for storing a number.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::number::{NewNumber, Number, NumberError};
use crate::ports::NumberRepository;

/// Command carrying the untrusted request body.
#[derive(Debug, Clone)]
pub struct AddNumberCommand {
    pub payload: Value,
}

/// Handler for storing numbers.
///
/// Validation runs before the repository is touched; an invalid body never
/// reaches the database.
pub struct AddNumberHandler {
    repository: Arc<dyn NumberRepository>,
}

impl AddNumberHandler {
    pub fn new(repository: Arc<dyn NumberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddNumberCommand) -> Result<Number, NumberError> {
        let new_number = NewNumber::from_json(&cmd.payload)?;
        let number = self.repository.insert(new_number).await?;
        tracing::debug!(id = number.id, value = number.value, "number stored");
        Ok(number)
    }
}
