//! AddGradeHandler - Command handler for storing a grade.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::grade::{ClassPolicy, Grade, GradeError, NewGrade};
use crate::ports::GradeRepository;

/// Command carrying the untrusted request body.
#[derive(Debug, Clone)]
pub struct AddGradeCommand {
    pub payload: Value,
}

/// Handler for storing grades under the configured class allow-list.
pub struct AddGradeHandler {
    repository: Arc<dyn GradeRepository>,
    policy: ClassPolicy,
}

impl AddGradeHandler {
    pub fn new(repository: Arc<dyn GradeRepository>, policy: ClassPolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn handle(&self, cmd: AddGradeCommand) -> Result<Grade, GradeError> {
        let new_grade = NewGrade::from_json(&cmd.payload, &self.policy)?;
        let grade = self.repository.insert(new_grade).await?;
        tracing::debug!(id = grade.id, class = %grade.class, value = %grade.value, "grade stored");
        Ok(grade)
    }
}
