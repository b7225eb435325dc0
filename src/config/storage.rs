//! Storage backend selection

use serde::Deserialize;

/// Where the resources are persisted
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL via the shared connection pool
    #[default]
    Postgres,
    /// Process-local store; contents are lost on exit
    Memory,
}

impl StorageBackend {
    pub fn requires_database(&self) -> bool {
        matches!(self, StorageBackend::Postgres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_lowercase_names() {
        let backend: StorageBackend = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(backend, StorageBackend::Memory);
        assert!(!backend.requires_database());
        assert!(StorageBackend::default().requires_database());
    }
}
