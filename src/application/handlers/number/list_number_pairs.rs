//! ListNumberPairsHandler - Query handler for adjacent number pairs.

use std::sync::Arc;

use crate::domain::number::{NumberError, NumberPair};
use crate::ports::NumberReader;

/// Query for every adjacent pair. Takes no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListNumberPairsQuery;

/// Handler for listing adjacent number pairs.
pub struct ListNumberPairsHandler {
    reader: Arc<dyn NumberReader>,
}

impl ListNumberPairsHandler {
    pub fn new(reader: Arc<dyn NumberReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: ListNumberPairsQuery) -> Result<Vec<NumberPair>, NumberError> {
        let pairs = self.reader.list_adjacent_pairs().await?;
        Ok(pairs)
    }
}
