//! Number command and query handlers.

mod add_number;
mod list_number_pairs;

pub use add_number::{AddNumberCommand, AddNumberHandler};
pub use list_number_pairs::{ListNumberPairsHandler, ListNumberPairsQuery};
