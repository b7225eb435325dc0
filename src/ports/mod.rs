//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! Each resource splits into a reader (derived listings, recomputed per
//! read) and a repository (insert-and-return).

mod grade_reader;
mod grade_repository;
mod number_reader;
mod number_repository;

pub use grade_reader::GradeReader;
pub use grade_repository::GradeRepository;
pub use number_reader::NumberReader;
pub use number_repository::NumberRepository;
