//! PostgreSQL adapters - Database implementations for the resource ports.
//!
//! - `PostgresNumberReader` / `PostgresNumberRepository` - `numbers(id, value)`
//! - `PostgresGradeReader` / `PostgresGradeRepository` - `grades(id, class, value)`
//!
//! The schema itself is managed outside this crate.

mod grade_reader;
mod grade_repository;
mod number_reader;
mod number_repository;
mod pool;
mod rows;

pub use grade_reader::PostgresGradeReader;
pub use grade_repository::PostgresGradeRepository;
pub use number_reader::PostgresNumberReader;
pub use number_repository::PostgresNumberRepository;
pub use pool::connect_pool;
