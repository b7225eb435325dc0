//! Grades resource - class-tagged scores and their per-class standings.

mod errors;
mod grade;
mod grade_class;
mod grade_value;
mod ranking;

pub use errors::GradeError;
pub use grade::{Grade, GradeStanding, NewGrade};
pub use grade_class::{ClassPolicy, GradeClass};
pub use grade_value::GradeValue;
pub use ranking::{rank_with_gaps, standings};
