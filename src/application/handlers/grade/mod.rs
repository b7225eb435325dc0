//! Grade command and query handlers.

mod add_grade;
mod list_grade_standings;

pub use add_grade::{AddGradeCommand, AddGradeHandler};
pub use list_grade_standings::{ListGradeStandingsHandler, ListGradeStandingsQuery};
