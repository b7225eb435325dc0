//! Row decoding helpers shared by the readers and repositories.

use sqlx::postgres::{PgRow, Postgres};
use sqlx::{Decode, Row, Type};

use crate::domain::foundation::DomainError;
use crate::domain::grade::{Grade, GradeClass, GradeStanding, GradeValue};
use crate::domain::number::{Number, NumberPair};

pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn class_column(row: &PgRow) -> Result<GradeClass, DomainError> {
    let raw: String = column(row, "class")?;
    raw.parse::<GradeClass>()
        .map_err(|e| DomainError::database("Invalid class", e))
}

pub(super) fn row_to_number(row: &PgRow) -> Result<Number, DomainError> {
    Ok(Number {
        id: column(row, "id")?,
        value: column(row, "value")?,
    })
}

pub(super) fn row_to_number_pair(row: &PgRow) -> Result<NumberPair, DomainError> {
    Ok(NumberPair {
        id1: column(row, "id1")?,
        value1: column(row, "value1")?,
        id2: column(row, "id2")?,
        value2: column(row, "value2")?,
        sum: column(row, "sum")?,
    })
}

pub(super) fn row_to_grade(row: &PgRow) -> Result<Grade, DomainError> {
    let value: i32 = column(row, "value")?;
    Ok(Grade {
        id: column(row, "id")?,
        class: class_column(row)?,
        value: GradeValue::try_new(value).map_err(|e| DomainError::database("Invalid grade value", e))?,
    })
}

pub(super) fn row_to_grade_standing(row: &PgRow) -> Result<GradeStanding, DomainError> {
    Ok(GradeStanding {
        id: column(row, "id")?,
        class: class_column(row)?,
        value: column(row, "value")?,
        avg_grade: column(row, "avg_grade")?,
        min_grade: column(row, "min_grade")?,
        max_grade: column(row, "max_grade")?,
        total_entries: column(row, "total_entries")?,
        rank_in_class: column(row, "rank_in_class")?,
    })
}
