//! Per-class statistics and rank-with-gaps.
//!
//! PostgreSQL computes these with window functions partitioned by class.
//! This module applies the same rules to rows held in process and must agree
//! with `RANK()`, never `DENSE_RANK()`.

use std::collections::BTreeMap;

use super::{Grade, GradeStanding};

/// Ranks `values` in descending order with SQL `RANK()` semantics.
///
/// Returns one rank per input, in input order. Equal values share a rank and
/// the next distinct value ranks at `1 + count of strictly greater values`.
pub fn rank_with_gaps(values: &[i32]) -> Vec<i64> {
    values
        .iter()
        .map(|v| 1 + values.iter().filter(|other| *other > v).count() as i64)
        .collect()
}

/// Computes every grade's standing, ordered by class then rank then id.
pub fn standings(grades: &[Grade]) -> Vec<GradeStanding> {
    let mut by_class: BTreeMap<&'static str, Vec<&Grade>> = BTreeMap::new();
    for grade in grades {
        by_class.entry(grade.class.as_str()).or_default().push(grade);
    }

    let mut out = Vec::with_capacity(grades.len());
    for members in by_class.values() {
        out.extend(class_standings(members));
    }
    out
}

fn class_standings(members: &[&Grade]) -> Vec<GradeStanding> {
    let values: Vec<i32> = members.iter().map(|g| g.value.value()).collect();
    let ranks = rank_with_gaps(&values);

    let total = values.len() as i64;
    let sum: i64 = values.iter().map(|v| i64::from(*v)).sum();
    let min = values.iter().copied().min().unwrap_or_default();
    let max = values.iter().copied().max().unwrap_or_default();
    let avg = sum as f64 / total as f64;

    let mut rows: Vec<GradeStanding> = members
        .iter()
        .zip(ranks)
        .map(|(grade, rank)| standing(grade, avg, min, max, total, rank))
        .collect();
    rows.sort_by_key(|row| (row.rank_in_class, row.id));
    rows
}

fn standing(
    grade: &Grade,
    avg: f64,
    min: i32,
    max: i32,
    total: i64,
    rank: i64,
) -> GradeStanding {
    GradeStanding {
        id: grade.id,
        class: grade.class,
        value: grade.value.value(),
        avg_grade: avg,
        min_grade: min,
        max_grade: max,
        total_entries: total,
        rank_in_class: rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grade::{GradeClass, GradeValue};

    fn g(id: i32, class: GradeClass, value: i32) -> Grade {
        Grade {
            id,
            class,
            value: GradeValue::try_new(value).unwrap(),
        }
    }

    #[test]
    fn rank_leaves_gaps_after_ties() {
        assert_eq!(rank_with_gaps(&[90, 90, 80, 70, 70, 60]), vec![1, 1, 3, 4, 4, 6]);
    }

    #[test]
    fn rank_of_empty_is_empty() {
        assert!(rank_with_gaps(&[]).is_empty());
    }

    #[test]
    fn statistics_per_class() {
        let rows = standings(&[
            g(1, GradeClass::Math, 85),
            g(2, GradeClass::Math, 95),
            g(3, GradeClass::Science, 90),
        ]);

        assert_eq!(rows.len(), 3);

        assert_eq!((rows[0].id, rows[0].rank_in_class), (2, 1));
        assert_eq!((rows[1].id, rows[1].rank_in_class), (1, 2));
        for math in &rows[..2] {
            assert_eq!(math.class, GradeClass::Math);
            assert_eq!(math.avg_grade, 90.0);
            assert_eq!(math.min_grade, 85);
            assert_eq!(math.max_grade, 95);
            assert_eq!(math.total_entries, 2);
        }

        let science = &rows[2];
        assert_eq!(science.class, GradeClass::Science);
        assert_eq!(science.avg_grade, 90.0);
        assert_eq!((science.min_grade, science.max_grade), (90, 90));
        assert_eq!(science.total_entries, 1);
        assert_eq!(science.rank_in_class, 1);
    }

    #[test]
    fn classes_are_ordered_by_name() {
        let rows = standings(&[
            g(1, GradeClass::Science, 50),
            g(2, GradeClass::History, 50),
            g(3, GradeClass::Math, 50),
        ]);
        let classes: Vec<GradeClass> = rows.iter().map(|r| r.class).collect();
        assert_eq!(classes, vec![GradeClass::History, GradeClass::Math, GradeClass::Science]);
    }

    #[test]
    fn ties_within_class_share_rank() {
        let rows = standings(&[
            g(1, GradeClass::History, 70),
            g(2, GradeClass::History, 80),
            g(3, GradeClass::History, 80),
            g(4, GradeClass::History, 60),
        ]);
        let ranks: Vec<(i32, i64)> = rows.iter().map(|r| (r.id, r.rank_in_class)).collect();
        assert_eq!(ranks, vec![(2, 1), (3, 1), (1, 3), (4, 4)]);
    }

    #[test]
    fn average_is_fractional_when_needed() {
        let rows = standings(&[g(1, GradeClass::Math, 1), g(2, GradeClass::Math, 2)]);
        assert_eq!(rows[0].avg_grade, 1.5);
    }
}
