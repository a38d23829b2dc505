//! Top-k and bottom-k rankings
//!
//! Sorting is stable: records with equal values keep their subset order.

use serde::Serialize;

use crate::dataset::StudentRecord;
use crate::filter::{NumericField, Subset};

/// Number of rows in every ranking table
pub const TOP_K: usize = 5;

/// Sort direction of a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Largest first
    Descending,
    /// Smallest first
    Ascending,
}

/// One ranked row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// Position of the record within the filtered subset
    pub position: usize,
    /// Value of the ranking field
    pub value: i64,
    pub record: StudentRecord,
}

/// A ranked slice of the subset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub field: NumericField,
    pub direction: Direction,
    pub entries: Vec<RankedEntry>,
}

impl Ranking {
    /// Rank `subset` by `field` and keep the first `k`
    pub fn compute(subset: &Subset<'_>, field: NumericField, direction: Direction, k: usize) -> Self {
        let mut keyed: Vec<(usize, i64, &StudentRecord)> = subset
            .iter()
            .enumerate()
            .map(|(i, r)| (i, field.value(r), r))
            .collect();

        keyed.sort_by(|a, b| match direction {
            Direction::Descending => b.1.cmp(&a.1),
            Direction::Ascending => a.1.cmp(&b.1),
        });

        let entries = keyed
            .into_iter()
            .take(k)
            .map(|(position, value, record)| RankedEntry {
                position,
                value,
                record: record.clone(),
            })
            .collect();

        Self {
            field,
            direction,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The `k` largest values, ties in subset order
pub fn top_k(subset: &Subset<'_>, field: NumericField, k: usize) -> Ranking {
    Ranking::compute(subset, field, Direction::Descending, k)
}

/// The `k` smallest values, ties in subset order
pub fn bottom_k(subset: &Subset<'_>, field: NumericField, k: usize) -> Ranking {
    Ranking::compute(subset, field, Direction::Ascending, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(g1: i32, g3: i32, absences: u32) -> StudentRecord {
        StudentRecord {
            school: "GP".into(),
            sex: "F".into(),
            age: 16,
            studytime: 2,
            failures: 0,
            schoolsup: false,
            famsup: false,
            absences,
            g1,
            g2: g1,
            g3,
        }
    }

    #[test]
    fn test_top_k_descending_with_stable_ties() {
        let records = vec![
            record(10, 12, 0),
            record(10, 18, 1),
            record(10, 12, 2),
            record(10, 15, 3),
            record(10, 12, 4),
        ];
        let subset = Subset::all(&records);
        let ranking = top_k(&subset, NumericField::G3, 4);

        let values: Vec<i64> = ranking.entries.iter().map(|e| e.value).collect();
        let positions: Vec<usize> = ranking.entries.iter().map(|e| e.position).collect();
        assert_eq!(values, vec![18, 15, 12, 12]);
        assert_eq!(positions, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_bottom_k_ascending_with_stable_ties() {
        let records = vec![record(10, 5, 0), record(10, 3, 1), record(10, 5, 2)];
        let subset = Subset::all(&records);
        let ranking = bottom_k(&subset, NumericField::G3, TOP_K);

        let positions: Vec<usize> = ranking.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 0, 2]);
        assert_eq!(ranking.direction, Direction::Ascending);
    }

    #[test]
    fn test_improvement_ranking() {
        let records = vec![record(10, 12, 0), record(10, 15, 1)];
        let subset = Subset::all(&records);
        let ranking = top_k(&subset, NumericField::Improvement, TOP_K);

        assert_eq!(ranking.entries[0].value, 5);
        assert_eq!(ranking.entries[0].record.absences, 1);
        assert_eq!(ranking.entries[1].value, 2);
    }

    #[test]
    fn test_empty_subset_gives_empty_ranking() {
        let subset = Subset::default();
        assert!(top_k(&subset, NumericField::G3, TOP_K).is_empty());
    }
}
