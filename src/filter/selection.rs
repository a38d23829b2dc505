//! Dashboard filter state: school and sex selectors plus an age range

use serde::Serialize;

use crate::dataset::StudentRecord;

use super::field::{CategoricalField, NumericField};
use super::pipeline::FilterSet;
use super::predicate::{Predicate, Selection};

/// Lowest selectable age
pub const AGE_MIN: u8 = 15;
/// Highest selectable age
pub const AGE_MAX: u8 = 22;

/// The dashboard's three filter controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardFilters {
    #[serde(serialize_with = "serialize_selection")]
    pub school: Selection,
    #[serde(serialize_with = "serialize_selection")]
    pub sex: Selection,
    pub age_min: u8,
    pub age_max: u8,
}

fn serialize_selection<S: serde::Serializer>(sel: &Selection, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(sel)
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            school: Selection::All,
            sex: Selection::All,
            age_min: AGE_MIN,
            age_max: AGE_MAX,
        }
    }
}

impl DashboardFilters {
    /// Clamp the age range into [`AGE_MIN`]..=[`AGE_MAX`] with min <= max
    pub fn with_age(mut self, lo: u8, hi: u8) -> Self {
        let lo = lo.clamp(AGE_MIN, AGE_MAX);
        let hi = hi.clamp(AGE_MIN, AGE_MAX);
        self.age_min = lo.min(hi);
        self.age_max = lo.max(hi);
        self
    }

    /// Translate the controls into predicates.
    ///
    /// The age range is always present, as the slider always has a value.
    pub fn to_filter_set(&self) -> FilterSet {
        FilterSet::new()
            .with(Predicate::equals(CategoricalField::School, self.school.clone()))
            .with(Predicate::equals(CategoricalField::Sex, self.sex.clone()))
            .with(Predicate::range(
                NumericField::Age,
                i64::from(self.age_min),
                i64::from(self.age_max),
            ))
    }
}

/// Distinct values of a field in first-appearance order
pub fn distinct_values(records: &[StudentRecord], field: CategoricalField) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        let value = field.value(record);
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Selector options: the wildcard followed by the distinct values
pub fn selector_options(records: &[StudentRecord], field: CategoricalField) -> Vec<Selection> {
    std::iter::once(Selection::All)
        .chain(distinct_values(records, field).into_iter().map(Selection::Only))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(school: &str, sex: &str, age: u8) -> StudentRecord {
        StudentRecord {
            school: school.into(),
            sex: sex.into(),
            age,
            studytime: 1,
            failures: 0,
            schoolsup: false,
            famsup: false,
            absences: 0,
            g1: 8,
            g2: 9,
            g3: 10,
        }
    }

    #[test]
    fn test_options_follow_first_appearance() {
        let records = vec![
            record("MS", "M", 16),
            record("GP", "F", 16),
            record("MS", "F", 17),
        ];
        let options = selector_options(&records, CategoricalField::School);
        assert_eq!(
            options,
            vec![
                Selection::All,
                Selection::Only("MS".into()),
                Selection::Only("GP".into())
            ]
        );
    }

    #[test]
    fn test_default_filters_keep_all_in_age_bounds() {
        let records = vec![
            record("GP", "F", 15),
            record("MS", "M", 22),
            record("GP", "M", 23),
        ];
        let subset = DashboardFilters::default().to_filter_set().apply(&records);
        assert_eq!(subset.len(), 2);
    }

    #[test]
    fn test_with_age_clamps_and_orders() {
        let f = DashboardFilters::default().with_age(30, 10);
        assert_eq!((f.age_min, f.age_max), (AGE_MIN, AGE_MAX));

        let f = DashboardFilters::default().with_age(19, 17);
        assert_eq!((f.age_min, f.age_max), (17, 19));
    }

    #[test]
    fn test_gp_scenario() {
        let mut records: Vec<StudentRecord> = (0..5).map(|i| record("GP", "F", 15 + i)).collect();
        records.extend((0..3).map(|i| record("MS", "M", 16 + i)));

        let filters = DashboardFilters {
            school: Selection::from_choice("GP"),
            ..DashboardFilters::default()
        };
        let subset = filters.to_filter_set().apply(&records);

        assert_eq!(subset.len(), 5);
        assert!(subset.iter().all(|r| r.school == "GP"));
    }
}
