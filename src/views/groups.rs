//! Grouped box summaries and scatter series
//!
//! Box summaries use linear-interpolated quartiles. Whiskers reach the most
//! extreme values within 1.5 × IQR of the box; anything beyond is an
//! outlier.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::filter::{CategoricalField, NumericField, Subset};

use super::stats::quantile;

const WHISKER_IQR: f64 = 1.5;

/// How records are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    /// Groups in first-appearance order
    Categorical(CategoricalField),
    /// Groups in ascending numeric order
    Numeric(NumericField),
}

impl GroupKey {
    pub fn name(&self) -> &'static str {
        match self {
            GroupKey::Categorical(f) => f.name(),
            GroupKey::Numeric(f) => f.name(),
        }
    }
}

/// Five-number summary of one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub group: String,
    pub count: usize,
    pub min: i64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: i64,
    pub lower_whisker: i64,
    pub upper_whisker: i64,
    pub outliers: Vec<i64>,
}

impl BoxSummary {
    /// Summarize a non-empty group; `None` when empty
    pub fn from_values(group: impl Into<String>, mut values: Vec<i64>) -> Option<Self> {
        values.sort_unstable();
        let min = *values.first()?;
        let max = *values.last()?;
        let q1 = quantile(&values, 0.25)?;
        let median = quantile(&values, 0.5)?;
        let q3 = quantile(&values, 0.75)?;

        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR * iqr;
        let high_fence = q3 + WHISKER_IQR * iqr;

        let inside = |v: &&i64| (**v as f64) >= low_fence && (**v as f64) <= high_fence;
        let lower_whisker = values.iter().find(inside).copied().unwrap_or(min);
        let upper_whisker = values.iter().rev().find(inside).copied().unwrap_or(max);
        let outliers = values
            .iter()
            .filter(|v| !inside(v))
            .copied()
            .collect();

        Some(Self {
            group: group.into(),
            count: values.len(),
            min,
            q1,
            median,
            q3,
            max,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

/// Box summaries of `value` for every group of `key`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSummary {
    pub key: GroupKey,
    pub value: NumericField,
    pub groups: Vec<BoxSummary>,
}

impl GroupedSummary {
    pub fn compute(subset: &Subset<'_>, key: GroupKey, value: NumericField) -> Self {
        let groups = match key {
            GroupKey::Categorical(field) => {
                let mut order: Vec<(&str, Vec<i64>)> = Vec::new();
                for record in subset.iter() {
                    let k = field.value(record);
                    let v = value.value(record);
                    match order.iter_mut().find(|(name, _)| *name == k) {
                        Some((_, values)) => values.push(v),
                        None => order.push((k, vec![v])),
                    }
                }
                order
                    .into_iter()
                    .filter_map(|(name, values)| BoxSummary::from_values(name, values))
                    .collect()
            }
            GroupKey::Numeric(field) => {
                let mut buckets: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
                for record in subset.iter() {
                    buckets
                        .entry(field.value(record))
                        .or_default()
                        .push(value.value(record));
                }
                buckets
                    .into_iter()
                    .filter_map(|(k, values)| BoxSummary::from_values(k.to_string(), values))
                    .collect()
            }
        };

        Self { key, value, groups }
    }
}

/// Points of one scatter series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub group: String,
    pub points: Vec<(i64, i64)>,
}

/// `x` against `y`, one series per value of `hue` in first-appearance order
pub fn scatter_by(
    subset: &Subset<'_>,
    x: NumericField,
    y: NumericField,
    hue: CategoricalField,
) -> Vec<ScatterSeries> {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in subset.iter() {
        let point = (x.value(record), y.value(record));
        let group = hue.value(record);
        match series.iter_mut().find(|s| s.group == group) {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                group: group.to_string(),
                points: vec![point],
            }),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::StudentRecord;

    fn record(sex: &str, age: u8, absences: u32, g3: i32) -> StudentRecord {
        StudentRecord {
            school: "GP".into(),
            sex: sex.into(),
            age,
            studytime: 1,
            failures: 0,
            schoolsup: false,
            famsup: false,
            absences,
            g1: 10,
            g2: 10,
            g3,
        }
    }

    #[test]
    fn test_box_summary_quartiles_and_outliers() {
        let summary = BoxSummary::from_values("F", vec![10, 1, 2, 3, 4, 5, 6, 7, 8, 40]).unwrap();
        assert_eq!(summary.count, 10);
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 40);
        assert_eq!(summary.median, 5.5);
        assert_eq!(summary.q1, 3.25);
        assert_eq!(summary.q3, 7.75);
        assert_eq!(summary.outliers, vec![40]);
        assert_eq!(summary.upper_whisker, 10);
        assert_eq!(summary.lower_whisker, 1);
    }

    #[test]
    fn test_box_summary_empty() {
        assert!(BoxSummary::from_values("x", vec![]).is_none());
    }

    #[test]
    fn test_categorical_groups_in_appearance_order() {
        let records = vec![
            record("M", 16, 0, 10),
            record("F", 17, 2, 14),
            record("M", 15, 4, 12),
        ];
        let subset = Subset::all(&records);
        let grouped = GroupedSummary::compute(
            &subset,
            GroupKey::Categorical(CategoricalField::Sex),
            NumericField::G3,
        );

        let names: Vec<&str> = grouped.groups.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(names, vec!["M", "F"]);
        assert_eq!(grouped.groups[0].count, 2);
        assert_eq!(grouped.groups[0].median, 11.0);
    }

    #[test]
    fn test_numeric_groups_ascending() {
        let records = vec![
            record("M", 18, 0, 10),
            record("F", 15, 2, 14),
            record("M", 16, 4, 12),
        ];
        let subset = Subset::all(&records);
        let grouped = GroupedSummary::compute(
            &subset,
            GroupKey::Numeric(NumericField::Age),
            NumericField::G3,
        );

        let names: Vec<&str> = grouped.groups.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(names, vec!["15", "16", "18"]);
    }

    #[test]
    fn test_scatter_series_by_sex() {
        let records = vec![
            record("F", 16, 3, 11),
            record("M", 16, 0, 9),
            record("F", 16, 6, 8),
        ];
        let subset = Subset::all(&records);
        let series = scatter_by(
            &subset,
            NumericField::Absences,
            NumericField::G3,
            CategoricalField::Sex,
        );

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].group, "F");
        assert_eq!(series[0].points, vec![(3, 11), (6, 8)]);
    }
}
