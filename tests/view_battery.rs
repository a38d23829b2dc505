//! View Battery Tests
//!
//! The aggregate views over filtered subsets:
//! - means are undefined on an empty subset, never zero
//! - rankings are stable on ties and hold at most k records
//! - histograms account for every record
//! - correlation cells are undefined without variance

use gradelens::dataset::{Dataset, StudentRecord};
use gradelens::filter::{CategoricalField, FilterSet, NumericField, Predicate, Selection, Subset};
use gradelens::views::{
    bottom_k, format_metric, top_k, CorrelationMatrix, Histogram, ViewBattery, CORRELATION_FIELDS,
    HISTOGRAM_BINS, TOP_K,
};
use std::path::Path;

// =============================================================================
// Test Utilities
// =============================================================================

fn student(sex: &str, age: u8, absences: u32, g1: i32, g3: i32) -> StudentRecord {
    StudentRecord {
        school: "GP".into(),
        sex: sex.into(),
        age,
        studytime: 2,
        failures: 0,
        schoolsup: false,
        famsup: true,
        absences,
        g1,
        g2: (g1 + g3) / 2,
        g3,
    }
}

fn dataset(records: Vec<StudentRecord>) -> Dataset {
    Dataset::from_records(records, Path::new("memory.csv"))
}

// =============================================================================
// Means
// =============================================================================

#[test]
fn test_empty_subset_means_are_undefined() {
    let data = dataset(vec![student("F", 16, 0, 10, 12)]);
    let filters = FilterSet::new().with(Predicate::equals(
        CategoricalField::Sex,
        Selection::from_choice("M"),
    ));
    let battery = ViewBattery::compute(&filters.apply(data.records()));

    assert_eq!(battery.total, 0);
    assert_eq!(battery.means.g1, None);
    assert_eq!(format_metric(battery.means.g3), "n/a");
}

#[test]
fn test_means_rounded_for_display() {
    let data = dataset(vec![
        student("F", 16, 0, 10, 12),
        student("F", 16, 0, 11, 12),
        student("M", 16, 0, 11, 13),
    ]);
    let battery = ViewBattery::compute(&Subset::all(data.records()));

    assert_eq!(format_metric(battery.means.g1), "10.67");
    assert_eq!(format_metric(battery.means.g3), "12.33");
}

// =============================================================================
// Rankings
// =============================================================================

#[test]
fn test_improvement_ranking() {
    // improvements: 2, 5, -1
    let data = dataset(vec![
        student("F", 16, 0, 10, 12),
        student("M", 17, 0, 8, 13),
        student("F", 18, 0, 12, 11),
    ]);
    let subset = Subset::all(data.records());
    let ranking = top_k(&subset, NumericField::Improvement, TOP_K);

    let values: Vec<i64> = ranking.entries.iter().map(|e| e.value).collect();
    assert_eq!(values, vec![5, 2, -1]);
    assert_eq!(ranking.entries[0].record.g1, 8);
}

#[test]
fn test_ties_keep_source_order() {
    let data = dataset(vec![
        student("F", 15, 1, 10, 14),
        student("M", 16, 2, 10, 14),
        student("F", 17, 3, 10, 9),
        student("M", 18, 4, 10, 14),
    ]);
    let subset = Subset::all(data.records());

    let top = top_k(&subset, NumericField::G3, 2);
    let ages: Vec<u8> = top.entries.iter().map(|e| e.record.age).collect();
    assert_eq!(ages, vec![15, 16]);

    let bottom = bottom_k(&subset, NumericField::G3, TOP_K);
    assert_eq!(bottom.len(), 4);
    assert_eq!(bottom.entries[0].record.age, 17);
    assert_eq!(bottom.entries[1].record.age, 15);
}

// =============================================================================
// Histograms and correlation
// =============================================================================

#[test]
fn test_histograms_cover_every_record() {
    let records: Vec<StudentRecord> = (0..40)
        .map(|i| student("F", 16, i % 7, i as i32 % 20, (i * 3) as i32 % 21))
        .collect();
    let data = dataset(records);
    let subset = Subset::all(data.records());

    for field in NumericField::GRADES {
        let histogram = Histogram::compute(&subset, field, HISTOGRAM_BINS);
        assert_eq!(histogram.bins.len(), HISTOGRAM_BINS);
        assert_eq!(histogram.total(), 40);
    }
}

#[test]
fn test_correlation_of_constant_series_is_undefined() {
    let data = dataset(vec![
        student("F", 16, 0, 8, 10),
        student("F", 16, 2, 10, 12),
        student("F", 16, 4, 12, 14),
    ]);
    let matrix = CorrelationMatrix::compute(&Subset::all(data.records()), &CORRELATION_FIELDS);

    assert_eq!(matrix.get(NumericField::Age, NumericField::G3), None);
    let g1_g3 = matrix.get(NumericField::G1, NumericField::G3).unwrap();
    assert!((g1_g3 - 1.0).abs() < 1e-9);
}

// =============================================================================
// Extreme grades
// =============================================================================

#[test]
fn test_battery_over_extreme_grades() {
    let mut widest = student("F", 16, 0, 0, 0);
    widest.g1 = i32::MIN;
    widest.g3 = i32::MAX;
    let data = dataset(vec![widest, student("M", 17, 1, 10, 12)]);
    let subset = Subset::all(data.records());

    let battery = ViewBattery::compute(&subset);
    assert_eq!(battery.top_improvement.entries[0].value, i64::from(u32::MAX));
    assert_eq!(battery.top_improvement.entries[1].value, 2);

    let filters = FilterSet::parse_all(&["improvement=3..5000000000"]).unwrap();
    assert_eq!(filters.apply(data.records()).len(), 1);
}
