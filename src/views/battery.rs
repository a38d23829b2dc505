//! The fixed battery of views computed for a filtered subset
//!
//! Everything is recomputed from scratch for each subset. Nothing is cached
//! across filter changes.

use serde::Serialize;

use crate::dataset::StudentRecord;
use crate::filter::{CategoricalField, NumericField, Subset};

use super::correlation::{CorrelationMatrix, CORRELATION_FIELDS};
use super::groups::{scatter_by, GroupKey, GroupedSummary, ScatterSeries};
use super::histogram::{Histogram, HISTOGRAM_BINS};
use super::ranking::{bottom_k, top_k, Ranking, TOP_K};
use super::stats::mean;

/// Rows in the data preview
pub const PREVIEW_ROWS: usize = 5;

/// Mean of each grade; `None` when the subset is empty
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeMeans {
    #[serde(rename = "G1")]
    pub g1: Option<f64>,
    #[serde(rename = "G2")]
    pub g2: Option<f64>,
    #[serde(rename = "G3")]
    pub g3: Option<f64>,
}

impl GradeMeans {
    pub fn compute(subset: &Subset<'_>) -> Self {
        let of = |field| mean(&subset.values(field));
        Self {
            g1: of(NumericField::G1),
            g2: of(NumericField::G2),
            g3: of(NumericField::G3),
        }
    }

    /// Means in time order, for the evolution line
    pub fn as_array(&self) -> [Option<f64>; 3] {
        [self.g1, self.g2, self.g3]
    }
}

/// All views for one subset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewBattery {
    pub total: usize,
    pub preview: Vec<StudentRecord>,
    pub means: GradeMeans,
    pub histograms: Vec<Histogram>,
    pub g3_by_sex: GroupedSummary,
    pub g3_by_age: GroupedSummary,
    pub g3_by_studytime: GroupedSummary,
    pub g3_by_schoolsup: GroupedSummary,
    pub g3_by_famsup: GroupedSummary,
    pub absences_vs_g3: Vec<ScatterSeries>,
    pub correlation: CorrelationMatrix,
    pub top_g3: Ranking,
    pub top_improvement: Ranking,
    pub bottom_g3: Ranking,
}

impl ViewBattery {
    pub fn compute(subset: &Subset<'_>) -> Self {
        let g3_by = |key| GroupedSummary::compute(subset, key, NumericField::G3);

        Self {
            total: subset.len(),
            preview: subset.head(PREVIEW_ROWS).iter().map(|r| (*r).clone()).collect(),
            means: GradeMeans::compute(subset),
            histograms: NumericField::GRADES
                .iter()
                .map(|f| Histogram::compute(subset, *f, HISTOGRAM_BINS))
                .collect(),
            g3_by_sex: g3_by(GroupKey::Categorical(CategoricalField::Sex)),
            g3_by_age: g3_by(GroupKey::Numeric(NumericField::Age)),
            g3_by_studytime: g3_by(GroupKey::Numeric(NumericField::StudyTime)),
            g3_by_schoolsup: g3_by(GroupKey::Categorical(CategoricalField::SchoolSup)),
            g3_by_famsup: g3_by(GroupKey::Categorical(CategoricalField::FamSup)),
            absences_vs_g3: scatter_by(
                subset,
                NumericField::Absences,
                NumericField::G3,
                CategoricalField::Sex,
            ),
            correlation: CorrelationMatrix::compute(subset, &CORRELATION_FIELDS),
            top_g3: top_k(subset, NumericField::G3, TOP_K),
            top_improvement: top_k(subset, NumericField::Improvement, TOP_K),
            bottom_g3: bottom_k(subset, NumericField::G3, TOP_K),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
