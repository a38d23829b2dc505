//! Binned frequency distributions

use serde::Serialize;

use crate::filter::{NumericField, Subset};

/// Bins per grade histogram
pub const HISTOGRAM_BINS: usize = 15;

/// One half-open bin `[lo, hi)`; the last bin is closed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width histogram of one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub field: NumericField,
    pub bins: Vec<Bin>,
}

impl Histogram {
    /// Bin the field's values over `[min, max]`.
    ///
    /// A constant field spans `[v - 0.5, v + 0.5]`. An empty subset yields
    /// no bins.
    pub fn compute(subset: &Subset<'_>, field: NumericField, bin_count: usize) -> Self {
        Self {
            field,
            bins: bin_values(&subset.values(field), bin_count),
        }
    }

    /// Sum of all bin counts
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bin count, zero when empty
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

fn bin_values(values: &[i64], bin_count: usize) -> Vec<Bin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    if bin_count == 0 {
        return Vec::new();
    }

    let (first, last) = if min == max {
        (min as f64 - 0.5, max as f64 + 0.5)
    } else {
        (min as f64, max as f64)
    };

    let step = (last - first) / bin_count as f64;
    let edges: Vec<f64> = (0..=bin_count)
        .map(|i| if i == bin_count { last } else { first + step * i as f64 })
        .collect();

    let mut counts = vec![0usize; bin_count];
    for &v in values {
        let v = v as f64;
        let mut idx = (((v - first) / step) as usize).min(bin_count - 1);
        // Guard against rounding at bin edges.
        if idx > 0 && v < edges[idx] {
            idx -= 1;
        } else if idx + 1 < bin_count && v >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            lo: edges[i],
            hi: edges[i + 1],
            count,
        })
        .collect()
}
