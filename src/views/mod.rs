//! Aggregate views over a filtered subset
//!
//! - grade means (undefined on an empty subset)
//! - top/bottom-k rankings, stable on ties
//! - correlation matrix over a fixed field set
//! - equal-width histograms per grade
//! - grouped box summaries and a scatter series
//!
//! [`ViewBattery`] computes the whole set in one pass per subset.

mod battery;
mod correlation;
mod groups;
mod histogram;
mod ranking;
mod stats;

pub use battery::{GradeMeans, ViewBattery, PREVIEW_ROWS};
pub use correlation::{CorrelationMatrix, CORRELATION_FIELDS};
pub use groups::{scatter_by, BoxSummary, GroupKey, GroupedSummary, ScatterSeries};
pub use histogram::{Bin, Histogram, HISTOGRAM_BINS};
pub use ranking::{bottom_k, top_k, Direction, RankedEntry, Ranking, TOP_K};
pub use stats::{format_metric, mean, pearson, quantile, round2};
