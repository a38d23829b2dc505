//! Reusable widgets for the dashboard.

mod charts;
mod tables;

pub use charts::{evolution_points, grade_evolution_chart, histogram_chart, scatter_chart, scatter_points};
pub use tables::{box_summary_table, correlation_table, preview_table, ranking_table};
