//! gradelens - student performance data service and dashboard
//!
//! - `dataset`: load and bind the delimited data file
//! - `filter`: predicates and the filter pipeline
//! - `views`: aggregate views over a filtered subset
//! - `service`: HTTP endpoint serving the raw records
//! - `dashboard`: terminal UI over the views
//! - `cli`: command-line entry points

pub mod cli;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod observability;
pub mod service;
pub mod views;
