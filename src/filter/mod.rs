//! Filter pipeline
//!
//! Predicates are a closed set of tagged variants evaluated per record:
//!
//! - `CategoricalEquals`: exact match, with the `All` wildcard
//! - `NumericRange`: inclusive `lo..=hi`
//!
//! A [`FilterSet`] ANDs any number of predicates. Zero predicates is the
//! identity. Filtering is pure: the result borrows source records and
//! keeps their order.

mod errors;
mod field;
mod pipeline;
mod predicate;
mod selection;

pub use errors::{FilterError, FilterResult};
pub use field::{CategoricalField, Field, NumericField};
pub use pipeline::{FilterSet, Subset};
pub use predicate::{Predicate, Selection, LITERAL_PREFIX, WILDCARD};
pub use selection::{distinct_values, selector_options, DashboardFilters, AGE_MAX, AGE_MIN};
