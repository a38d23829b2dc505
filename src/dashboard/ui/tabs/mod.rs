//! Tab-specific UI modules.

mod cases;
mod characteristics;
mod factors;
mod overview;
mod performance;

pub use cases::draw_cases_tab;
pub use characteristics::draw_characteristics_tab;
pub use factors::draw_factors_tab;
pub use overview::draw_overview_tab;
pub use performance::draw_performance_tab;
