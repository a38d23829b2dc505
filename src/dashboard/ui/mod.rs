//! UI module for the dashboard.

mod layout;
mod tabs;

pub use layout::{draw_placeholder, draw_ui, NO_MATCH};
