//! Performance tab: one histogram per grade.

use ratatui::prelude::*;

use crate::dashboard::app::DashboardApp;
use crate::dashboard::ui::{draw_placeholder, NO_MATCH};
use crate::dashboard::widgets::histogram_chart;

pub fn draw_performance_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let histograms = &app.battery().histograms;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (histogram, chunk) in histograms.iter().zip(chunks.iter()) {
        if histogram.bins.is_empty() {
            let title = format!("{} distribution", histogram.field.name());
            draw_placeholder(frame, *chunk, &title, NO_MATCH);
        } else {
            frame.render_widget(histogram_chart(histogram), *chunk);
        }
    }
}
