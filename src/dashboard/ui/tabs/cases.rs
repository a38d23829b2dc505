//! Cases tab: best, most improved and lowest final grades.

use ratatui::prelude::*;

use crate::dashboard::app::DashboardApp;
use crate::dashboard::widgets::ranking_table;

pub fn draw_cases_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let battery = app.battery();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    frame.render_widget(ranking_table(&battery.top_g3, "Top 5 by G3"), chunks[0]);
    frame.render_widget(
        ranking_table(&battery.top_improvement, "Top 5 by improvement (G3 - G1)"),
        chunks[1],
    );
    frame.render_widget(ranking_table(&battery.bottom_g3, "Bottom 5 by G3"), chunks[2]);
}
