//! Factors tab: G3 by study time and support, plus the correlation heatmap.

use ratatui::prelude::*;

use crate::dashboard::app::DashboardApp;
use crate::dashboard::widgets::{box_summary_table, correlation_table};

pub fn draw_factors_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let battery = app.battery();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[0]);

    frame.render_widget(box_summary_table(&battery.g3_by_studytime), top[0]);
    frame.render_widget(box_summary_table(&battery.g3_by_schoolsup), top[1]);
    frame.render_widget(box_summary_table(&battery.g3_by_famsup), top[2]);
    frame.render_widget(correlation_table(&battery.correlation), rows[1]);
}
