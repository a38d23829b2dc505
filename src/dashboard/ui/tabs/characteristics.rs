//! Characteristics tab: G3 by sex and age, absences against G3.

use ratatui::prelude::*;

use crate::dashboard::app::DashboardApp;
use crate::dashboard::ui::{draw_placeholder, NO_MATCH};
use crate::dashboard::widgets::{box_summary_table, scatter_chart, scatter_points};

pub fn draw_characteristics_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let battery = app.battery();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    frame.render_widget(box_summary_table(&battery.g3_by_sex), top[0]);
    frame.render_widget(box_summary_table(&battery.g3_by_age), top[1]);

    if battery.absences_vs_g3.is_empty() {
        draw_placeholder(frame, rows[1], "Absences vs G3", NO_MATCH);
        return;
    }

    let series = scatter_points(&battery.absences_vs_g3);
    let chart = scatter_chart(&series, "Absences vs G3 by sex", "absences", "G3");
    frame.render_widget(chart, rows[1]);
}
