//! Overview tab: grade means, evolution line and data preview.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::dashboard::app::DashboardApp;
use crate::dashboard::ui::{draw_placeholder, NO_MATCH};
use crate::dashboard::widgets::{evolution_points, grade_evolution_chart, preview_table};
use crate::views::format_metric;

pub fn draw_overview_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Metrics
            Constraint::Min(8),    // Evolution
            Constraint::Length(8), // Preview
        ])
        .split(area);

    draw_metrics(frame, chunks[0], app);

    let battery = app.battery();
    if battery.is_empty() {
        draw_placeholder(frame, chunks[1], "Grade evolution", NO_MATCH);
        draw_placeholder(frame, chunks[2], "Preview", NO_MATCH);
        return;
    }

    let points = evolution_points(&battery.means);
    frame.render_widget(grade_evolution_chart(&points), chunks[1]);
    frame.render_widget(preview_table(&battery.preview, battery.total), chunks[2]);
}

fn draw_metrics(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let means = app.battery().means;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let labels = ["Mean G1", "Mean G2", "Mean G3"];
    for ((label, value), cell) in labels.iter().zip(means.as_array()).zip(cells.iter()) {
        let metric = Paragraph::new(format_metric(value))
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", label)),
            );
        frame.render_widget(metric, *cell);
    }
}
