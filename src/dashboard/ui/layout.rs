//! Main layout: header, filter bar, tab bar, content, footer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::dashboard::app::{DashboardApp, Tab};

use super::tabs::{
    draw_cases_tab, draw_characteristics_tab, draw_factors_tab, draw_overview_tab,
    draw_performance_tab,
};

/// Draw the whole dashboard.
pub fn draw_ui(frame: &mut Frame, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Filters
            Constraint::Length(3), // Tab bar
            Constraint::Min(10),   // Content
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_filter_bar(frame, chunks[1], app);
    draw_tab_bar(frame, chunks[2], app);

    let content = chunks[3];
    match app.current_tab {
        Tab::Overview => draw_overview_tab(frame, content, app),
        Tab::Performance => draw_performance_tab(frame, content, app),
        Tab::Characteristics => draw_characteristics_tab(frame, content, app),
        Tab::Factors => draw_factors_tab(frame, content, app),
        Tab::Cases => draw_cases_tab(frame, content, app),
    }

    draw_footer(frame, chunks[4], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let title = format!(
        "gradelens - Student Performance ({})",
        app.dataset().source().display()
    );
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

fn draw_filter_bar(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let filters = app.filters();
    let selected = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::raw("School: "),
        Span::styled(filters.school.label().to_string(), selected),
        Span::raw("    Sex: "),
        Span::styled(filters.sex.label().to_string(), selected),
        Span::raw("    Age: "),
        Span::styled(
            format!("{}-{}", filters.age_min, filters.age_max),
            selected,
        ),
        Span::raw(format!(
            "    Matching: {} of {}",
            app.battery().total,
            app.dataset().len()
        )),
    ]);

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Filters "));
    frame.render_widget(bar, area);
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.name())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let help = "[s] School  [x] Sex  [[ ]] Min age  [-/+] Max age  [r] Reset  |  [1-5/Tab] Tabs  [q] Quit";

    let text = match &app.status_message {
        Some((status, _)) => format!("{} | {}", status, help),
        None => help.to_string(),
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}

/// Placeholder shown in place of a view with nothing to draw
pub fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let placeholder = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        );
    frame.render_widget(placeholder, area);
}

/// Message used when the filters exclude every record
pub const NO_MATCH: &str = "No students match the current filters";
