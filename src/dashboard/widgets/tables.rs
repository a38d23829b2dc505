//! Table widgets: data preview, box summaries, correlation heatmap and
//! rankings.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::dataset::{yes_no, StudentRecord};
use crate::views::{CorrelationMatrix, GroupedSummary, Ranking};

fn header(cells: &[&'static str]) -> Row<'static> {
    Row::new(cells.to_vec()).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn titled(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}

fn record_cells(record: &StudentRecord) -> Vec<String> {
    vec![
        record.school.clone(),
        record.sex.clone(),
        record.age.to_string(),
        record.studytime.to_string(),
        record.failures.to_string(),
        yes_no(record.schoolsup).to_string(),
        yes_no(record.famsup).to_string(),
        record.absences.to_string(),
        record.g1.to_string(),
        record.g2.to_string(),
        record.g3.to_string(),
    ]
}

const RECORD_HEADER: [&str; 11] = [
    "school", "sex", "age", "study", "fail", "ssup", "fsup", "abs", "G1", "G2", "G3",
];

const RECORD_WIDTHS: [Constraint; 11] = [
    Constraint::Length(6),
    Constraint::Length(4),
    Constraint::Length(4),
    Constraint::Length(6),
    Constraint::Length(5),
    Constraint::Length(5),
    Constraint::Length(5),
    Constraint::Length(4),
    Constraint::Length(3),
    Constraint::Length(3),
    Constraint::Length(3),
];

/// First rows of the subset
pub fn preview_table(records: &[StudentRecord], total: usize) -> Table<'static> {
    let rows = records.iter().map(|r| Row::new(record_cells(r)));

    Table::new(rows, RECORD_WIDTHS)
        .header(header(&RECORD_HEADER))
        .block(titled(&format!("Preview ({} students)", total)))
}

/// One row per group with its five-number summary
pub fn box_summary_table(summary: &GroupedSummary) -> Table<'static> {
    let rows = summary.groups.iter().map(|g| {
        let outliers = if g.outliers.is_empty() {
            "-".to_string()
        } else {
            g.outliers
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        Row::new(vec![
            g.group.clone(),
            g.count.to_string(),
            g.lower_whisker.to_string(),
            format!("{:.2}", g.q1),
            format!("{:.2}", g.median),
            format!("{:.2}", g.q3),
            g.upper_whisker.to_string(),
            outliers,
        ])
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(4),
        Constraint::Min(6),
    ];

    Table::new(rows, widths)
        .header(header(&["group", "n", "low", "Q1", "med", "Q3", "high", "outliers"]))
        .block(titled(&format!(
            "{} by {}",
            summary.value.name(),
            summary.key.name()
        )))
}

/// Background for a correlation cell: red for positive, blue for negative
fn heat_color(value: Option<f64>) -> Color {
    match value {
        None => Color::DarkGray,
        Some(v) => {
            let intensity = (v.abs().min(1.0) * 200.0) as u8;
            if v >= 0.0 {
                Color::Rgb(40 + intensity, 40, 40)
            } else {
                Color::Rgb(40, 40, 40 + intensity)
            }
        }
    }
}

/// Correlation matrix rendered as a colored grid
pub fn correlation_table(matrix: &CorrelationMatrix) -> Table<'static> {
    let rows = matrix.fields.iter().zip(&matrix.cells).map(|(field, row)| {
        let mut cells = vec![Cell::from(field.name().to_string())
            .style(Style::default().fg(Color::Yellow))];
        cells.extend(row.iter().map(|value| {
            let text = value.map_or_else(|| "n/a".to_string(), |v| format!("{:+.2}", v));
            Cell::from(text).style(Style::default().fg(Color::White).bg(heat_color(*value)))
        }));
        Row::new(cells)
    });

    let mut header_cells = vec![String::new()];
    header_cells.extend(matrix.fields.iter().map(|f| f.name().to_string()));

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(10))
        .chain(matrix.fields.iter().map(|_| Constraint::Length(9)))
        .collect();

    Table::new(rows, widths)
        .header(Row::new(header_cells).style(Style::default().fg(Color::Yellow)))
        .block(titled("Correlation"))
}

/// Ranked records with the ranking field's value first
pub fn ranking_table(ranking: &Ranking, title: &str) -> Table<'static> {
    let rows = ranking.entries.iter().enumerate().map(|(rank, entry)| {
        let mut cells = vec![(rank + 1).to_string(), entry.value.to_string()];
        cells.extend(record_cells(&entry.record));
        Row::new(cells)
    });

    let mut head = vec!["#", ranking.field.name()];
    head.extend(RECORD_HEADER);

    let widths: Vec<Constraint> = [Constraint::Length(2), Constraint::Length(11)]
        .into_iter()
        .chain(RECORD_WIDTHS)
        .collect();

    Table::new(rows, widths)
        .header(header(&head))
        .block(titled(title))
}
