//! Chart widgets: grade evolution line, scatter and histograms.
//!
//! Chart datasets borrow their points, so callers build the point vectors
//! first and keep them alive while the chart renders.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
};

use crate::views::{GradeMeans, Histogram, ScatterSeries};

/// Grades are on a 0-20 scale
const GRADE_CEILING: f64 = 20.0;

const SERIES_COLORS: [Color; 4] = [Color::Cyan, Color::Magenta, Color::Yellow, Color::Green];

/// Defined means as (index, mean) points; undefined means are skipped
pub fn evolution_points(means: &GradeMeans) -> Vec<(f64, f64)> {
    means
        .as_array()
        .iter()
        .enumerate()
        .filter_map(|(i, m)| m.map(|v| (i as f64, v)))
        .collect()
}

/// Line of mean G1 → G2 → G3.
pub fn grade_evolution_chart(points: &[(f64, f64)]) -> Chart<'_> {
    let y_max = points
        .iter()
        .map(|(_, y)| *y)
        .fold(GRADE_CEILING, f64::max);

    let dataset = Dataset::default()
        .name("Mean grade")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(points);

    Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Grade evolution "),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 2.0])
                .labels(vec![Span::raw("G1"), Span::raw("G2"), Span::raw("G3")]),
        )
        .y_axis(
            Axis::default()
                .title("Mean")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", y_max / 2.0)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        )
}

/// Owned scatter points per series
pub fn scatter_points(series: &[ScatterSeries]) -> Vec<(String, Vec<(f64, f64)>)> {
    series
        .iter()
        .map(|s| {
            let points = s
                .points
                .iter()
                .map(|(x, y)| (*x as f64, *y as f64))
                .collect();
            (s.group.clone(), points)
        })
        .collect()
}

/// Scatter of `x` against `y`, one colored series per group
pub fn scatter_chart<'a>(
    series: &'a [(String, Vec<(f64, f64)>)],
    title: &'a str,
    x_title: &'a str,
    y_title: &'a str,
) -> Chart<'a> {
    let all = series.iter().flat_map(|(_, points)| points.iter());
    let (x_max, y_max) = all.fold((1.0_f64, GRADE_CEILING), |(xm, ym), (x, y)| {
        (xm.max(*x), ym.max(*y))
    });

    let datasets = series
        .iter()
        .enumerate()
        .map(|(i, (group, points))| {
            Dataset::default()
                .name(group.as_str())
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(points)
        })
        .collect();

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .x_axis(
            Axis::default()
                .title(x_title)
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", x_max / 2.0)),
                    Span::raw(format!("{:.0}", x_max)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(y_title)
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", y_max / 2.0)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        )
}

/// One bar per bin, labelled with the bin's lower edge
pub fn histogram_chart(histogram: &Histogram) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = histogram
        .bins
        .iter()
        .map(|bin| {
            Bar::default()
                .value(bin.count as u64)
                .label(Line::from(format!("{:.0}", bin.lo)))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} distribution ", histogram.field.name())),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(2)
        .bar_gap(0)
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evolution_points_skip_undefined() {
        let means = GradeMeans {
            g1: Some(10.5),
            g2: None,
            g3: Some(12.0),
        };
        assert_eq!(evolution_points(&means), vec![(0.0, 10.5), (2.0, 12.0)]);
    }

    #[test]
    fn test_scatter_points_convert() {
        let series = vec![ScatterSeries {
            group: "F".into(),
            points: vec![(3, 11), (0, 14)],
        }];
        let points = scatter_points(&series);
        assert_eq!(points[0].0, "F");
        assert_eq!(points[0].1, vec![(3.0, 11.0), (0.0, 14.0)]);
    }
}
