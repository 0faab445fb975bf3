use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};

use foresight_core::StudyResults;
use foresight_core::model::{Figure, Panel};

use crate::util::format::format_axis;
use crate::util::styles::{WARNING_COLOR, panel_block, trace_color};

/// One plotted line: legend label and finite `(x, y)` points
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub data: Vec<(f64, f64)>,
}

/// Axis bounds covering every series of a panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// Resolve a panel's traces against the results.
///
/// Non-finite points are dropped so that one degenerate parameter value does
/// not blow up the axes. Traces whose scenario has no results are skipped.
pub fn panel_series(panel: &Panel, results: &StudyResults) -> Vec<Series> {
    panel
        .traces
        .iter()
        .filter_map(|trace| {
            let result = results.get(&trace.scenario)?;
            let data = result
                .series(trace.metric)
                .into_iter()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect();
            Some(Series {
                name: trace.legend().to_string(),
                data,
            })
        })
        .collect()
}

/// Bounds with a little padding so lines don't sit on the frame
pub fn chart_bounds(series: &[Series]) -> Option<Bounds> {
    let mut points = series.iter().flat_map(|s| s.data.iter());
    let &(x0, y0) = points.next()?;
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (x0, x0, y0, y0);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let x_padding = (x_max - x_min).abs() * 0.02;
    // Flat series still get a visible band
    let y_range = (y_max - y_min).abs();
    let y_padding = if y_range > 0.0 {
        y_range * 0.1
    } else {
        y_min.abs().max(1.0) * 0.1
    };

    Some(Bounds {
        x: [x_min - x_padding, x_max + x_padding],
        y: [y_min - y_padding, y_max + y_padding],
    })
}

fn tick_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let [min, max] = bounds;
    vec![
        Span::raw(format_axis(min)),
        Span::raw(format_axis((min + max) / 2.0)),
        Span::raw(format_axis(max)),
    ]
}

/// Grid rows and columns that can actually be drawn in `area`
pub fn visible_grid(figure: &Figure, area: Rect) -> (usize, usize) {
    (
        figure.rows.min(area.height as usize),
        figure.cols.min(area.width as usize),
    )
}

pub struct FigureScreen;

impl FigureScreen {
    /// Render a figure as a `rows x cols` grid of charts
    pub fn render(&self, frame: &mut Frame, area: Rect, figure: &Figure, results: &StudyResults) {
        let (row_count, col_count) = visible_grid(figure, area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, row_count.max(1) as u32); row_count])
            .split(area);

        for (row, row_area) in rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, col_count.max(1) as u32); col_count])
                .split(*row_area);

            for (col, cell) in cells.iter().enumerate() {
                if let Some(panel) = figure.panel(row, col) {
                    self.render_panel(frame, *cell, panel, results);
                }
            }
        }
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, panel: &Panel, results: &StudyResults) {
        let block = panel_block(&panel.title);
        let series = panel_series(panel, results);

        let Some(bounds) = chart_bounds(&series) else {
            let paragraph = Paragraph::new(Line::from("  No finite data to display."))
                .style(Style::default().fg(WARNING_COLOR))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let datasets: Vec<Dataset> = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Dataset::default()
                    .name(s.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(trace_color(i)))
                    .data(&s.data)
            })
            .collect();

        let x_axis = Axis::default()
            .title(panel.x_label.clone().dark_gray())
            .bounds(bounds.x)
            .labels(tick_labels(bounds.x));

        let y_axis = Axis::default()
            .title(panel.y_label.clone().dark_gray())
            .bounds(bounds.y)
            .labels(tick_labels(bounds.y));

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopRight));

        frame.render_widget(chart, area);
    }
}
