// File: crates/chart-core/src/layout/cartesian.rs
// Summary: Grid/label layout and data geometry for bar and line charts.

use super::{CartesianAxes, Label, LinePath, PathStep};
use crate::config::{AxisLabels, AxisStyle};
use crate::geometry::{safe_ratio, Point, Rect, Segment};
use crate::surface::TextMeasure;
use crate::types::{TextAlign, TextBaseline, DESCENDER_PAD, PADDING, Y_LABEL_GAP};

/// How x categories map onto columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnMode {
    /// `n` equal cells, label centred in each cell (bar charts).
    Cells,
    /// `n` points spanning the width with `n - 1` gaps, label under each point (line charts).
    Points,
}

/// Column spacing for `count` categories across `plot_width`.
fn column_width(plot_width: f64, count: usize, mode: ColumnMode) -> f64 {
    let divisions = match mode {
        ColumnMode::Cells => count,
        ColumnMode::Points => count.saturating_sub(1),
    };
    if divisions == 0 { plot_width } else { plot_width / divisions as f64 }
}

pub fn cartesian_axes<M: TextMeasure + ?Sized>(
    labels: &AxisLabels,
    style: &AxisStyle,
    width: f64,
    height: f64,
    mode: ColumnMode,
    measure: &M,
) -> CartesianAxes {
    let widest = labels
        .y
        .iter()
        .map(|l| measure.measure_text(l, &style.font))
        .fold(0.0_f64, f64::max);

    let left = PADDING + widest;
    let top = PADDING;
    let chart_width = (width - PADDING * 2.0 - widest).max(0.0);
    let chart_height = (height - PADDING * 2.0 - style.font.size - DESCENDER_PAD).max(0.0);
    let right = left + chart_width;
    let bottom = top + chart_height;

    let row_height = if labels.y.is_empty() { 0.0 } else { chart_height / labels.y.len() as f64 };
    let mut row_lines = Vec::with_capacity(labels.y.len());
    let mut y_labels = Vec::with_capacity(labels.y.len());
    for (i, text) in labels.y.iter().enumerate() {
        let y = top + i as f64 * row_height;
        row_lines.push(Segment::new(Point::new(left, y), Point::new(right, y)));
        y_labels.push(Label {
            text: text.clone(),
            at: Point::new(left - Y_LABEL_GAP, y),
            align: TextAlign::Right,
            baseline: TextBaseline::Middle,
        });
    }

    let cell = column_width(chart_width, labels.x.len(), mode);
    let label_y = bottom + style.font.size + DESCENDER_PAD;
    let mut column_lines = Vec::with_capacity(labels.x.len());
    let mut x_labels = Vec::with_capacity(labels.x.len());
    for (i, text) in labels.x.iter().enumerate() {
        let x = left + i as f64 * cell;
        column_lines.push(Segment::new(Point::new(x, top), Point::new(x, bottom)));
        let label_x = match mode {
            ColumnMode::Cells => x + cell / 2.0,
            ColumnMode::Points => x,
        };
        x_labels.push(Label {
            text: text.clone(),
            at: Point::new(label_x, label_y),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        });
    }

    CartesianAxes {
        plot: Rect::from_xywh(left, top, chart_width, chart_height),
        widest_y_label: widest,
        scale_max: labels.y_max(),
        row_lines,
        y_labels,
        column_lines,
        x_labels,
        border: [Point::new(right, top), Point::new(right, bottom), Point::new(left, bottom)],
    }
}

/// Bar rectangles: half a cell wide, offset a quarter cell, growing up from the plot bottom.
pub fn bar_layout(axes: &CartesianAxes, categories: usize, data: &[f64], eased: f64) -> Vec<Rect> {
    let plot = axes.plot;
    let cell = column_width(plot.width, categories, ColumnMode::Cells);
    data.iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = plot.x + i as f64 * cell + cell / 4.0;
            let height = safe_ratio(value, axes.scale_max) * plot.height * eased;
            Rect::from_xywh(x, plot.bottom() - height, cell / 2.0, height)
        })
        .collect()
}

/// Line path through the data points. In bezier mode each step is a cubic whose control
/// points sit at the horizontal midpoint, at the previous and the next point's height.
pub fn line_layout(
    axes: &CartesianAxes,
    categories: usize,
    data: &[f64],
    eased: f64,
    bezier: bool,
    fill: bool,
) -> LinePath {
    let plot = axes.plot;
    let cell = column_width(plot.width, categories, ColumnMode::Points);
    let points: Vec<Point> = data
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let y = plot.bottom() - safe_ratio(value, axes.scale_max) * plot.height * eased;
            Point::new(plot.x + i as f64 * cell, y)
        })
        .collect();

    let start = points.first().copied().unwrap_or(Point::new(plot.x, plot.bottom()));
    let steps = points
        .windows(2)
        .map(|w| {
            let (prev, next) = (w[0], w[1]);
            if bezier {
                let cx = (prev.x + next.x) / 2.0;
                PathStep::Bezier { c1: Point::new(cx, prev.y), c2: Point::new(cx, next.y), to: next }
            } else {
                PathStep::Line(next)
            }
        })
        .collect();

    let fill_close = fill.then(|| [Point::new(plot.right(), plot.bottom()), Point::new(plot.x, plot.bottom())]);

    LinePath { start, steps, points, fill_close }
}
