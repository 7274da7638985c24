// File: crates/chart-core/src/layout/mod.rs
// Summary: Per-frame geometry (axes, bars, line path, wedges, radar polygon) from config, size and progress.
// Notes:
// - Layout is a pure function; it is recomputed from scratch every frame.
// - Zero or non-finite scales collapse shapes to zero size instead of producing NaN.

mod cartesian;
mod radial;

use crate::config::{ChartConfig, ChartKind};
use crate::geometry::{Point, Rect, Segment};
use crate::surface::TextMeasure;
use crate::types::{TextAlign, TextBaseline};

pub use cartesian::{bar_layout, cartesian_axes, line_layout, ColumnMode};
pub use radial::{doughnut_wedges, pie_wedges, polar_wedges, radar_shape, radial_frame};

/// A positioned text label.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Grid, labels and frame of a bar or line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartesianAxes {
    /// Plot area; origin is the top-left grid corner.
    pub plot: Rect,
    pub widest_y_label: f64,
    /// Numeric maximum of the y labels that data is scaled against.
    pub scale_max: f64,
    pub row_lines: Vec<Segment>,
    pub y_labels: Vec<Label>,
    pub column_lines: Vec<Segment>,
    pub x_labels: Vec<Label>,
    /// Top-right, bottom-right, bottom-left.
    pub border: [Point; 3],
}

/// Piece of a line path after its start point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathStep {
    Line(Point),
    Bezier { c1: Point, c2: Point, to: Point },
}

impl PathStep {
    pub fn end(&self) -> Point {
        match *self {
            PathStep::Line(p) => p,
            PathStep::Bezier { to, .. } => to,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinePath {
    pub start: Point,
    pub steps: Vec<PathStep>,
    /// Data points, for markers.
    pub points: Vec<Point>,
    /// Bottom-right then bottom-left corners closing the filled area, when filling.
    pub fill_close: Option<[Point; 2]>,
}

/// Angular slice of a radial chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    /// Index of the data value (and color) this wedge draws.
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub radius: f64,
    /// Zero for pie and polar wedges.
    pub inner_radius: f64,
}

impl Wedge {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Nothing visible to paint.
    pub fn is_empty(&self) -> bool {
        self.sweep().abs() <= f64::EPSILON || self.radius <= 0.0
    }
}

/// Radar grid rings, data polygon and vertex labels.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarShape {
    pub ring_radii: Vec<f64>,
    pub rings: Vec<Vec<Point>>,
    pub vertices: Vec<Point>,
    pub labels: Vec<Label>,
}

/// Geometry for one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Layout {
    Bar { axes: CartesianAxes, bars: Vec<Rect> },
    Line { axes: CartesianAxes, path: LinePath },
    /// Pie, doughnut and polar-area charts.
    Wedges { center: Point, radius: f64, wedges: Vec<Wedge> },
    Radar { center: Point, radius: f64, shape: RadarShape },
}

/// Compute the layout of `config` on a `width` x `height` surface at `eased` progress.
pub fn compute<M: TextMeasure + ?Sized>(
    config: &ChartConfig,
    width: f64,
    height: f64,
    eased: f64,
    measure: &M,
) -> Layout {
    let data = &config.data;
    match &config.kind {
        ChartKind::Bar(o) => {
            let axes = cartesian_axes(&o.labels, &o.axis, width, height, ColumnMode::Cells, measure);
            let bars = bar_layout(&axes, o.labels.x.len(), data, eased);
            Layout::Bar { axes, bars }
        }
        ChartKind::Line(o) => {
            let axes = cartesian_axes(&o.labels, &o.axis, width, height, ColumnMode::Points, measure);
            let path = line_layout(&axes, o.labels.x.len(), data, eased, o.bezier_curve, o.fill_area);
            Layout::Line { axes, path }
        }
        ChartKind::Pie(o) => {
            let (center, radius) = radial_frame(width, height);
            let scaled = if o.animate_scale { radius * eased } else { radius };
            let wedges = pie_wedges(data, scaled, 0.0, o.mode, eased);
            Layout::Wedges { center, radius, wedges }
        }
        ChartKind::Doughnut(o) => {
            let (center, radius) = radial_frame(width, height);
            let wedges = doughnut_wedges(data, radius, o.cutout_percentage, o.mode, eased);
            Layout::Wedges { center, radius, wedges }
        }
        ChartKind::Polar(_) => {
            let (center, radius) = radial_frame(width, height);
            let wedges = polar_wedges(data, radius, eased);
            Layout::Wedges { center, radius, wedges }
        }
        ChartKind::Radar(o) => {
            let (center, radius) = radial_frame(width, height);
            let shape = radar_shape(data, &o.labels, center, radius, eased, o.show_grid);
            Layout::Radar { center, radius, shape }
        }
    }
}
