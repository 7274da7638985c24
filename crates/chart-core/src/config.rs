// File: crates/chart-core/src/config.rs
// Summary: Per-chart configuration with defaults, builders, and up-front validation.

use crate::color::Color;
use crate::easing::Easing;
use crate::error::{ChartError, Result};
use crate::types::Font;

const TEAL_60: Color = Color::from_argb(153, 75, 192, 192);
const TEAL: Color = Color::from_argb(255, 75, 192, 192);
const TEAL_20: Color = Color::from_argb(51, 75, 192, 192);
const ORANGE: Color = Color::rgb(0xF3, 0x86, 0x30);
const SAND: Color = Color::rgb(0xE0, 0xE4, 0xCC);
const SKY: Color = Color::rgb(0x69, 0xD2, 0xE7);

/// Chart type tag, used to pick defaults and name charts in logs/outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Doughnut,
    Polar,
    Radar,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::Polar,
        ChartType::Radar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Polar => "polar",
            ChartType::Radar => "radar",
        }
    }
}

/// Animation timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationOptions {
    /// Animation steps at a 60 Hz baseline: progress advances by `rate / 60`
    /// animation-seconds per wall-clock second, and a full animation is 2 animation-seconds.
    pub progress_rate_per_second: f64,
    pub easing: Easing,
}

impl AnimationOptions {
    pub fn new(progress_rate_per_second: f64, easing: Easing) -> Self {
        Self { progress_rate_per_second, easing }
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self::new(120.0, Easing::EaseInOutQuad)
    }
}

/// How pie and doughnut wedges grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationMode {
    /// Every wedge's angular extent scales with progress; the whole ring sweeps open.
    #[default]
    Whole,
    /// Wedges keep their final start angle and each grows in place.
    Slice,
}

/// Grid and scale-label styling shared by bar and line charts.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub font_color: Color,
    pub font: Font,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::from_argb(128, 0, 0, 0),
            grid_line_width: 1.0,
            font_color: Color::rgb(0x66, 0x66, 0x66),
            font: Font::default(),
        }
    }
}

/// X categories and numeric Y scale labels.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabels {
    pub x: Vec<String>,
    pub y: Vec<String>,
}

impl AxisLabels {
    /// Largest y label that parses as a number, or 0 when none do.
    pub fn y_max(&self) -> f64 {
        self.y
            .iter()
            .filter_map(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
            .unwrap_or(0.0)
    }

    /// Replace the y labels with `rows` evenly spaced ticks from a rounded-up `data_max`
    /// down to one step, largest first so the scale reads top to bottom.
    pub fn fit_y(&mut self, data_max: f64, rows: usize) {
        let rows = rows.max(1);
        let max = nice_ceil(data_max);
        let step = max / rows as f64;
        self.y = (0..rows).map(|i| format_tick(max - step * i as f64)).collect();
    }
}

/// Round up to one significant digit (81 -> 90, 100 -> 100, 0.34 -> 0.4).
fn nice_ceil(v: f64) -> f64 {
    if !(v.is_finite() && v > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(v.log10().floor());
    (v / magnitude).ceil() * magnitude
}

fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

impl Default for AxisLabels {
    fn default() -> Self {
        let x = ["Jan", "Feb", "March", "April", "May", "June", "July"];
        Self {
            x: x.iter().map(|s| s.to_string()).collect(),
            y: (3..=20).map(|i| (i * 5).to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarOptions {
    pub labels: AxisLabels,
    pub axis: AxisStyle,
    pub bar_color: Color,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self { labels: AxisLabels::default(), axis: AxisStyle::default(), bar_color: TEAL_60 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineOptions {
    pub labels: AxisLabels,
    pub axis: AxisStyle,
    pub line_color: Color,
    pub line_width: f64,
    pub point_color: Color,
    pub point_stroke_color: Color,
    pub fill_color: Color,
    pub point_radius: f64,
    /// Join points with cubic curves instead of straight lines.
    pub bezier_curve: bool,
    /// Close the line along the plot bottom and fill it. The line itself is not stroked.
    pub fill_area: bool,
    pub show_points: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            labels: AxisLabels::default(),
            axis: AxisStyle::default(),
            line_color: TEAL_60,
            line_width: 2.0,
            point_color: Color::WHITE,
            point_stroke_color: TEAL,
            fill_color: TEAL_20,
            point_radius: 4.0,
            bezier_curve: true,
            fill_area: true,
            show_points: true,
        }
    }
}

/// Per-segment fill colors and the separator stroke drawn around each wedge.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentStyle {
    pub colors: Vec<Color>,
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self { colors: vec![ORANGE, SAND, SKY], stroke_color: Color::WHITE, stroke_width: 2.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PieOptions {
    pub segments: SegmentStyle,
    pub mode: AnimationMode,
    /// Grow the radius with progress as well as the angles.
    pub animate_scale: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoughnutOptions {
    pub segments: SegmentStyle,
    pub mode: AnimationMode,
    /// Hole radius as a percentage of the outer radius.
    pub cutout_percentage: f64,
}

impl Default for DoughnutOptions {
    fn default() -> Self {
        Self { segments: SegmentStyle::default(), mode: AnimationMode::Whole, cutout_percentage: 50.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PolarOptions {
    pub segments: SegmentStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarOptions {
    pub labels: Vec<String>,
    pub color: Color,
    pub line_width: f64,
    pub fill_alpha: f64,
    pub show_grid: bool,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub font: Font,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            labels: (1..=3).map(|i| format!("Label {i}")).collect(),
            color: SKY,
            line_width: 2.0,
            fill_alpha: 0.5,
            show_grid: true,
            grid_line_color: Color::rgb(0xCC, 0xCC, 0xCC),
            grid_line_width: 1.0,
            font: Font::new("sans-serif", 10.0),
        }
    }
}

/// Chart-kind specific options.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartKind {
    Bar(BarOptions),
    Line(LineOptions),
    Pie(PieOptions),
    Doughnut(DoughnutOptions),
    Polar(PolarOptions),
    Radar(RadarOptions),
}

impl ChartKind {
    pub fn chart_type(&self) -> ChartType {
        match self {
            ChartKind::Bar(_) => ChartType::Bar,
            ChartKind::Line(_) => ChartType::Line,
            ChartKind::Pie(_) => ChartType::Pie,
            ChartKind::Doughnut(_) => ChartType::Doughnut,
            ChartKind::Polar(_) => ChartType::Polar,
            ChartKind::Radar(_) => ChartType::Radar,
        }
    }

    pub fn segments(&self) -> Option<&SegmentStyle> {
        match self {
            ChartKind::Pie(o) => Some(&o.segments),
            ChartKind::Doughnut(o) => Some(&o.segments),
            ChartKind::Polar(o) => Some(&o.segments),
            _ => None,
        }
    }

    pub fn segments_mut(&mut self) -> Option<&mut SegmentStyle> {
        match self {
            ChartKind::Pie(o) => Some(&mut o.segments),
            ChartKind::Doughnut(o) => Some(&mut o.segments),
            ChartKind::Polar(o) => Some(&mut o.segments),
            _ => None,
        }
    }

    pub fn axis_labels(&self) -> Option<&AxisLabels> {
        match self {
            ChartKind::Bar(o) => Some(&o.labels),
            ChartKind::Line(o) => Some(&o.labels),
            _ => None,
        }
    }
}

/// Immutable per-instance chart input.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub data: Vec<f64>,
    pub animation: AnimationOptions,
    pub kind: ChartKind,
}

impl ChartConfig {
    pub fn new(data: Vec<f64>, kind: ChartKind) -> Self {
        let easing = match kind {
            ChartKind::Bar(_) | ChartKind::Line(_) => Easing::EaseInOutQuad,
            _ => Easing::EaseOutBounce,
        };
        Self { data, animation: AnimationOptions::new(120.0, easing), kind }
    }

    pub fn bar(data: Vec<f64>) -> Self { Self::new(data, ChartKind::Bar(BarOptions::default())) }
    pub fn line(data: Vec<f64>) -> Self { Self::new(data, ChartKind::Line(LineOptions::default())) }
    pub fn pie(data: Vec<f64>) -> Self { Self::new(data, ChartKind::Pie(PieOptions::default())) }
    pub fn doughnut(data: Vec<f64>) -> Self { Self::new(data, ChartKind::Doughnut(DoughnutOptions::default())) }
    pub fn polar(data: Vec<f64>) -> Self { Self::new(data, ChartKind::Polar(PolarOptions::default())) }
    pub fn radar(data: Vec<f64>) -> Self { Self::new(data, ChartKind::Radar(RadarOptions::default())) }

    /// Default configuration for `chart_type` including its sample data.
    pub fn sample(chart_type: ChartType) -> Self {
        let cartesian = vec![100.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0];
        let radial = vec![30.0, 50.0, 100.0];
        match chart_type {
            ChartType::Bar => Self::bar(cartesian),
            ChartType::Line => Self::line(cartesian),
            ChartType::Pie => Self::pie(radial),
            ChartType::Doughnut => Self::doughnut(radial),
            ChartType::Polar => Self::polar(radial),
            ChartType::Radar => Self::radar(radial),
        }
    }

    pub fn chart_type(&self) -> ChartType {
        self.kind.chart_type()
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.animation.easing = easing;
        self
    }

    pub fn with_progress_rate(mut self, rate: f64) -> Self {
        self.animation.progress_rate_per_second = rate;
        self
    }

    /// Replace segment colors (pie, doughnut, polar). No effect on other kinds.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        if let Some(seg) = self.kind.segments_mut() {
            seg.colors = colors;
        }
        self
    }

    /// Replace category labels: x labels for bar/line, vertex labels for radar.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        match &mut self.kind {
            ChartKind::Bar(o) => o.labels.x = labels,
            ChartKind::Line(o) => o.labels.x = labels,
            ChartKind::Radar(o) => o.labels = labels,
            _ => {}
        }
        self
    }

    /// Fit the bar/line y scale to the data maximum with `rows` grid rows.
    pub fn with_fitted_scale(mut self, rows: usize) -> Self {
        let max = self.data.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::max);
        match &mut self.kind {
            ChartKind::Bar(o) => o.labels.fit_y(max, rows),
            ChartKind::Line(o) => o.labels.fit_y(max, rows),
            _ => {}
        }
        self
    }

    /// Check the configuration before any animation starts.
    pub fn validate(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(ChartError::EmptyData);
        }
        if let Some(index) = self.data.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::NonFiniteData { index });
        }
        if let Some(seg) = self.kind.segments() {
            if seg.colors.len() < self.data.len() {
                return Err(ChartError::MissingColors { colors: seg.colors.len(), data: self.data.len() });
            }
        }
        match &self.kind {
            ChartKind::Bar(BarOptions { labels, .. }) | ChartKind::Line(LineOptions { labels, .. })
                if labels.x.is_empty() || labels.x.len() < self.data.len() =>
            {
                Err(ChartError::MissingLabels { labels: labels.x.len(), data: self.data.len() })
            }
            ChartKind::Radar(o) if o.labels.len() < self.data.len() => {
                Err(ChartError::MissingLabels { labels: o.labels.len(), data: self.data.len() })
            }
            ChartKind::Doughnut(o) if !(0.0..=100.0).contains(&o.cutout_percentage) => {
                Err(ChartError::InvalidCutout(o.cutout_percentage))
            }
            _ => Ok(()),
        }
    }
}
