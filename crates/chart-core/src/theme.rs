// File: crates/chart-core/src/theme.rs
// Summary: Color presets that restyle a chart configuration (classic light, dark, high-contrast).

use crate::color::Color;
use crate::config::{ChartConfig, ChartKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_label: Color,
    pub series: Color,
    pub series_fill: Color,
    pub point: Color,
    pub separator: Color,
    pub segments: Vec<Color>,
}

impl Theme {
    /// The palette the stock chart defaults use, on a white canvas.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::WHITE,
            grid: Color::from_argb(128, 0, 0, 0),
            axis_label: Color::rgb(0x66, 0x66, 0x66),
            series: Color::from_argb(153, 75, 192, 192),
            series_fill: Color::from_argb(51, 75, 192, 192),
            point: Color::WHITE,
            separator: Color::WHITE,
            segments: vec![
                Color::rgb(0xF3, 0x86, 0x30),
                Color::rgb(0xE0, 0xE4, 0xCC),
                Color::rgb(0x69, 0xD2, 0xE7),
                Color::rgb(0xA7, 0xDB, 0xD8),
                Color::rgb(0xFA, 0x69, 0x00),
                Color::rgb(0x38, 0x3A, 0x3F),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(40, 40, 45),
            axis_label: Color::rgb(235, 235, 245),
            series: Color::rgb(64, 160, 255),
            series_fill: Color::from_argb(96, 64, 160, 255),
            point: Color::rgb(18, 18, 20),
            separator: Color::rgb(18, 18, 20),
            segments: vec![
                Color::rgb(64, 160, 255),
                Color::rgb(40, 200, 120),
                Color::rgb(220, 80, 80),
                Color::rgb(255, 230, 70),
                Color::rgb(150, 110, 230),
                Color::rgb(96, 156, 255),
            ],
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::BLACK,
            grid: Color::rgb(0x44, 0x44, 0x44),
            axis_label: Color::WHITE,
            series: Color::rgb(0x00, 0xff, 0xff),
            series_fill: Color::from_argb(120, 0x00, 0xaa, 0xff),
            point: Color::BLACK,
            separator: Color::BLACK,
            segments: vec![
                Color::rgb(0x00, 0xff, 0xff),
                Color::rgb(0xff, 0xff, 0x00),
                Color::rgb(0xff, 0x00, 0xff),
                Color::rgb(0x00, 0xff, 0x00),
                Color::rgb(0xff, 0x80, 0x00),
                Color::WHITE,
            ],
        }
    }

    /// Segment color for index `i`, cycling through the palette.
    pub fn segment(&self, i: usize) -> Color {
        if self.segments.is_empty() {
            return self.series;
        }
        self.segments[i % self.segments.len()]
    }

    /// Restyle `config` in place. Segment charts get one palette color per data value,
    /// so a themed configuration always satisfies the color-count check.
    pub fn apply(&self, config: &mut ChartConfig) {
        let n = config.data.len();
        if let Some(seg) = config.kind.segments_mut() {
            seg.colors = (0..n).map(|i| self.segment(i)).collect();
            seg.stroke_color = self.separator;
            return;
        }
        match &mut config.kind {
            ChartKind::Bar(o) => {
                o.axis.grid_line_color = self.grid;
                o.axis.font_color = self.axis_label;
                o.bar_color = self.series;
            }
            ChartKind::Line(o) => {
                o.axis.grid_line_color = self.grid;
                o.axis.font_color = self.axis_label;
                o.line_color = self.series;
                o.point_stroke_color = self.series;
                o.point_color = self.point;
                o.fill_color = self.series_fill;
            }
            ChartKind::Radar(o) => {
                o.color = self.series;
                o.grid_line_color = self.grid;
            }
            ChartKind::Pie(_) | ChartKind::Doughnut(_) | ChartKind::Polar(_) => {}
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
