// File: crates/chart-core/src/render.rs
// Summary: Scene renderer; clears the surface and paints a layout in fixed layer order.
// Notes:
// - Layer order: grid lines, axis labels, border, data shapes, markers/segment labels.
// - Zero-size shapes (degenerate data) are skipped rather than painted.

use crate::color::Color;
use crate::config::{ChartConfig, ChartKind, LineOptions, RadarOptions, SegmentStyle};
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect, FULL_TURN};
use crate::layout::{self, CartesianAxes, Label, Layout, LinePath, PathStep, RadarShape, Wedge};
use crate::surface::Surface;
use crate::types::{Font, TextAlign, TextBaseline};

/// Lay out and paint one frame of `config` at `eased` progress.
pub fn render_frame(surface: &mut dyn Surface, config: &ChartConfig, eased: f64) -> Result<Layout> {
    if !surface.is_attached() {
        return Err(ChartError::SurfaceUnavailable);
    }
    let (width, height) = surface.size();
    let layout = layout::compute(config, width, height, eased, &*surface);
    paint(surface, config, &layout);
    Ok(layout)
}

/// Clear the whole surface and paint `layout` with the styles in `config`.
pub fn paint(surface: &mut dyn Surface, config: &ChartConfig, layout: &Layout) {
    let (width, height) = surface.size();
    surface.clear_rect(Rect::from_xywh(0.0, 0.0, width, height));

    match (layout, &config.kind) {
        (Layout::Bar { axes, bars }, ChartKind::Bar(o)) => {
            paint_axes(surface, axes, o.axis.grid_line_color, o.axis.grid_line_width, o.axis.font_color, &o.axis.font);
            surface.set_fill_color(o.bar_color);
            for bar in bars.iter().filter(|b| !b.is_empty()) {
                surface.fill_rect(*bar);
            }
        }
        (Layout::Line { axes, path }, ChartKind::Line(o)) => {
            paint_axes(surface, axes, o.axis.grid_line_color, o.axis.grid_line_width, o.axis.font_color, &o.axis.font);
            paint_line(surface, path, o);
        }
        (Layout::Wedges { center, wedges, .. }, kind) => {
            if let Some(style) = kind.segments() {
                paint_wedges(surface, *center, wedges, style);
            }
        }
        (Layout::Radar { shape, .. }, ChartKind::Radar(o)) => paint_radar(surface, shape, o),
        _ => tracing::warn!("layout does not match chart kind; frame left blank"),
    }
}

fn paint_axes(
    surface: &mut dyn Surface,
    axes: &CartesianAxes,
    grid_color: Color,
    grid_width: f64,
    font_color: Color,
    font: &Font,
) {
    surface.set_line_width(grid_width);
    surface.set_stroke_color(grid_color);

    surface.begin_path();
    for line in axes.row_lines.iter().chain(&axes.column_lines) {
        surface.move_to(line.from);
        surface.line_to(line.to);
    }
    surface.stroke();

    surface.set_fill_color(font_color);
    surface.set_font(font);
    paint_labels(surface, axes.y_labels.iter().chain(&axes.x_labels));

    let [top_right, bottom_right, bottom_left] = axes.border;
    surface.begin_path();
    surface.move_to(top_right);
    surface.line_to(bottom_right);
    surface.line_to(bottom_left);
    surface.stroke();
}

fn paint_labels<'a>(surface: &mut dyn Surface, labels: impl Iterator<Item = &'a Label>) {
    let mut current: Option<(TextAlign, TextBaseline)> = None;
    for label in labels {
        if current != Some((label.align, label.baseline)) {
            surface.set_text_align(label.align);
            surface.set_text_baseline(label.baseline);
            current = Some((label.align, label.baseline));
        }
        surface.fill_text(&label.text, label.at);
    }
}

fn paint_line(surface: &mut dyn Surface, path: &LinePath, o: &LineOptions) {
    surface.begin_path();
    surface.set_stroke_color(o.line_color);
    surface.set_line_width(o.line_width);
    surface.move_to(path.start);
    for step in &path.steps {
        match *step {
            PathStep::Line(p) => surface.line_to(p),
            PathStep::Bezier { c1, c2, to } => surface.bezier_curve_to(c1, c2, to),
        }
    }
    match path.fill_close {
        Some([bottom_right, bottom_left]) => {
            surface.line_to(bottom_right);
            surface.line_to(bottom_left);
            surface.close_path();
            surface.set_fill_color(o.fill_color);
            surface.fill();
        }
        None => surface.stroke(),
    }

    if o.show_points && o.point_radius > 0.0 {
        for p in &path.points {
            surface.begin_path();
            surface.arc(*p, o.point_radius, 0.0, FULL_TURN, true);
            surface.set_fill_color(o.point_color);
            surface.fill();
            surface.set_stroke_color(o.point_stroke_color);
            surface.set_line_width(1.0);
            surface.stroke();
        }
    }
}

fn paint_wedges(surface: &mut dyn Surface, center: Point, wedges: &[Wedge], style: &SegmentStyle) {
    for wedge in wedges.iter().filter(|w| !w.is_empty()) {
        surface.begin_path();
        if wedge.inner_radius > 0.0 {
            surface.arc(center, wedge.radius, wedge.start_angle, wedge.end_angle, false);
            surface.arc(center, wedge.inner_radius, wedge.end_angle, wedge.start_angle, true);
        } else {
            surface.move_to(center);
            surface.arc(center, wedge.radius, wedge.start_angle, wedge.end_angle, false);
        }
        surface.close_path();
        surface.set_fill_color(style.colors.get(wedge.index).copied().unwrap_or(Color::TRANSPARENT));
        surface.fill();
        surface.set_stroke_color(style.stroke_color);
        surface.set_line_width(style.stroke_width);
        surface.stroke();
    }
}

fn trace_polygon(surface: &mut dyn Surface, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else { return };
    surface.begin_path();
    surface.move_to(*first);
    for p in rest {
        surface.line_to(*p);
    }
    surface.close_path();
}

fn paint_radar(surface: &mut dyn Surface, shape: &RadarShape, o: &RadarOptions) {
    if !shape.rings.is_empty() {
        surface.set_stroke_color(o.grid_line_color);
        surface.set_line_width(o.grid_line_width);
        for ring in &shape.rings {
            trace_polygon(surface, ring);
            surface.stroke();
        }
    }

    let collapsed = shape.vertices.windows(2).all(|w| w[0] == w[1]);
    if !collapsed {
        trace_polygon(surface, &shape.vertices);
        surface.set_stroke_color(o.color);
        surface.set_fill_color(o.color);
        surface.set_line_width(o.line_width);
        surface.stroke();
        surface.set_global_alpha(o.fill_alpha);
        surface.fill();
        surface.set_global_alpha(1.0);
    }

    surface.set_fill_color(o.color);
    surface.set_font(&o.font);
    paint_labels(surface, shape.labels.iter());
}
