// File: crates/chart-core/src/layout/radial.rs
// Summary: Wedge geometry for pie/doughnut/polar charts and the radar polygon with its grid.

use super::{Label, RadarShape, Wedge};
use crate::config::AnimationMode;
use crate::geometry::{safe_ratio, Point, FULL_TURN, TOP_ANGLE};
use crate::types::{TextAlign, TextBaseline, RADAR_LABEL_LIFT, RADAR_RINGS, RADIAL_INSET};

/// Canvas centre and the outer radius left after the inset.
pub fn radial_frame(width: f64, height: f64) -> (Point, f64) {
    let radius = (width.min(height) / 2.0 - RADIAL_INSET).max(0.0);
    (Point::new(width / 2.0, height / 2.0), radius)
}

fn data_max(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Proportional wedges starting at 12 o'clock.
///
/// `Whole` scales each wedge's share by `eased` and packs them, so the ring sweeps open.
/// `Slice` keeps the full share for the start-angle cursor and grows each wedge's end by
/// `eased`, so wedges stay anchored at their final start angles.
pub fn pie_wedges(data: &[f64], radius: f64, inner_radius: f64, mode: AnimationMode, eased: f64) -> Vec<Wedge> {
    let total: f64 = data.iter().sum();
    let mut start = TOP_ANGLE;
    data.iter()
        .enumerate()
        .map(|(index, &value)| {
            let share = safe_ratio(value, total);
            let (slice, sweep) = match mode {
                AnimationMode::Whole => {
                    let slice = eased * share * FULL_TURN;
                    (slice, slice)
                }
                AnimationMode::Slice => {
                    let slice = share * FULL_TURN;
                    (slice, slice * eased)
                }
            };
            let wedge = Wedge { index, start_angle: start, end_angle: start + sweep, radius, inner_radius };
            start += slice;
            wedge
        })
        .collect()
}

pub fn doughnut_wedges(data: &[f64], radius: f64, cutout_percentage: f64, mode: AnimationMode, eased: f64) -> Vec<Wedge> {
    let inner = radius * cutout_percentage.clamp(0.0, 100.0) / 100.0;
    pie_wedges(data, radius, inner, mode, eased)
}

/// Equal-angle wedges whose radius follows `value / max`.
pub fn polar_wedges(data: &[f64], max_radius: f64, eased: f64) -> Vec<Wedge> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = data_max(data);
    let slice = FULL_TURN / data.len() as f64;
    data.iter()
        .enumerate()
        .map(|(index, &value)| {
            let start = TOP_ANGLE + index as f64 * slice;
            let radius = (safe_ratio(value, max) * max_radius * eased).max(0.0);
            Wedge { index, start_angle: start, end_angle: start + slice, radius, inner_radius: 0.0 }
        })
        .collect()
}

/// Radar polygon, vertex labels, and (when `show_grid`) the concentric ring polygons.
/// Vertex `i` sits at `2π/N·i − π/2`. Ring vertex `j` sits at `2π/N·j`, so the grid is
/// rotated a quarter turn against the data polygon.
pub fn radar_shape(
    data: &[f64],
    labels: &[String],
    center: Point,
    max_radius: f64,
    eased: f64,
    show_grid: bool,
) -> RadarShape {
    if data.is_empty() {
        return RadarShape { ring_radii: Vec::new(), rings: Vec::new(), vertices: Vec::new(), labels: Vec::new() };
    }
    let max = data_max(data);
    let step = FULL_TURN / data.len() as f64;
    let angle = |i: usize| step * i as f64 + TOP_ANGLE;

    let (ring_radii, rings): (Vec<f64>, Vec<Vec<Point>>) = if show_grid {
        (1..=RADAR_RINGS)
            .map(|ring| {
                let r = max_radius * ring as f64 / RADAR_RINGS as f64;
                let polygon = (0..data.len()).map(|j| center.offset_polar(r, step * j as f64)).collect::<Vec<_>>();
                (r, polygon)
            })
            .unzip()
    } else {
        (Vec::new(), Vec::new())
    };

    let vertices: Vec<Point> = data
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let r = (safe_ratio(value, max) * max_radius * eased).max(0.0);
            center.offset_polar(r, angle(i))
        })
        .collect();

    let labels = vertices
        .iter()
        .zip(labels)
        .map(|(v, text)| Label {
            text: text.clone(),
            at: Point::new(v.x, v.y - RADAR_LABEL_LIFT),
            align: TextAlign::Center,
            baseline: TextBaseline::Alphabetic,
        })
        .collect();

    RadarShape { ring_radii, rings, vertices, labels }
}
