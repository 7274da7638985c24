// File: crates/chart-core/tests/layout_radial.rs
// Purpose: Wedge angles/radii for pie, doughnut and polar charts; radar polygon and grid rings.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use chart_core::layout::{self, pie_wedges, radar_shape, Wedge};
use chart_core::{AnimationMode, ChartConfig, ChartKind, Layout, Point, RecordingSurface};

const W: f64 = 300.0;
const H: f64 = 300.0;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn wedges_of(cfg: &ChartConfig, eased: f64) -> (Point, f64, Vec<Wedge>) {
    match layout::compute(cfg, W, H, eased, &RecordingSurface::new(W, H)) {
        Layout::Wedges { center, radius, wedges } => (center, radius, wedges),
        other => panic!("wedge layout expected, got {other:?}"),
    }
}

#[test]
fn pie_covers_full_turn_from_twelve_oclock() {
    let (center, radius, wedges) = wedges_of(&ChartConfig::pie(vec![30.0, 50.0, 100.0]), 1.0);
    assert_eq!(center, Point::new(150.0, 150.0));
    assert_eq!(radius, 130.0);
    assert!(close(wedges[0].start_angle, -FRAC_PI_2));
    let total: f64 = wedges.iter().map(Wedge::sweep).sum();
    assert!(close(total, TAU));
    assert!(close(wedges[1].sweep(), 50.0 / 180.0 * TAU));
    for pair in wedges.windows(2) {
        assert!(close(pair[0].end_angle, pair[1].start_angle));
    }
    assert!(close(wedges[2].end_angle, -FRAC_PI_2 + TAU));
}

#[test]
fn whole_mode_sweeps_the_ring_open() {
    let wedges = pie_wedges(&[1.0, 1.0], 100.0, 0.0, AnimationMode::Whole, 0.5);
    let total: f64 = wedges.iter().map(Wedge::sweep).sum();
    assert!(close(total, PI));
    // packed: the second wedge starts where the first ends
    assert!(close(wedges[1].start_angle, wedges[0].end_angle));
}

#[test]
fn slice_mode_keeps_final_start_angles() {
    let wedges = pie_wedges(&[1.0, 1.0], 100.0, 0.0, AnimationMode::Slice, 0.5);
    assert!(close(wedges[0].start_angle, -FRAC_PI_2));
    assert!(close(wedges[1].start_angle, -FRAC_PI_2 + PI));
    assert!(close(wedges[0].sweep(), PI / 2.0));
    assert!(close(wedges[1].sweep(), PI / 2.0));
}

#[test]
fn animate_scale_grows_radius() {
    let mut cfg = ChartConfig::pie(vec![1.0, 2.0, 3.0]);
    if let ChartKind::Pie(o) = &mut cfg.kind {
        o.animate_scale = true;
    }
    let (_, radius, wedges) = wedges_of(&cfg, 0.5);
    assert!(wedges.iter().all(|w| close(w.radius, radius * 0.5)));
}

#[test]
fn all_zero_pie_has_no_nan() {
    let (_, _, wedges) = wedges_of(&ChartConfig::pie(vec![0.0, 0.0, 0.0]), 1.0);
    assert!(wedges.iter().all(|w| w.start_angle.is_finite() && w.end_angle.is_finite()));
    assert!(wedges.iter().all(Wedge::is_empty));
}

#[test]
fn doughnut_cutout_sets_inner_radius() {
    let (_, radius, wedges) = wedges_of(&ChartConfig::doughnut(vec![30.0, 50.0, 100.0]), 1.0);
    assert!(wedges.iter().all(|w| close(w.inner_radius, radius * 0.5)));

    let mut cfg = ChartConfig::doughnut(vec![1.0, 1.0, 1.0]);
    if let ChartKind::Doughnut(o) = &mut cfg.kind {
        o.cutout_percentage = 0.0;
    }
    let (_, _, wedges) = wedges_of(&cfg, 1.0);
    assert!(wedges.iter().all(|w| w.inner_radius == 0.0));
}

#[test]
fn polar_wedges_are_equal_angle_with_proportional_radius() {
    let (_, radius, wedges) = wedges_of(&ChartConfig::polar(vec![30.0, 50.0, 100.0]), 1.0);
    for w in &wedges {
        assert!(close(w.sweep(), TAU / 3.0));
    }
    assert!(close(wedges[2].radius, radius));
    assert!(close(wedges[0].radius, radius * 0.3));

    let (_, _, half) = wedges_of(&ChartConfig::polar(vec![30.0, 50.0, 100.0]), 0.5);
    assert!(close(half[2].radius, radius * 0.5));
}

#[test]
fn radar_vertices_and_rings() {
    let center = Point::new(150.0, 150.0);
    let labels: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let shape = radar_shape(&[100.0, 50.0, 100.0, 50.0], &labels, center, 100.0, 1.0, true);

    assert_eq!(shape.ring_radii.len(), 5);
    for (i, r) in shape.ring_radii.iter().enumerate() {
        assert!(close(*r, 100.0 * (i + 1) as f64 / 5.0));
    }
    assert_eq!(shape.rings[4].len(), 4);
    // first spoke points straight up
    assert!(close(shape.vertices[0].x, 150.0) && close(shape.vertices[0].y, 50.0));
    assert!(close(shape.vertices[1].x, 200.0) && close(shape.vertices[1].y, 150.0));
    // ring spokes start at 3 o'clock, a quarter turn from the data spokes
    assert!(close(shape.rings[0][0].x, 150.0 + 20.0) && close(shape.rings[0][0].y, 150.0));
    assert!(close(shape.rings[4][0].x, 250.0) && close(shape.rings[4][0].y, 150.0));
    assert!(close(shape.rings[4][1].x, 150.0) && close(shape.rings[4][1].y, 250.0));

    assert_eq!(shape.labels.len(), 4);
    assert!(close(shape.labels[0].at.y, shape.vertices[0].y - 10.0));
    assert_eq!(shape.labels[2].text, "c");
}

#[test]
fn radar_without_grid_and_zero_progress() {
    let labels = vec!["x".to_string(), "y".to_string(), "z".to_string()];
    let center = Point::new(10.0, 10.0);
    let shape = radar_shape(&[1.0, 2.0, 3.0], &labels, center, 50.0, 0.0, false);
    assert!(shape.rings.is_empty());
    assert!(shape.vertices.iter().all(|v| close(v.x, 10.0) && close(v.y, 10.0)));
}
