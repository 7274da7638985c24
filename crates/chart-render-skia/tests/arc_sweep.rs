// File: crates/chart-render-skia/tests/arc_sweep.rs
// Purpose: Canvas-style arc sweep normalisation used when emitting Skia arcs.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use chart_render_skia::canvas_sweep;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn clockwise_sweeps() {
    assert!(close(canvas_sweep(0.0, FRAC_PI_2, false), FRAC_PI_2));
    assert!(close(canvas_sweep(0.0, 3.0 * TAU, false), TAU));
    // end behind start wraps forward
    assert!(close(canvas_sweep(FRAC_PI_2, 0.0, false), TAU - FRAC_PI_2));
    assert_eq!(canvas_sweep(1.0, 1.0, false), 0.0);
}

#[test]
fn counter_clockwise_sweeps() {
    assert!(close(canvas_sweep(PI, 0.0, true), -PI));
    assert!(close(canvas_sweep(TAU, 0.0, true), -TAU));
    // a full turn drawn "backwards" is still a circle, as point markers use it
    assert!(close(canvas_sweep(0.0, TAU, true), -TAU));
    assert!(close(canvas_sweep(0.0, FRAC_PI_2, true), -(TAU - FRAC_PI_2)));
}
