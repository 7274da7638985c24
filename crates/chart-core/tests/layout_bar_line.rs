// File: crates/chart-core/tests/layout_bar_line.rs
// Purpose: Plot-area reservation, bar rectangles and line path geometry on a 300x300 surface.

use chart_core::layout::{self, PathStep};
use chart_core::{ChartConfig, ChartKind, Layout, RecordingSurface, TextAlign};

const W: f64 = 300.0;
const H: f64 = 300.0;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn measure() -> RecordingSurface {
    // 6px per character at the default 12px font
    RecordingSurface::new(W, H)
}

#[test]
fn plot_area_reserves_padding_and_labels() {
    let cfg = ChartConfig::bar(vec![100.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0]);
    let Layout::Bar { axes, .. } = layout::compute(&cfg, W, H, 1.0, &measure()) else {
        panic!("bar layout expected");
    };
    // widest y label is "100": 3 chars * 6px
    assert!(close(axes.widest_y_label, 18.0));
    assert!(close(axes.plot.x, 38.0));
    assert!(close(axes.plot.y, 20.0));
    assert!(close(axes.plot.width, 242.0));
    assert!(close(axes.plot.height, 300.0 - 40.0 - 12.0 - 3.0));
    assert_eq!(axes.scale_max, 100.0);
    assert_eq!(axes.row_lines.len(), 18);
    assert_eq!(axes.column_lines.len(), 7);
    assert!(axes.y_labels.iter().all(|l| l.align == TextAlign::Right && close(l.at.x, 33.0)));
}

#[test]
fn bars_fill_half_cells_and_reach_full_height_at_max() {
    let cfg = ChartConfig::bar(vec![100.0, 50.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let Layout::Bar { axes, bars } = layout::compute(&cfg, W, H, 1.0, &measure()) else {
        panic!("bar layout expected");
    };
    let cell = axes.plot.width / 7.0;
    assert_eq!(bars.len(), 7);
    assert!(close(bars[0].x, axes.plot.x + cell / 4.0));
    assert!(close(bars[0].width, cell / 2.0));
    assert!(close(bars[0].height, axes.plot.height));
    assert!(close(bars[0].y, axes.plot.y));
    assert!(close(bars[1].height, axes.plot.height / 2.0));
    assert!(close(bars[1].bottom(), axes.plot.bottom()));
    assert!(bars[2].is_empty());
}

#[test]
fn bars_scale_with_eased_progress() {
    let cfg = ChartConfig::bar(vec![100.0; 7]);
    let Layout::Bar { axes, bars } = layout::compute(&cfg, W, H, 0.5, &measure()) else {
        panic!("bar layout expected");
    };
    assert!(bars.iter().all(|b| close(b.height, axes.plot.height / 2.0)));

    let Layout::Bar { bars, .. } = layout::compute(&cfg, W, H, 0.0, &measure()) else {
        panic!("bar layout expected");
    };
    assert!(bars.iter().all(|b| b.is_empty()));
}

#[test]
fn line_points_span_the_width() {
    let cfg = ChartConfig::line(vec![100.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0]);
    let Layout::Line { axes, path } = layout::compute(&cfg, W, H, 1.0, &measure()) else {
        panic!("line layout expected");
    };
    let cell = axes.plot.width / 6.0;
    assert_eq!(path.points.len(), 7);
    assert!(close(path.points[0].x, axes.plot.x));
    assert!(close(path.points[6].x, axes.plot.right()));
    assert!(close(path.points[1].x - path.points[0].x, cell));
    assert!(close(path.points[0].y, axes.plot.y));
    assert_eq!(path.start, path.points[0]);
    // x labels sit under each point, not at cell centres
    assert!(close(axes.x_labels[1].at.x, axes.plot.x + cell));
}

#[test]
fn bezier_controls_sit_at_horizontal_midpoints() {
    let cfg = ChartConfig::line(vec![100.0, 50.0, 75.0, 0.0, 0.0, 0.0, 0.0]);
    let Layout::Line { path, .. } = layout::compute(&cfg, W, H, 1.0, &measure()) else {
        panic!("line layout expected");
    };
    assert_eq!(path.steps.len(), 6);
    let (a, b) = (path.points[0], path.points[1]);
    match path.steps[0] {
        PathStep::Bezier { c1, c2, to } => {
            assert!(close(c1.x, (a.x + b.x) / 2.0) && close(c1.y, a.y));
            assert!(close(c2.x, (a.x + b.x) / 2.0) && close(c2.y, b.y));
            assert_eq!(to, b);
        }
        other => panic!("bezier step expected, got {other:?}"),
    }
}

#[test]
fn straight_line_and_fill_closure() {
    let mut cfg = ChartConfig::line(vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]);
    if let ChartKind::Line(o) = &mut cfg.kind {
        o.bezier_curve = false;
    }
    let Layout::Line { axes, path } = layout::compute(&cfg, W, H, 1.0, &measure()) else {
        panic!("line layout expected");
    };
    assert!(path.steps.iter().all(|s| matches!(s, PathStep::Line(_))));
    let [br, bl] = path.fill_close.expect("fill enabled by default");
    assert!(close(br.y, axes.plot.bottom()) && close(bl.y, axes.plot.bottom()));
    assert!(close(br.x, axes.plot.right()) && close(bl.x, axes.plot.x));

    if let ChartKind::Line(o) = &mut cfg.kind {
        o.fill_area = false;
    }
    let Layout::Line { path, .. } = layout::compute(&cfg, W, H, 1.0, &measure()) else {
        panic!("line layout expected");
    };
    assert!(path.fill_close.is_none());
}

#[test]
fn fill_closes_at_plot_edges_with_fewer_values_than_labels() {
    let cfg = ChartConfig::line(vec![50.0, 60.0, 70.0]);
    let Layout::Line { axes, path } = layout::compute(&cfg, W, H, 1.0, &measure()) else {
        panic!("line layout expected");
    };
    assert_eq!(path.points.len(), 3);
    assert!(path.points[2].x < axes.plot.right());
    let [br, bl] = path.fill_close.expect("fill enabled by default");
    assert!(close(br.x, axes.plot.right()) && close(br.y, axes.plot.bottom()));
    assert!(close(bl.x, axes.plot.x) && close(bl.y, axes.plot.bottom()));
}

#[test]
fn zero_scale_collapses_to_baseline() {
    let mut cfg = ChartConfig::bar(vec![10.0, 20.0]);
    if let ChartKind::Bar(o) = &mut cfg.kind {
        o.labels.y = vec!["0".into()];
    }
    let Layout::Bar { bars, .. } = layout::compute(&cfg, W, H, 1.0, &measure()) else {
        panic!("bar layout expected");
    };
    assert!(bars.iter().all(|b| b.height == 0.0 && b.y.is_finite()));
}
