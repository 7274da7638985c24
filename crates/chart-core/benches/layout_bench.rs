use chart_core::layout;
use chart_core::{ChartConfig, ChartType, RecordingSurface};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_layout(c: &mut Criterion) {
    let measure = RecordingSurface::new(800.0, 500.0);
    let mut group = c.benchmark_group("layout_compute");
    for t in ChartType::ALL {
        let cfg = ChartConfig::sample(t);
        group.bench_with_input(BenchmarkId::from_parameter(t.name()), &cfg, |b, cfg| {
            b.iter(|| black_box(layout::compute(cfg, 800.0, 500.0, black_box(0.5), &measure)));
        });
    }
    group.finish();
}

fn bench_wide_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_points");
    for &n in &[100usize, 1_000usize] {
        let data: Vec<f64> = (0..n).map(|i| 50.0 + (i as f64 * 0.05).sin() * 40.0).collect();
        let labels: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        let cfg = ChartConfig::line(data).with_labels(labels);
        let measure = RecordingSurface::new(1_600.0, 600.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cfg, |b, cfg| {
            b.iter(|| black_box(layout::compute(cfg, 1_600.0, 600.0, 1.0, &measure)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_wide_line);
criterion_main!(benches);
