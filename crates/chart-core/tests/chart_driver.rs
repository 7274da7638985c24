// File: crates/chart-core/tests/chart_driver.rs
// Purpose: Chart lifecycle over a manual scheduler: start, per-frame rescheduling, restart rules, teardown.

use chart_core::{
    drive_to_completion, Chart, ChartConfig, ChartError, ChartType, Color, DrawCommand, Easing, FrameScheduler,
    ManualScheduler, Phase, RecordingSurface,
};

fn surface() -> RecordingSurface {
    RecordingSurface::new(300.0, 300.0)
}

#[test]
fn invalid_config_is_rejected_up_front() {
    assert_eq!(Chart::new(ChartConfig::bar(vec![])).unwrap_err(), ChartError::EmptyData);
    assert_eq!(
        Chart::new(ChartConfig::pie(vec![1.0, f64::NAN])).unwrap_err(),
        ChartError::NonFiniteData { index: 1 }
    );
    assert_eq!(
        Chart::new(ChartConfig::pie(vec![1.0, 2.0, 3.0, 4.0])).unwrap_err(),
        ChartError::MissingColors { colors: 3, data: 4 }
    );
    assert_eq!(
        Chart::new(ChartConfig::radar(vec![1.0, 2.0, 3.0, 4.0])).unwrap_err(),
        ChartError::MissingLabels { labels: 3, data: 4 }
    );
    assert_eq!(
        Chart::new(ChartConfig::line(vec![1.0]).with_labels(vec![])).unwrap_err(),
        ChartError::MissingLabels { labels: 0, data: 1 }
    );
}

#[test]
fn cartesian_data_beyond_x_labels_is_rejected() {
    assert_eq!(
        Chart::new(ChartConfig::bar(vec![50.0; 10])).unwrap_err(),
        ChartError::MissingLabels { labels: 7, data: 10 }
    );
    assert_eq!(
        Chart::new(ChartConfig::line(vec![1.0, 2.0, 3.0]).with_labels(vec!["a".into(), "b".into()])).unwrap_err(),
        ChartError::MissingLabels { labels: 2, data: 3 }
    );
    // fewer values than labels is fine
    assert!(Chart::new(ChartConfig::line(vec![50.0, 60.0, 70.0])).is_ok());
}

#[test]
fn start_requests_exactly_one_frame() {
    let mut sched = ManualScheduler::new();
    let mut chart = Chart::new(ChartConfig::sample(ChartType::Bar)).unwrap();
    assert_eq!(chart.phase(), Phase::Idle);
    chart.start(&mut sched);
    assert_eq!(sched.pending(), 1);
    assert_eq!(chart.phase(), Phase::Animating);
    assert!(chart.pending_frame().is_some());
}

#[test]
fn frames_reschedule_until_complete() {
    let mut sched = ManualScheduler::new();
    let mut surf = surface();
    let mut chart = Chart::new(ChartConfig::sample(ChartType::Line)).unwrap();
    chart.start(&mut sched);

    let mut now = 0.0;
    let mut last = 0.0;
    while sched.next_due().is_some() {
        let p = chart.on_frame(now, &mut surf, &mut sched).unwrap();
        assert!(p.ratio >= last);
        last = p.ratio;
        if !p.is_complete() {
            assert_eq!(sched.pending(), 1);
        }
        now += 16.0;
    }
    assert_eq!(last, 1.0);
    assert_eq!(chart.phase(), Phase::Settled);
    assert!(chart.pending_frame().is_none());
    // 1 s at the default rate, 16 ms frames, plus the timestamp-recording first frame
    assert_eq!(chart.frames_rendered(), 64);
}

#[test]
fn drive_to_completion_settles_every_kind() {
    for t in ChartType::ALL {
        let mut sched = ManualScheduler::new();
        let mut surf = surface();
        let mut chart = Chart::new(ChartConfig::sample(t)).unwrap();
        let frames = drive_to_completion(&mut chart, &mut surf, &mut sched, 0.0, 1000.0 / 60.0, 1_000).unwrap();
        assert!(frames > 1, "{}", t.name());
        assert_eq!(chart.phase(), Phase::Settled, "{}", t.name());
        assert!(sched.is_idle());
        assert!(surf.last_frame().iter().all(DrawCommand::is_finite));
    }
}

#[test]
fn max_frames_bounds_the_drive() {
    let mut sched = ManualScheduler::new();
    let mut chart = Chart::new(ChartConfig::sample(ChartType::Pie)).unwrap();
    let frames = drive_to_completion(&mut chart, &mut surface(), &mut sched, 0.0, 1.0, 5).unwrap();
    assert_eq!(frames, 5);
    assert_eq!(chart.phase(), Phase::Animating);
    assert_eq!(sched.pending(), 1);
}

#[test]
fn replacing_data_restarts_from_zero() {
    let mut sched = ManualScheduler::new();
    let mut surf = surface();
    let mut chart = Chart::new(ChartConfig::sample(ChartType::Bar).with_easing(Easing::Linear)).unwrap();
    chart.start(&mut sched);
    for ts in [0.0, 350.0, 700.0] {
        sched.next_due();
        chart.on_frame(ts, &mut surf, &mut sched).unwrap();
    }
    assert!((chart.animation().ratio() - 0.7).abs() < 1e-9);

    let restarted = chart.set_data(vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0], &mut sched).unwrap();
    assert!(restarted);
    assert_eq!(sched.pending(), 1, "old request cancelled, new one queued");
    assert_eq!(sched.cancelled(), 1);

    sched.next_due();
    let p = chart.on_frame(800.0, &mut surf, &mut sched).unwrap();
    assert_eq!(p.ratio, 0.0);
}

#[test]
fn style_change_keeps_progress() {
    let mut sched = ManualScheduler::new();
    let mut surf = surface();
    let mut chart = Chart::new(ChartConfig::sample(ChartType::Pie).with_easing(Easing::Linear)).unwrap();
    chart.start(&mut sched);
    for ts in [0.0, 400.0] {
        sched.next_due();
        chart.on_frame(ts, &mut surf, &mut sched).unwrap();
    }
    let restyled = chart.config().clone().with_colors(vec![Color::BLACK; 3]);
    assert!(!chart.set_config(restyled, &mut sched).unwrap());
    assert_eq!(sched.cancelled(), 0);

    sched.next_due();
    let p = chart.on_frame(500.0, &mut surf, &mut sched).unwrap();
    assert!((p.ratio - 0.5).abs() < 1e-9);
    assert!(surf.last_frame().contains(&DrawCommand::FillColor(Color::BLACK)));
}

#[test]
fn invalid_replacement_keeps_previous_config() {
    let mut sched = ManualScheduler::new();
    let mut chart = Chart::new(ChartConfig::sample(ChartType::Polar)).unwrap();
    let err = chart.set_data(vec![1.0, 2.0, 3.0, 4.0], &mut sched).unwrap_err();
    assert!(matches!(err, ChartError::MissingColors { .. }));
    assert_eq!(chart.config().data, vec![30.0, 50.0, 100.0]);
}

#[test]
fn teardown_cancels_pending_request() {
    let mut sched = ManualScheduler::new();
    let mut surf = surface();
    let mut chart = Chart::new(ChartConfig::sample(ChartType::Doughnut)).unwrap();
    chart.start(&mut sched);
    sched.next_due();
    chart.on_frame(0.0, &mut surf, &mut sched).unwrap();
    assert_eq!(sched.pending(), 1);

    chart.teardown(&mut sched);
    assert!(sched.is_idle());
    assert_eq!(sched.cancelled(), 1);
    assert!(chart.pending_frame().is_none());
}

#[test]
fn detached_surface_fails_without_rescheduling() {
    let mut sched = ManualScheduler::new();
    let mut surf = surface();
    let mut chart = Chart::new(ChartConfig::sample(ChartType::Radar)).unwrap();
    chart.start(&mut sched);
    sched.next_due();
    chart.on_frame(0.0, &mut surf, &mut sched).unwrap();

    surf.detach();
    sched.next_due();
    let err = chart.on_frame(16.0, &mut surf, &mut sched).unwrap_err();
    assert_eq!(err, ChartError::SurfaceUnavailable);
    assert_eq!(chart.phase(), Phase::Failed);
    assert!(sched.is_idle());

    // a restart brings it back once a surface is available again
    chart.start(&mut sched);
    assert_eq!(chart.phase(), Phase::Animating);
}

#[test]
fn render_at_does_not_touch_animation() {
    let mut surf = surface();
    let chart = Chart::new(ChartConfig::sample(ChartType::Bar)).unwrap();
    chart.render_at(&mut surf, 1.0).unwrap();
    assert_eq!(chart.phase(), Phase::Idle);
    assert!(!surf.commands().is_empty());
}

#[test]
fn scheduler_trait_object_drives_chart() {
    let mut sched = ManualScheduler::new();
    let dyn_sched: &mut dyn FrameScheduler = &mut sched;
    let mut chart = Chart::new(ChartConfig::sample(ChartType::Pie)).unwrap();
    chart.start(dyn_sched);
    assert_eq!(sched.pending(), 1);
}
