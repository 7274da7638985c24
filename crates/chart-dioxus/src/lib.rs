// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus desktop ChartCanvas component that animates a chart and shows its frames (desktop only).
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - Frames are rendered by the Skia raster surface and shown as PNG data URLs.
// - The component's frame loop is a Dioxus task; unmounting drops it together with its scheduler.

#[cfg(feature = "desktop")]
pub mod ui {
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use base64::Engine as _;
    use chart_core::{Chart, ChartConfig, Color, ManualScheduler};
    use chart_render_skia::RenderOptions;
    use dioxus::prelude::*;
    use tokio::sync::watch;

    /// Delay between animation frames (about 60 Hz).
    const FRAME: Duration = Duration::from_millis(16);

    #[derive(Props, Clone, PartialEq)]
    pub struct ChartCanvasProps {
        pub config: ChartConfig,
        #[props(default = 300)]
        pub width: u32,
        #[props(default = 300)]
        pub height: u32,
        #[props(default = Color::WHITE)]
        pub background: Color,
    }

    /// Animated chart. A new `config` with different data restarts the animation;
    /// style-only changes repaint at the current progress.
    #[component]
    pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
        let img_src = use_signal(|| Option::<String>::None);
        let error = use_signal(|| Option::<String>::None);

        let (tx, rx) = use_hook(|| {
            let (tx, rx) = watch::channel((props.config.clone(), props.background));
            (Rc::new(tx), rx)
        });
        use_effect(use_reactive((&props.config, &props.background), move |input| {
            tx.send_replace(input);
        }));

        let opts = RenderOptions { width: props.width, height: props.height, dpr: 1.0, background: props.background };
        use_future(move || frame_loop(rx.clone(), opts.clone(), img_src, error));

        rsx! {
            div {
                style: format!("position:relative; width:{}px; height:{}px;", props.width, props.height),
                if let Some(msg) = &*error.read() {
                    div { style: "color:#c33; font:12px sans-serif;", "{msg}" }
                }
                if let Some(src) = &*img_src.read() {
                    img { style: "width:100%; height:100%;", src: src.clone() }
                }
            }
        }
    }

    async fn frame_loop(
        mut rx: watch::Receiver<(ChartConfig, Color)>,
        mut opts: RenderOptions,
        mut img_src: Signal<Option<String>>,
        mut error: Signal<Option<String>>,
    ) {
        let (initial, background) = rx.borrow_and_update().clone();
        opts.background = background;
        let mut chart = match Chart::new(initial) {
            Ok(chart) => chart,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let mut surface = match opts.surface() {
            Ok(s) => s,
            Err(e) => {
                error.set(Some(format!("{e:#}")));
                return;
            }
        };
        let mut sched = ManualScheduler::new();
        chart.start(&mut sched);
        let clock = Instant::now();

        loop {
            let mut repaint = false;
            if rx.has_changed().unwrap_or(false) {
                let (config, background) = rx.borrow_and_update().clone();
                if background != opts.background {
                    opts.background = background;
                    match opts.surface() {
                        Ok(s) => {
                            surface = s;
                            repaint = true;
                        }
                        Err(e) => tracing::warn!(error = %format!("{e:#}"), "surface rebuild failed"),
                    }
                }
                match chart.set_config(config, &mut sched) {
                    Ok(restarted) => {
                        error.set(None);
                        repaint |= !restarted;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "rejected chart config");
                        error.set(Some(e.to_string()));
                    }
                }
            }

            if sched.next_due().is_some() || repaint {
                let now_ms = clock.elapsed().as_secs_f64() * 1000.0;
                if let Err(e) = chart.on_frame(now_ms, &mut surface, &mut sched) {
                    error.set(Some(e.to_string()));
                    return;
                }
                match surface.encode_png() {
                    Ok(bytes) => {
                        let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
                        img_src.set(Some(format!("data:image/png;base64,{b64}")));
                    }
                    Err(e) => tracing::warn!(error = %format!("{e:#}"), "png encode failed"),
                }
            }

            if sched.is_idle() {
                // settled: sleep until the config changes
                if rx.changed().await.is_err() {
                    break;
                }
            } else {
                tokio::time::sleep(FRAME).await;
            }
        }
        chart.teardown(&mut sched);
    }

    /// Tiny demo launcher: all six chart types, with buttons that swap data (restarts the
    /// animation) and theme (repaints in place).
    pub fn run_demo_ui() -> Result<(), String> {
        use chart_core::{theme, ChartType};

        #[component]
        fn App() -> Element {
            let mut shift = use_signal(|| 0usize);
            let mut dark = use_signal(|| false);

            let theme = if *dark.read() { theme::Theme::dark() } else { theme::Theme::classic() };
            let configs: Vec<ChartConfig> = ChartType::ALL
                .iter()
                .map(|&t| {
                    let mut cfg = ChartConfig::sample(t);
                    let n = cfg.data.len();
                    cfg.data.rotate_left(*shift.read() % n);
                    theme.apply(&mut cfg);
                    cfg
                })
                .collect();
            let background = theme.background;

            rsx! {
                div { style: "display:flex; gap:6px; padding:8px;",
                    button { onclick: move |_| *shift.write() += 1, "Shuffle data" }
                    button { onclick: move |_| {
                            let now = *dark.read();
                            dark.set(!now);
                        }, "Toggle theme" }
                }
                div { style: format!("display:flex; flex-wrap:wrap; gap:8px; padding:8px; background:{};", css(background)),
                    for cfg in configs {
                        ChartCanvas { key: "{cfg.chart_type().name()}", config: cfg, background: background }
                    }
                }
            }
        }

        fn css(c: Color) -> String {
            format!("rgba({},{},{},{})", c.r, c.g, c.b, c.alpha_f())
        }

        let cfg = dioxus_desktop::Config::new().with_window(
            dioxus_desktop::WindowBuilder::new().with_title("Animated Charts"),
        );
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}
