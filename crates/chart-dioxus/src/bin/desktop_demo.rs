// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop ChartCanvas gallery.

#[cfg(feature = "desktop")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    if let Err(e) = chart_dioxus::ui::run_demo_ui() {
        eprintln!("chart-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("This demo requires --features desktop");
}
