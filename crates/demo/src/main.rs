// File: crates/demo/src/main.rs
// Summary: Demo renders every chart type to PNGs: the settled chart plus a strip of animation frames.
// Usage: chart-demo [data.csv] [--theme classic|dark|high-contrast] [--out DIR]

use anyhow::{Context, Result};
use chart_core::theme;
use chart_demo::cli::DemoArgs;
use chart_demo::{build_configs, load_label_values, resolve_path};
use chart_render_skia::{render_animation_strip, render_to_png, RenderOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Frame spacing used for animation strips (60 Hz).
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Keep every n-th frame of a strip.
const STRIP_EVERY: usize = 12;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = DemoArgs::parse();
    let dataset = match &args.input {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            println!("Using input file: {}", path.display());
            if used_alt {
                println!("  (extension swapped between .csv/.cvs)");
            }
            let ds = load_label_values(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            if ds.is_empty() {
                anyhow::bail!("no rows loaded; expected label,value columns");
            }
            println!("Loaded {} values", ds.len());
            Some(ds)
        }
        None => None,
    };

    let theme = theme::find(&args.theme);
    tracing::info!(theme = theme.name, sample = dataset.is_none(), "rendering chart set");
    let opts = RenderOptions { background: theme.background, ..RenderOptions::default() };

    for cfg in build_configs(dataset.as_ref(), &theme) {
        let name = cfg.chart_type().name();
        let out = args.out_dir.join(format!("chart_{name}.png"));
        render_to_png(&cfg, 1.0, &opts, &out).with_context(|| format!("rendering {name}"))?;
        println!("Wrote {}", out.display());

        let frames = render_animation_strip(&cfg, &opts, FRAME_MS, STRIP_EVERY)?;
        for (i, png) in frames.iter().enumerate() {
            let path = args.out_dir.join(format!("chart_{name}_f{i:02}.png"));
            std::fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
        }
        println!("Wrote {} animation frames for {name}", frames.len());
    }
    Ok(())
}
