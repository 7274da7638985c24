// File: crates/chart-render-skia/src/export.rs
// Summary: Headless rendering pipeline: single frames and animation strips to PNG bytes, files, or RGBA buffers.

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{Chart, ChartConfig, Color, ManualScheduler, Phase};

use crate::surface::SkiaSurface;

/// Upper bound on frames played by [`render_animation_strip`].
const MAX_STRIP_FRAMES: usize = 10_000;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Device pixel ratio; output pixels are `width * dpr` by `height * dpr`.
    pub dpr: f32,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, dpr: 1.0, background: Color::WHITE }
    }
}

impl RenderOptions {
    pub fn surface(&self) -> Result<SkiaSurface> {
        SkiaSurface::new(self.width, self.height, self.dpr, self.background)
    }
}

fn render_surface(config: &ChartConfig, eased: f64, opts: &RenderOptions) -> Result<SkiaSurface> {
    let chart = Chart::new(config.clone()).context("invalid chart configuration")?;
    let mut surface = opts.surface()?;
    chart.render_at(&mut surface, eased)?;
    Ok(surface)
}

/// Render `config` at `eased` progress (1.0 is the settled chart) and encode as PNG.
pub fn render_to_png_bytes(config: &ChartConfig, eased: f64, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_surface(config, eased, opts)?.encode_png()
}

/// Render `config` at `eased` progress to a PNG file, creating parent directories.
pub fn render_to_png(
    config: &ChartConfig,
    eased: f64,
    opts: &RenderOptions,
    output_png_path: impl AsRef<Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(config, eased, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), chart = config.chart_type().name(), "wrote png");
    Ok(())
}

/// Render `config` at `eased` progress into an RGBA8 buffer: `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(config: &ChartConfig, eased: f64, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    render_surface(config, eased, opts)?.read_rgba8()
}

/// Play the full animation with frames every `frame_interval_ms` and keep a PNG of every
/// `keep_every`-th frame plus the final one.
pub fn render_animation_strip(
    config: &ChartConfig,
    opts: &RenderOptions,
    frame_interval_ms: f64,
    keep_every: usize,
) -> Result<Vec<Vec<u8>>> {
    anyhow::ensure!(frame_interval_ms > 0.0, "frame interval must be positive, got {frame_interval_ms}");
    let keep_every = keep_every.max(1);
    let mut chart = Chart::new(config.clone()).context("invalid chart configuration")?;
    let mut surface = opts.surface()?;
    let mut sched = ManualScheduler::new();
    chart.start(&mut sched);

    let mut frames = Vec::new();
    let mut now = 0.0;
    let mut index = 0usize;
    while sched.next_due().is_some() {
        anyhow::ensure!(index < MAX_STRIP_FRAMES, "animation did not settle within {MAX_STRIP_FRAMES} frames");
        let progress = chart.on_frame(now, &mut surface, &mut sched)?;
        if index % keep_every == 0 || progress.is_complete() {
            frames.push(surface.encode_png()?);
        }
        index += 1;
        now += frame_interval_ms;
    }
    debug_assert_eq!(chart.phase(), Phase::Settled);
    tracing::debug!(chart = config.chart_type().name(), rendered = index, kept = frames.len(), "animation strip");
    Ok(frames)
}
