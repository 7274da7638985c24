// File: crates/window-demo/src/lib.rs
// Summary: Gallery state of the window demo: one chart, its scheduler and its raster surface.

use anyhow::{Context, Result};
use chart_core::{Chart, ChartConfig, ManualScheduler, Phase, Theme};
use chart_render_skia::SkiaSurface;
use winit::dpi::PhysicalSize;

/// The gallery: one chart at a time, driven by a manual scheduler that the event loop
/// services once per redraw.
pub struct Gallery {
    pub configs: Vec<ChartConfig>,
    pub theme: Theme,
    pub index: usize,
    pub chart: Chart,
    pub sched: ManualScheduler,
    pub surface: SkiaSurface,
}

impl Gallery {
    pub fn new(configs: Vec<ChartConfig>, theme: Theme, size: PhysicalSize<u32>, dpr: f32) -> Result<Self> {
        let first = configs.first().cloned().context("no charts to show")?;
        let surface = make_surface(size, dpr, &theme)?;
        let mut gallery = Self { configs, theme, index: 0, chart: Chart::new(first)?, sched: ManualScheduler::new(), surface };
        gallery.chart.start(&mut gallery.sched);
        Ok(gallery)
    }

    pub fn advance(&mut self) -> Result<()> {
        self.chart.teardown(&mut self.sched);
        self.index = (self.index + 1) % self.configs.len();
        self.chart = Chart::new(self.configs[self.index].clone())?;
        self.chart.start(&mut self.sched);
        tracing::info!(chart = self.chart.config().chart_type().name(), "showing");
        Ok(())
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>, dpr: f32) -> Result<()> {
        self.surface = make_surface(size, dpr, &self.theme)?;
        if !matches!(self.chart.phase(), Phase::Animating) {
            let eased = self.chart.config().animation.easing.apply(self.chart.animation().ratio());
            self.chart.render_at(&mut self.surface, eased)?;
        }
        Ok(())
    }

    /// Service a due frame, if any. Returns whether another frame is wanted.
    pub fn tick(&mut self, now_ms: f64) -> Result<bool> {
        if self.sched.next_due().is_some() {
            self.chart.on_frame(now_ms, &mut self.surface, &mut self.sched)?;
        }
        Ok(!self.sched.is_idle())
    }
}

pub fn make_surface(size: PhysicalSize<u32>, dpr: f32, theme: &Theme) -> Result<SkiaSurface> {
    let logical = size.to_logical::<f64>(dpr as f64);
    SkiaSurface::new(logical.width.max(1.0) as u32, logical.height.max(1.0) as u32, dpr, theme.background)
}

/// Copy RGBA8 pixels into softbuffer's 0RGB words.
pub fn blit(rgba: &[u8], frame: &mut [u32]) {
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
}
