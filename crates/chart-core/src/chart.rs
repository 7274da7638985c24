// File: crates/chart-core/src/chart.rs
// Summary: Animated chart instance; ties configuration, animation state, layout and renderer to a frame loop.

use crate::animation::{AnimationState, FrameProgress, Phase};
use crate::config::{ChartConfig, ChartKind};
use crate::error::Result;
use crate::layout::{self, Layout};
use crate::render::render_frame;
use crate::scheduler::{FrameScheduler, FrameToken, ManualScheduler};
use crate::surface::{Surface, TextMeasure};

/// One chart instance. Owns its configuration and animation state; draws onto a surface
/// the host hands it on every frame.
#[derive(Debug)]
pub struct Chart {
    config: ChartConfig,
    animation: AnimationState,
    pending: Option<FrameToken>,
    frames_rendered: u64,
}

impl Chart {
    /// Validate `config` and create an idle chart. Configuration errors surface here,
    /// before any frame is requested.
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        note_degenerate(&config);
        Ok(Self { config, animation: AnimationState::new(), pending: None, frames_rendered: 0 })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn phase(&self) -> Phase {
        self.animation.phase()
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Begin (or restart) the animation from progress 0 and request the first frame.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }
        self.animation.restart();
        self.pending = Some(scheduler.request_frame());
        tracing::debug!(chart = self.config.chart_type().name(), "animation started");
    }

    /// Handle a delivered frame: advance the animation to `timestamp_ms`, repaint the whole
    /// scene, and request another frame unless the animation is complete.
    ///
    /// A detached surface fails the frame; the chart then stays in [`Phase::Failed`] and
    /// schedules nothing further.
    pub fn on_frame(
        &mut self,
        timestamp_ms: f64,
        surface: &mut dyn Surface,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<FrameProgress> {
        self.pending = None;
        if matches!(self.animation.phase(), Phase::Failed) {
            return Ok(FrameProgress { ratio: self.animation.ratio(), eased: 0.0 });
        }

        let progress = self.animation.tick(timestamp_ms, &self.config.animation);
        if let Err(err) = render_frame(surface, &self.config, progress.eased) {
            self.animation.fail();
            tracing::warn!(chart = self.config.chart_type().name(), error = %err, "render cycle stopped");
            return Err(err);
        }
        self.frames_rendered += 1;

        if progress.is_complete() {
            tracing::debug!(
                chart = self.config.chart_type().name(),
                frames = self.frames_rendered,
                "animation settled"
            );
        } else {
            self.pending = Some(scheduler.request_frame());
        }
        Ok(progress)
    }

    /// Swap the configuration. The animation restarts only when `data` changed; any other
    /// edit is picked up by the next frame without rewinding progress.
    /// Returns whether the animation restarted.
    pub fn set_config(&mut self, config: ChartConfig, scheduler: &mut dyn FrameScheduler) -> Result<bool> {
        config.validate()?;
        let data_changed = config.data != self.config.data;
        self.config = config;
        if data_changed {
            note_degenerate(&self.config);
            tracing::debug!(chart = self.config.chart_type().name(), "data changed; restarting animation");
            self.start(scheduler);
        }
        Ok(data_changed)
    }

    /// Replace the data values, restarting the animation when they differ.
    pub fn set_data(&mut self, data: Vec<f64>, scheduler: &mut dyn FrameScheduler) -> Result<bool> {
        let config = ChartConfig { data, ..self.config.clone() };
        self.set_config(config, scheduler)
    }

    /// Cancel any outstanding frame request. Call when the host surface goes away.
    pub fn teardown(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
            tracing::debug!(chart = self.config.chart_type().name(), "pending frame cancelled");
        }
    }

    /// Layout at an arbitrary eased progress, without touching animation state.
    pub fn layout<M: TextMeasure + ?Sized>(&self, width: f64, height: f64, eased: f64, measure: &M) -> Layout {
        layout::compute(&self.config, width, height, eased, measure)
    }

    /// Paint a single frame at `eased` progress, without touching animation state.
    pub fn render_at(&self, surface: &mut dyn Surface, eased: f64) -> Result<Layout> {
        render_frame(surface, &self.config, eased)
    }
}

/// Run `chart` to completion on `surface`, delivering frames every `frame_interval_ms`
/// starting at `start_ms`. Stops early after `max_frames`. Returns the frames rendered.
pub fn drive_to_completion(
    chart: &mut Chart,
    surface: &mut dyn Surface,
    scheduler: &mut ManualScheduler,
    start_ms: f64,
    frame_interval_ms: f64,
    max_frames: usize,
) -> Result<usize> {
    if chart.pending_frame().is_none() && !matches!(chart.phase(), Phase::Settled) {
        chart.start(scheduler);
    }
    let mut frames = 0;
    let mut now = start_ms;
    while frames < max_frames {
        if scheduler.next_due().is_none() {
            break;
        }
        chart.on_frame(now, surface, scheduler)?;
        frames += 1;
        now += frame_interval_ms;
    }
    Ok(frames)
}

fn note_degenerate(config: &ChartConfig) {
    let degenerate = match &config.kind {
        ChartKind::Pie(_) | ChartKind::Doughnut(_) => config.data.iter().sum::<f64>() <= 0.0,
        ChartKind::Polar(_) | ChartKind::Radar(_) => config.data.iter().all(|v| *v <= 0.0),
        ChartKind::Bar(o) => o.labels.y_max() <= 0.0,
        ChartKind::Line(o) => o.labels.y_max() <= 0.0,
    };
    if degenerate {
        tracing::debug!(
            chart = config.chart_type().name(),
            "data has no positive scale; shapes render at zero size"
        );
    }
}
