// File: crates/chart-core/src/animation.rs
// Summary: Per-instance animation state; integrates wall-clock timestamps into eased progress.
// Notes:
// - Progress accumulates in animation-seconds: `rate / 60` per wall-clock second.
// - A full animation is ANIMATION_DURATION_SECS animation-seconds; the ratio clamps at 1.

use crate::config::AnimationOptions;
use crate::types::{ANIMATION_DURATION_SECS, BASELINE_FPS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// No animation started yet.
    #[default]
    Idle,
    Animating,
    /// The final frame has been produced; terminal until restarted.
    Settled,
    /// The render cycle hit an unrecoverable surface error; terminal until restarted.
    Failed,
}

/// Progress values for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameProgress {
    /// Linear completion in `[0, 1]`.
    pub ratio: f64,
    /// `ratio` passed through the configured easing.
    pub eased: f64,
}

impl FrameProgress {
    pub fn is_complete(&self) -> bool {
        self.ratio >= 1.0
    }
}

/// Owned, per-chart animation state.
#[derive(Clone, Debug, Default)]
pub struct AnimationState {
    progress: f64,
    last_timestamp_ms: Option<f64>,
    phase: Phase,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to progress 0 and begin animating. Nothing from a previous run is resumed.
    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.last_timestamp_ms = None;
        self.phase = Phase::Animating;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Accumulated animation-seconds.
    pub fn progress_accumulator(&self) -> f64 {
        self.progress
    }

    pub fn last_timestamp_ms(&self) -> Option<f64> {
        self.last_timestamp_ms
    }

    pub fn ratio(&self) -> f64 {
        (self.progress / ANIMATION_DURATION_SECS).clamp(0.0, 1.0)
    }

    pub(crate) fn fail(&mut self) {
        self.phase = Phase::Failed;
    }

    /// Advance to `timestamp_ms` and return this frame's progress.
    ///
    /// The first tick after a restart only records the timestamp. Timestamps that go
    /// backwards contribute nothing, and non-finite timestamps are ignored. Once settled, further ticks return the final progress.
    pub fn tick(&mut self, timestamp_ms: f64, opts: &AnimationOptions) -> FrameProgress {
        match self.phase {
            Phase::Idle => self.restart(),
            Phase::Settled | Phase::Failed => return self.progress_for(opts),
            Phase::Animating => {}
        }

        let delta_secs = match self.last_timestamp_ms {
            Some(last) if timestamp_ms.is_finite() => ((timestamp_ms - last) / 1000.0).max(0.0),
            _ => 0.0,
        };
        if timestamp_ms.is_finite() && self.last_timestamp_ms.map_or(true, |last| timestamp_ms >= last) {
            self.last_timestamp_ms = Some(timestamp_ms);
        }

        let step = opts.progress_rate_per_second / BASELINE_FPS * delta_secs;
        if step.is_finite() && step > 0.0 {
            self.progress += step;
        }

        let progress = self.progress_for(opts);
        if progress.is_complete() {
            self.phase = Phase::Settled;
        }
        progress
    }

    fn progress_for(&self, opts: &AnimationOptions) -> FrameProgress {
        let ratio = self.ratio();
        FrameProgress { ratio, eased: opts.easing.apply(ratio) }
    }
}
