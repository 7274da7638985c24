// File: crates/chart-core/src/scheduler.rs
// Summary: Frame-scheduling capability ("call me before the next refresh") and a manual, host-driven queue.

use std::collections::VecDeque;

/// Handle for a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(pub u64);

/// Host capability that delivers one frame callback per request.
///
/// The host later resumes the requesting chart with a fresh timestamp; a cancelled
/// token must never be delivered.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameToken;
    fn cancel(&mut self, token: FrameToken);
}

/// FIFO scheduler driven explicitly by the host (headless rendering, tests, UI loops).
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<FrameToken>,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending request, if any.
    pub fn next_due(&mut self) -> Option<FrameToken> {
        self.pending.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of requests cancelled before delivery.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.pending.push_back(token);
        token
    }

    fn cancel(&mut self, token: FrameToken) {
        let before = self.pending.len();
        self.pending.retain(|t| *t != token);
        self.cancelled += before - self.pending.len();
    }
}
