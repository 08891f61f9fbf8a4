use super::{FrameScheduler, FrameToken, ManualScheduler};
use crate::REFRESH_RATE;
use std::{
    cell::Cell,
    time::{Duration, Instant},
};

/// Wall-clock frame source for a host loop.
///
/// Pending requests fire together once per `interval`. The host calls
/// `poll` every pass through its loop and forwards the returned tokens.
pub struct FrameClock {
    queue: ManualScheduler,
    interval: Duration,
    last_frame: Cell<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_interval(REFRESH_RATE)
    }

    pub fn with_interval(interval: Duration) -> Self {
        FrameClock {
            queue: ManualScheduler::new(),
            interval,
            last_frame: Cell::new(Instant::now()),
        }
    }

    pub fn poll(&self) -> Vec<FrameToken> {
        self.poll_at(Instant::now())
    }

    pub(crate) fn poll_at(&self, now: Instant) -> Vec<FrameToken> {
        if now.saturating_duration_since(self.last_frame.get()) < self.interval {
            return Vec::new();
        }
        self.last_frame.set(now);
        self.queue.advance_frame()
    }

    /// Time left until the next frame is due.
    pub fn until_next_frame(&self) -> Duration {
        self.interval
            .saturating_sub(self.last_frame.get().elapsed())
    }

    pub fn pending(&self) -> usize {
        self.queue.pending()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&self) -> FrameToken {
        self.queue.request_frame()
    }

    fn cancel_frame(&self, token: FrameToken) {
        self.queue.cancel_frame(token)
    }
}
