//! Frame-rate pacing for the interactive loop.

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a fixed number of frames per second.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    frame_budget: Duration,
}

impl FrameClock {
    /// `fps` of 0 is treated as 1 to avoid a division by zero.
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            frame_budget: Duration::from_secs(1) / fps,
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left in the current frame, or `None` if the frame overran.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame_budget
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }

    /// Sleep until the frame that began at `frame_start` has used its budget.
    pub fn wait(&self, frame_start: Instant) {
        if let Some(time_to_wait) = self.remaining(frame_start.elapsed()) {
            thread::sleep(time_to_wait);
        }
    }
}
