//! Zoom animation progress driven by an external frame clock.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::f64::consts::PI;

/// Accelerate-decelerate curve: slow start, fast middle, slow finish.
fn ease(t: f64) -> f64 {
    0.5 - (PI * t.clamp(0.0, 1.0)).cos() / 2.0
}

/// Which way the fraction runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 0 → 1.
    Forward,
    /// 1 → 0.
    Reverse,
}

/// One step's outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub fraction: f64,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct ZoomAnimation {
    elapsed_ms: f64,
    duration_ms: f64,
    direction: Direction,
}

impl ZoomAnimation {
    #[must_use]
    pub fn new(duration_ms: f64, direction: Direction) -> Self {
        Self { elapsed_ms: 0.0, duration_ms: duration_ms.max(0.0), direction }
    }

    /// Move the playhead forward by `dt_ms` and report the eased fraction.
    pub fn advance(&mut self, dt_ms: f64) -> Progress {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
        self.progress()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        let finished = self.elapsed_ms >= self.duration_ms;
        let t = if self.duration_ms > 0.0 { self.elapsed_ms / self.duration_ms } else { 1.0 };
        let fraction = match self.direction {
            Direction::Forward => ease(t),
            Direction::Reverse => ease(1.0 - t),
        };
        // Land exactly on the end value so settled states compare cleanly.
        let fraction = if finished { self.target() } else { fraction };
        Progress { fraction, finished }
    }

    /// The fraction this animation ends on.
    #[must_use]
    pub fn target(&self) -> f64 {
        match self.direction {
            Direction::Forward => 1.0,
            Direction::Reverse => 0.0,
        }
    }
}
