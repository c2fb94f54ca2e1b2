//! Drives an [`Engine`] from a [`Script`] and a frame clock.
//!
//! DESIGN
//! ======
//! A [`Replayer`] decides what happens next: the next pointer event, or a
//! frame tick while the engine still wants frames. Events due before the next
//! frame go first. Once the events run out, frames continue until the engine
//! stops asking or `trailing_frames_ms` has passed since the last event.
//!
//! The synchronous runner applies ticks back to back. The realtime runner
//! waits for each tick on a tokio clock: events sleep until their timestamp,
//! frames wait on an `interval` of the frame period.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

use gesture::config::{ConfigError, GestureConfig};
use gesture::engine::{Action, Engine, Snapshot};
use gesture::event::TimedEvent;
use serde::Serialize;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use crate::script::Script;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("frame period must be positive, got {0} ms")]
    FramePeriod(f64),
    #[error("time {0} ms is out of range")]
    TimeOutOfRange(f64),
}

/// Counts reported once a replay finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub frames: usize,
    pub snapshots: usize,
}

/// One output line.
#[derive(Debug, Serialize)]
struct SnapshotLine<'a> {
    time_ms: f64,
    #[serde(flatten)]
    snapshot: &'a Snapshot,
}

/// What the replayer does next, and at what script time.
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    Event(TimedEvent),
    Frame { at_ms: f64 },
}

pub struct Replayer {
    engine: Engine,
    events: VecDeque<TimedEvent>,
    frame_ms: f64,
    trailing_frames_ms: f64,
    now_ms: f64,
    last_event_ms: f64,
    stats: ReplayStats,
}

impl Replayer {
    /// Build the engine for `script` and apply its sizes.
    pub fn new<W: Write>(
        script: Script,
        config: GestureConfig,
        frame_ms: f64,
        out: &mut W,
    ) -> Result<Self, ReplayError> {
        if frame_ms <= 0.0 || !frame_ms.is_finite() {
            return Err(ReplayError::FramePeriod(frame_ms));
        }
        let sizes = script.sizes();
        let mut replayer = Self {
            engine: Engine::new(script.mode, config),
            events: script.events.into(),
            frame_ms,
            trailing_frames_ms: script.trailing_frames_ms.max(0.0),
            now_ms: 0.0,
            last_event_ms: 0.0,
            stats: ReplayStats::default(),
        };
        if let Some((surface, image)) = sizes {
            let actions = replayer.engine.on_surface_or_image_changed(surface, image);
            replayer.emit(&actions, out)?;
        }
        Ok(replayer)
    }

    /// Decide the next tick, or `None` when the replay is over.
    pub fn next_tick(&mut self) -> Option<Tick> {
        let next_frame_ms = self.now_ms + self.frame_ms;
        if !self.engine.needs_frame() {
            return self.events.pop_front().map(Tick::Event);
        }
        match self.events.front() {
            Some(timed) if timed.time_ms <= next_frame_ms => self.events.pop_front().map(Tick::Event),
            Some(_) => Some(Tick::Frame { at_ms: next_frame_ms }),
            None if next_frame_ms - self.last_event_ms <= self.trailing_frames_ms => {
                Some(Tick::Frame { at_ms: next_frame_ms })
            }
            None => {
                debug!(at_ms = self.now_ms, "trailing frame budget spent");
                None
            }
        }
    }

    /// Apply `tick` and print a snapshot if it asked for a redraw.
    pub fn apply<W: Write>(&mut self, tick: Tick, out: &mut W) -> Result<(), ReplayError> {
        let actions = match tick {
            Tick::Event(timed) => {
                self.now_ms = self.now_ms.max(timed.time_ms);
                self.last_event_ms = self.now_ms;
                self.stats.events += 1;
                self.engine.on_pointer_event(&timed)
            }
            Tick::Frame { at_ms } => {
                let dt_ms = at_ms - self.now_ms;
                self.now_ms = at_ms;
                self.stats.frames += 1;
                self.engine.on_frame(dt_ms)
            }
        };
        self.emit(&actions, out)
    }

    #[must_use]
    pub fn stats(&self) -> ReplayStats {
        self.stats
    }

    fn emit<W: Write>(&mut self, actions: &[Action], out: &mut W) -> Result<(), ReplayError> {
        if !actions.contains(&Action::RenderNeeded) {
            return Ok(());
        }
        let snapshot = self.engine.snapshot();
        serde_json::to_writer(&mut *out, &SnapshotLine { time_ms: self.now_ms, snapshot: &snapshot })?;
        writeln!(out)?;
        self.stats.snapshots += 1;
        Ok(())
    }
}

/// Replay `script` as fast as possible.
pub fn run<W: Write>(
    script: Script,
    config: GestureConfig,
    frame_ms: f64,
    out: &mut W,
) -> Result<ReplayStats, ReplayError> {
    let mut replayer = Replayer::new(script, config, frame_ms, out)?;
    while let Some(tick) = replayer.next_tick() {
        replayer.apply(tick, out)?;
    }
    Ok(replayer.stats())
}

/// Replay `script` paced by the tokio clock.
pub async fn run_realtime<W: Write>(
    script: Script,
    config: GestureConfig,
    frame_ms: f64,
    out: &mut W,
) -> Result<ReplayStats, ReplayError> {
    let mut replayer = Replayer::new(script, config, frame_ms, out)?;
    let start = Instant::now();
    let period = millis(frame_ms)?;
    let first = start.checked_add(period).ok_or(ReplayError::TimeOutOfRange(frame_ms))?;
    let mut frames = tokio::time::interval_at(first, period);
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while let Some(tick) = replayer.next_tick() {
        match &tick {
            Tick::Event(timed) => {
                let due = start
                    .checked_add(millis(timed.time_ms.max(0.0))?)
                    .ok_or(ReplayError::TimeOutOfRange(timed.time_ms))?;
                tokio::time::sleep_until(due).await;
                // Frames restart one period after the event that woke them.
                frames.reset();
            }
            Tick::Frame { .. } => {
                frames.tick().await;
            }
        }
        replayer.apply(tick, out)?;
    }
    Ok(replayer.stats())
}

fn millis(ms: f64) -> Result<Duration, ReplayError> {
    Duration::try_from_secs_f64(ms / 1000.0).map_err(|_| ReplayError::TimeOutOfRange(ms))
}
