//! Replay scripts: sizes plus an ordered list of timed pointer events.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::path::Path;

use gesture::engine::Mode;
use gesture::event::TimedEvent;
use gesture::transform::Size;
use serde::Deserialize;

use crate::replay::ReplayError;

/// Frames allowed after the last event when nothing says otherwise.
pub const DEFAULT_TRAILING_FRAMES_MS: f64 = 1000.0;

fn default_trailing_frames_ms() -> f64 {
    DEFAULT_TRAILING_FRAMES_MS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub surface: Option<Size>,
    #[serde(default)]
    pub image: Option<Size>,
    #[serde(default)]
    pub events: Vec<TimedEvent>,
    /// How long frames may keep running after the last event.
    #[serde(default = "default_trailing_frames_ms")]
    pub trailing_frames_ms: f64,
}

impl Script {
    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Surface and image together, if both are given.
    #[must_use]
    pub fn sizes(&self) -> Option<(Size, Size)> {
        self.surface.zip(self.image)
    }
}
