//! Gesture tunables, optionally overridden from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::*;
use crate::fling::FlingParams;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },
    #[error("{var} must be {requirement}, got {value}")]
    OutOfRange { var: &'static str, requirement: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    pub over_scale_factor: f64,
    pub overscroll: f64,
    pub fling_friction: f64,
    pub spring_stiffness: f64,
    pub min_fling_velocity: f64,
    pub max_fling_velocity: f64,
    pub touch_slop: f64,
    pub double_tap_slop: f64,
    pub long_press_timeout_ms: f64,
    pub double_tap_timeout_ms: f64,
    pub zoom_duration_ms: f64,
    pub stroke_width: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            over_scale_factor: DEFAULT_OVER_SCALE_FACTOR,
            overscroll: DEFAULT_OVERSCROLL,
            fling_friction: DEFAULT_FLING_FRICTION,
            spring_stiffness: DEFAULT_SPRING_STIFFNESS,
            min_fling_velocity: DEFAULT_MIN_FLING_VELOCITY,
            max_fling_velocity: DEFAULT_MAX_FLING_VELOCITY,
            touch_slop: DEFAULT_TOUCH_SLOP,
            double_tap_slop: DEFAULT_DOUBLE_TAP_SLOP,
            long_press_timeout_ms: DEFAULT_LONG_PRESS_TIMEOUT_MS,
            double_tap_timeout_ms: DEFAULT_DOUBLE_TAP_TIMEOUT_MS,
            zoom_duration_ms: DEFAULT_ZOOM_DURATION_MS,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl GestureConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `GESTURE_OVER_SCALE_FACTOR`: default 1.5, must exceed 1
    /// - `GESTURE_OVERSCROLL`: default 50
    /// - `GESTURE_FLING_FRICTION`: default 4 per second
    /// - `GESTURE_SPRING_STIFFNESS`: default 12 per second
    /// - `GESTURE_MIN_FLING_VELOCITY`: default 50
    /// - `GESTURE_MAX_FLING_VELOCITY`: default 8000
    /// - `GESTURE_TOUCH_SLOP`: default 8
    /// - `GESTURE_DOUBLE_TAP_SLOP`: default 100
    /// - `GESTURE_LONG_PRESS_TIMEOUT_MS`: default 500
    /// - `GESTURE_DOUBLE_TAP_TIMEOUT_MS`: default 300
    /// - `GESTURE_ZOOM_DURATION_MS`: default 300
    /// - `GESTURE_STROKE_WIDTH`: default 4
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but not a number, or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Same as [`GestureConfig::from_env`] with a custom variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but not a number, or is out of range.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let parse = |var: &'static str, default: f64| -> Result<f64, ConfigError> {
            let Some(raw) = lookup(var) else {
                return Ok(default);
            };
            let parsed = raw.trim().parse::<f64>();
            match parsed {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(ConfigError::Parse { var, value: raw }),
            }
        };

        let config = Self {
            over_scale_factor: parse("GESTURE_OVER_SCALE_FACTOR", defaults.over_scale_factor)?,
            overscroll: parse("GESTURE_OVERSCROLL", defaults.overscroll)?,
            fling_friction: parse("GESTURE_FLING_FRICTION", defaults.fling_friction)?,
            spring_stiffness: parse("GESTURE_SPRING_STIFFNESS", defaults.spring_stiffness)?,
            min_fling_velocity: parse("GESTURE_MIN_FLING_VELOCITY", defaults.min_fling_velocity)?,
            max_fling_velocity: parse("GESTURE_MAX_FLING_VELOCITY", defaults.max_fling_velocity)?,
            touch_slop: parse("GESTURE_TOUCH_SLOP", defaults.touch_slop)?,
            double_tap_slop: parse("GESTURE_DOUBLE_TAP_SLOP", defaults.double_tap_slop)?,
            long_press_timeout_ms: parse("GESTURE_LONG_PRESS_TIMEOUT_MS", defaults.long_press_timeout_ms)?,
            double_tap_timeout_ms: parse("GESTURE_DOUBLE_TAP_TIMEOUT_MS", defaults.double_tap_timeout_ms)?,
            zoom_duration_ms: parse("GESTURE_ZOOM_DURATION_MS", defaults.zoom_duration_ms)?,
            stroke_width: parse("GESTURE_STROKE_WIDTH", defaults.stroke_width)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the constraints the components depend on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] for the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, &'static str, f64, bool); 8] = [
            ("GESTURE_OVER_SCALE_FACTOR", "greater than 1", self.over_scale_factor, self.over_scale_factor > 1.0),
            ("GESTURE_OVERSCROLL", "non-negative", self.overscroll, self.overscroll >= 0.0),
            ("GESTURE_FLING_FRICTION", "positive", self.fling_friction, self.fling_friction > 0.0),
            ("GESTURE_SPRING_STIFFNESS", "positive", self.spring_stiffness, self.spring_stiffness > 0.0),
            (
                "GESTURE_MIN_FLING_VELOCITY",
                "non-negative",
                self.min_fling_velocity,
                self.min_fling_velocity >= 0.0,
            ),
            ("GESTURE_MAX_FLING_VELOCITY", "positive", self.max_fling_velocity, self.max_fling_velocity > 0.0),
            (
                "GESTURE_MAX_FLING_VELOCITY",
                "at least the minimum fling velocity",
                self.max_fling_velocity,
                self.max_fling_velocity >= self.min_fling_velocity,
            ),
            ("GESTURE_ZOOM_DURATION_MS", "non-negative", self.zoom_duration_ms, self.zoom_duration_ms >= 0.0),
        ];
        match checks.into_iter().find(|(_, _, _, ok)| !ok) {
            Some((var, requirement, value, _)) => Err(ConfigError::OutOfRange { var, requirement, value }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn fling_params(&self) -> FlingParams {
        FlingParams {
            friction: self.fling_friction,
            spring_stiffness: self.spring_stiffness,
            overscroll: self.overscroll,
        }
    }
}
