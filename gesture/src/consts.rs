//! Shared numeric constants for the gesture crate.

// ── Zoom ────────────────────────────────────────────────────────

/// How far past the fit-to-surface scale the zoomed-in image is drawn.
pub const DEFAULT_OVER_SCALE_FACTOR: f64 = 1.5;

/// Duration of the double-tap zoom animation, in milliseconds.
pub const DEFAULT_ZOOM_DURATION_MS: f64 = 300.0;

// ── Fling ───────────────────────────────────────────────────────

/// Distance a fling may travel past the pan bounds before springing back.
pub const DEFAULT_OVERSCROLL: f64 = 50.0;

/// Exponential velocity decay rate while coasting, per second.
pub const DEFAULT_FLING_FRICTION: f64 = 4.0;

/// Angular frequency of the critically damped spring-back, per second.
pub const DEFAULT_SPRING_STIFFNESS: f64 = 12.0;

/// Velocity (units per second) below which a coasting axis comes to rest.
pub const FLING_SETTLE_VELOCITY: f64 = 20.0;

/// Distance from the spring target under which a springing axis snaps to rest.
pub const SPRING_SETTLE_DISTANCE: f64 = 0.5;

// ── Recognizer ──────────────────────────────────────────────────

/// Distance a contact must travel from its down point before a drag starts.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Maximum distance between the two downs of a double tap.
pub const DEFAULT_DOUBLE_TAP_SLOP: f64 = 100.0;

/// Press length, in milliseconds, at which a held contact stops being a tap.
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: f64 = 500.0;

/// Longest gap, in milliseconds, between a tap's up and the next down of a double tap.
pub const DEFAULT_DOUBLE_TAP_TIMEOUT_MS: f64 = 300.0;

/// Slowest release (units per second) that still starts a fling.
pub const DEFAULT_MIN_FLING_VELOCITY: f64 = 50.0;

/// Fling velocity cap, per axis, in units per second.
pub const DEFAULT_MAX_FLING_VELOCITY: f64 = 8_000.0;

/// Only samples this recent (milliseconds) feed the release velocity estimate.
pub const VELOCITY_WINDOW_MS: f64 = 100.0;

// ── Drawing ─────────────────────────────────────────────────────

/// Stroke width for recorded paths.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
