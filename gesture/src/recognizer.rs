//! Tap, double-tap, drag and fling recognition over timed pointer events.
//!
//! The recognizer follows the authoritative contact through a
//! [`PointerTracker`], so drags keep flowing smoothly while fingers join and
//! leave. Drag distances use the platform scroll convention: previous
//! position minus current position.
//!
//! Any press released before `long_press_timeout_ms` without travel is a tap,
//! however long it was held, and arms the double tap.

#[cfg(test)]
#[path = "recognizer_test.rs"]
mod recognizer_test;

use std::collections::VecDeque;

use crate::config::GestureConfig;
use crate::consts::VELOCITY_WINDOW_MS;
use crate::error::GestureError;
use crate::event::{PointerEvent, TimedEvent};
use crate::tracker::PointerTracker;
use crate::transform::Point;

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// The tracked contact moved; distances are previous minus current.
    Drag { distance_x: f64, distance_y: f64 },
    /// The last contact lifted while moving fast enough to coast.
    Fling { velocity_x: f64, velocity_y: f64 },
    /// A short press and release without travel.
    SingleTap { x: f64, y: f64 },
    /// A press shortly after a tap, near it. Reported on the second down.
    DoubleTap { x: f64, y: f64 },
}

#[derive(Debug, Clone, Copy)]
struct Stamp {
    position: Point,
    time_ms: f64,
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: GestureConfig,
    tracker: PointerTracker,
    press: Option<Stamp>,
    last: Point,
    dragging: bool,
    tap_candidate: bool,
    in_double_tap: bool,
    last_tap: Option<Stamp>,
    samples: VecDeque<Stamp>,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            tracker: PointerTracker::new(),
            press: None,
            last: Point::ZERO,
            dragging: false,
            tap_candidate: false,
            in_double_tap: false,
            last_tap: None,
            samples: VecDeque::new(),
        }
    }

    /// Feed one event and collect whatever it completes.
    ///
    /// # Errors
    ///
    /// Propagates [`PointerTracker`] invariant violations; recognizer state is
    /// unchanged when one is returned.
    pub fn on_event(&mut self, timed: &TimedEvent) -> Result<Vec<Gesture>, GestureError> {
        self.tracker.on_event(&timed.event)?;
        let now = timed.time_ms;
        let mut gestures = Vec::new();

        match &timed.event {
            PointerEvent::Down { contact } => {
                let position = contact.position();
                self.in_double_tap = false;
                if let Some(tap) = self.last_tap.take() {
                    let quick = now - tap.time_ms <= self.config.double_tap_timeout_ms;
                    let near = position.sub(tap.position).length() <= self.config.double_tap_slop;
                    if quick && near {
                        gestures.push(Gesture::DoubleTap { x: position.x, y: position.y });
                        self.in_double_tap = true;
                    }
                }
                self.press = Some(Stamp { position, time_ms: now });
                self.dragging = false;
                self.tap_candidate = !self.in_double_tap;
                self.restart_samples(position, now);
            }
            PointerEvent::SecondaryDown { contacts, .. } | PointerEvent::SecondaryUp { contacts, .. } => {
                self.tap_candidate = false;
                let tracked = self.tracker.tracked();
                if let Some(current) = tracked.and_then(|t| contacts.iter().find(|c| c.id == t.id)) {
                    self.restart_samples(current.position(), now);
                }
            }
            PointerEvent::Move { contacts } => {
                let tracked = self.tracker.tracked();
                let Some(current) = tracked.and_then(|t| contacts.iter().find(|c| c.id == t.id)) else {
                    return Ok(gestures);
                };
                let current = current.position();
                self.push_sample(current, now);

                if !self.dragging {
                    let down = self.tracker.drag_origin().map_or(current, |o| o.down);
                    if current.sub(down).length() > self.config.touch_slop {
                        self.dragging = true;
                        self.tap_candidate = false;
                    }
                }
                if self.dragging {
                    let distance = self.last.sub(current);
                    self.last = current;
                    if distance != Point::ZERO {
                        gestures.push(Gesture::Drag { distance_x: distance.x, distance_y: distance.y });
                    }
                }
            }
            PointerEvent::Up { contact } => {
                let position = contact.position();
                self.push_sample(position, now);
                if self.dragging {
                    let velocity = self.velocity();
                    if velocity.length() >= self.config.min_fling_velocity {
                        let cap = self.config.max_fling_velocity.max(0.0);
                        gestures.push(Gesture::Fling {
                            velocity_x: velocity.x.clamp(-cap, cap),
                            velocity_y: velocity.y.clamp(-cap, cap),
                        });
                    }
                } else if self.tap_candidate
                    && self.press.is_some_and(|p| now - p.time_ms < self.config.long_press_timeout_ms)
                {
                    gestures.push(Gesture::SingleTap { x: position.x, y: position.y });
                    self.last_tap = Some(Stamp { position, time_ms: now });
                }
                self.press = None;
                self.dragging = false;
                self.tap_candidate = false;
                self.in_double_tap = false;
            }
        }
        Ok(gestures)
    }

    fn restart_samples(&mut self, position: Point, now: f64) {
        self.last = position;
        self.samples.clear();
        self.samples.push_back(Stamp { position, time_ms: now });
    }

    fn push_sample(&mut self, position: Point, now: f64) {
        self.samples.push_back(Stamp { position, time_ms: now });
        while self.samples.front().is_some_and(|s| now - s.time_ms > VELOCITY_WINDOW_MS) {
            self.samples.pop_front();
        }
    }

    /// Release velocity in units per second over the recent sample window.
    fn velocity(&self) -> Point {
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return Point::ZERO;
        };
        let elapsed_secs = (last.time_ms - first.time_ms) / 1000.0;
        if elapsed_secs <= 0.0 {
            return Point::ZERO;
        }
        last.position.sub(first.position).scale(1.0 / elapsed_secs)
    }
}
