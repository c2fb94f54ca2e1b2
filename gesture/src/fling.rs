//! Inertial fling with overscroll and spring-back.
//!
//! Each axis runs independently. While inside its limits an axis coasts with
//! exponentially decaying velocity. Crossing a limit hands the axis to a
//! critically damped spring anchored on that limit; it may travel at most
//! `overscroll` past it before being pulled back. A spring only settles by
//! snapping onto its limit, and coasting only settles inside the limits, so
//! every finished fling rests within bounds.
//!
//! Both phases use closed-form solutions, so frame length does not affect
//! stability.

#[cfg(test)]
#[path = "fling_test.rs"]
mod fling_test;

use crate::bounds::PanBounds;
use crate::consts::{FLING_SETTLE_VELOCITY, SPRING_SETTLE_DISTANCE};
use crate::transform::Point;

/// Physical constants for a fling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingParams {
    /// Velocity decay rate while coasting, per second.
    pub friction: f64,
    /// Spring angular frequency, per second.
    pub spring_stiffness: f64,
    /// How far past a limit the content may travel.
    pub overscroll: f64,
}

/// Whether a fling needs more frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlingStatus {
    Moving,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Coasting,
    SpringBack { target: f64 },
    Settled,
}

#[derive(Debug, Clone, Copy)]
struct Axis {
    position: f64,
    velocity: f64,
    min: f64,
    max: f64,
    phase: Phase,
}

impl Axis {
    fn new(position: f64, velocity: f64, min: f64, max: f64) -> Self {
        let phase = if position > max {
            Phase::SpringBack { target: max }
        } else if position < min {
            Phase::SpringBack { target: min }
        } else if velocity.abs() < FLING_SETTLE_VELOCITY {
            Phase::Settled
        } else {
            Phase::Coasting
        };
        let velocity = if phase == Phase::Settled { 0.0 } else { velocity };
        Self { position, velocity, min, max, phase }
    }

    fn step(&mut self, dt: f64, params: &FlingParams) {
        match self.phase {
            Phase::Coasting => self.coast(dt, params),
            Phase::SpringBack { target } => self.spring(target, dt, params),
            Phase::Settled => {}
        }
    }

    fn coast(&mut self, dt: f64, params: &FlingParams) {
        let friction = params.friction.max(f64::EPSILON);
        let decay = (-friction * dt).exp();
        self.position += self.velocity * (1.0 - decay) / friction;
        self.velocity *= decay;

        if self.position > self.max {
            self.phase = Phase::SpringBack { target: self.max };
            self.cap_overscroll(self.max, params.overscroll);
        } else if self.position < self.min {
            self.phase = Phase::SpringBack { target: self.min };
            self.cap_overscroll(self.min, params.overscroll);
        } else if self.velocity.abs() < FLING_SETTLE_VELOCITY {
            self.velocity = 0.0;
            self.phase = Phase::Settled;
        }
    }

    // x(t) = (A + B t) e^{-ωt} with A = displacement, B = v + ωA.
    fn spring(&mut self, target: f64, dt: f64, params: &FlingParams) {
        let omega = params.spring_stiffness.max(f64::EPSILON);
        let a = self.position - target;
        let b = self.velocity + omega * a;
        let decay = (-omega * dt).exp();
        let displacement = (a + b * dt) * decay;
        self.velocity = (b - omega * (a + b * dt)) * decay;
        self.position = target + displacement;
        self.cap_overscroll(target, params.overscroll);

        let displacement = self.position - target;
        if displacement.abs() < SPRING_SETTLE_DISTANCE && self.velocity.abs() < FLING_SETTLE_VELOCITY {
            self.position = target;
            self.velocity = 0.0;
            self.phase = Phase::Settled;
        }
    }

    fn cap_overscroll(&mut self, limit: f64, overscroll: f64) {
        let overscroll = overscroll.max(0.0);
        if self.position > limit + overscroll && limit >= self.max {
            self.position = limit + overscroll;
            self.velocity = self.velocity.min(0.0);
        } else if self.position < limit - overscroll && limit <= self.min {
            self.position = limit - overscroll;
            self.velocity = self.velocity.max(0.0);
        }
    }
}

/// A running fling over both axes.
#[derive(Debug, Clone)]
pub struct FlingSimulation {
    x: Axis,
    y: Axis,
    params: FlingParams,
}

impl FlingSimulation {
    /// Start from `start` with `velocity` (units per second), limited to
    /// `bounds` on each axis.
    #[must_use]
    pub fn start(start: Point, velocity: Point, bounds: PanBounds, params: FlingParams) -> Self {
        Self {
            x: Axis::new(start.x, velocity.x, -bounds.max_offset_x, bounds.max_offset_x),
            y: Axis::new(start.y, velocity.y, -bounds.max_offset_y, bounds.max_offset_y),
            params,
        }
    }

    /// Advance by `dt_secs`.
    pub fn step(&mut self, dt_secs: f64) -> FlingStatus {
        let dt = dt_secs.max(0.0);
        self.x.step(dt, &self.params);
        self.y.step(dt, &self.params);
        self.status()
    }

    #[must_use]
    pub fn status(&self) -> FlingStatus {
        if self.x.phase == Phase::Settled && self.y.phase == Phase::Settled {
            FlingStatus::Settled
        } else {
            FlingStatus::Moving
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x.position, self.y.position)
    }

    #[must_use]
    pub fn velocity(&self) -> Point {
        Point::new(self.x.velocity, self.y.velocity)
    }
}
