//! Double-tap zoom, bounded panning and fling for a single image.
//!
//! DESIGN
//! ======
//! The controller toggles between two settled scales: `small_scale` fits the
//! whole image and `big_scale` overflows the surface. A double tap animates
//! between them while keeping the tapped point fixed on screen. While zoomed
//! in, drags pan the image within [`PanBounds`] and flings coast with
//! overscroll and spring-back.
//!
//! Animation and fling are frame tasks held in [`TaskSlot`]s and advanced by
//! [`ZoomPanController::on_frame`]. A new touch sequence or a zoom toggle
//! cancels any running fling so the two never write the offset in the same
//! frame. Double taps that arrive while a zoom animation is running are
//! dropped.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{Direction, ZoomAnimation};
use crate::bounds::{PanBounds, ScaleBounds};
use crate::config::GestureConfig;
use crate::engine::Action;
use crate::error::GestureError;
use crate::event::{PointerEvent, TimedEvent};
use crate::fling::{FlingSimulation, FlingStatus};
use crate::recognizer::{Gesture, GestureRecognizer};
use crate::task::{TaskHandle, TaskSlot};
use crate::transform::{Point, Size, Transform};

/// Where the zoom toggle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomPhase {
    SettledSmall,
    AnimatingIn,
    SettledBig,
    AnimatingOut,
}

/// Logical zoom target plus animation progress toward it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub is_zoomed_in: bool,
    /// 0 at the small scale, 1 at the big scale.
    pub scale_fraction: f64,
}

/// Result of a gesture callback.
///
/// `consumed` is always false for drag, fling and double tap so the host's
/// own gesture disambiguation keeps evaluating other candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GestureResponse {
    pub consumed: bool,
    pub actions: Vec<Action>,
}

impl GestureResponse {
    fn unconsumed(actions: Vec<Action>) -> Self {
        Self { consumed: false, actions }
    }
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    surface: Size,
    image: Size,
    scale: ScaleBounds,
    pan: PanBounds,
}

#[derive(Debug)]
pub struct ZoomPanController {
    config: GestureConfig,
    layout: Option<Layout>,
    offset: Point,
    zoom: ZoomState,
    animation: TaskSlot<ZoomAnimation>,
    fling: TaskSlot<FlingSimulation>,
    recognizer: GestureRecognizer,
}

impl ZoomPanController {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            recognizer: GestureRecognizer::new(config.clone()),
            config,
            layout: None,
            offset: Point::ZERO,
            zoom: ZoomState { is_zoomed_in: false, scale_fraction: 0.0 },
            animation: TaskSlot::new(),
            fling: TaskSlot::new(),
        }
    }

    // --- Sizing ---

    /// Recompute scale and pan limits. Offset and zoom state are kept.
    pub fn on_surface_or_image_changed(&mut self, surface: Size, image: Size) -> Vec<Action> {
        let scale = ScaleBounds::fit(surface, image, self.config.over_scale_factor);
        let pan = PanBounds::at_scale(surface, image, scale.big_scale);
        debug!(
            small = scale.small_scale,
            big = scale.big_scale,
            max_x = pan.max_offset_x,
            max_y = pan.max_offset_y,
            "zoom layout recomputed"
        );
        self.layout = Some(Layout { surface, image, scale, pan });
        vec![Action::RenderNeeded]
    }

    // --- Raw input ---

    /// Feed a raw pointer event through the gesture recognizer and dispatch
    /// what it recognizes.
    ///
    /// # Errors
    ///
    /// Propagates contact-continuity violations from the recognizer, and
    /// [`GestureError::NotSized`] if a double tap lands before sizing.
    pub fn on_pointer_event(&mut self, timed: &TimedEvent) -> Result<Vec<Action>, GestureError> {
        if matches!(timed.event, PointerEvent::Down { .. }) && self.fling.cancel().is_some() {
            debug!("fling cancelled by new touch");
        }
        let gestures = self.recognizer.on_event(timed)?;

        let mut actions = Vec::new();
        for gesture in gestures {
            let response = match gesture {
                Gesture::Drag { distance_x, distance_y } => self.on_drag(distance_x, distance_y),
                Gesture::Fling { velocity_x, velocity_y } => self.on_fling(velocity_x, velocity_y),
                Gesture::DoubleTap { x, y } => self.on_double_tap(x, y)?,
                Gesture::SingleTap { .. } => GestureResponse::default(),
            };
            merge(&mut actions, response.actions);
        }
        Ok(actions)
    }

    // --- Gestures ---

    /// Toggle zoom around `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::NotSized`] before the first sizing call.
    pub fn on_double_tap(&mut self, x: f64, y: f64) -> Result<GestureResponse, GestureError> {
        let layout = self.layout.ok_or(GestureError::NotSized)?;
        if self.animation.is_running() {
            debug!(x, y, "double tap ignored during zoom animation");
            return Ok(GestureResponse::unconsumed(Vec::new()));
        }
        self.fling.cancel();

        self.zoom.is_zoomed_in = !self.zoom.is_zoomed_in;
        let direction = if self.zoom.is_zoomed_in {
            let center = layout.surface.center();
            let keep_fixed = 1.0 - layout.scale.big_scale / layout.scale.small_scale;
            self.offset = layout.pan.clamp(Point::new(x, y).sub(center).scale(keep_fixed));
            Direction::Forward
        } else {
            Direction::Reverse
        };
        debug!(x, y, zoomed_in = self.zoom.is_zoomed_in, "zoom toggled");

        self.animation.start(ZoomAnimation::new(self.config.zoom_duration_ms, direction));
        Ok(GestureResponse::unconsumed(vec![Action::RenderNeeded, Action::FrameRequested]))
    }

    /// Pan by a scroll distance (previous minus current position).
    pub fn on_drag(&mut self, distance_x: f64, distance_y: f64) -> GestureResponse {
        let Some(layout) = self.layout else {
            return GestureResponse::default();
        };
        if !self.zoom.is_zoomed_in || self.animation.is_running() {
            return GestureResponse::default();
        }
        self.offset = layout.pan.clamp(self.offset.sub(Point::new(distance_x, distance_y)));
        GestureResponse::unconsumed(vec![Action::RenderNeeded])
    }

    /// Start coasting at `(velocity_x, velocity_y)` units per second.
    pub fn on_fling(&mut self, velocity_x: f64, velocity_y: f64) -> GestureResponse {
        let Some(layout) = self.layout else {
            return GestureResponse::default();
        };
        if !self.zoom.is_zoomed_in {
            return GestureResponse::default();
        }
        let simulation = FlingSimulation::start(
            self.offset,
            Point::new(velocity_x, velocity_y),
            layout.pan,
            self.config.fling_params(),
        );
        let handle = self.fling.start(simulation);
        debug!(?handle, velocity_x, velocity_y, "fling started");
        GestureResponse::unconsumed(vec![Action::FrameRequested])
    }

    /// Stop a running fling where it is.
    pub fn cancel_fling(&mut self) -> bool {
        self.fling.cancel().is_some()
    }

    // --- Frame clock ---

    /// Advance every running frame task by `dt_ms`.
    pub fn on_frame(&mut self, dt_ms: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        merge(&mut actions, self.step_animation(dt_ms));
        if let Some(handle) = self.fling.handle() {
            merge(&mut actions, self.step_fling(handle, dt_ms));
        }
        actions
    }

    /// Advance the fling identified by `handle`. Stale handles do nothing.
    pub fn step_fling(&mut self, handle: TaskHandle, dt_ms: f64) -> Vec<Action> {
        let Some(simulation) = self.fling.get_mut(handle) else {
            return Vec::new();
        };
        let status = simulation.step(dt_ms / 1000.0);
        self.offset = simulation.position();
        match status {
            FlingStatus::Moving => vec![Action::RenderNeeded, Action::FrameRequested],
            FlingStatus::Settled => {
                self.fling.finish(handle);
                debug!(x = self.offset.x, y = self.offset.y, "fling settled");
                vec![Action::RenderNeeded]
            }
        }
    }

    fn step_animation(&mut self, dt_ms: f64) -> Vec<Action> {
        let Some(handle) = self.animation.handle() else {
            return Vec::new();
        };
        let Some(animation) = self.animation.get_mut(handle) else {
            return Vec::new();
        };
        let progress = animation.advance(dt_ms);
        self.zoom.scale_fraction = progress.fraction;
        if progress.finished {
            self.animation.finish(handle);
            debug!(phase = ?self.phase(), "zoom animation finished");
            vec![Action::RenderNeeded]
        } else {
            vec![Action::RenderNeeded, Action::FrameRequested]
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        match (self.animation.is_running(), self.zoom.is_zoomed_in) {
            (false, false) => ZoomPhase::SettledSmall,
            (true, true) => ZoomPhase::AnimatingIn,
            (false, true) => ZoomPhase::SettledBig,
            (true, false) => ZoomPhase::AnimatingOut,
        }
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn scale_bounds(&self) -> Option<ScaleBounds> {
        self.layout.map(|l| l.scale)
    }

    #[must_use]
    pub fn pan_bounds(&self) -> Option<PanBounds> {
        self.layout.map(|l| l.pan)
    }

    /// `small + (big − small) × scale_fraction`.
    #[must_use]
    pub fn effective_scale(&self) -> Option<f64> {
        self.layout.map(|l| l.scale.lerp(self.zoom.scale_fraction))
    }

    /// The image-to-surface transform for the current frame.
    ///
    /// The pan offset fades in and out with the zoom, so at the small scale
    /// the image is always centered.
    #[must_use]
    pub fn transform(&self) -> Option<Transform> {
        self.layout.map(|l| Transform {
            translate: self.offset.scale(self.zoom.scale_fraction),
            scale: l.scale.lerp(self.zoom.scale_fraction),
            pivot: l.surface.center(),
            origin: Point::new((l.surface.width - l.image.width) / 2.0, (l.surface.height - l.image.height) / 2.0),
        })
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    #[must_use]
    pub fn is_flinging(&self) -> bool {
        self.fling.is_running()
    }

    #[must_use]
    pub fn fling_handle(&self) -> Option<TaskHandle> {
        self.fling.handle()
    }

    /// Whether the host should keep delivering frames.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.is_animating() || self.is_flinging()
    }
}

/// Append `more` to `actions`, skipping duplicates.
pub(crate) fn merge(actions: &mut Vec<Action>, more: Vec<Action>) {
    for action in more {
        if !actions.contains(&action) {
            actions.push(action);
        }
    }
}
