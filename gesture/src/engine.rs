use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bounds::PanBounds;
use crate::centroid::CentroidTracker;
use crate::config::GestureConfig;
use crate::event::{ContactId, TimedEvent};
use crate::paths::{MultiPathRecorder, StrokeStyle};
use crate::tracker::PointerTracker;
use crate::transform::{Point, Size, Transform};
use crate::zoom::{ZoomPanController, ZoomPhase};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Requests returned from handlers for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// State changed; read a fresh [`Snapshot`] and repaint.
    RenderNeeded,
    /// A frame task is live; call `on_frame` on the next display frame.
    FrameRequested,
}

/// Which interaction the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Drag by the authoritative contact.
    #[default]
    Track,
    /// Drag by the centroid of all contacts.
    Centroid,
    /// Record one freehand path per contact.
    Draw,
    /// Double-tap zoom with bounded pan and fling.
    ZoomPan,
}

enum Component {
    Track(PointerTracker),
    Centroid(CentroidTracker),
    Draw(MultiPathRecorder),
    ZoomPan(ZoomPanController),
}

/// One recorded path, flattened for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSnapshot {
    pub contact: ContactId,
    pub points: Vec<Point>,
}

/// Read-only view of what to draw this frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub offset: Point,
    pub scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_bounds: Option<PanBounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_phase: Option<ZoomPhase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<PathSnapshot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeStyle>,
}

/// Single entry point over the four interaction components.
///
/// Invariant violations from the components are logged and dropped here:
/// the offending event leaves state untouched and yields no actions.
pub struct Engine {
    mode: Mode,
    component: Component,
    stroke: StrokeStyle,
}

impl Engine {
    #[must_use]
    pub fn new(mode: Mode, config: GestureConfig) -> Self {
        let stroke = StrokeStyle::round(config.stroke_width);
        let component = match mode {
            Mode::Track => Component::Track(PointerTracker::new()),
            Mode::Centroid => Component::Centroid(CentroidTracker::new()),
            Mode::Draw => Component::Draw(MultiPathRecorder::new()),
            Mode::ZoomPan => Component::ZoomPan(ZoomPanController::new(config)),
        };
        Self { mode, component, stroke }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    // --- Inputs ---

    /// Route one pointer event to the active component.
    pub fn on_pointer_event(&mut self, timed: &TimedEvent) -> Vec<Action> {
        let result = match &mut self.component {
            Component::Track(tracker) => tracker.on_event(&timed.event),
            Component::Centroid(tracker) => tracker.on_event(&timed.event),
            Component::Draw(recorder) => recorder.on_event(&timed.event),
            Component::ZoomPan(controller) => controller.on_pointer_event(timed),
        };
        match result {
            Ok(actions) => actions,
            Err(e) => {
                warn!(error = %e, mode = ?self.mode, time_ms = timed.time_ms, "pointer event dropped");
                Vec::new()
            }
        }
    }

    /// Advance frame tasks. Only zoom/pan mode has any.
    pub fn on_frame(&mut self, dt_ms: f64) -> Vec<Action> {
        match &mut self.component {
            Component::ZoomPan(controller) => controller.on_frame(dt_ms),
            _ => Vec::new(),
        }
    }

    /// Forward new surface and image sizes. Only zoom/pan mode uses them.
    pub fn on_surface_or_image_changed(&mut self, surface: Size, image: Size) -> Vec<Action> {
        match &mut self.component {
            Component::ZoomPan(controller) => controller.on_surface_or_image_changed(surface, image),
            _ => vec![Action::RenderNeeded],
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn needs_frame(&self) -> bool {
        match &self.component {
            Component::ZoomPan(controller) => controller.needs_frame(),
            _ => false,
        }
    }

    #[must_use]
    pub fn zoom_pan(&self) -> Option<&ZoomPanController> {
        match &self.component {
            Component::ZoomPan(controller) => Some(controller),
            _ => None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            mode: self.mode,
            offset: Point::ZERO,
            scale: 1.0,
            transform: None,
            pan_bounds: None,
            zoom_phase: None,
            paths: None,
            stroke: None,
        };
        match &self.component {
            Component::Track(tracker) => snapshot.offset = tracker.offset(),
            Component::Centroid(tracker) => snapshot.offset = tracker.offset(),
            Component::Draw(recorder) => {
                snapshot.paths = Some(
                    recorder
                        .paths()
                        .iter()
                        .map(|(contact, points)| PathSnapshot { contact, points: points.to_vec() })
                        .collect(),
                );
                snapshot.stroke = Some(self.stroke);
            }
            Component::ZoomPan(controller) => {
                snapshot.offset = controller.offset();
                snapshot.scale = controller.effective_scale().unwrap_or(1.0);
                snapshot.transform = controller.transform();
                snapshot.pan_bounds = controller.pan_bounds();
                snapshot.zoom_phase = Some(controller.phase());
            }
        }
        snapshot
    }
}
