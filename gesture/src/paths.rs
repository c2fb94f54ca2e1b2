//! Freehand drawing with one independent polyline per contact.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::Action;
use crate::error::GestureError;
use crate::event::{ContactId, PointerEvent};
use crate::transform::Point;

/// How a stroke ends and bends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    Round,
}

/// The one stroke style every recorded path is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeStyle {
    #[must_use]
    pub fn round(width: f64) -> Self {
        Self { width, cap: LineCap::Round, join: LineJoin::Round }
    }
}

/// Live paths keyed by the contact drawing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSet {
    paths: BTreeMap<ContactId, Vec<Point>>,
}

impl PathSet {
    #[must_use]
    pub fn get(&self, id: ContactId) -> Option<&[Point]> {
        self.paths.get(&id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactId, &[Point])> {
        self.paths.iter().map(|(id, points)| (*id, points.as_slice()))
    }
}

/// Records what each contact draws while it is down.
///
/// A path exists only while its contact does: lifting a contact discards its
/// path, and a later contact reusing the id starts over.
#[derive(Debug, Clone, Default)]
pub struct MultiPathRecorder {
    paths: PathSet,
}

impl MultiPathRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one pointer event.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::MissingPath`] when a move lists a contact that
    /// was never put down, and [`GestureError::IndexOutOfRange`] for a
    /// malformed secondary event. A failed move appends nothing.
    pub fn on_event(&mut self, event: &PointerEvent) -> Result<Vec<Action>, GestureError> {
        match event {
            PointerEvent::Down { .. } | PointerEvent::SecondaryDown { .. } => {
                if let Some(contact) = event.changed_contact()? {
                    self.paths.paths.insert(contact.id, vec![contact.position()]);
                }
            }
            PointerEvent::Move { contacts } => {
                if let Some(stray) = contacts.iter().find(|c| !self.paths.paths.contains_key(&c.id)) {
                    return Err(GestureError::MissingPath { id: stray.id });
                }
                for contact in contacts {
                    if let Some(path) = self.paths.paths.get_mut(&contact.id) {
                        path.push(contact.position());
                    }
                }
            }
            PointerEvent::Up { .. } | PointerEvent::SecondaryUp { .. } => {
                if let Some(contact) = event.changed_contact()? {
                    self.paths.paths.remove(&contact.id);
                }
            }
        }
        Ok(vec![Action::RenderNeeded])
    }

    #[must_use]
    pub fn paths(&self) -> &PathSet {
        &self.paths
    }
}
