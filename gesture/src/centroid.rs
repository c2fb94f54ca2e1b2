//! Group drag by the centroid of every contact that is down.
//!
//! Finger identity is ignored: each down, join or lift re-snapshots the drag
//! origin at the new centroid, and moves translate by how far the centroid
//! has travelled since. A lifting contact is still listed in its event, so it
//! is left out of both the sum and the count for that event.

#[cfg(test)]
#[path = "centroid_test.rs"]
mod centroid_test;

use crate::engine::Action;
use crate::error::GestureError;
use crate::event::{Contact, PointerEvent};
use crate::tracker::DragOrigin;
use crate::transform::Point;

#[derive(Debug, Clone, Default)]
pub struct CentroidTracker {
    origin: Option<DragOrigin>,
    offset: Point,
}

impl CentroidTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one pointer event.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::EmptyContactSet`] when no contact contributes
    /// to the centroid, [`GestureError::NoTrackedContact`] for a move outside
    /// a gesture, and [`GestureError::IndexOutOfRange`] for a malformed
    /// secondary event.
    pub fn on_event(&mut self, event: &PointerEvent) -> Result<Vec<Action>, GestureError> {
        match event {
            PointerEvent::Down { contact } => {
                self.anchor(centroid(std::slice::from_ref(contact), None)?);
                Ok(Vec::new())
            }
            PointerEvent::SecondaryDown { contacts, index } => {
                if *index >= contacts.len() {
                    return Err(GestureError::IndexOutOfRange { index: *index, len: contacts.len() });
                }
                self.anchor(centroid(contacts, None)?);
                Ok(Vec::new())
            }
            PointerEvent::SecondaryUp { contacts, index } => {
                if *index >= contacts.len() {
                    return Err(GestureError::IndexOutOfRange { index: *index, len: contacts.len() });
                }
                self.anchor(centroid(contacts, Some(*index))?);
                Ok(Vec::new())
            }
            PointerEvent::Move { contacts } => {
                let origin = self.origin.ok_or(GestureError::NoTrackedContact)?;
                let focus = centroid(contacts, None)?;
                self.offset = origin.original_offset.add(focus.sub(origin.down));
                Ok(vec![Action::RenderNeeded])
            }
            PointerEvent::Up { .. } => {
                self.origin = None;
                Ok(Vec::new())
            }
        }
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn drag_origin(&self) -> Option<DragOrigin> {
        self.origin
    }

    fn anchor(&mut self, focus: Point) {
        self.origin = Some(DragOrigin { down: focus, original_offset: self.offset });
    }
}

/// Unweighted mean position of `contacts`, skipping the one at `releasing`.
///
/// # Errors
///
/// Returns [`GestureError::EmptyContactSet`] if nothing is left to average.
pub fn centroid(contacts: &[Contact], releasing: Option<usize>) -> Result<Point, GestureError> {
    let (sum, count) = contacts
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != releasing)
        .fold((Point::ZERO, 0_u32), |(sum, count), (_, c)| (sum.add(c.position()), count + 1));
    if count == 0 {
        return Err(GestureError::EmptyContactSet);
    }
    Ok(sum.scale(1.0 / f64::from(count)))
}
