//! Single authoritative contact tracking.
//!
//! Exactly one contact drives the drag at a time. When a new contact joins it
//! takes over; when the driving contact leaves, the most recently added
//! survivor takes over. Every hand-off re-snapshots the [`DragOrigin`] at the
//! new contact's position and the current offset, so the drawn content never
//! jumps regardless of which finger ends up in charge.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use tracing::debug;

use crate::engine::Action;
use crate::error::GestureError;
use crate::event::{Contact, ContactId, PointerEvent, contact_at};
use crate::transform::Point;

/// The contact currently treated as authoritative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedContact {
    pub id: ContactId,
    pub last_down_x: f64,
    pub last_down_y: f64,
}

/// Snapshot taken each time the driving contact (or centroid) is established.
///
/// Move deltas are measured against `down`, never accumulated, so repeated
/// re-establishment cannot drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    pub down: Point,
    pub original_offset: Point,
}

#[derive(Debug, Clone, Copy)]
struct Tracking {
    contact: TrackedContact,
    origin: DragOrigin,
}

/// Drags an offset by whichever contact is authoritative.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    tracking: Option<Tracking>,
    offset: Point,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one pointer event.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::UnknownContact`] if a move no longer lists the
    /// tracked contact, [`GestureError::NoTrackedContact`] for a move outside
    /// a gesture, and [`GestureError::IndexOutOfRange`] for a malformed
    /// secondary event. State is left untouched on error.
    pub fn on_event(&mut self, event: &PointerEvent) -> Result<Vec<Action>, GestureError> {
        match event {
            PointerEvent::Down { contact } => {
                self.track(*contact);
                Ok(Vec::new())
            }
            PointerEvent::Move { contacts } => {
                let tracking = self.tracking.ok_or(GestureError::NoTrackedContact)?;
                let id = tracking.contact.id;
                let current = contacts
                    .iter()
                    .find(|c| c.id == id)
                    .ok_or(GestureError::UnknownContact { id })?;
                let origin = tracking.origin;
                self.offset = origin.original_offset.add(current.position().sub(origin.down));
                Ok(vec![Action::RenderNeeded])
            }
            PointerEvent::SecondaryDown { contacts, index } => {
                let joining = contact_at(contacts, *index)?;
                debug!(id = joining.id, "tracking hand-off to new contact");
                self.track(joining);
                Ok(Vec::new())
            }
            PointerEvent::SecondaryUp { contacts, index } => {
                let leaving = contact_at(contacts, *index)?;
                let Some(tracking) = self.tracking else {
                    return Ok(Vec::new());
                };
                if tracking.contact.id != leaving.id {
                    return Ok(Vec::new());
                }
                match replacement(contacts, *index) {
                    Some(next) => {
                        debug!(from = leaving.id, to = next.id, "tracked contact lifted; handing off");
                        self.track(next);
                    }
                    None => self.tracking = None,
                }
                Ok(Vec::new())
            }
            PointerEvent::Up { .. } => {
                self.tracking = None;
                Ok(Vec::new())
            }
        }
    }

    /// The authoritative contact, if any is down.
    #[must_use]
    pub fn tracked(&self) -> Option<TrackedContact> {
        self.tracking.map(|t| t.contact)
    }

    #[must_use]
    pub fn drag_origin(&self) -> Option<DragOrigin> {
        self.tracking.map(|t| t.origin)
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Replace the offset. An in-progress drag continues from it.
    pub fn set_offset(&mut self, offset: Point) {
        if let Some(tracking) = &mut self.tracking {
            let shift = offset.sub(self.offset);
            tracking.origin.original_offset = tracking.origin.original_offset.add(shift);
        }
        self.offset = offset;
    }

    fn track(&mut self, contact: Contact) {
        self.tracking = Some(Tracking {
            contact: TrackedContact { id: contact.id, last_down_x: contact.x, last_down_y: contact.y },
            origin: DragOrigin { down: contact.position(), original_offset: self.offset },
        });
    }
}

/// Pick who takes over when the contact at `leaving` lifts: the most recently
/// added survivor, which is the second most recent when the leaving contact
/// was itself the newest.
fn replacement(contacts: &[Contact], leaving: usize) -> Option<Contact> {
    let newest = contacts.len().checked_sub(1)?;
    let pick = if leaving == newest { newest.checked_sub(1)? } else { newest };
    contacts.get(pick).copied()
}
