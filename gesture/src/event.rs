//! Pointer event model consumed by every gesture component.
//!
//! Events mirror what a touch platform delivers: a primary `Down` that opens
//! a sequence, `SecondaryDown` / `SecondaryUp` as further contacts join and
//! leave, `Move` carrying every active contact, and a final `Up`. Contact
//! lists are ordered by when each contact went down, oldest first.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::{Deserialize, Serialize};

use crate::error::GestureError;
use crate::transform::Point;

/// Stable identity of one contact while it stays down.
pub type ContactId = u32;

/// One active touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub x: f64,
    pub y: f64,
}

impl Contact {
    #[must_use]
    pub fn new(id: ContactId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A single pointer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// The first contact of a sequence went down.
    Down { contact: Contact },
    /// One or more active contacts moved.
    Move { contacts: Vec<Contact> },
    /// A further contact joined; `contacts[index]` is the new one.
    SecondaryDown { contacts: Vec<Contact>, index: usize },
    /// A contact left while others stay down; `contacts[index]` is the
    /// releasing one and is still listed.
    SecondaryUp { contacts: Vec<Contact>, index: usize },
    /// The last contact of a sequence went up.
    Up { contact: Contact },
}

impl PointerEvent {
    /// The contact that went down or up, for every variant but `Move`.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::IndexOutOfRange`] when a secondary event's
    /// index does not name one of its contacts.
    pub fn changed_contact(&self) -> Result<Option<Contact>, GestureError> {
        match self {
            Self::Down { contact } | Self::Up { contact } => Ok(Some(*contact)),
            Self::SecondaryDown { contacts, index } | Self::SecondaryUp { contacts, index } => {
                contact_at(contacts, *index).map(Some)
            }
            Self::Move { .. } => Ok(None),
        }
    }

    /// Every contact visible in this event.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        match self {
            Self::Down { contact } | Self::Up { contact } => std::slice::from_ref(contact),
            Self::Move { contacts } | Self::SecondaryDown { contacts, .. } | Self::SecondaryUp { contacts, .. } => {
                contacts
            }
        }
    }
}

/// Look up the contact at `index`.
///
/// # Errors
///
/// Returns [`GestureError::IndexOutOfRange`] if `index` is past the end.
pub fn contact_at(contacts: &[Contact], index: usize) -> Result<Contact, GestureError> {
    contacts
        .get(index)
        .copied()
        .ok_or(GestureError::IndexOutOfRange { index, len: contacts.len() })
}

/// A pointer event stamped with the host clock, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub time_ms: f64,
    pub event: PointerEvent,
}

impl TimedEvent {
    #[must_use]
    pub fn new(time_ms: f64, event: PointerEvent) -> Self {
        Self { time_ms, event }
    }
}
