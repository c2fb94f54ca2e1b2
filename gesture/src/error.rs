//! Error type shared by every gesture component.
//!
//! All variants describe integration errors: the host delivered an event
//! stream that breaks the contact-continuity guarantees the components rely
//! on, or called a zoom operation before sizing. Components never panic on
//! them; they return the error and leave their state untouched.

use crate::event::ContactId;

/// Invariant violation raised by a gesture component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    /// A move event does not contain the contact currently being tracked.
    #[error("tracked contact {id} is missing from the active contact set")]
    UnknownContact { id: ContactId },
    /// A move arrived while no contact was being tracked.
    #[error("move received with no tracked contact")]
    NoTrackedContact,
    /// An active contact has no path to append to.
    #[error("contact {id} has no path; it was never put down")]
    MissingPath { id: ContactId },
    /// A centroid was requested over zero contacts.
    #[error("centroid requested over an empty contact set")]
    EmptyContactSet,
    /// A secondary event names a contact index outside its contact list.
    #[error("active contact index {index} out of range for {len} contacts")]
    IndexOutOfRange { index: usize, len: usize },
    /// A zoom operation ran before the surface and image sizes were known.
    #[error("surface and image sizes have not been set")]
    NotSized,
}
