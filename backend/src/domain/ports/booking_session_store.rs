//! Driven port for server-side booking lists.

use async_trait::async_trait;

use crate::domain::{Booking, BookingDraft, BookingSessionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking list storage.
    pub enum BookingSessionStoreError {
        /// Backing store cannot be used.
        Unavailable { message: String } => "booking session store unavailable: {message}",
    }
}

/// Port for the booking lists of live client sessions.
///
/// Implementations assign references under the same lock that appends, so
/// concurrent requests on one session never share a reference.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingSessionStore: Send + Sync {
    /// Append normalised `details` to the session's list, creating it when
    /// absent, and return the stored booking.
    async fn append(
        &self,
        session: BookingSessionId,
        details: BookingDraft,
    ) -> Result<Booking, BookingSessionStoreError>;

    /// Bookings of `session` in insertion order; empty when unknown or expired.
    async fn list(&self, session: BookingSessionId)
    -> Result<Vec<Booking>, BookingSessionStoreError>;
}
