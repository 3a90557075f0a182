//! Driving port for session bookings.

use async_trait::async_trait;

use crate::domain::{Booking, BookingDraft, BookingSessionId, Error};

/// Domain use-case port for adding and listing session bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Validate `draft` and append it to the session's list.
    async fn add_booking(
        &self,
        session: BookingSessionId,
        draft: BookingDraft,
    ) -> Result<Booking, Error>;

    /// Bookings of `session` in the order they were added.
    async fn list_bookings(&self, session: BookingSessionId) -> Result<Vec<Booking>, Error>;
}
