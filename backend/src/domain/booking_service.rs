//! Session booking service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{BookingCommand, BookingSessionStore, BookingSessionStoreError};
use crate::domain::{Booking, BookingDraft, BookingSessionId, Error};

fn map_store_error(error: BookingSessionStoreError) -> Error {
    error!(error = %error, "booking session store failure");
    Error::internal(error.to_string())
}

/// Booking service implementing the booking command driving port.
///
/// Drafts are validated here; the store only ever sees normalised details.
#[derive(Clone)]
pub struct BookingService<S> {
    store: Arc<S>,
}

impl<S> BookingService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> BookingCommand for BookingService<S>
where
    S: BookingSessionStore,
{
    async fn add_booking(
        &self,
        session: BookingSessionId,
        draft: BookingDraft,
    ) -> Result<Booking, Error> {
        let details = draft.normalise()?;
        self.store
            .append(session, details)
            .await
            .map_err(map_store_error)
    }

    async fn list_bookings(&self, session: BookingSessionId) -> Result<Vec<Booking>, Error> {
        self.store.list(session).await.map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockBookingSessionStore;
    use crate::domain::{BookingStatus, ErrorCode};

    fn draft() -> BookingDraft {
        BookingDraft {
            pickup: " Heathrow T5 ".into(),
            dropoffs: vec!["Mayfair".into()],
            passengers: 2,
            ..BookingDraft::default()
        }
    }

    #[tokio::test]
    async fn store_receives_normalised_details() {
        let session = BookingSessionId::generate();
        let mut store = MockBookingSessionStore::new();
        store
            .expect_append()
            .withf(move |id, details| *id == session && details.pickup == "Heathrow T5")
            .times(1)
            .return_once(|_, details| {
                Ok(Booking {
                    id: "VD-1001".into(),
                    status: BookingStatus::PendingConfirmation,
                    details,
                })
            });

        let service = BookingService::new(Arc::new(store));
        let booking = service
            .add_booking(session, draft())
            .await
            .expect("booking added");

        assert_eq!(booking.id, "VD-1001");
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_store() {
        let mut store = MockBookingSessionStore::new();
        store.expect_append().times(0);

        let service = BookingService::new(Arc::new(store));
        let error = service
            .add_booking(BookingSessionId::generate(), BookingDraft::default())
            .await
            .expect_err("invalid draft");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn store_failure_is_internal() {
        let mut store = MockBookingSessionStore::new();
        store
            .expect_list()
            .return_once(|_| Err(BookingSessionStoreError::unavailable("lock poisoned")));

        let service = BookingService::new(Arc::new(store));
        let error = service
            .list_bookings(BookingSessionId::generate())
            .await
            .expect_err("store failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
