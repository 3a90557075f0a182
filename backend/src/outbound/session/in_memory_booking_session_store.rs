//! Process-local booking lists keyed by session id.
//!
//! Each list expires after `idle_ttl` without activity, matching the session
//! cookie lifetime. Expired lists are swept whenever a booking is appended,
//! which is the only path that creates entries.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{BookingSessionStore, BookingSessionStoreError};
use crate::domain::{Booking, BookingDraft, BookingSession, BookingSessionId};

struct Entry {
    bookings: BookingSession,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// In-memory [`BookingSessionStore`] shared by every worker.
pub struct InMemoryBookingSessionStore {
    sessions: Mutex<HashMap<BookingSessionId, Entry>>,
    idle_ttl: Duration,
}

impl InMemoryBookingSessionStore {
    /// Create an empty store whose lists live for `idle_ttl` after last use.
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<BookingSessionId, Entry>>, BookingSessionStoreError> {
        self.sessions
            .lock()
            .map_err(|_| BookingSessionStoreError::unavailable("booking session lock poisoned"))
    }

    /// Number of lists currently held, expired ones included until the next sweep.
    pub fn session_count(&self) -> usize {
        self.sessions.lock().map_or(0, |sessions| sessions.len())
    }
}

#[async_trait]
impl BookingSessionStore for InMemoryBookingSessionStore {
    async fn append(
        &self,
        session: BookingSessionId,
        details: BookingDraft,
    ) -> Result<Booking, BookingSessionStoreError> {
        let now = Instant::now();
        let expires_at = now + self.idle_ttl;
        let mut sessions = self.lock()?;

        let before = sessions.len();
        sessions.retain(|_, entry| entry.is_live(now));
        let swept = before - sessions.len();
        if swept > 0 {
            debug!(swept, "expired booking sessions removed");
        }

        let entry = sessions.entry(session).or_insert_with(|| Entry {
            bookings: BookingSession::default(),
            expires_at,
        });
        entry.expires_at = expires_at;
        Ok(entry.bookings.append(details))
    }

    async fn list(
        &self,
        session: BookingSessionId,
    ) -> Result<Vec<Booking>, BookingSessionStoreError> {
        let now = Instant::now();
        let mut sessions = self.lock()?;
        match sessions.get_mut(&session) {
            Some(entry) if entry.is_live(now) => {
                entry.expires_at = now + self.idle_ttl;
                Ok(entry.bookings.bookings().to_vec())
            }
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const HOUR: Duration = Duration::from_secs(60 * 60);

    #[fixture]
    fn details() -> BookingDraft {
        BookingDraft {
            pickup: "Heathrow T5".into(),
            dropoffs: vec!["Mayfair".into()],
            passengers: 2,
            notes: Some("Child seat required for a four-year-old passenger".into()),
            ..BookingDraft::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn references_keep_counting_past_a_cookie_sized_list(details: BookingDraft) {
        let store = InMemoryBookingSessionStore::new(HOUR);
        let session = BookingSessionId::generate();

        for _ in 0..50 {
            store
                .append(session, details.clone())
                .await
                .expect("append");
        }
        let listed = store.list(session).await.expect("list");

        assert_eq!(listed.len(), 50);
        assert_eq!(listed[0].id, "VD-1001");
        assert_eq!(listed[49].id, "VD-1050");
    }

    #[rstest]
    #[tokio::test]
    async fn sessions_do_not_share_lists(details: BookingDraft) {
        let store = InMemoryBookingSessionStore::new(HOUR);
        let first = BookingSessionId::generate();
        let second = BookingSessionId::generate();

        store.append(first, details.clone()).await.expect("append");
        store.append(first, details.clone()).await.expect("append");
        let booking = store.append(second, details).await.expect("append");

        assert_eq!(booking.id, "VD-1001");
        assert_eq!(store.list(first).await.expect("list").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_session_lists_nothing_and_is_not_stored() {
        let store = InMemoryBookingSessionStore::new(HOUR);
        let listed = store
            .list(BookingSessionId::generate())
            .await
            .expect("list");

        assert!(listed.is_empty());
        assert_eq!(store.session_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn expired_sessions_restart_and_are_swept(details: BookingDraft) {
        let store = InMemoryBookingSessionStore::new(Duration::ZERO);
        let stale = BookingSessionId::generate();
        store.append(stale, details.clone()).await.expect("append");

        assert!(store.list(stale).await.expect("list").is_empty());

        let fresh = BookingSessionId::generate();
        store.append(fresh, details).await.expect("append");
        assert_eq!(store.session_count(), 1);
    }
}
