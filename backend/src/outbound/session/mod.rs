//! Server-side session state adapters.

mod in_memory_booking_session_store;

pub use in_memory_booking_session_store::InMemoryBookingSessionStore;
