//! Wiring of domain services over the persistence and security adapters.

use std::sync::Arc;
use std::time::Duration;

use chauffeur_backend::domain::{
    BlogFeedService, BookingService, FeedbackService, IdentityService,
};
use chauffeur_backend::inbound::http::state::{HttpState, HttpStatePorts};
use chauffeur_backend::outbound::persistence::{
    DbPool, DieselBlogPostRepository, DieselFeedbackRepository, DieselJourneyRepository,
    DieselUserRepository,
};
use chauffeur_backend::outbound::security::BcryptPasswordHasher;
use chauffeur_backend::outbound::session::InMemoryBookingSessionStore;

/// Build the handler state; every database adapter shares `pool` and booking
/// lists expire after `session_ttl` of inactivity.
pub(super) fn build_http_state(pool: &DbPool, session_ttl: Duration) -> HttpState {
    let identity = Arc::new(IdentityService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(BcryptPasswordHasher::new()),
    ));
    let feedback = Arc::new(FeedbackService::new(
        Arc::new(DieselJourneyRepository::new(pool.clone())),
        Arc::new(DieselFeedbackRepository::new(pool.clone())),
    ));
    let blog = Arc::new(BlogFeedService::new(Arc::new(
        DieselBlogPostRepository::new(pool.clone()),
    )));

    let bookings = Arc::new(BookingService::new(Arc::new(
        InMemoryBookingSessionStore::new(session_ttl),
    )));

    HttpState::new(HttpStatePorts {
        signup: identity.clone(),
        login: identity,
        feedback,
        blog,
        bookings,
    })
}
