//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::ports::{
    MockBlogFeedQuery, MockBookingCommand, MockFeedbackCommand, MockLoginService,
    MockSignupService,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Names the cookie `session` and drops the `Secure` flag so plain HTTP
///   test requests carry it back.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Mock port set; tests set expectations on the ports they exercise and
/// leave the rest untouched so unexpected calls fail loudly.
#[derive(Default)]
pub struct MockPorts {
    pub signup: MockSignupService,
    pub login: MockLoginService,
    pub feedback: MockFeedbackCommand,
    pub blog: MockBlogFeedQuery,
    pub bookings: MockBookingCommand,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            signup: Arc::new(self.signup),
            login: Arc::new(self.login),
            feedback: Arc::new(self.feedback),
            blog: Arc::new(self.blog),
            bookings: Arc::new(self.bookings),
        })
    }
}
