//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BlogFeedQuery, BookingCommand, FeedbackCommand, LoginService, SignupService,
};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub feedback: Arc<dyn FeedbackCommand>,
    pub blog: Arc<dyn BlogFeedQuery>,
    pub bookings: Arc<dyn BookingCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub feedback: Arc<dyn FeedbackCommand>,
    pub blog: Arc<dyn BlogFeedQuery>,
    pub bookings: Arc<dyn BookingCommand>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use chauffeur_backend::domain::{
    ///     BlogFeedService, BookingService, FeedbackService, IdentityService,
    /// };
    /// use chauffeur_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use chauffeur_backend::outbound::persistence::{
    ///     DbPool, DieselBlogPostRepository, DieselFeedbackRepository, DieselJourneyRepository,
    ///     DieselUserRepository,
    /// };
    /// use chauffeur_backend::outbound::security::BcryptPasswordHasher;
    /// use chauffeur_backend::outbound::session::InMemoryBookingSessionStore;
    ///
    /// fn wire(pool: DbPool) -> HttpState {
    ///     let identity = Arc::new(IdentityService::new(
    ///         Arc::new(DieselUserRepository::new(pool.clone())),
    ///         Arc::new(BcryptPasswordHasher::new()),
    ///     ));
    ///     HttpState::new(HttpStatePorts {
    ///         signup: identity.clone(),
    ///         login: identity,
    ///         feedback: Arc::new(FeedbackService::new(
    ///             Arc::new(DieselJourneyRepository::new(pool.clone())),
    ///             Arc::new(DieselFeedbackRepository::new(pool.clone())),
    ///         )),
    ///         blog: Arc::new(BlogFeedService::new(Arc::new(DieselBlogPostRepository::new(pool)))),
    ///         bookings: Arc::new(BookingService::new(Arc::new(
    ///             InMemoryBookingSessionStore::new(Duration::from_secs(12 * 60 * 60)),
    ///         ))),
    ///     })
    /// }
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            signup,
            login,
            feedback,
            blog,
            bookings,
        } = ports;
        Self {
            signup,
            login,
            feedback,
            blog,
            bookings,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
