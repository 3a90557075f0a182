//! Domain primitives, services and ports.
//!
//! Purpose: Define strongly typed domain entities and the use-case services
//! that drive them. Types stay free of HTTP and SQL concerns; adapters reach
//! the outside world through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode — API error payload and stable error identifier.
//! - EmailAddress — normalised email used for every lookup.
//! - SignupDetails / LoginCredentials — validated identity inputs.
//! - JourneyLookup / ComplaintSubmission / ReviewSubmission — feedback inputs.
//! - BlogPost — feed entries and their ordering.
//! - BookingSession / BookingSessionId — per-session booking list and its key.
//! - IdentityService / FeedbackService / BlogFeedService / BookingService —
//!   driving port implementations.

pub mod auth;
pub mod blog;
pub mod blog_feed_service;
pub mod booking;
pub mod booking_service;
pub mod email;
pub mod error;
pub mod feedback;
pub mod feedback_service;
pub mod identity_service;
pub mod journey;
pub mod ports;
mod required_fields;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, SignupDetails};
pub use self::blog::{BlogPost, feed_order, sort_feed};
pub use self::blog_feed_service::BlogFeedService;
pub use self::booking::{
    BOOKING_REFERENCE_PREFIX, Booking, BookingDraft, BookingSession, BookingSessionId,
    BookingStatus, Luggage,
};
pub use self::booking_service::BookingService;
pub use self::email::{EmailAddress, EmailValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feedback::{
    ComplaintSubmission, NewComplaint, NewReview, Rating, ReviewSubmission,
};
pub use self::feedback_service::{FeedbackService, JOURNEY_NOT_FOUND_MESSAGE};
pub use self::identity_service::{
    EMAIL_TAKEN_MESSAGE, INVALID_CREDENTIALS_MESSAGE, IdentityService,
};
pub use self::journey::{JourneyId, JourneyLookup, JourneyOwnership};
pub use self::required_fields::{MISSING_FIELDS_MESSAGE, MissingFieldsError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AccountStatus, NewUser, PasswordHash, Role, StoredCredentials, UnknownVariantError, UserId,
    UserProfile,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use chauffeur_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("Invalid credentials"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
