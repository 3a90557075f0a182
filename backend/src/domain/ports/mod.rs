//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod blog_feed_query;
mod booking_command;
mod booking_session_store;
mod blog_post_repository;
mod feedback_command;
mod feedback_repository;
mod journey_repository;
mod login_service;
mod password_hasher;
mod user_repository;

#[cfg(test)]
pub use blog_feed_query::MockBlogFeedQuery;
pub use blog_feed_query::BlogFeedQuery;
#[cfg(test)]
pub use blog_post_repository::MockBlogPostRepository;
pub use blog_post_repository::{BlogPostRepository, BlogPostRepositoryError};
#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::BookingCommand;
#[cfg(test)]
pub use booking_session_store::MockBookingSessionStore;
pub use booking_session_store::{BookingSessionStore, BookingSessionStoreError};
#[cfg(test)]
pub use feedback_command::MockFeedbackCommand;
pub use feedback_command::FeedbackCommand;
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
pub use feedback_repository::{FeedbackRepository, FeedbackRepositoryError};
#[cfg(test)]
pub use journey_repository::MockJourneyRepository;
pub use journey_repository::{JourneyRepository, JourneyRepositoryError};
#[cfg(test)]
pub use login_service::{MockLoginService, MockSignupService};
pub use login_service::{LoginService, SignupOutcome, SignupService};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
