//! Read-side port resolving journeys to their owning client.

use async_trait::async_trait;

use crate::domain::{EmailAddress, JourneyId, JourneyOwnership};

use super::define_port_error;

define_port_error! {
    /// Errors raised when resolving journey ownership.
    pub enum JourneyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "journey lookup connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "journey lookup query failed: {message}",
    }
}

/// Port for journey ownership checks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JourneyRepository: Send + Sync {
    /// Return the journey when it exists and belongs to the client
    /// registered under `email`.
    ///
    /// A missing journey and a journey owned by someone else both yield
    /// `None`.
    async fn find_owned(
        &self,
        journey_id: JourneyId,
        email: &EmailAddress,
    ) -> Result<Option<JourneyOwnership>, JourneyRepositoryError>;
}
