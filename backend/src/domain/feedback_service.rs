//! Complaint and review intake service.
//!
//! Each submission first resolves the journey against the caller's email;
//! only a resolved owner gets a row written.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    FeedbackCommand, FeedbackRepository, FeedbackRepositoryError, JourneyRepository,
    JourneyRepositoryError,
};
use crate::domain::{
    ComplaintSubmission, Error, JourneyLookup, JourneyOwnership, NewComplaint, NewReview,
    ReviewSubmission,
};

/// Message returned when the journey is unknown or owned by someone else.
pub const JOURNEY_NOT_FOUND_MESSAGE: &str = "Journey not found for this client";

fn map_journey_error(error: JourneyRepositoryError) -> Error {
    error!(error = %error, "journey lookup failure");
    match error {
        JourneyRepositoryError::Connection { message } => {
            Error::internal(format!("journey repository unavailable: {message}"))
        }
        JourneyRepositoryError::Query { message } => {
            Error::internal(format!("journey repository error: {message}"))
        }
    }
}

fn map_feedback_error(error: FeedbackRepositoryError) -> Error {
    error!(error = %error, "feedback insert failure");
    match error {
        FeedbackRepositoryError::Connection { message } => {
            Error::internal(format!("feedback repository unavailable: {message}"))
        }
        FeedbackRepositoryError::Query { message } => {
            Error::internal(format!("feedback repository error: {message}"))
        }
    }
}

/// Feedback service implementing the feedback command driving port.
#[derive(Clone)]
pub struct FeedbackService<J, F> {
    journeys: Arc<J>,
    feedback: Arc<F>,
}

impl<J, F> FeedbackService<J, F> {
    /// Create a service over the journey lookup and feedback store.
    pub fn new(journeys: Arc<J>, feedback: Arc<F>) -> Self {
        Self { journeys, feedback }
    }
}

impl<J, F> FeedbackService<J, F>
where
    J: JourneyRepository,
{
    /// Resolve `lookup` to the journey's owner.
    ///
    /// Succeeds only when the journey exists and belongs to the client
    /// registered under the lookup's email; both misses share one
    /// not-found error.
    pub async fn resolve_journey(
        &self,
        lookup: &JourneyLookup,
    ) -> Result<JourneyOwnership, Error> {
        self.journeys
            .find_owned(lookup.journey_id(), lookup.email())
            .await
            .map_err(map_journey_error)?
            .ok_or_else(|| Error::not_found(JOURNEY_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<J, F> FeedbackCommand for FeedbackService<J, F>
where
    J: JourneyRepository,
    F: FeedbackRepository,
{
    async fn submit_complaint(&self, complaint: &ComplaintSubmission) -> Result<(), Error> {
        let ownership = self.resolve_journey(complaint.lookup()).await?;
        self.feedback
            .insert_complaint(&NewComplaint::new(ownership, complaint))
            .await
            .map_err(map_feedback_error)
    }

    async fn submit_review(&self, review: &ReviewSubmission) -> Result<(), Error> {
        let ownership = self.resolve_journey(review.lookup()).await?;
        self.feedback
            .insert_review(&NewReview::new(ownership, review))
            .await
            .map_err(map_feedback_error)
    }
}

#[cfg(test)]
#[path = "feedback_service_tests.rs"]
mod tests;
