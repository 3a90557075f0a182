//! Driving port for complaint and review intake.

use async_trait::async_trait;

use crate::domain::{ComplaintSubmission, Error, ReviewSubmission};

/// Domain use-case port for recording client feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackCommand: Send + Sync {
    /// Record a complaint against a journey the caller owns.
    async fn submit_complaint(&self, complaint: &ComplaintSubmission) -> Result<(), Error>;

    /// Record a review against a journey the caller owns.
    async fn submit_review(&self, review: &ReviewSubmission) -> Result<(), Error>;
}
