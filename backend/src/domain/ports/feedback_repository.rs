//! Write-side port for complaint and review rows.

use async_trait::async_trait;

use crate::domain::{NewComplaint, NewReview};

use super::define_port_error;

define_port_error! {
    /// Errors raised when recording feedback.
    pub enum FeedbackRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "feedback repository connection failed: {message}",
        /// Insert failed during execution.
        Query { message: String } => "feedback repository query failed: {message}",
    }
}

/// Append-only feedback storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Append one complaint row.
    async fn insert_complaint(&self, complaint: &NewComplaint)
    -> Result<(), FeedbackRepositoryError>;

    /// Append one review row.
    async fn insert_review(&self, review: &NewReview) -> Result<(), FeedbackRepositoryError>;
}
