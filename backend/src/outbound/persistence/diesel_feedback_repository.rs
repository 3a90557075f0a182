//! PostgreSQL-backed `FeedbackRepository` implementation using Diesel ORM.
//!
//! Plain inserts only: resubmitting the same feedback adds another row.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FeedbackRepository, FeedbackRepositoryError};
use crate::domain::{NewComplaint, NewReview};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewComplaintRow, NewReviewRow};
use super::pool::{DbPool, PoolError};
use super::schema::{client_complaints, client_reviews};

/// Diesel-backed complaint and review store.
#[derive(Clone)]
pub struct DieselFeedbackRepository {
    pool: DbPool,
}

impl DieselFeedbackRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FeedbackRepositoryError {
    map_basic_pool_error(error, FeedbackRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> FeedbackRepositoryError {
    map_basic_diesel_error(
        error,
        FeedbackRepositoryError::query,
        FeedbackRepositoryError::connection,
    )
}

#[async_trait]
impl FeedbackRepository for DieselFeedbackRepository {
    async fn insert_complaint(
        &self,
        complaint: &NewComplaint,
    ) -> Result<(), FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewComplaintRow {
            client_id: complaint.ownership.client_id.get(),
            journey_id: complaint.ownership.journey_id.get(),
            subject: complaint.subject.as_str(),
            details: complaint.details.as_str(),
        };

        diesel::insert_into(client_complaints::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn insert_review(&self, review: &NewReview) -> Result<(), FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewReviewRow {
            client_id: review.ownership.client_id.get(),
            journey_id: review.ownership.journey_id.get(),
            rating: review.rating.get(),
            review: review.review.as_str(),
        };

        diesel::insert_into(client_reviews::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
