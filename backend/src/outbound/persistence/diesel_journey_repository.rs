//! PostgreSQL-backed `JourneyRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{JourneyRepository, JourneyRepositoryError};
use crate::domain::{EmailAddress, JourneyId, JourneyOwnership, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::{client_journeys, users};

/// Diesel-backed journey ownership lookup.
///
/// One join answers both "does the journey exist" and "does the email own
/// it", so the two failure cases are indistinguishable to callers.
#[derive(Clone)]
pub struct DieselJourneyRepository {
    pool: DbPool,
}

impl DieselJourneyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> JourneyRepositoryError {
    map_basic_pool_error(error, JourneyRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> JourneyRepositoryError {
    map_basic_diesel_error(
        error,
        JourneyRepositoryError::query,
        JourneyRepositoryError::connection,
    )
}

#[async_trait]
impl JourneyRepository for DieselJourneyRepository {
    async fn find_owned(
        &self,
        journey_id: JourneyId,
        email: &EmailAddress,
    ) -> Result<Option<JourneyOwnership>, JourneyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let client_id = client_journeys::table
            .inner_join(users::table)
            .filter(client_journeys::id.eq(journey_id.get()))
            .filter(users::email.eq(email.as_str()))
            .select(client_journeys::client_id)
            .first::<i64>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(client_id.map(|client_id| JourneyOwnership {
            journey_id,
            client_id: UserId::new(client_id),
        }))
    }
}
