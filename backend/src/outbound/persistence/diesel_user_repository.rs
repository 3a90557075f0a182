//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{
    AccountStatus, EmailAddress, NewUser, PasswordHash, Role, StoredCredentials, UserId,
    UserProfile,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CredentialRow, NewUserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed credential store.
///
/// Signup uses `INSERT … ON CONFLICT (email) DO NOTHING RETURNING id`, so the
/// uniqueness check and the insert are one statement.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_credentials(row: CredentialRow) -> Result<StoredCredentials, UserPersistenceError> {
    let invalid = |field: &str, err: &dyn std::fmt::Display| {
        warn!(user_id = row.id, field, error = %err, "stored user row failed validation");
        UserPersistenceError::query(format!("invalid stored {field}"))
    };

    let email = EmailAddress::parse(&row.email).map_err(|err| invalid("email", &err))?;
    let role = row.role.parse::<Role>().map_err(|err| invalid("role", &err))?;
    let status = row.status.parse::<AccountStatus>().map_err(|err| invalid("status", &err))?;

    Ok(StoredCredentials {
        profile: UserProfile {
            id: UserId::new(row.id),
            name: row.name,
            email,
            phone: row.phone,
            role,
        },
        password_hash: PasswordHash::new(row.password_hash),
        status,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert_if_absent(&self, user: &NewUser) -> Result<Option<UserId>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            role: user.role.as_str(),
            name: user.name.as_str(),
            email: user.email.as_str(),
            phone: user.phone.as_deref(),
            password_hash: user.password_hash.as_str(),
            status: user.status.as_str(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .on_conflict(users::email)
            .do_nothing()
            .returning(users::id)
            .get_result::<i64>(&mut conn)
            .await
            .optional()
            .map(|id| id.map(UserId::new))
            .map_err(map_diesel_error)
    }

    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::email.eq(email.as_str()))
            .select(CredentialRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_credentials).transpose()
    }
}
