//! Signup and login domain services.
//!
//! Both use-cases share the credential store and the password hasher, so one
//! service type implements both driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    LoginService, PasswordHasher, PasswordHasherError, SignupOutcome, SignupService,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    AccountStatus, Error, LoginCredentials, NewUser, PasswordHash, Role, SignupDetails,
    UserProfile,
};

/// Message returned when signup hits an already registered email.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";

/// Message returned for every rejected login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Cost-10 bcrypt hash verified when the email is unknown, so that a miss
/// costs as much as a wrong password.
const TIMING_EQUALISER_HASH: &str = "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

fn map_user_error(error: UserPersistenceError) -> Error {
    error!(error = %error, "credential store failure");
    match error {
        UserPersistenceError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_hasher_error(error: PasswordHasherError) -> Error {
    error!(error = %error, "password hasher failure");
    Error::internal(error.to_string())
}

fn invalid_credentials() -> Error {
    Error::unauthorized(INVALID_CREDENTIALS_MESSAGE)
}

/// Identity service implementing the signup and login driving ports.
#[derive(Clone)]
pub struct IdentityService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> IdentityService<U, H> {
    /// Create a service over the credential store and password hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

impl<U, H> IdentityService<U, H>
where
    H: PasswordHasher,
{
    async fn equalise_timing(&self, password: &str) {
        let dummy = PasswordHash::new(TIMING_EQUALISER_HASH);
        if let Err(err) = self.hasher.verify(password, &dummy).await {
            tracing::debug!(error = %err, "timing equaliser verify failed");
        }
    }
}

#[async_trait]
impl<U, H> SignupService for IdentityService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn signup(&self, details: &SignupDetails) -> Result<SignupOutcome, Error> {
        let password_hash = self
            .hasher
            .hash(details.password())
            .await
            .map_err(map_hasher_error)?;

        let user = NewUser {
            name: details.name().to_owned(),
            email: details.email().clone(),
            phone: details.phone().map(str::to_owned),
            password_hash,
            role: Role::Client,
            status: AccountStatus::Active,
        };

        let id = self
            .users
            .insert_if_absent(&user)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::conflict(EMAIL_TAKEN_MESSAGE))?;

        Ok(SignupOutcome {
            id,
            email: user.email,
        })
    }
}

#[async_trait]
impl<U, H> LoginService for IdentityService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserProfile, Error> {
        let Some(stored) = self
            .users
            .find_credentials_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
        else {
            self.equalise_timing(credentials.password()).await;
            return Err(invalid_credentials());
        };

        let verified = self
            .hasher
            .verify(credentials.password(), &stored.password_hash)
            .await
            .map_err(map_hasher_error)?;

        if verified && stored.status == AccountStatus::Active {
            Ok(stored.profile)
        } else {
            Err(invalid_credentials())
        }
    }
}

#[cfg(test)]
#[path = "identity_service_tests.rs"]
mod tests;
