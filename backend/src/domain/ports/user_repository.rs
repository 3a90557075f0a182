//! Port abstraction for credential persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{EmailAddress, NewUser, StoredCredentials, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert `user` unless its normalised email is already registered.
    ///
    /// Returns the new identifier, or `None` when the email was taken. The
    /// check and the insert must be one atomic statement so concurrent
    /// signups cannot both succeed.
    async fn insert_if_absent(&self, user: &NewUser) -> Result<Option<UserId>, UserPersistenceError>;

    /// Fetch the credential record registered under `email`.
    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, UserPersistenceError>;
}
