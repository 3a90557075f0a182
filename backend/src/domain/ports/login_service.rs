//! Driving ports for signup and login use-cases.
//!
//! Inbound adapters call these to register and authenticate clients without
//! knowing (or importing) the credential store or the hashing primitive, so
//! HTTP handler tests can substitute a test double.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{EmailAddress, Error, LoginCredentials, SignupDetails, UserId, UserProfile};

/// Identifier and normalised email of a freshly registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupOutcome {
    pub id: UserId,
    pub email: EmailAddress,
}

/// Domain use-case port for registering client accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Register a new client account.
    async fn signup(&self, details: &SignupDetails) -> Result<SignupOutcome, Error>;
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the sanitised profile.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserProfile, Error>;
}
