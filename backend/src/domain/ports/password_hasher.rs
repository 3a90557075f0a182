//! Port for deriving and checking salted password hashes.
//!
//! Hashing is CPU bound; adapters are expected to move the work off the async
//! executor.

use async_trait::async_trait;

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised by password hashing adapters.
    pub enum PasswordHasherError {
        /// Hash derivation failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// The stored hash could not be parsed or checked.
        Verify { message: String } => "password verification failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Derive a salted hash of `password`.
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Check `password` against `hash` in constant time.
    async fn verify(&self, password: &str, hash: &PasswordHash)
    -> Result<bool, PasswordHasherError>;
}
