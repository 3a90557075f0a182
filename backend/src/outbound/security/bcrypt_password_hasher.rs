//! bcrypt-backed `PasswordHasher` implementation.
//!
//! bcrypt is deliberately slow, so both operations run on Tokio's blocking
//! pool instead of stalling the actix worker that owns the request.

use async_trait::async_trait;
use tokio::task;
use zeroize::Zeroizing;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHasher, PasswordHasherError};

/// Work factor applied to every new hash.
pub const BCRYPT_COST: u32 = 10;

/// Password hasher using bcrypt with a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Hasher using [`BCRYPT_COST`].
    pub fn new() -> Self {
        Self { cost: BCRYPT_COST }
    }

    /// Hasher with an explicit cost. Tests use the minimum to stay fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError> {
        let password = Zeroizing::new(password.to_owned());
        let cost = self.cost;
        task::spawn_blocking(move || bcrypt::hash(password.as_bytes(), cost))
            .await
            .map_err(|err| PasswordHasherError::hash(err.to_string()))?
            .map(PasswordHash::new)
            .map_err(|err| PasswordHasherError::hash(err.to_string()))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let password = Zeroizing::new(password.to_owned());
        let hash = hash.as_str().to_owned();
        task::spawn_blocking(move || bcrypt::verify(password.as_bytes(), &hash))
            .await
            .map_err(|err| PasswordHasherError::verify(err.to_string()))?
            .map_err(|err| PasswordHasherError::verify(err.to_string()))
    }
}
