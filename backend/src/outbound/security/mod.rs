//! Credential hashing adapters.

mod bcrypt_password_hasher;

pub use bcrypt_password_hasher::{BCRYPT_COST, BcryptPasswordHasher};
