//! User accounts and their sanitised projection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EmailAddress;

/// Database-assigned numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a stored enum column holds an unknown value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised {kind} value: {value}")]
pub struct UnknownVariantError {
    kind: &'static str,
    value: String,
}

impl UnknownVariantError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Client,
    Driver,
    Admin,
}

impl Role {
    /// Storage and wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Client => "client",
            Self::Driver => "driver",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "client" => Ok(Self::Client),
            "driver" => Ok(Self::Driver),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownVariantError::new("role", other)),
        }
    }
}

/// Whether an account may sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    /// Storage representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for AccountStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(UnknownVariantError::new("status", other)),
        }
    }
}

/// Salted password hash as produced by a [`crate::domain::ports::PasswordHasher`].
///
/// `Debug` is redacted so hashes never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash string.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Sanitised user projection returned to callers.
///
/// Carries no password hash and no internal status fields.
///
/// # Examples
/// ```
/// use chauffeur_backend::domain::{EmailAddress, Role, UserId, UserProfile};
///
/// let profile = UserProfile {
///     id: UserId::new(7),
///     name: "Ada".into(),
///     email: EmailAddress::parse("ada@example.com").unwrap(),
///     phone: None,
///     role: Role::Client,
/// };
/// let json = serde_json::to_value(&profile).unwrap();
/// assert_eq!(json["role"], "client");
/// assert!(json.get("passwordHash").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub role: Role,
}

/// Credential record read back from the store for login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub profile: UserProfile,
    pub password_hash: PasswordHash,
    pub status: AccountStatus,
}

/// Account row to be inserted on signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub status: AccountStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Role::Guest)]
    #[case(Role::Client)]
    #[case(Role::Driver)]
    #[case(Role::Admin)]
    fn role_storage_strings_parse_back(#[case] role: Role) {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }

    #[rstest]
    fn unknown_role_is_reported() {
        let err = "owner".parse::<Role>().expect_err("unknown role");
        assert_eq!(err.to_string(), "unrecognised role value: owner");
    }

    #[rstest]
    #[case("active", AccountStatus::Active)]
    #[case("inactive", AccountStatus::Inactive)]
    fn status_parses(#[case] raw: &str, #[case] expected: AccountStatus) {
        assert_eq!(raw.parse::<AccountStatus>(), Ok(expected));
    }

    #[rstest]
    fn password_hash_debug_is_redacted() {
        let hash = PasswordHash::new("$2b$10$abcdefghijklmnopqrstuv");
        assert_eq!(format!("{hash:?}"), "PasswordHash(<redacted>)");
    }
}
