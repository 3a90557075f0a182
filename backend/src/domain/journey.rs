//! Journey identifiers and ownership lookups.
//!
//! A journey is only ever read by this service: feedback submissions resolve
//! `(journeyId, email)` to the owning client before anything is written.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::required_fields::{MissingFieldsError, RequiredFields};
use super::{EmailAddress, UserId};

/// Positive journey identifier.
///
/// # Examples
/// ```
/// use chauffeur_backend::domain::JourneyId;
///
/// assert_eq!(JourneyId::new(42).map(JourneyId::get), Some(42));
/// assert!(JourneyId::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyId(i64);

impl JourneyId {
    /// Wrap `raw` when it is strictly positive.
    pub const fn new(raw: i64) -> Option<Self> {
        if raw > 0 { Some(Self(raw)) } else { None }
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for JourneyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Journey paired with the client that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyOwnership {
    pub journey_id: JourneyId,
    pub client_id: UserId,
}

/// Validated `(journeyId, email)` pair used to resolve ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyLookup {
    journey_id: JourneyId,
    email: EmailAddress,
}

impl JourneyLookup {
    /// Pair an already validated journey and email.
    pub fn new(journey_id: JourneyId, email: EmailAddress) -> Self {
        Self { journey_id, email }
    }

    /// Validate raw lookup input.
    ///
    /// `journey_id` is `None` when the caller sent nothing usable; zero and
    /// negative values are rejected the same way.
    pub fn try_from_parts(
        email: &str,
        journey_id: Option<i64>,
    ) -> Result<Self, MissingFieldsError> {
        let mut fields = RequiredFields::new();
        let email = fields.text("email", email);
        let journey_id = fields.present("journeyId", journey_id.and_then(JourneyId::new));
        fields.finish()?;
        Self::from_checked(email, journey_id)
    }

    /// Build from fields that already passed a [`RequiredFields`] check.
    pub(crate) fn from_checked(
        email: String,
        journey_id: Option<JourneyId>,
    ) -> Result<Self, MissingFieldsError> {
        let email = EmailAddress::parse(email)?;
        let journey_id = journey_id.ok_or_else(|| MissingFieldsError::single("journeyId"))?;
        Ok(Self::new(journey_id, email))
    }

    pub fn journey_id(&self) -> JourneyId {
        self.journey_id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
