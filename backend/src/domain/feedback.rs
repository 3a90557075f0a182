//! Complaint and review submissions.
//!
//! Both kinds of feedback are append-only: every accepted submission becomes
//! one new row, even when an identical one already exists.

use std::fmt;

use serde::Serialize;

use super::journey::{JourneyId, JourneyLookup, JourneyOwnership};
use super::required_fields::{MissingFieldsError, RequiredFields};

/// Positive review rating.
///
/// # Examples
/// ```
/// use chauffeur_backend::domain::Rating;
///
/// assert_eq!(Rating::new(5).map(Rating::get), Some(5));
/// assert!(Rating::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(i32);

impl Rating {
    /// Accept `raw` when it is a positive value that fits the rating column.
    pub fn new(raw: i64) -> Option<Self> {
        i32::try_from(raw).ok().filter(|value| *value > 0).map(Self)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated complaint about a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintSubmission {
    lookup: JourneyLookup,
    subject: String,
    details: String,
}

impl ComplaintSubmission {
    /// Validate raw complaint fields, reporting every blank one.
    ///
    /// # Examples
    /// ```
    /// use chauffeur_backend::domain::ComplaintSubmission;
    ///
    /// let err = ComplaintSubmission::try_from_parts("a@b.com", None, " ", "late").unwrap_err();
    /// assert_eq!(err.fields(), ["journeyId", "subject"]);
    /// ```
    pub fn try_from_parts(
        email: &str,
        journey_id: Option<i64>,
        subject: &str,
        details: &str,
    ) -> Result<Self, MissingFieldsError> {
        let mut fields = RequiredFields::new();
        let email = fields.text("email", email);
        let journey_id = fields.present("journeyId", journey_id.and_then(JourneyId::new));
        let subject = fields.text("subject", subject);
        let details = fields.text("details", details);
        fields.finish()?;

        Ok(Self {
            lookup: JourneyLookup::from_checked(email, journey_id)?,
            subject,
            details,
        })
    }

    pub fn lookup(&self) -> &JourneyLookup {
        &self.lookup
    }

    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    pub fn details(&self) -> &str {
        self.details.as_str()
    }
}

/// Validated review of a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    lookup: JourneyLookup,
    rating: Rating,
    review: String,
}

impl ReviewSubmission {
    /// Validate raw review fields; `rating` must be a positive integer.
    pub fn try_from_parts(
        email: &str,
        journey_id: Option<i64>,
        rating: Option<i64>,
        review: &str,
    ) -> Result<Self, MissingFieldsError> {
        let mut fields = RequiredFields::new();
        let email = fields.text("email", email);
        let journey_id = fields.present("journeyId", journey_id.and_then(JourneyId::new));
        let rating = fields.present("rating", rating.and_then(Rating::new));
        let review = fields.text("review", review);
        fields.finish()?;

        Ok(Self {
            lookup: JourneyLookup::from_checked(email, journey_id)?,
            rating: rating.ok_or_else(|| MissingFieldsError::single("rating"))?,
            review,
        })
    }

    pub fn lookup(&self) -> &JourneyLookup {
        &self.lookup
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn review(&self) -> &str {
        self.review.as_str()
    }
}

/// Complaint row bound to a resolved journey owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub ownership: JourneyOwnership,
    pub subject: String,
    pub details: String,
}

impl NewComplaint {
    pub fn new(ownership: JourneyOwnership, submission: &ComplaintSubmission) -> Self {
        Self {
            ownership,
            subject: submission.subject.clone(),
            details: submission.details.clone(),
        }
    }
}

/// Review row bound to a resolved journey owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub ownership: JourneyOwnership,
    pub rating: Rating,
    pub review: String,
}

impl NewReview {
    pub fn new(ownership: JourneyOwnership, submission: &ReviewSubmission) -> Self {
        Self {
            ownership,
            rating: submission.rating,
            review: submission.review.clone(),
        }
    }
}
