//! Bookings drafted during one client session.
//!
//! The list is owned by the caller's session, so identifiers are only unique
//! within it: the Nth booking added to a fresh session is `VD-{1000 + N}`.
//! Lists are held server-side under a [`BookingSessionId`]; the session
//! cookie only carries that id.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::required_fields::{MissingFieldsError, RequiredFields};

/// Prefix of session booking references.
pub const BOOKING_REFERENCE_PREFIX: &str = "VD";

const BOOKING_REFERENCE_BASE: usize = 1000;

/// Opaque key of one client's booking list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingSessionId(Uuid);

impl BookingSessionId {
    /// Fresh random id for a session that has no bookings yet.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for BookingSessionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookingSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Booking lifecycle states.
///
/// New bookings are always [`BookingStatus::PendingConfirmation`]; the later
/// states are set by staff tooling that lives outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    #[serde(rename = "Pending Confirmation")]
    PendingConfirmation,
    #[serde(rename = "Driver Assigned")]
    DriverAssigned,
    #[serde(rename = "Completed")]
    Completed,
}

/// Cabin and checked luggage counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Luggage {
    pub cabin: u32,
    pub checked: u32,
}

/// Booking form contents before an identifier and status are assigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub pickup: String,
    pub dropoffs: Vec<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub vehicle_class: Option<String>,
    pub passengers: u32,
    pub service_type: Option<String>,
    pub luggage: Luggage,
    /// Requested waiting time in minutes.
    pub waiting_time: Option<u32>,
    /// Estimated trip distance in miles.
    pub distance: Option<f64>,
    pub passenger_name: Option<String>,
    pub passenger_phone: Option<String>,
    pub passenger_email: Option<String>,
    pub notes: Option<String>,
}

impl BookingDraft {
    /// Trim text fields, drop blank drop-offs and check the required ones.
    ///
    /// Requires a pickup, at least one drop-off and one or more passengers.
    pub fn normalise(self) -> Result<Self, MissingFieldsError> {
        let mut fields = RequiredFields::new();
        let pickup = fields.text("pickup", &self.pickup);
        let dropoffs: Vec<String> = self
            .dropoffs
            .iter()
            .map(|stop| stop.trim())
            .filter(|stop| !stop.is_empty())
            .map(str::to_owned)
            .collect();
        fields.require("dropoffs", !dropoffs.is_empty());
        fields.require("passengers", self.passengers >= 1);
        fields.finish()?;

        Ok(Self {
            pickup,
            dropoffs,
            vehicle_class: trimmed(self.vehicle_class),
            service_type: trimmed(self.service_type),
            passenger_name: trimmed(self.passenger_name),
            passenger_phone: trimmed(self.passenger_phone),
            passenger_email: trimmed(self.passenger_email),
            notes: trimmed(self.notes),
            ..self
        })
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Booking held in the session list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub status: BookingStatus,
    #[serde(flatten)]
    pub details: BookingDraft,
}

/// Ordered bookings of one session.
///
/// # Examples
/// ```
/// use chauffeur_backend::domain::{BookingDraft, BookingSession, BookingStatus};
///
/// let mut session = BookingSession::default();
/// let draft = BookingDraft {
///     pickup: "Heathrow T5".into(),
///     dropoffs: vec!["Mayfair".into()],
///     passengers: 2,
///     ..BookingDraft::default()
/// };
/// let booking = session.add(draft).unwrap();
/// assert_eq!(booking.id, "VD-1001");
/// assert_eq!(booking.status, BookingStatus::PendingConfirmation);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingSession {
    bookings: Vec<Booking>,
}

impl BookingSession {
    /// Validate `draft`, assign the next reference and append it.
    pub fn add(&mut self, draft: BookingDraft) -> Result<Booking, MissingFieldsError> {
        let details = draft.normalise()?;
        Ok(self.append(details))
    }

    /// Assign the next reference to already normalised `details`.
    ///
    /// Callers must have run [`BookingDraft::normalise`] first.
    pub fn append(&mut self, details: BookingDraft) -> Booking {
        let booking = Booking {
            id: next_reference(self.bookings.len()),
            status: BookingStatus::PendingConfirmation,
            details,
        };
        self.bookings.push(booking.clone());
        booking
    }

    /// Bookings in the order they were added.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

fn next_reference(existing: usize) -> String {
    format!(
        "{BOOKING_REFERENCE_PREFIX}-{}",
        BOOKING_REFERENCE_BASE + existing + 1
    )
}
