//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module mirrors their wire shape in the inbound adapter layer so the
//! generated document matches what handlers actually serialise.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Missing or malformed input.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credentials were rejected.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The resource does not exist or is not visible to the caller.
    #[schema(rename = "not_found")]
    NotFound,
    /// A unique key is already taken.
    #[schema(rename = "conflict")]
    Conflict,
    /// Unexpected server-side failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "Missing required fields")]
    error: String,
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, such as the list of missing fields.
    #[schema(value_type = Object, example = json!({ "fields": ["email"] }))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::UserProfile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserProfile, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserProfileSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    phone: Option<String>,
    /// Account role; signups are always `client`.
    #[schema(example = "client")]
    role: String,
}

/// OpenAPI schema for [`crate::domain::BlogPost`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BlogPost, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BlogPostSchema {
    id: i64,
    #[schema(example = "airport-etiquette")]
    slug: String,
    title: String,
    summary: String,
    body: String,
    hero_image: Option<String>,
    tag: Option<String>,
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T09:00:00Z")]
    published_at: String,
}

/// OpenAPI schema for [`crate::domain::BookingStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BookingStatus)]
pub enum BookingStatusSchema {
    #[schema(rename = "Pending Confirmation")]
    PendingConfirmation,
    #[schema(rename = "Driver Assigned")]
    DriverAssigned,
    #[schema(rename = "Completed")]
    Completed,
}

/// OpenAPI schema for [`crate::domain::Luggage`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Luggage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LuggageSchema {
    cabin: u32,
    checked: u32,
}

/// OpenAPI schema for [`crate::domain::BookingDraft`].
///
/// `pickup`, a non-blank drop-off and `passengers >= 1` are required; they
/// are checked after parsing so every missing one is reported together.
#[derive(ToSchema)]
#[schema(as = crate::domain::BookingDraft, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookingDraftSchema {
    #[schema(example = "Heathrow Terminal 5")]
    pickup: String,
    #[schema(example = json!(["The Savoy"]))]
    dropoffs: Vec<String>,
    #[schema(value_type = Option<String>, format = Date, example = "2024-06-01")]
    date: Option<String>,
    #[schema(value_type = Option<String>, example = "14:30:00")]
    time: Option<String>,
    vehicle_class: Option<String>,
    #[schema(example = 2)]
    passengers: u32,
    service_type: Option<String>,
    luggage: LuggageSchema,
    /// Minutes.
    waiting_time: Option<u32>,
    /// Miles.
    distance: Option<f64>,
    passenger_name: Option<String>,
    passenger_phone: Option<String>,
    passenger_email: Option<String>,
    notes: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Booking`].
///
/// The draft fields are flattened next to the assigned `id` and `status`.
#[derive(ToSchema)]
#[schema(as = crate::domain::Booking, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookingSchema {
    #[schema(example = "VD-1001")]
    id: String,
    status: BookingStatusSchema,
    pickup: String,
    dropoffs: Vec<String>,
    #[schema(value_type = Option<String>, format = Date)]
    date: Option<String>,
    time: Option<String>,
    vehicle_class: Option<String>,
    passengers: u32,
    service_type: Option<String>,
    luggage: LuggageSchema,
    waiting_time: Option<u32>,
    distance: Option<f64>,
    passenger_name: Option<String>,
    passenger_phone: Option<String>,
    passenger_email: Option<String>,
    notes: Option<String>,
}
