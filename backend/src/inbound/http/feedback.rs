//! Complaint and review intake handlers.
//!
//! Both endpoints authorise by pairing the client's email with a journey id;
//! a journey that does not belong to that email is reported as not found.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ComplaintSubmission, Error, ReviewSubmission};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{lenient_integer, text_or_empty};

/// Complaint body for `POST /client/complaints`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRequest {
    #[serde(default, deserialize_with = "text_or_empty")]
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Accepts a number or a numeric string.
    #[serde(default, deserialize_with = "lenient_integer")]
    #[schema(example = 42)]
    pub journey_id: Option<i64>,
    #[serde(default, deserialize_with = "text_or_empty")]
    #[schema(example = "Driver arrived late")]
    pub subject: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub details: String,
}

/// Review body for `POST /client/reviews`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[serde(default, deserialize_with = "text_or_empty")]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    #[schema(example = 42)]
    pub journey_id: Option<i64>,
    /// Positive integer; numeric strings are accepted.
    #[serde(default, deserialize_with = "lenient_integer")]
    #[schema(example = 5)]
    pub rating: Option<i64>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub review: String,
}

/// Acknowledgement returned once feedback is stored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Acknowledgement {
    #[schema(example = true)]
    pub ok: bool,
}

impl Acknowledgement {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}

impl TryFrom<&ComplaintRequest> for ComplaintSubmission {
    type Error = Error;

    fn try_from(value: &ComplaintRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, value.journey_id, &value.subject, &value.details)
            .map_err(Error::from)
    }
}

impl TryFrom<&ReviewRequest> for ReviewSubmission {
    type Error = Error;

    fn try_from(value: &ReviewRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, value.journey_id, value.rating, &value.review)
            .map_err(Error::from)
    }
}

/// File a complaint about a journey.
#[utoipa::path(
    post,
    path = "/client/complaints",
    request_body = ComplaintRequest,
    responses(
        (status = 200, description = "Complaint recorded", body = Acknowledgement),
        (status = 400, description = "Missing required fields", body = ErrorSchema),
        (status = 404, description = "Journey not found for this client", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["client"],
    operation_id = "submitComplaint"
)]
#[post("/client/complaints")]
pub async fn submit_complaint(
    state: web::Data<HttpState>,
    payload: web::Json<ComplaintRequest>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let complaint = ComplaintSubmission::try_from(&*payload)?;
    state.feedback.submit_complaint(&complaint).await?;
    Ok(web::Json(Acknowledgement::ok()))
}

/// Review a journey. Repeat reviews are stored as separate rows.
#[utoipa::path(
    post,
    path = "/client/reviews",
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Review recorded", body = Acknowledgement),
        (status = 400, description = "Missing required fields", body = ErrorSchema),
        (status = 404, description = "Journey not found for this client", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["client"],
    operation_id = "submitReview"
)]
#[post("/client/reviews")]
pub async fn submit_review(
    state: web::Data<HttpState>,
    payload: web::Json<ReviewRequest>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let review = ReviewSubmission::try_from(&*payload)?;
    state.feedback.submit_review(&review).await?;
    Ok(web::Json(Acknowledgement::ok()))
}
