//! Session-scoped booking handlers.
//!
//! ```text
//! POST /bookings {"pickup":"Heathrow T5","dropoffs":["Mayfair"],"passengers":2}
//! GET /bookings
//! ```
//!
//! The encrypted session cookie carries only a booking list key; the list
//! itself is held server-side, so each browser session sees only the
//! bookings it created and the cookie stays the same size as it grows.

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{Booking, BookingDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BookingDraftSchema, BookingSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Add a booking to the caller's session.
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = BookingDraftSchema,
    responses(
        (status = 201, description = "Booking created", body = BookingSchema),
        (status = 400, description = "Missing required fields", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "addBooking"
)]
#[post("/bookings")]
pub async fn add_booking(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<BookingDraft>,
) -> ApiResult<HttpResponse> {
    let session_id = session.booking_session_or_bind()?;
    let booking = state
        .bookings
        .add_booking(session_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(booking))
}

/// List the caller's bookings in the order they were added.
#[utoipa::path(
    get,
    path = "/bookings",
    responses(
        (status = 200, description = "Session bookings", body = [BookingSchema]),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "listBookings"
)]
#[get("/bookings")]
pub async fn list_bookings(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Booking>>> {
    let Some(session_id) = session.booking_session() else {
        return Ok(web::Json(Vec::new()));
    };
    let bookings = state.bookings.list_bookings(session_id).await?;
    Ok(web::Json(bookings))
}
