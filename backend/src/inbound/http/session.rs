//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations such as binding the booking list key.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{BookingSessionId, Error};

pub(crate) const BOOKING_SESSION_KEY: &str = "booking_session";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Booking list key already bound to this session, if any.
    ///
    /// A cookie whose key no longer deserialises is treated as a fresh
    /// session rather than failing every later request.
    pub fn booking_session(&self) -> Option<BookingSessionId> {
        match self.0.get::<BookingSessionId>(BOOKING_SESSION_KEY) {
            Ok(id) => id,
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable booking session key in cookie");
                self.0.remove(BOOKING_SESSION_KEY);
                None
            }
        }
    }

    /// Booking list key for this session, binding a new one when absent.
    pub fn booking_session_or_bind(&self) -> Result<BookingSessionId, Error> {
        if let Some(id) = self.booking_session() {
            return Ok(id);
        }
        let id = BookingSessionId::generate();
        self.0.insert(BOOKING_SESSION_KEY, id).map_err(|error| {
            tracing::error!(%error, "failed to bind booking session key");
            Error::internal(format!("failed to persist session: {error}"))
        })?;
        Ok(id)
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
