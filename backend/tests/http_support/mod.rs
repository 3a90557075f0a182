//! Shared harness for HTTP surface tests.
//!
//! Builds the production route table over in-memory repositories and a
//! low-cost bcrypt hasher.

pub mod store;

use std::sync::Arc;
use std::time::Duration;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::BoxBody;
use actix_web::cookie::Key;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use chauffeur_backend::Trace;
use chauffeur_backend::domain::{
    BlogFeedService, BookingService, FeedbackService, IdentityService,
};
use chauffeur_backend::inbound::http::error::not_found_fallback;
use chauffeur_backend::inbound::http::health::HealthState;
use chauffeur_backend::inbound::http::routes;
use chauffeur_backend::inbound::http::state::{HttpState, HttpStatePorts};
use chauffeur_backend::outbound::security::BcryptPasswordHasher;
use chauffeur_backend::outbound::session::InMemoryBookingSessionStore;
use serde_json::Value;

pub use store::InMemoryStore;

/// bcrypt's minimum cost keeps hashing fast in tests.
const TEST_BCRYPT_COST: u32 = 4;

fn http_state(store: &Arc<InMemoryStore>) -> HttpState {
    let identity = Arc::new(IdentityService::new(
        store.clone(),
        Arc::new(BcryptPasswordHasher::with_cost(TEST_BCRYPT_COST)),
    ));
    HttpState::new(HttpStatePorts {
        signup: identity.clone(),
        login: identity,
        feedback: Arc::new(FeedbackService::new(store.clone(), store.clone())),
        blog: Arc::new(BlogFeedService::new(store.clone())),
        bookings: Arc::new(BookingService::new(Arc::new(InMemoryBookingSessionStore::new(
            Duration::from_secs(60 * 60),
        )))),
    })
}

/// Initialise the full application over `store`.
pub async fn init_app(
    store: &Arc<InMemoryStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();

    actix_test::init_service(
        App::new()
            .app_data(health)
            .app_data(web::Data::new(http_state(store)))
            .wrap(session)
            .wrap(Trace)
            .configure(routes::configure)
            .default_service(web::to(not_found_fallback)),
    )
    .await
}

/// Status and JSON body of a response.
pub async fn status_and_json(response: ServiceResponse<BoxBody>) -> (u16, Value) {
    let status = response.status().as_u16();
    let body = actix_test::read_body(response).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
