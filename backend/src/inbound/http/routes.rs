//! Route table for the public HTTP surface.
//!
//! Handlers are mounted at the root; unmatched requests fall through to
//! [`not_found_fallback`], which the caller registers as the app's default
//! service.
//!
//! [`not_found_fallback`]: crate::inbound::http::error::not_found_fallback

use actix_web::web;

use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::{auth, blog, bookings, feedback, health};

/// Register every endpoint plus the JSON extractor configuration.
///
/// Readiness and liveness probes need a `web::Data<HealthState>` registered
/// on the app.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use chauffeur_backend::inbound::http::error::not_found_fallback;
/// use chauffeur_backend::inbound::http::routes::configure;
///
/// let app = App::new()
///     .configure(configure)
///     .default_service(web::to(not_found_fallback));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health::health)
        .service(health::ready)
        .service(health::live)
        .service(blog::list_blog_posts)
        .service(auth::signup)
        .service(auth::login)
        .service(feedback::submit_complaint)
        .service(feedback::submit_review)
        .service(bookings::add_booking)
        .service(bookings::list_bookings);
}
