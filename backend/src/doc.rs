//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint together with the schema wrappers
//! from [`crate::inbound::http::schemas`], which describe domain types without
//! coupling them to utoipa.
//!
//! The document backs Swagger UI in debug builds and is exported by the
//! `openapi-dump` binary.

use crate::inbound::http::auth::{LoginRequest, SignupRequest, SignupResponse};
use crate::inbound::http::feedback::{Acknowledgement, ComplaintRequest, ReviewRequest};
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::schemas::{
    BlogPostSchema, BookingDraftSchema, BookingSchema, BookingStatusSchema, ErrorCodeSchema,
    ErrorSchema, LuggageSchema, UserProfileSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chauffeur backend API",
        description = "Client accounts, journey feedback, blog feed and session bookings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::blog::list_blog_posts,
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::login,
        crate::inbound::http::feedback::submit_complaint,
        crate::inbound::http::feedback::submit_review,
        crate::inbound::http::bookings::add_booking,
        crate::inbound::http::bookings::list_bookings,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserProfileSchema,
        BlogPostSchema,
        BookingSchema,
        BookingDraftSchema,
        BookingStatusSchema,
        LuggageSchema,
        SignupRequest,
        SignupResponse,
        LoginRequest,
        ComplaintRequest,
        ReviewRequest,
        Acknowledgement,
        HealthStatus,
    )),
    tags(
        (name = "health", description = "Uptime and orchestration probes"),
        (name = "auth", description = "Client signup and login"),
        (name = "client", description = "Complaints and reviews about journeys"),
        (name = "blog", description = "Published blog feed"),
        (name = "bookings", description = "Bookings drafted in the current session")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/health")]
    #[case("/blog-posts")]
    #[case("/auth/signup")]
    #[case("/auth/login")]
    #[case("/client/complaints")]
    #[case("/client/reviews")]
    #[case("/bookings")]
    fn document_lists_public_paths(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        // utoipa replaces :: with . in schema names
        assert!(schemas.contains_key("crate.domain.Error"));
        assert!(schemas.contains_key("crate.domain.Booking"));
    }
}
