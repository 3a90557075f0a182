//! Chauffeur booking backend library.
//!
//! Hexagonal layout: [`domain`] holds types, services and ports;
//! [`inbound`] adapts HTTP requests onto driving ports; [`outbound`]
//! implements driven ports over PostgreSQL and bcrypt.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
