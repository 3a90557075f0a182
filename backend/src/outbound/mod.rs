//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM, the
//!   connection pool and embedded migrations.
//! - **security**: bcrypt password hashing.
//! - **session**: server-side booking lists keyed by session id.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod persistence;
pub mod security;
pub mod session;
